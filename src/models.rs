use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Records {
    #[serde(default)]
    pub students: BTreeMap<String, StudentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StudentRecord {
    pub profile: Profile,
    #[serde(default)]
    pub grades: Vec<Grade>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub loans: Vec<Loan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Profile {
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// A mark out of 20 for one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub subject: String,
    pub mark: f64,
    pub credits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Tuition,
    Housing,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub kind: PaymentKind,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub title: String,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
    #[serde(default)]
    pub returned_on: Option<NaiveDate>,
}

impl Loan {
    pub fn is_open(&self) -> bool {
        self.returned_on.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct StudentIdRequest {
    #[serde(default)]
    pub student_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentDashboard {
    pub student_id: String,
    pub profile: Option<Profile>,
    pub gpa: Option<f64>,
    pub borrowed_books: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GraduationCheck {
    pub student_id: String,
    pub tuition_paid: bool,
    pub credits_validated: bool,
    pub total_credits: u32,
    pub no_overdue_books: bool,
    pub overdue_books_count: usize,
    pub eligible_for_graduation: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoanStatus {
    pub title: String,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
    pub overdue: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentLoans {
    pub student_id: String,
    pub loans: Vec<LoanStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentGrades {
    pub student_id: String,
    pub grades: Vec<Grade>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClockDisplay {
    pub time: String,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSnapshot {
    pub active_tab: Option<String>,
    pub active_sub_tab: Option<String>,
    pub clock: ClockDisplay,
}
