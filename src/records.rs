use crate::errors::AppError;
use crate::models::{
    GraduationCheck, LoanStatus, PaymentKind, PaymentStatus, Records, StudentDashboard,
    StudentGrades, StudentLoans, StudentRecord,
};
use chrono::NaiveDate;

pub const REQUIRED_CREDITS: u32 = 180;
pub const PASSING_MARK: f64 = 10.0;

/// Backend the student forms forward accepted ids to.
pub trait StudentService: Send + Sync {
    fn dashboard(&self, student_id: &str) -> Result<StudentDashboard, AppError>;
    fn graduation(&self, student_id: &str, today: NaiveDate) -> Result<GraduationCheck, AppError>;
    fn loans(&self, student_id: &str, today: NaiveDate) -> Result<StudentLoans, AppError>;
    fn grades(&self, student_id: &str) -> Result<StudentGrades, AppError>;
}

/// Serves dashboards and graduation checks from records loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct RecordsService {
    records: Records,
}

impl RecordsService {
    pub fn new(records: Records) -> Self {
        Self { records }
    }

    fn student(&self, student_id: &str) -> Option<&StudentRecord> {
        self.records.students.get(student_id)
    }
}

impl StudentService for RecordsService {
    fn dashboard(&self, student_id: &str) -> Result<StudentDashboard, AppError> {
        let Some(record) = self.student(student_id) else {
            return Ok(StudentDashboard {
                student_id: student_id.to_string(),
                profile: None,
                gpa: None,
                borrowed_books: 0,
            });
        };

        Ok(StudentDashboard {
            student_id: student_id.to_string(),
            profile: Some(record.profile.clone()),
            gpa: gpa(record),
            borrowed_books: record.loans.iter().filter(|loan| loan.is_open()).count(),
        })
    }

    fn graduation(&self, student_id: &str, today: NaiveDate) -> Result<GraduationCheck, AppError> {
        let (tuition_paid, total_credits, overdue_books_count) = match self.student(student_id) {
            Some(record) => (
                tuition_paid(record),
                validated_credits(record),
                overdue_books(record, today),
            ),
            None => (false, 0, 0),
        };

        let credits_validated = total_credits >= REQUIRED_CREDITS;
        let no_overdue_books = overdue_books_count == 0;

        Ok(GraduationCheck {
            student_id: student_id.to_string(),
            tuition_paid,
            credits_validated,
            total_credits,
            no_overdue_books,
            overdue_books_count,
            eligible_for_graduation: tuition_paid && credits_validated && no_overdue_books,
        })
    }

    /// Loans not yet returned, most recent first.
    fn loans(&self, student_id: &str, today: NaiveDate) -> Result<StudentLoans, AppError> {
        let mut loans: Vec<LoanStatus> = self
            .student(student_id)
            .map(|record| {
                record
                    .loans
                    .iter()
                    .filter(|loan| loan.is_open())
                    .map(|loan| LoanStatus {
                        title: loan.title.clone(),
                        borrowed_on: loan.borrowed_on,
                        due_on: loan.due_on,
                        overdue: loan.due_on < today,
                    })
                    .collect()
            })
            .unwrap_or_default();
        loans.sort_by(|a, b| b.borrowed_on.cmp(&a.borrowed_on));

        Ok(StudentLoans {
            student_id: student_id.to_string(),
            loans,
        })
    }

    fn grades(&self, student_id: &str) -> Result<StudentGrades, AppError> {
        Ok(StudentGrades {
            student_id: student_id.to_string(),
            grades: self
                .student(student_id)
                .map(|record| record.grades.clone())
                .unwrap_or_default(),
        })
    }
}

fn gpa(record: &StudentRecord) -> Option<f64> {
    if record.grades.is_empty() {
        return None;
    }
    let sum: f64 = record.grades.iter().map(|grade| grade.mark).sum();
    Some(sum / record.grades.len() as f64)
}

fn tuition_paid(record: &StudentRecord) -> bool {
    record.payments.iter().any(|payment| {
        payment.kind == PaymentKind::Tuition && payment.status == PaymentStatus::Paid
    })
}

fn validated_credits(record: &StudentRecord) -> u32 {
    record
        .grades
        .iter()
        .filter(|grade| grade.mark >= PASSING_MARK)
        .fold(0u32, |total, grade| total.saturating_add(grade.credits))
}

fn overdue_books(record: &StudentRecord, today: NaiveDate) -> usize {
    record
        .loans
        .iter()
        .filter(|loan| loan.is_open() && loan.due_on < today)
        .count()
}
