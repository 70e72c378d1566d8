use crate::registry::UiRegistry;
use serde::Serialize;
use tracing::info;

pub const MISSING_ID_ALERT: &str = "Veuillez entrer un ID étudiant";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentForm {
    Dashboard,
    Graduation,
}

impl StudentForm {
    pub fn input_key(self) -> &'static str {
        match self {
            StudentForm::Dashboard => "dashboard-student-id",
            StudentForm::Graduation => "graduation-student-id",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted { student_id: String },
    Rejected { alert: String },
}

/// Writes `value` into the form's input field. Missing fields are ignored.
pub fn fill<R>(registry: &mut R, form: StudentForm, value: &str)
where
    R: UiRegistry + ?Sized,
{
    if let Some(input) = registry.by_key_mut(form.input_key()) {
        input.value = value.to_string();
    }
}

/// Reads the form's student id as typed. Only an empty or missing field
/// is rejected, with the alert text and nothing logged.
pub fn submit<R>(registry: &R, form: StudentForm) -> Submission
where
    R: UiRegistry + ?Sized,
{
    let student_id = registry
        .by_key(form.input_key())
        .map(|input| input.value.as_str())
        .unwrap_or_default();

    if student_id.is_empty() {
        return Submission::Rejected {
            alert: MISSING_ID_ALERT.to_string(),
        };
    }

    match form {
        StudentForm::Dashboard => info!("getting dashboard for student: {student_id}"),
        StudentForm::Graduation => info!("checking graduation for student: {student_id}"),
    }

    Submission::Accepted {
        student_id: student_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::standard_page;
    use crate::registry::MemoryRegistry;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn submit_logged(page: &MemoryRegistry, form: StudentForm) -> (Submission, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let submission = tracing::subscriber::with_default(subscriber, || submit(page, form));
        (submission, captured.text())
    }

    #[test]
    fn empty_field_is_rejected_with_alert() {
        let page = standard_page();
        assert_eq!(
            submit(&page, StudentForm::Dashboard),
            Submission::Rejected {
                alert: MISSING_ID_ALERT.to_string()
            }
        );
    }

    #[test]
    fn value_is_forwarded_as_typed() {
        let mut page = standard_page();
        fill(&mut page, StudentForm::Graduation, "   ");
        assert_eq!(
            submit(&page, StudentForm::Graduation),
            Submission::Accepted {
                student_id: "   ".to_string()
            }
        );

        fill(&mut page, StudentForm::Dashboard, " 12345 ");
        assert_eq!(
            submit(&page, StudentForm::Dashboard),
            Submission::Accepted {
                student_id: " 12345 ".to_string()
            }
        );
    }

    #[test]
    fn filled_field_is_accepted() {
        let mut page = standard_page();
        fill(&mut page, StudentForm::Dashboard, "12345");
        assert_eq!(
            submit(&page, StudentForm::Dashboard),
            Submission::Accepted {
                student_id: "12345".to_string()
            }
        );
    }

    #[test]
    fn forms_read_their_own_field() {
        let mut page = standard_page();
        fill(&mut page, StudentForm::Dashboard, "12345");
        assert!(matches!(
            submit(&page, StudentForm::Graduation),
            Submission::Rejected { .. }
        ));
    }

    #[test]
    fn missing_field_is_rejected() {
        let page = MemoryRegistry::default();
        assert!(matches!(
            submit(&page, StudentForm::Dashboard),
            Submission::Rejected { .. }
        ));
    }

    #[test]
    fn rejected_submission_logs_nothing() {
        let page = standard_page();
        let (submission, logs) = submit_logged(&page, StudentForm::Dashboard);

        assert!(matches!(submission, Submission::Rejected { .. }));
        assert!(!logs.contains("getting dashboard"), "unexpected log: {logs}");
    }

    #[test]
    fn accepted_submission_logs_the_id() {
        let mut page = standard_page();
        fill(&mut page, StudentForm::Dashboard, "12345");
        let (submission, logs) = submit_logged(&page, StudentForm::Dashboard);

        assert!(matches!(submission, Submission::Accepted { .. }));
        assert!(logs.contains("getting dashboard for student: 12345"), "logs: {logs}");
    }
}
