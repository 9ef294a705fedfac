use application_ports::dashboard::{DashboardPort, DeleteOutcome, MutationError};
use application_ports::view::{FormsView, Tab};
use chrono::NaiveDate;
use domain_shared::forms::{AttendanceForm, CourseForm, StudentForm};
use domain_shared::school::{
    AttendanceId, AttendanceStatus, CourseId, StudentId, UnknownAttendanceStatus,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormFieldError {
    #[error("unknown field {field:?}, expected one of {expected}")]
    UnknownField {
        field: String,
        expected: &'static str,
    },
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error(transparent)]
    Status(#[from] UnknownAttendanceStatus),
}

/// A filled-in form buffer for one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormDraft {
    Student(StudentForm),
    Course(CourseForm),
    Attendance(AttendanceForm),
}

impl FormDraft {
    pub fn tab(&self) -> Tab {
        match self {
            FormDraft::Student(_) => Tab::Students,
            FormDraft::Course(_) => Tab::Courses,
            FormDraft::Attendance(_) => Tab::Attendance,
        }
    }

    pub(crate) fn store<P: DashboardPort + ?Sized>(self, port: &mut P) {
        match self {
            FormDraft::Student(form) => port.set_student_form(form),
            FormDraft::Course(form) => port.set_course_form(form),
            FormDraft::Attendance(form) => port.set_attendance_form(form),
        }
    }

    /// Copy of the tab's current buffer with one field replaced.
    pub(crate) fn with_field(
        forms: &FormsView,
        tab: Tab,
        field: &str,
        value: &str,
    ) -> Result<Self, FormFieldError> {
        let value = value.to_string();
        match tab {
            Tab::Students => {
                let mut form = forms.student.clone();
                match field {
                    "name" => form.name = value,
                    "email" => form.email = value,
                    "grade" => form.grade = value,
                    _ => return Err(unknown_field(field, "name, email, grade")),
                }
                Ok(FormDraft::Student(form))
            }
            Tab::Courses => {
                let mut form = forms.course.clone();
                match field {
                    "code" => form.code = value,
                    "title" => form.title = value,
                    _ => return Err(unknown_field(field, "code, title")),
                }
                Ok(FormDraft::Course(form))
            }
            Tab::Attendance => {
                let mut form = forms.attendance.clone();
                match field {
                    "student" => form.student_id = value,
                    "course" => form.course_id = value,
                    "date" => form.date = parse_date(&value)?,
                    "status" => form.status = value.parse::<AttendanceStatus>()?,
                    "note" => form.note = value,
                    _ => {
                        return Err(unknown_field(
                            field,
                            "student, course, date, status, note",
                        ))
                    }
                }
                Ok(FormDraft::Attendance(form))
            }
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, FormFieldError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FormFieldError::InvalidDate(value.to_string()))
}

fn unknown_field(field: &str, expected: &'static str) -> FormFieldError {
    FormFieldError::UnknownField {
        field: field.to_string(),
        expected,
    }
}

pub(crate) async fn submit<P: DashboardPort + Send>(
    port: &mut P,
    tab: Tab,
) -> Result<(), MutationError> {
    match tab {
        Tab::Students => port.create_student().await,
        Tab::Courses => port.create_course().await,
        Tab::Attendance => port.create_attendance().await,
    }
}

pub(crate) async fn delete<P: DashboardPort + Send>(
    port: &mut P,
    tab: Tab,
    id: String,
) -> Result<DeleteOutcome, MutationError> {
    match tab {
        Tab::Students => port.delete_student(StudentId(id)).await,
        Tab::Courses => port.delete_course(CourseId(id)).await,
        Tab::Attendance => port.delete_attendance(AttendanceId(id)).await,
    }
}
