use crate::school::{AttendanceStatus, CourseId, StudentId};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;

/// Creation payload for a student, the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCourse {
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

fn required(field: &'static str, value: &str) -> Result<String, MissingField> {
    if value.trim().is_empty() {
        return Err(MissingField(field));
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub grade: String,
}

impl StudentForm {
    pub fn to_payload(&self) -> Result<NewStudent, MissingField> {
        Ok(NewStudent {
            name: required("name", &self.name)?,
            email: required("email", &self.email)?,
            grade: required("grade", &self.grade)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub code: String,
    pub title: String,
}

impl CourseForm {
    pub fn to_payload(&self) -> Result<NewCourse, MissingField> {
        Ok(NewCourse {
            code: required("code", &self.code)?,
            title: required("title", &self.title)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceForm {
    pub student_id: String,
    pub course_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub note: String,
}

impl AttendanceForm {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            student_id: String::new(),
            course_id: String::new(),
            date,
            status: AttendanceStatus::Present,
            note: String::new(),
        }
    }

    /// A blank note is omitted from the payload.
    pub fn to_payload(&self) -> Result<NewAttendance, MissingField> {
        let note = match self.note.trim() {
            "" => None,
            _ => Some(self.note.clone()),
        };

        Ok(NewAttendance {
            student_id: StudentId(required("student", &self.student_id)?),
            course_id: CourseId(required("course", &self.course_id)?),
            date: self.date,
            status: self.status,
            note,
        })
    }
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self::for_date(Utc::now().date_naive())
    }
}
