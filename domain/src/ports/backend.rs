use async_trait::async_trait;
use domain_shared::forms::{NewAttendance, NewCourse, NewStudent};
use domain_shared::school::{AttendanceId, AttendanceRecord, Course, CourseId, Student, StudentId};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait BackendPort {
    async fn get_students(&self) -> Result<Vec<Student>, BackendError>;
    async fn get_courses(&self) -> Result<Vec<Course>, BackendError>;
    async fn get_attendance(&self) -> Result<Vec<AttendanceRecord>, BackendError>;

    /// A create is committed once the server accepts it. The created record
    /// is `None` when the response body does not describe it.
    async fn create_student(&self, student: &NewStudent) -> Result<Option<Student>, BackendError>;
    async fn create_course(&self, course: &NewCourse) -> Result<Option<Course>, BackendError>;
    async fn create_attendance(
        &self,
        attendance: &NewAttendance,
    ) -> Result<Option<AttendanceRecord>, BackendError>;

    async fn delete_student(&self, student_id: &StudentId) -> Result<(), BackendError>;
    async fn delete_course(&self, course_id: &CourseId) -> Result<(), BackendError>;
    async fn delete_attendance(&self, attendance_id: &AttendanceId) -> Result<(), BackendError>;
}

/// Any failed backend call. The message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
