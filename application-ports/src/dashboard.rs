use crate::view::{DashboardView, Notification, Tab};
use async_trait::async_trait;
use domain_shared::forms::{AttendanceForm, CourseForm, StudentForm};
use domain_shared::school::{AttendanceId, CourseId, StudentId};
use std::fmt;
use thiserror::Error;

/// The dashboard as seen by a front end.
///
/// Every mutation is refetch-on-write: the backend is called first and the
/// displayed collections change only through the full reload that follows a
/// successful call.
#[async_trait]
pub trait DashboardPort {
    /// Fetches all three collections and swaps them in together.
    async fn load(&mut self) -> Result<(), LoadError>;

    fn view(&self) -> DashboardView;

    fn select_tab(&mut self, tab: Tab);
    /// Opens the creation modal of the active tab.
    fn open_create_modal(&mut self);
    fn close_create_modal(&mut self);

    fn set_student_form(&mut self, form: StudentForm);
    fn set_course_form(&mut self, form: CourseForm);
    fn set_attendance_form(&mut self, form: AttendanceForm);

    async fn create_student(&mut self) -> Result<(), MutationError>;
    async fn create_course(&mut self) -> Result<(), MutationError>;
    async fn create_attendance(&mut self) -> Result<(), MutationError>;

    async fn delete_student(&mut self, student_id: StudentId)
        -> Result<DeleteOutcome, MutationError>;
    async fn delete_course(&mut self, course_id: CourseId) -> Result<DeleteOutcome, MutationError>;
    async fn delete_attendance(
        &mut self,
        attendance_id: AttendanceId,
    ) -> Result<DeleteOutcome, MutationError>;

    /// Drains the notifications raised by failed mutations.
    fn take_notifications(&mut self) -> Vec<Notification>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation, nothing was sent.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Student,
    Course,
    Attendance,
}

impl Entity {
    pub fn label(&self) -> &'static str {
        match self {
            Entity::Student => "student",
            Entity::Course => "course",
            Entity::Attendance => "attendance",
        }
    }

    pub fn confirmation_prompt(&self) -> String {
        let noun = match self {
            Entity::Student => "student",
            Entity::Course => "course",
            Entity::Attendance => "attendance record",
        };
        format!("Are you sure you want to delete this {}?", noun)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => f.write_str("create"),
            Operation::Delete => f.write_str("delete"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("Failed to {operation} {entity}: {message}")]
    Backend {
        entity: Entity,
        operation: Operation,
        message: String,
    },
    #[error("{field} is required")]
    MissingField { field: &'static str },
}
