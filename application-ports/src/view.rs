use chrono::NaiveDate;
use domain_shared::forms::{AttendanceForm, CourseForm, StudentForm};
use domain_shared::school::{AttendanceId, AttendanceStatus, CourseId, StudentId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Students,
    Courses,
    Attendance,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Students, Tab::Courses, Tab::Attendance];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Students => "Students",
            Tab::Courses => "Courses",
            Tab::Attendance => "Attendance",
        }
    }

    pub fn modal_title(&self) -> &'static str {
        match self {
            Tab::Students => "Add New Student",
            Tab::Courses => "Add New Course",
            Tab::Attendance => "Add Attendance Record",
        }
    }

    pub fn empty_state(&self) -> &'static str {
        match self {
            Tab::Students => "No students found. Add your first student!",
            Tab::Courses => "No courses found. Add your first course!",
            Tab::Attendance => "No attendance records found. Add your first record!",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab {0:?}, expected students, courses or attendance")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.title().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Per-tab creation state: `Idle -> ModalOpen -> Submitting -> Idle | ModalOpen`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    ModalOpen,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    /// Shown as an error panel with a retry action.
    Failed { message: String },
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: StudentId,
    pub initial: String,
    pub name: String,
    pub email: String,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    pub id: CourseId,
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub id: AttendanceId,
    pub status: AttendanceStatus,
    pub student_name: String,
    pub course_title: String,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// Entry of the student or course picker in the attendance form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormsView {
    pub student: StudentForm,
    pub course: CourseForm,
    pub attendance: AttendanceForm,
}

/// Everything a front end needs to draw the dashboard, derived from the
/// current snapshot and UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub status: ViewStatus,
    pub stats: Vec<StatCard>,
    pub active_tab: Tab,
    pub modal: Option<Tab>,
    pub form_phase: FormPhase,
    pub students: Vec<StudentRow>,
    pub courses: Vec<CourseRow>,
    pub attendance: Vec<AttendanceRow>,
    pub student_options: Vec<PickerOption>,
    pub course_options: Vec<PickerOption>,
    pub forms: FormsView,
    pub notifications: Vec<Notification>,
}

impl DashboardView {
    pub fn stat(&self, title: &str) -> Option<usize> {
        self.stats.iter().find(|s| s.title == title).map(|s| s.value)
    }
}
