use domain_shared::school::{AttendanceRecord, Course, CourseId, Student, StudentId};
use tracing::instrument;

/// All three collections as the backend last reported them.
///
/// A snapshot is never edited in place: a load builds a new one and the store
/// swaps it in whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    students: Vec<Student>,
    courses: Vec<Course>,
    attendance: Vec<AttendanceRecord>,
}

impl DashboardSnapshot {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        students: Vec<Student>,
        courses: Vec<Course>,
        attendance: Vec<AttendanceRecord>,
    ) -> Self {
        Self {
            students,
            courses,
            attendance,
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    pub fn find_student(&self, student_id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| &s.id == student_id)
    }

    pub fn find_course(&self, course_id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| &c.id == course_id)
    }
}
