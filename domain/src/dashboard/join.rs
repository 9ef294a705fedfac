use crate::dashboard::DashboardSnapshot;
use domain_shared::school::{AttendanceRecord, Course, Student};
use tracing::{debug, instrument};

pub const UNKNOWN_STUDENT: &str = "Unknown Student";
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// An attendance record together with whatever it references in the same
/// snapshot. Dangling references stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinedAttendance<'a> {
    pub record: &'a AttendanceRecord,
    pub student: Option<&'a Student>,
    pub course: Option<&'a Course>,
}

impl<'a> JoinedAttendance<'a> {
    pub fn student_name(&self) -> &'a str {
        self.student
            .map(|s| s.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_STUDENT)
    }

    pub fn course_title(&self) -> &'a str {
        self.course
            .map(|c| c.title.as_str())
            .filter(|title| !title.is_empty())
            .unwrap_or(UNKNOWN_COURSE)
    }

    /// Note text, if the record carries a non-empty one.
    pub fn note(&self) -> Option<&'a str> {
        self.record.note.as_deref().filter(|note| !note.is_empty())
    }
}

#[instrument(level = "trace", skip_all)]
pub fn join_attendance(snapshot: &DashboardSnapshot) -> Vec<JoinedAttendance<'_>> {
    snapshot
        .attendance()
        .iter()
        .map(|record| {
            let student = snapshot.find_student(&record.student_id);
            let course = snapshot.find_course(&record.course_id);
            if student.is_none() || course.is_none() {
                debug!(
                    attendance_id = record.id.0,
                    student_found = student.is_some(),
                    course_found = course.is_some(),
                    "Attendance record references a missing entity",
                );
            }
            JoinedAttendance {
                record,
                student,
                course,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain_shared::school::{AttendanceId, AttendanceStatus, CourseId, StudentId};

    fn ada() -> Student {
        Student {
            id: StudentId("s1".to_string()),
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            grade: "10".to_string(),
        }
    }

    fn algebra() -> Course {
        Course {
            id: CourseId("c1".to_string()),
            code: "MATH-101".to_string(),
            title: "Algebra".to_string(),
        }
    }

    fn record(id: &str, student_id: &str, course_id: &str, note: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: AttendanceId(id.to_string()),
            student_id: StudentId(student_id.to_string()),
            course_id: CourseId(course_id.to_string()),
            date: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
            status: AttendanceStatus::Late,
            note: note.map(str::to_string),
        }
    }

    #[test]
    fn resolves_names_by_identifier() {
        let snapshot = DashboardSnapshot::new(
            vec![ada()],
            vec![algebra()],
            vec![record("a1", "s1", "c1", Some("bus delay"))],
        );

        let joined = join_attendance(&snapshot);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].student_name(), "Ada");
        assert_eq!(joined[0].course_title(), "Algebra");
        assert_eq!(joined[0].note(), Some("bus delay"));
    }

    #[test]
    fn dangling_references_render_placeholders() {
        let snapshot = DashboardSnapshot::new(
            vec![ada()],
            vec![],
            vec![record("a1", "missing", "c404", None)],
        );

        let joined = join_attendance(&snapshot);

        assert_eq!(joined[0].student, None);
        assert_eq!(joined[0].student_name(), UNKNOWN_STUDENT);
        assert_eq!(joined[0].course_title(), UNKNOWN_COURSE);
    }

    #[test]
    fn empty_name_falls_back_to_placeholder() {
        let mut nameless = ada();
        nameless.name = String::new();
        let snapshot = DashboardSnapshot::new(
            vec![nameless],
            vec![algebra()],
            vec![record("a1", "s1", "c1", Some(""))],
        );

        let joined = join_attendance(&snapshot);

        assert_eq!(joined[0].student_name(), UNKNOWN_STUDENT);
        assert_eq!(joined[0].note(), None);
    }
}
