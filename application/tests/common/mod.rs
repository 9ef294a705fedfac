#![allow(dead_code)]

use chrono::NaiveDate;
use domain::ports::backend::{BackendError, MockBackendPort};
use domain::ports::confirmation::MockConfirmationPort;
use domain_shared::school::{
    AttendanceId, AttendanceRecord, AttendanceStatus, Course, CourseId, Student, StudentId,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn student(id: &str, name: &str) -> Student {
    Student {
        id: StudentId(id.to_string()),
        name: name.to_string(),
        email: format!("{}@x.com", name.to_lowercase()),
        grade: "10".to_string(),
    }
}

pub fn course(id: &str, title: &str) -> Course {
    Course {
        id: CourseId(id.to_string()),
        code: format!("{}-101", id.to_uppercase()),
        title: title.to_string(),
    }
}

pub fn attendance(id: &str, student_id: &str, course_id: &str) -> AttendanceRecord {
    AttendanceRecord {
        id: AttendanceId(id.to_string()),
        student_id: StudentId(student_id.to_string()),
        course_id: CourseId(course_id.to_string()),
        date: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
        status: AttendanceStatus::Present,
        note: None,
    }
}

/// Server-side collections shared by the mock's closures, so that reads
/// after a write observe the write.
#[derive(Clone, Default)]
pub struct ServerState {
    pub students: Arc<Mutex<Vec<Student>>>,
    pub courses: Arc<Mutex<Vec<Course>>>,
    pub attendance: Arc<Mutex<Vec<AttendanceRecord>>>,
    pub student_reads: Arc<AtomicUsize>,
}

impl ServerState {
    pub fn with(
        students: Vec<Student>,
        courses: Vec<Course>,
        attendance: Vec<AttendanceRecord>,
    ) -> Self {
        Self {
            students: Arc::new(Mutex::new(students)),
            courses: Arc::new(Mutex::new(courses)),
            attendance: Arc::new(Mutex::new(attendance)),
            student_reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of completed or attempted loads, counted on the students fetch.
    pub fn loads(&self) -> usize {
        self.student_reads.load(Ordering::SeqCst)
    }
}

/// Mock whose reads return the current server collections.
pub fn reading_backend(server: &ServerState) -> MockBackendPort {
    let mut backend = MockBackendPort::new();

    let students = server.students.clone();
    let student_reads = server.student_reads.clone();
    backend.expect_get_students().returning(move || {
        student_reads.fetch_add(1, Ordering::SeqCst);
        Ok(students.lock().unwrap().clone())
    });
    let courses = server.courses.clone();
    backend
        .expect_get_courses()
        .returning(move || Ok(courses.lock().unwrap().clone()));
    let attendance = server.attendance.clone();
    backend
        .expect_get_attendance()
        .returning(move || Ok(attendance.lock().unwrap().clone()));

    backend
}

pub fn failing_backend(message: &str) -> MockBackendPort {
    let mut backend = MockBackendPort::new();
    backend.expect_get_students().returning(|| Ok(vec![]));
    let message = message.to_string();
    backend
        .expect_get_courses()
        .returning(move || Err(BackendError::new(message.clone())));
    backend.expect_get_attendance().returning(|| Ok(vec![]));
    backend
}

pub fn confirming(answer: bool) -> MockConfirmationPort {
    let mut confirmation = MockConfirmationPort::new();
    confirmation.expect_confirm().returning(move |_| answer);
    confirmation
}

pub fn never_asked() -> MockConfirmationPort {
    let mut confirmation = MockConfirmationPort::new();
    confirmation.expect_confirm().never();
    confirmation
}
