use crate::dashboard::DashboardSnapshot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_students: usize,
    pub total_courses: usize,
    pub attendance_records: usize,
}

impl DashboardStats {
    pub fn of(snapshot: &DashboardSnapshot) -> Self {
        Self {
            total_students: snapshot.students().len(),
            total_courses: snapshot.courses().len(),
            attendance_records: snapshot.attendance().len(),
        }
    }
}
