use crate::dashboard::state::DashboardState;
use application_ports::view::{
    AttendanceRow, CourseRow, DashboardView, FormPhase, PickerOption, StatCard, StudentRow,
    ViewStatus,
};
use domain::dashboard::{join_attendance, DashboardSnapshot, DashboardStats};
use tracing::instrument;

#[instrument(level = "trace", skip_all)]
pub(crate) fn build_view(state: &DashboardState) -> DashboardView {
    let snapshot = state.snapshot.as_ref();

    let status = if state.loading {
        ViewStatus::Loading
    } else if let Some(message) = &state.error {
        ViewStatus::Failed {
            message: message.clone(),
        }
    } else {
        ViewStatus::Ready
    };

    let form_phase = match (state.modal, state.submitting) {
        (None, _) => FormPhase::Idle,
        (Some(_), false) => FormPhase::ModalOpen,
        (Some(_), true) => FormPhase::Submitting,
    };

    DashboardView {
        status,
        stats: stat_cards(DashboardStats::of(snapshot)),
        active_tab: state.active_tab,
        modal: state.modal,
        form_phase,
        students: student_rows(snapshot),
        courses: course_rows(snapshot),
        attendance: attendance_rows(snapshot),
        student_options: snapshot
            .students()
            .iter()
            .map(|s| PickerOption {
                value: s.id.0.clone(),
                label: s.name.clone(),
            })
            .collect(),
        course_options: snapshot
            .courses()
            .iter()
            .map(|c| PickerOption {
                value: c.id.0.clone(),
                label: c.title.clone(),
            })
            .collect(),
        forms: state.forms.clone(),
        notifications: state.notifications.clone(),
    }
}

fn stat_cards(stats: DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Students",
            value: stats.total_students,
        },
        StatCard {
            title: "Total Courses",
            value: stats.total_courses,
        },
        StatCard {
            title: "Attendance Records",
            value: stats.attendance_records,
        },
    ]
}

fn student_rows(snapshot: &DashboardSnapshot) -> Vec<StudentRow> {
    snapshot
        .students()
        .iter()
        .map(|student| StudentRow {
            id: student.id.clone(),
            initial: student
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
            name: student.name.clone(),
            email: student.email.clone(),
            grade: student.grade.clone(),
        })
        .collect()
}

fn course_rows(snapshot: &DashboardSnapshot) -> Vec<CourseRow> {
    snapshot
        .courses()
        .iter()
        .map(|course| CourseRow {
            id: course.id.clone(),
            code: course.code.clone(),
            title: course.title.clone(),
        })
        .collect()
}

fn attendance_rows(snapshot: &DashboardSnapshot) -> Vec<AttendanceRow> {
    join_attendance(snapshot)
        .into_iter()
        .map(|joined| AttendanceRow {
            id: joined.record.id.clone(),
            status: joined.record.status,
            student_name: joined.student_name().to_string(),
            course_title: joined.course_title().to_string(),
            date: joined.record.date,
            note: joined.note().map(str::to_string),
        })
        .collect()
}
