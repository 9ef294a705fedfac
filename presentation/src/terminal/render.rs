use application_ports::view::{
    AttendanceRow, CourseRow, DashboardView, FormPhase, FormsView, Notification, PickerOption,
    StudentRow, Tab, ViewStatus,
};
use domain_shared::school::AttendanceStatus;

const RULE: &str = "------------------------------------------------------------";

/// Plain-text rendering of the whole dashboard. List content is hidden while
/// loading or after a failed load.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut lines = vec!["Attendance System".to_string(), RULE.to_string()];

    match &view.status {
        ViewStatus::Loading => {
            lines.push("Loading...".to_string());
            return join(lines);
        }
        ViewStatus::Failed { message } => {
            lines.push("Error Loading Data".to_string());
            lines.push(message.clone());
            lines.push("Type `retry` to try again.".to_string());
            return join(lines);
        }
        ViewStatus::Ready => {}
    }

    lines.push(
        view.stats
            .iter()
            .map(|card| format!("{}: {}", card.title, card.value))
            .collect::<Vec<_>>()
            .join("  |  "),
    );
    lines.push(String::new());
    lines.push(tab_bar(view.active_tab));
    lines.push(RULE.to_string());
    lines.extend(tab_content(view));

    if let Some(tab) = view.modal {
        lines.push(String::new());
        lines.extend(modal(tab, view));
    }

    join(lines)
}

pub fn render_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|notification| format!("! {}\n", notification.message))
        .collect()
}

fn join(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn tab_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.title())
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn tab_content(view: &DashboardView) -> Vec<String> {
    let rows: Vec<String> = match view.active_tab {
        Tab::Students => view.students.iter().map(student_row).collect(),
        Tab::Courses => view.courses.iter().map(course_row).collect(),
        Tab::Attendance => view.attendance.iter().flat_map(attendance_row).collect(),
    };

    if rows.is_empty() {
        vec![view.active_tab.empty_state().to_string()]
    } else {
        rows
    }
}

fn student_row(row: &StudentRow) -> String {
    format!(
        "({}) {} <{}>  Grade {}  [{}]",
        row.initial, row.name, row.email, row.grade, row.id.0
    )
}

fn course_row(row: &CourseRow) -> String {
    format!("{}  Code: {}  [{}]", row.title, row.code, row.id.0)
}

fn attendance_row(row: &AttendanceRow) -> Vec<String> {
    let mut lines = vec![
        format!("{:<9} {}  [{}]", badge(row.status), row.student_name, row.id.0),
        format!("          {} \u{2022} {}", row.course_title, row.date),
    ];
    if let Some(note) = &row.note {
        lines.push(format!("          Note: {}", note));
    }
    lines
}

fn badge(status: AttendanceStatus) -> String {
    format!("[{}]", status.as_str())
}

fn modal(tab: Tab, view: &DashboardView) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", tab.modal_title())];
    lines.extend(form_fields(tab, &view.forms));

    if tab == Tab::Attendance {
        lines.push("  students:".to_string());
        lines.extend(options(&view.student_options));
        lines.push("  courses:".to_string());
        lines.extend(options(&view.course_options));
        lines.push(format!(
            "  statuses: {}",
            AttendanceStatus::ALL
                .iter()
                .map(|status| status.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    lines.push(match view.form_phase {
        FormPhase::Submitting => "Submitting...".to_string(),
        _ => "set <field> <value>, then `submit` or `close`".to_string(),
    });
    lines
}

fn form_fields(tab: Tab, forms: &FormsView) -> Vec<String> {
    let fields: Vec<(&str, String)> = match tab {
        Tab::Students => vec![
            ("name", forms.student.name.clone()),
            ("email", forms.student.email.clone()),
            ("grade", forms.student.grade.clone()),
        ],
        Tab::Courses => vec![
            ("code", forms.course.code.clone()),
            ("title", forms.course.title.clone()),
        ],
        Tab::Attendance => vec![
            ("student", forms.attendance.student_id.clone()),
            ("course", forms.attendance.course_id.clone()),
            ("date", forms.attendance.date.to_string()),
            ("status", forms.attendance.status.as_str().to_string()),
            ("note", forms.attendance.note.clone()),
        ],
    };

    fields
        .into_iter()
        .map(|(name, value)| format!("  {:<8}: {}", name, value))
        .collect()
}

fn options(options: &[PickerOption]) -> Vec<String> {
    if options.is_empty() {
        return vec!["    (none)".to_string()];
    }
    options
        .iter()
        .map(|option| format!("    {}  {}", option.value, option.label))
        .collect()
}
