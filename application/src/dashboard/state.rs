use crate::dashboard::view::build_view;
use application_ports::view::{DashboardView, FormsView, Notification, Tab};
use domain::dashboard::DashboardSnapshot;
use std::sync::Arc;

/// Everything the dashboard owns. The snapshot is shared, never edited.
#[derive(Debug, Default)]
pub(crate) struct DashboardState {
    pub snapshot: Arc<DashboardSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
    pub active_tab: Tab,
    pub modal: Option<Tab>,
    pub submitting: bool,
    pub forms: FormsView,
    pub notifications: Vec<Notification>,
}

impl DashboardState {
    pub fn view(&self) -> DashboardView {
        build_view(self)
    }

    pub fn reset_form(&mut self, tab: Tab) {
        match tab {
            Tab::Students => self.forms.student = Default::default(),
            Tab::Courses => self.forms.course = Default::default(),
            Tab::Attendance => self.forms.attendance = Default::default(),
        }
    }
}
