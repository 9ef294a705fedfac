mod state;
mod view;

use crate::dashboard::state::DashboardState;
use application_ports::dashboard::{
    DashboardPort, DeleteOutcome, Entity, LoadError, MutationError, Operation,
};
use application_ports::view::{DashboardView, Notification, Tab};
use async_trait::async_trait;
use domain::dashboard::DashboardSnapshot;
use domain::ports::backend::{BackendError, BackendPort};
use domain::ports::confirmation::ConfirmationPort;
use domain_shared::forms::{AttendanceForm, CourseForm, MissingField, StudentForm};
use domain_shared::school::{AttendanceId, CourseId, StudentId};
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

const LOAD_FALLBACK_MESSAGE: &str = "Failed to load data";

type Backend = Arc<dyn BackendPort + Send + Sync>;

pub struct DashboardService {
    backend_port: Backend,
    confirmation_port: Arc<dyn ConfirmationPort + Send + Sync>,
    state: DashboardState,
    view_tx: watch::Sender<DashboardView>,
}

impl DashboardService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        backend_port: Arc<dyn BackendPort + Send + Sync>,
        confirmation_port: Arc<dyn ConfirmationPort + Send + Sync>,
    ) -> Self {
        let state = DashboardState::default();
        let (view_tx, _) = watch::channel(state.view());

        Self {
            backend_port,
            confirmation_port,
            state,
            view_tx,
        }
    }

    /// Receives a fresh view after every state change.
    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.view_tx.subscribe()
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.state.view());
    }

    #[instrument(level = "info", skip(self))]
    async fn refresh(&mut self) -> Result<(), LoadError> {
        self.state.loading = true;
        self.state.error = None;
        self.publish();

        let backend = self.backend_port.clone();
        // Fail-fast: the first error drops the other in-flight fetches.
        let result = tokio::try_join!(
            backend.get_students(),
            backend.get_courses(),
            backend.get_attendance(),
        );

        self.state.loading = false;
        let outcome = match result {
            Ok((students, courses, attendance)) => {
                info!(
                    students = students.len(),
                    courses = courses.len(),
                    attendance = attendance.len(),
                    "Dashboard data loaded",
                );
                self.state.snapshot =
                    Arc::new(DashboardSnapshot::new(students, courses, attendance));
                Ok(())
            }
            Err(err) => {
                let error = map_load_err(err);
                self.state.error = Some(error.message.clone());
                Err(error)
            }
        };
        self.publish();

        outcome
    }

    #[instrument(level = "debug", skip(self))]
    async fn reload_after_mutation(&mut self) {
        if let Err(err) = self.refresh().await {
            warn!(error = %err, "Reload after a successful mutation failed");
        }
    }

    fn notify(&mut self, error: &MutationError) {
        self.state.notifications.push(Notification {
            message: error.to_string(),
        });
    }

    #[instrument(level = "debug", skip(self, payload, create))]
    async fn submit<P, R, F, Fut>(
        &mut self,
        tab: Tab,
        entity: Entity,
        payload: Result<P, MissingField>,
        create: F,
    ) -> Result<(), MutationError>
    where
        P: Send,
        R: Debug + Send,
        F: FnOnce(Backend, P) -> Fut + Send,
        Fut: Future<Output = Result<R, BackendError>> + Send,
    {
        let payload = match payload {
            Ok(payload) => payload,
            Err(MissingField(field)) => {
                let error = MutationError::MissingField { field };
                self.notify(&error);
                self.publish();
                return Err(error);
            }
        };

        self.state.modal = Some(tab);
        self.state.submitting = true;
        self.publish();

        let result = create(self.backend_port.clone(), payload).await;
        self.state.submitting = false;

        match result {
            Ok(created) => {
                info!(entity = %entity, "Created");
                debug!(created = ?created, "Backend returned the created record");
                self.state.reset_form(tab);
                self.state.modal = None;
                self.publish();
                self.reload_after_mutation().await;
                Ok(())
            }
            Err(err) => {
                let error = map_backend_err(entity, Operation::Create, err);
                self.notify(&error);
                self.publish();
                Err(error)
            }
        }
    }

    #[instrument(level = "debug", skip(self, delete))]
    async fn remove<F, Fut>(
        &mut self,
        entity: Entity,
        id: &str,
        delete: F,
    ) -> Result<DeleteOutcome, MutationError>
    where
        F: FnOnce(Backend) -> Fut + Send,
        Fut: Future<Output = Result<(), BackendError>> + Send,
    {
        let prompt = entity.confirmation_prompt();
        if !self.confirmation_port.confirm(&prompt).await {
            info!(entity = %entity, id, "Deletion cancelled by the user");
            return Ok(DeleteOutcome::Cancelled);
        }

        match delete(self.backend_port.clone()).await {
            Ok(()) => {
                info!(entity = %entity, id, "Deleted");
                self.reload_after_mutation().await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                let error = map_backend_err(entity, Operation::Delete, err);
                self.notify(&error);
                self.publish();
                Err(error)
            }
        }
    }
}

#[async_trait]
impl DashboardPort for DashboardService {
    async fn load(&mut self) -> Result<(), LoadError> {
        self.refresh().await
    }

    fn view(&self) -> DashboardView {
        self.state.view()
    }

    #[instrument(level = "debug", skip(self))]
    fn select_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
        self.publish();
    }

    #[instrument(level = "debug", skip(self))]
    fn open_create_modal(&mut self) {
        self.state.modal = Some(self.state.active_tab);
        self.publish();
    }

    #[instrument(level = "debug", skip(self))]
    fn close_create_modal(&mut self) {
        self.state.modal = None;
        self.publish();
    }

    fn set_student_form(&mut self, form: StudentForm) {
        self.state.forms.student = form;
        self.publish();
    }

    fn set_course_form(&mut self, form: CourseForm) {
        self.state.forms.course = form;
        self.publish();
    }

    fn set_attendance_form(&mut self, form: AttendanceForm) {
        self.state.forms.attendance = form;
        self.publish();
    }

    #[instrument(level = "info", skip(self))]
    async fn create_student(&mut self) -> Result<(), MutationError> {
        let payload = self.state.forms.student.to_payload();
        self.submit(
            Tab::Students,
            Entity::Student,
            payload,
            |backend, student| async move { backend.create_student(&student).await },
        )
        .await
    }

    #[instrument(level = "info", skip(self))]
    async fn create_course(&mut self) -> Result<(), MutationError> {
        let payload = self.state.forms.course.to_payload();
        self.submit(
            Tab::Courses,
            Entity::Course,
            payload,
            |backend, course| async move { backend.create_course(&course).await },
        )
        .await
    }

    #[instrument(level = "info", skip(self))]
    async fn create_attendance(&mut self) -> Result<(), MutationError> {
        let payload = self.state.forms.attendance.to_payload();
        self.submit(
            Tab::Attendance,
            Entity::Attendance,
            payload,
            |backend, attendance| async move { backend.create_attendance(&attendance).await },
        )
        .await
    }

    #[instrument(level = "info", skip(self))]
    async fn delete_student(
        &mut self,
        student_id: StudentId,
    ) -> Result<DeleteOutcome, MutationError> {
        let id = student_id.0.clone();
        self.remove(Entity::Student, &id, |backend| async move {
            backend.delete_student(&student_id).await
        })
        .await
    }

    #[instrument(level = "info", skip(self))]
    async fn delete_course(&mut self, course_id: CourseId) -> Result<DeleteOutcome, MutationError> {
        let id = course_id.0.clone();
        self.remove(Entity::Course, &id, |backend| async move {
            backend.delete_course(&course_id).await
        })
        .await
    }

    #[instrument(level = "info", skip(self))]
    async fn delete_attendance(
        &mut self,
        attendance_id: AttendanceId,
    ) -> Result<DeleteOutcome, MutationError> {
        let id = attendance_id.0.clone();
        self.remove(Entity::Attendance, &id, |backend| async move {
            backend.delete_attendance(&attendance_id).await
        })
        .await
    }

    fn take_notifications(&mut self) -> Vec<Notification> {
        let notifications = std::mem::take(&mut self.state.notifications);
        if !notifications.is_empty() {
            self.publish();
        }
        notifications
    }
}

#[instrument(level = "trace", skip_all)]
fn map_load_err(err: BackendError) -> LoadError {
    warn!(error = %err, "Loading dashboard data failed");
    let message = if err.message.trim().is_empty() {
        LOAD_FALLBACK_MESSAGE.to_string()
    } else {
        err.message
    };
    LoadError { message }
}

#[instrument(level = "trace", skip_all)]
fn map_backend_err(entity: Entity, operation: Operation, err: BackendError) -> MutationError {
    warn!(entity = %entity, operation = %operation, error = %err, "Backend rejected mutation");
    MutationError::Backend {
        entity,
        operation,
        message: err.message,
    }
}
