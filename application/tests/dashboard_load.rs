mod common;

use application::dashboard::DashboardService;
use application_ports::dashboard::DashboardPort;
use application_ports::view::{DashboardView, Tab, ViewStatus};
use common::{attendance, course, failing_backend, never_asked, reading_backend, student, ServerState};
use domain::ports::backend::{BackendError, MockBackendPort};
use domain_shared::school::StudentId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

fn service(backend: MockBackendPort) -> DashboardService {
    DashboardService::new(Arc::new(backend), Arc::new(never_asked()))
}

#[tokio::test]
async fn load_shows_exactly_what_the_backend_returned() {
    let server = ServerState::with(
        vec![student("s1", "Ada"), student("s2", "Grace")],
        vec![course("c1", "Algebra")],
        vec![attendance("a1", "s1", "c1")],
    );
    let mut dashboard = service(reading_backend(&server));

    dashboard.load().await.unwrap();

    let view = dashboard.view();
    assert_eq!(view.status, ViewStatus::Ready);
    let ids: Vec<_> = view.students.iter().map(|s| s.id.0.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2"]);
    assert_eq!(view.courses.len(), 1);
    assert_eq!(view.attendance.len(), 1);
    assert_eq!(view.stat("Total Students"), Some(2));
    assert_eq!(view.stat("Total Courses"), Some(1));
    assert_eq!(view.stat("Attendance Records"), Some(1));
}

#[tokio::test]
async fn reload_replaces_instead_of_merging() {
    let server = ServerState::with(
        vec![student("s1", "Ada"), student("s2", "Grace")],
        vec![],
        vec![],
    );
    let mut dashboard = service(reading_backend(&server));
    dashboard.load().await.unwrap();

    *server.students.lock().unwrap() = vec![student("s3", "Linus")];
    dashboard.load().await.unwrap();

    let view = dashboard.view();
    assert_eq!(view.students.len(), 1);
    assert_eq!(view.students[0].id, StudentId("s3".to_string()));
}

#[tokio::test]
async fn first_load_failure_shows_error_panel_over_empty_state() {
    let mut dashboard = service(failing_backend("Network Error"));

    let err = dashboard.load().await.unwrap_err();

    assert_eq!(err.message, "Network Error");
    let view = dashboard.view();
    assert_eq!(
        view.status,
        ViewStatus::Failed {
            message: "Network Error".to_string()
        }
    );
    assert!(view.students.is_empty());
    assert!(view.courses.is_empty());
    assert!(view.attendance.is_empty());
}

#[tokio::test]
async fn blank_error_message_uses_fallback_text() {
    let mut dashboard = service(failing_backend(""));

    let err = dashboard.load().await.unwrap_err();

    assert_eq!(err.message, "Failed to load data");
}

#[tokio::test]
async fn failed_reload_keeps_previous_collections() {
    let server = ServerState::with(
        vec![student("s1", "Ada")],
        vec![course("c1", "Algebra")],
        vec![],
    );
    let fail_attendance = Arc::new(AtomicBool::new(false));

    let mut backend = MockBackendPort::new();
    let students = server.students.clone();
    backend
        .expect_get_students()
        .returning(move || Ok(students.lock().unwrap().clone()));
    let courses = server.courses.clone();
    backend
        .expect_get_courses()
        .returning(move || Ok(courses.lock().unwrap().clone()));
    let fail = fail_attendance.clone();
    backend.expect_get_attendance().returning(move || {
        if fail.load(Ordering::SeqCst) {
            Err(BackendError::new("Request failed with status code 500"))
        } else {
            Ok(vec![])
        }
    });
    let mut dashboard = service(backend);
    dashboard.load().await.unwrap();
    let before = dashboard.view();

    server.students.lock().unwrap().push(student("s2", "Grace"));
    fail_attendance.store(true, Ordering::SeqCst);
    dashboard.load().await.unwrap_err();

    let after = dashboard.view();
    assert_eq!(after.students, before.students);
    assert_eq!(after.courses, before.courses);
    assert_eq!(
        after.status,
        ViewStatus::Failed {
            message: "Request failed with status code 500".to_string()
        }
    );
}

#[tokio::test]
async fn retry_clears_the_error() {
    let fail = Arc::new(AtomicBool::new(true));
    let mut backend = MockBackendPort::new();
    let fail_students = fail.clone();
    backend.expect_get_students().returning(move || {
        if fail_students.load(Ordering::SeqCst) {
            Err(BackendError::new("Network Error"))
        } else {
            Ok(vec![student("s1", "Ada")])
        }
    });
    backend.expect_get_courses().returning(|| Ok(vec![]));
    backend.expect_get_attendance().returning(|| Ok(vec![]));
    let mut dashboard = service(backend);

    dashboard.load().await.unwrap_err();
    fail.store(false, Ordering::SeqCst);
    dashboard.load().await.unwrap();

    let view = dashboard.view();
    assert_eq!(view.status, ViewStatus::Ready);
    assert_eq!(view.students.len(), 1);
}

#[tokio::test]
async fn loading_flag_is_set_only_while_fetching() {
    let observer: Arc<Mutex<Option<watch::Receiver<DashboardView>>>> = Arc::new(Mutex::new(None));
    let seen_during_fetch = Arc::new(Mutex::new(None));

    let mut backend = MockBackendPort::new();
    let slot = observer.clone();
    let seen = seen_during_fetch.clone();
    backend.expect_get_students().returning(move || {
        let status = slot
            .lock()
            .unwrap()
            .as_ref()
            .map(|rx| rx.borrow().status.clone());
        *seen.lock().unwrap() = status;
        Ok(vec![])
    });
    backend.expect_get_courses().returning(|| Ok(vec![]));
    backend.expect_get_attendance().returning(|| Ok(vec![]));
    let mut dashboard = service(backend);
    *observer.lock().unwrap() = Some(dashboard.subscribe());

    assert_eq!(dashboard.view().status, ViewStatus::Ready);
    dashboard.load().await.unwrap();

    assert_eq!(*seen_during_fetch.lock().unwrap(), Some(ViewStatus::Loading));
    assert_eq!(dashboard.view().status, ViewStatus::Ready);
}

#[tokio::test]
async fn loading_twice_yields_the_same_view() {
    let server = ServerState::with(
        vec![student("s1", "Ada")],
        vec![course("c1", "Algebra")],
        vec![attendance("a1", "s1", "c1")],
    );
    let mut dashboard = service(reading_backend(&server));

    dashboard.load().await.unwrap();
    let first = dashboard.view();
    dashboard.load().await.unwrap();
    let second = dashboard.view();

    assert_eq!(first, second);
    assert_eq!(server.loads(), 2);
}

#[tokio::test]
async fn subscribers_see_every_published_view() {
    let server = ServerState::with(vec![student("s1", "Ada")], vec![], vec![]);
    let mut dashboard = service(reading_backend(&server));
    let mut views = dashboard.subscribe();

    dashboard.load().await.unwrap();
    dashboard.select_tab(Tab::Courses);

    assert!(views.has_changed().unwrap());
    let latest = views.borrow_and_update().clone();
    assert_eq!(latest.active_tab, Tab::Courses);
    assert_eq!(latest.students.len(), 1);
}
