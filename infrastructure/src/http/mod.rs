mod envelope;
mod error;

use crate::http::envelope::Envelope;
use crate::http::error::{reqwest_to_domain_error, status_to_domain_error};
use async_trait::async_trait;
use domain::ports::backend::{BackendError, BackendPort};
use domain_shared::forms::{NewAttendance, NewCourse, NewStudent};
use domain_shared::school::{AttendanceId, AttendanceRecord, Course, CourseId, Student, StudentId};
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{instrument, warn};
use url::Url;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

const STUDENTS: &str = "students";
const COURSES: &str = "courses";
const ATTENDANCE: &str = "attendance";

#[derive(Clone, Debug)]
pub struct HttpBackendConfig {
    /// Root of the REST API, e.g. `http://localhost:8080/api`.
    pub base_url: Url,
    /// No timeout when unset.
    pub request_timeout: Option<Duration>,
}

pub struct HttpBackendAdapter {
    http_client: HttpClient,
    base_url: Url,
}

impl HttpBackendAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(config: HttpBackendConfig) -> Result<Self, Error> {
        let HttpBackendConfig {
            base_url,
            request_timeout,
        } = config;

        if base_url.cannot_be_a_base() {
            return Err(format!("API URL {} cannot be used as a base URL", base_url).into());
        }

        let mut builder = HttpClient::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| BackendError::new(format!("Invalid API URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[instrument(level = "trace", skip(self, request))]
    async fn send(&self, request: RequestBuilder) -> Result<String, BackendError> {
        let response = request.send().await.map_err(reqwest_to_domain_error)?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest_to_domain_error)?;

        if !status.is_success() {
            return Err(status_to_domain_error(status, &body));
        }

        Ok(body)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, BackendError> {
        serde_json::from_str::<Envelope<T>>(body)
            .map(Envelope::into_inner)
            .map_err(|err| {
                warn!(error = ?err, "Failed to parse backend response");
                BackendError::new(format!("Invalid response from server: {}", err))
            })
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn get_all<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>, BackendError> {
        let url = self.endpoint(&[resource])?;
        let body = self.send(self.http_client.get(url)).await?;
        Self::decode(&body)
    }

    /// Any 2xx commits the create. The record is dropped when the body cannot be read.
    #[instrument(level = "debug", err, skip(self, payload))]
    async fn create<B, T>(&self, resource: &str, payload: &B) -> Result<Option<T>, BackendError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(&[resource])?;
        let body = self.send(self.http_client.post(url).json(payload)).await?;

        if body.trim().is_empty() {
            return Ok(None);
        }
        match Self::decode(&body) {
            Ok(created) => Ok(Some(created)),
            Err(err) => {
                warn!(resource, error = %err, "Create succeeded but the response was not a record");
                Ok(None)
            }
        }
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn delete(&self, resource: &str, id: &str) -> Result<(), BackendError> {
        let url = self.endpoint(&[resource, id])?;
        self.send(self.http_client.delete(url)).await?;
        Ok(())
    }
}

#[async_trait]
impl BackendPort for HttpBackendAdapter {
    async fn get_students(&self) -> Result<Vec<Student>, BackendError> {
        self.get_all(STUDENTS).await
    }

    async fn get_courses(&self) -> Result<Vec<Course>, BackendError> {
        self.get_all(COURSES).await
    }

    async fn get_attendance(&self) -> Result<Vec<AttendanceRecord>, BackendError> {
        self.get_all(ATTENDANCE).await
    }

    async fn create_student(&self, student: &NewStudent) -> Result<Option<Student>, BackendError> {
        self.create(STUDENTS, student).await
    }

    async fn create_course(&self, course: &NewCourse) -> Result<Option<Course>, BackendError> {
        self.create(COURSES, course).await
    }

    async fn create_attendance(
        &self,
        attendance: &NewAttendance,
    ) -> Result<Option<AttendanceRecord>, BackendError> {
        self.create(ATTENDANCE, attendance).await
    }

    async fn delete_student(&self, student_id: &StudentId) -> Result<(), BackendError> {
        self.delete(STUDENTS, &student_id.0).await
    }

    async fn delete_course(&self, course_id: &CourseId) -> Result<(), BackendError> {
        self.delete(COURSES, &course_id.0).await
    }

    async fn delete_attendance(&self, attendance_id: &AttendanceId) -> Result<(), BackendError> {
        self.delete(ATTENDANCE, &attendance_id.0).await
    }
}
