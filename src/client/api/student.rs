use dioxus_logger::tracing;

use crate::{
    client::{constant::API_BASE, controller::StudentApi, model::error::ApiError},
    model::student::{CreateStudentDto, StudentDto},
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

fn collection_url() -> String {
    format!("{}/students", API_BASE)
}

fn record_url(id: i32) -> String {
    format!("{}/students/{}", API_BASE, id)
}

/// Get every student record
pub async fn get_students() -> Result<Vec<StudentDto>, ApiError> {
    let url = collection_url();
    tracing::debug!("GET {}", url);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Get a single student record by ID
pub async fn get_student(id: i32) -> Result<StudentDto, ApiError> {
    let url = record_url(id);
    tracing::debug!("GET {}", url);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Create a new student record
pub async fn create_student(payload: &CreateStudentDto) -> Result<(), ApiError> {
    let url = collection_url();
    tracing::debug!("POST {}", url);
    let body = serialize_json(payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_empty_response(response)
}

/// Replace every field of an existing student record
pub async fn update_student(payload: &StudentDto) -> Result<(), ApiError> {
    let url = collection_url();
    tracing::debug!("PUT {} (id {})", url, payload.id);
    let body = serialize_json(payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_empty_response(response)
}

/// Delete a student record
pub async fn delete_student(id: i32) -> Result<(), ApiError> {
    let url = record_url(id);
    tracing::debug!("DELETE {}", url);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response)
}

/// `StudentApi` backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpStudentApi;

impl StudentApi for HttpStudentApi {
    async fn list(&self) -> Result<Vec<StudentDto>, ApiError> {
        get_students().await
    }

    async fn get(&self, id: i32) -> Result<StudentDto, ApiError> {
        get_student(id).await
    }

    async fn create(&self, payload: &CreateStudentDto) -> Result<(), ApiError> {
        create_student(payload).await
    }

    async fn update(&self, payload: &StudentDto) -> Result<(), ApiError> {
        update_student(payload).await
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        delete_student(id).await
    }
}
