use crate::client::model::error::ApiError;
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

fn ensure_success(response: &Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::new(
            status,
            format!("Request failed with status {}", status),
        ))
    }
}

/// Decode a JSON body from a 2xx response. Error bodies are not read.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_success(&response)?;

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to parse response: {}", e)))
}

/// Check the status of a response whose body is ignored.
pub fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    ensure_success(&response)
}

pub fn get(url: &str) -> Request {
    Request::get(url)
}

/// Create a POST request with JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

/// Create a PUT request with JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url).header("Content-Type", "application/json")
}

/// Send a request and handle transport errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::new(500, format!("Failed to serialize request: {}", e)))
}
