use serde::Serialize;

/// Confirmation returned by delete endpoints, naming the removed resource.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub detail: String,
}
