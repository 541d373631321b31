//! Outstanding dues

use super::to_payload;
use crate::api::endpoints::dues;
use crate::api::{ApiClient, ApiResponse};
use crate::error::AppError;
use crate::models::{DuesEntry, DuesFilter};

pub async fn get_student_dues(
    client: &ApiClient,
    filter: &DuesFilter,
) -> Result<ApiResponse, AppError> {
    client
        .post(dues::GET_STUDENT_DUES, &to_payload(filter)?)
        .await
}

pub async fn add_dues(client: &ApiClient, entry: &DuesEntry) -> Result<ApiResponse, AppError> {
    client.post(dues::ADD_DUES, &to_payload(entry)?).await
}

/// Class- or session-wide dues summary.
pub async fn get_dues_report(
    client: &ApiClient,
    filter: &DuesFilter,
) -> Result<ApiResponse, AppError> {
    client
        .post(dues::GET_DUES_REPORT, &to_payload(filter)?)
        .await
}
