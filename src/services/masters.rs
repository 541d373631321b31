//! Master data for dropdowns: classes, sections, sessions and categories

use super::keyed_payload;
use crate::api::endpoints::masters;
use crate::api::{ApiClient, ApiResponse, Payload};
use crate::error::AppError;
use tracing::debug;

/// Master lists needed by the admission form.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionMasters {
    pub classes: ApiResponse,
    pub sessions: ApiResponse,
    pub categories: ApiResponse,
}

pub async fn get_classes(client: &ApiClient) -> Result<ApiResponse, AppError> {
    client.get(masters::GET_CLASSES, &Payload::new()).await
}

/// Sections of one class, sent as `?classId=<id>`.
pub async fn get_sections(client: &ApiClient, class_id: i64) -> Result<ApiResponse, AppError> {
    client
        .get(masters::GET_SECTIONS, &keyed_payload("classId", class_id))
        .await
}

pub async fn get_sessions(client: &ApiClient) -> Result<ApiResponse, AppError> {
    client.get(masters::GET_SESSIONS, &Payload::new()).await
}

pub async fn get_categories(client: &ApiClient) -> Result<ApiResponse, AppError> {
    client.get(masters::GET_CATEGORIES, &Payload::new()).await
}

/// Fetches classes, sessions and categories concurrently.
/// The first failure wins and the other calls are dropped.
pub async fn load_admission_masters(client: &ApiClient) -> Result<AdmissionMasters, AppError> {
    debug!("Loading admission masters");
    let (classes, sessions, categories) = futures::try_join!(
        get_classes(client),
        get_sessions(client),
        get_categories(client)
    )?;

    Ok(AdmissionMasters {
        classes,
        sessions,
        categories,
    })
}
