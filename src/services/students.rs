//! Student admission and lookup

use super::{keyed_payload, to_payload};
use crate::api::endpoints::students;
use crate::api::{ApiClient, ApiResponse};
use crate::error::AppError;
use crate::models::{Student, StudentAdmission, StudentFilter};

/// Students matching the filter.
pub async fn get_students(
    client: &ApiClient,
    filter: &StudentFilter,
) -> Result<ApiResponse, AppError> {
    client
        .post(students::GET_STUDENTS, &to_payload(filter)?)
        .await
}

pub async fn get_student_by_id(client: &ApiClient, id: i64) -> Result<ApiResponse, AppError> {
    client
        .post(students::GET_STUDENT_BY_ID, &keyed_payload("studentId", id))
        .await
}

/// Submits a new admission.
pub async fn add_student(
    client: &ApiClient,
    admission: &StudentAdmission,
) -> Result<ApiResponse, AppError> {
    client
        .post(students::ADD_STUDENT, &to_payload(admission)?)
        .await
}

pub async fn update_student(client: &ApiClient, student: &Student) -> Result<ApiResponse, AppError> {
    client
        .post(students::UPDATE_STUDENT, &to_payload(student)?)
        .await
}

pub async fn delete_student(client: &ApiClient, id: i64) -> Result<ApiResponse, AppError> {
    client
        .post(students::DELETE_STUDENT, &keyed_payload("studentId", id))
        .await
}
