//! Fee heads, fee structures and fee collection

use super::{keyed_payload, to_payload};
use crate::api::endpoints::fees;
use crate::api::{ApiClient, ApiResponse, Payload};
use crate::error::AppError;
use crate::models::{FeeCollection, FeeHead, FeeStructureFilter};

/// All configured fee heads.
pub async fn get_fee_heads(client: &ApiClient) -> Result<ApiResponse, AppError> {
    client.get(fees::GET_FEE_HEADS, &Payload::new()).await
}

pub async fn add_fee_head(client: &ApiClient, head: &FeeHead) -> Result<ApiResponse, AppError> {
    client.post(fees::ADD_FEE_HEAD, &to_payload(head)?).await
}

/// Fee structure for a class/session/category combination.
pub async fn get_fee_structure(
    client: &ApiClient,
    filter: &FeeStructureFilter,
) -> Result<ApiResponse, AppError> {
    client
        .post(fees::GET_FEE_STRUCTURE, &to_payload(filter)?)
        .await
}

/// Records a payment. The response carries the receipt number.
pub async fn collect_fee(
    client: &ApiClient,
    collection: &FeeCollection,
) -> Result<ApiResponse, AppError> {
    client
        .post(fees::COLLECT_FEE, &to_payload(collection)?)
        .await
}

pub async fn get_fee_receipt(client: &ApiClient, receipt_no: &str) -> Result<ApiResponse, AppError> {
    client
        .post(fees::GET_FEE_RECEIPT, &keyed_payload("receiptNo", receipt_no))
        .await
}
