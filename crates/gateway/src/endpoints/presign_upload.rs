//! # POST /presign-upload
//!
//! PDFアップロード用の署名付きURL発行。

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use docport_types::PresignUploadResponse;

use crate::config::GatewayState;
use crate::error::GatewayError;
use crate::storage::PresignRequest;

/// アップロード先のキープレフィックス
pub const UPLOAD_KEY_PREFIX: &str = "documents/";

/// アップロードするファイルの拡張子
pub const UPLOAD_KEY_EXTENSION: &str = ".pdf";

/// アップロード時に要求するContent-Type
pub const UPLOAD_CONTENT_TYPE: &str = "application/pdf";

/// 新しいアップロード用オブジェクトキーを生成する（`documents/<uuid>.pdf`）。
pub fn new_upload_key() -> String {
    format!(
        "{UPLOAD_KEY_PREFIX}{}{UPLOAD_KEY_EXTENSION}",
        uuid::Uuid::new_v4()
    )
}

/// POST /presign-upload — 署名付きアップロードURL発行。
///
/// 毎回新しいオブジェクトキーを生成し、Content-Typeを `application/pdf` に
/// 固定したPUT用URLを返す。発行したキーはGatewayでは記録しない。
pub async fn handle_presign_upload(
    State(state): State<Arc<GatewayState>>,
) -> Result<Json<PresignUploadResponse>, GatewayError> {
    let file_key = new_upload_key();

    let request = PresignRequest::put(&file_key, UPLOAD_CONTENT_TYPE, state.presign_expiry_secs);
    let upload_url = state.storage.presign(&request).await?;

    tracing::info!(file_key = %file_key, "署名付きアップロードURLを発行");

    Ok(Json(PresignUploadResponse {
        upload_url,
        file_key,
    }))
}
