//! # GET /presign-download
//!
//! ダウンロード用の署名付きURL発行。

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use docport_types::{PresignDownloadQuery, PresignDownloadResponse};

use crate::config::GatewayState;
use crate::endpoints::presign_upload::UPLOAD_KEY_PREFIX;
use crate::error::GatewayError;
use crate::storage::PresignRequest;

/// GET /presign-download?key=<key> — 署名付きダウンロードURL発行。
///
/// `key` が欠けている場合は422を返す。
/// キーの存在確認や所有者の確認は行わず、渡されたキーをそのまま署名する。
pub async fn handle_presign_download(
    State(state): State<Arc<GatewayState>>,
    query: Result<Query<PresignDownloadQuery>, QueryRejection>,
) -> Result<Json<PresignDownloadResponse>, GatewayError> {
    let Query(query) = query.map_err(|rejection| GatewayError::Validation(rejection.body_text()))?;

    if !query.key.starts_with(UPLOAD_KEY_PREFIX) {
        // TODO: 発行済みキーの所有者を検証できるようになったら拒否に切り替える
        tracing::warn!(
            object_key = %query.key,
            "アップロード用プレフィックス外のキーに署名します"
        );
    }

    let request = PresignRequest::get(&query.key, state.presign_expiry_secs);
    let download_url = state.storage.presign(&request).await?;

    tracing::info!(object_key = %query.key, "署名付きダウンロードURLを発行");

    Ok(Json(PresignDownloadResponse { download_url }))
}
