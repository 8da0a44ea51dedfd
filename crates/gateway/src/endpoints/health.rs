//! # GET /
//!
//! ヘルスチェック。

use axum::Json;
use docport_types::HealthResponse;

/// GET / — ヘルスチェック。
///
/// 設定やストレージの状態に関わらず常に `{"status": "ok"}` を返す。
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = handle_health().await.0;
        assert_eq!(response.status, "ok");
    }
}
