//! # DocPort 共有型定義
//!
//! Gatewayとクライアント（Webアプリ）の間でやり取りされる
//! リクエスト/レスポンスのデータ構造。
//!
//! 全てのフィールド名はJSON上でsnake_caseのまま公開される。

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// ヘルスチェックのレスポンス。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 常に "ok"
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// POST /presign-upload
// ---------------------------------------------------------------------------

/// /presign-upload レスポンス。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresignUploadResponse {
    /// 署名付きアップロードURL（PUT）。
    /// アップロード時は `Content-Type: application/pdf` を付与する必要がある。
    pub upload_url: String,
    /// 発行したオブジェクトキー（`documents/<uuid>.pdf`）。
    /// ダウンロード時にこの値を `key` として渡す。
    pub file_key: String,
}

// ---------------------------------------------------------------------------
// GET /presign-download
// ---------------------------------------------------------------------------

/// /presign-download クエリパラメータ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresignDownloadQuery {
    /// ダウンロード対象のオブジェクトキー（必須）
    pub key: String,
}

/// /presign-download レスポンス。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresignDownloadResponse {
    /// 署名付きダウンロードURL（GET）
    pub download_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_json() {
        let json = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }

    /// クライアントが参照するフィールド名が変わっていないことを確認
    #[test]
    fn test_presign_upload_response_field_names() {
        let response = PresignUploadResponse {
            upload_url: "https://r2.example.com/bucket/documents/a.pdf?X-Amz-Expires=300"
                .to_string(),
            file_key: "documents/a.pdf".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 2);
        assert_eq!(obj["file_key"], "documents/a.pdf");
        assert!(obj["upload_url"].as_str().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_presign_download_query_requires_key() {
        let missing = serde_json::from_value::<PresignDownloadQuery>(serde_json::json!({}));
        assert!(missing.is_err());

        let query: PresignDownloadQuery =
            serde_json::from_value(serde_json::json!({ "key": "documents/x.pdf" })).unwrap();
        assert_eq!(query.key, "documents/x.pdf");
    }
}
