//! # Gateway エラー型
//!
//! 全エンドポイントで共通のエラー型と、起動時の設定エラー型。

use axum::http::StatusCode;

/// Gatewayエラー型。
///
/// 署名処理の失敗はリトライも翻訳もせず、そのままHTTPレスポンスに変換する。
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// 署名付きURLの生成に失敗（認証情報の不備等）
    #[error("ストレージ操作に失敗: {0}")]
    Storage(String),
    /// リクエストパラメータの検証に失敗
    #[error("不正なリクエストパラメータ: {0}")]
    Validation(String),
    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            GatewayError::Storage(_) | GatewayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "リクエスト処理に失敗");
        }
        (status, self.to_string()).into_response()
    }
}

/// 起動時の設定エラー型。
/// 発生した場合、サーバーはリッスンを開始しない。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定、または空
    #[error("環境変数 {0} が設定されていません")]
    Missing(&'static str),
    /// 環境変数の値が不正
    #[error("環境変数 {name} の値が不正です: {reason}")]
    Invalid {
        name: &'static str,
        reason: String,
    },
}
