//! # エンドポイントテスト用共通ヘルパー

use std::sync::Arc;

use crate::config::{GatewayState, PRESIGN_EXPIRY_SECS};
use crate::error::GatewayError;
use crate::storage::{PresignMethod, PresignRequest, PresignStorage};

/// テスト用バケット名
pub const MOCK_BUCKET: &str = "mock-bucket";

/// テスト用のモックストレージ。
/// 署名計算をせず、リクエスト内容を埋め込んだダミーURLを返す。
pub struct MockStorage;

#[async_trait::async_trait]
impl PresignStorage for MockStorage {
    async fn presign(&self, request: &PresignRequest) -> Result<String, GatewayError> {
        let method = match request.method {
            PresignMethod::Put => "PUT",
            PresignMethod::Get => "GET",
        };
        let content_type = request.content_type.as_deref().unwrap_or("-");
        Ok(format!(
            "http://mock-storage/{MOCK_BUCKET}/{}?X-Amz-Expires={}&method={method}&content-type={content_type}",
            request.object_key, request.expiry_secs
        ))
    }
}

/// 常に署名に失敗するモックストレージ（認証情報不備の再現）。
pub struct FailingStorage;

#[async_trait::async_trait]
impl PresignStorage for FailingStorage {
    async fn presign(&self, _request: &PresignRequest) -> Result<String, GatewayError> {
        Err(GatewayError::Storage("invalid credentials".to_string()))
    }
}

/// テスト用GatewayStateを構築するヘルパー
pub fn test_state(storage: impl PresignStorage + 'static) -> Arc<GatewayState> {
    Arc::new(GatewayState {
        storage: Box::new(storage),
        presign_expiry_secs: PRESIGN_EXPIRY_SECS,
    })
}
