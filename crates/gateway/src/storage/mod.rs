//! # 署名付きURLの発行元
//!
//! オブジェクトストレージへの署名付きURL生成を抽象化するインターフェース。
//! S3互換ストレージ（Cloudflare R2等）実装は `s3` サブモジュールを参照。

pub mod s3;

pub use s3::S3PresignStorage;

use crate::error::GatewayError;

/// 署名対象の操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresignMethod {
    /// アップロード（PUT）
    Put,
    /// ダウンロード（GET）
    Get,
}

/// 署名付きURLの生成リクエスト。
/// リクエストごとに構築され、URL生成後に破棄される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignRequest {
    pub method: PresignMethod,
    /// バケット内のオブジェクトキー
    pub object_key: String,
    /// 署名に含めるContent-Type（PUTのみ有効）。
    /// 指定した場合、アップロード時に同じContent-Typeを送らないと署名が一致しない。
    pub content_type: Option<String>,
    /// 有効期限（秒）
    pub expiry_secs: u32,
}

impl PresignRequest {
    /// Content-Typeを固定したPUTリクエストを構築する。
    pub fn put(object_key: impl Into<String>, content_type: &str, expiry_secs: u32) -> Self {
        Self {
            method: PresignMethod::Put,
            object_key: object_key.into(),
            content_type: Some(content_type.to_string()),
            expiry_secs,
        }
    }

    /// GETリクエストを構築する。
    pub fn get(object_key: impl Into<String>, expiry_secs: u32) -> Self {
        Self {
            method: PresignMethod::Get,
            object_key: object_key.into(),
            content_type: None,
            expiry_secs,
        }
    }
}

/// 署名付きURLの発行元の抽象インターフェース。
///
/// 実装は起動時に一度だけ構築され、全リクエストから並行に参照される。
/// 署名はローカルの暗号計算であり、ネットワーク通信を伴わない。
#[async_trait::async_trait]
pub trait PresignStorage: Send + Sync {
    /// 署名付きURLを生成する。
    async fn presign(&self, request: &PresignRequest) -> Result<String, GatewayError>;
}
