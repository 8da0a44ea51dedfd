//! # S3互換ストレージによる署名付きURL発行
//!
//! Cloudflare R2, AWS S3, MinIO 等のS3互換APIに対する
//! SigV4クエリ署名付きURLを生成する。

// rust-s3 0.35 のカスタムヘッダーは http 0.2 の型で受け取る
use http::{header, HeaderMap, HeaderValue};

use super::{PresignMethod, PresignRequest, PresignStorage};
use crate::config::R2Config;
use crate::error::GatewayError;

/// R2はリージョンの概念を持たないため、署名スコープには "auto" を使う。
const R2_REGION: &str = "auto";

/// S3互換ストレージによる署名付きURL発行の実装。
pub struct S3PresignStorage {
    bucket: s3::Bucket,
}

impl S3PresignStorage {
    /// 設定からバケットハンドルを構築する。
    ///
    /// パススタイル（`<endpoint>/<bucket>/<key>`）のURLを生成する。
    pub fn new(config: &R2Config) -> anyhow::Result<Self> {
        let region = s3::Region::Custom {
            region: R2_REGION.to_string(),
            endpoint: config.endpoint.clone(),
        };

        let credentials = s3::creds::Credentials::new(
            Some(config.access_key_id.as_str()),
            Some(config.secret_access_key.as_str()),
            None,
            None,
            None,
        )?;

        let bucket = s3::Bucket::new(&config.bucket_name, region, credentials)?.with_path_style();

        Ok(Self { bucket: *bucket })
    }
}

#[async_trait::async_trait]
impl PresignStorage for S3PresignStorage {
    async fn presign(&self, request: &PresignRequest) -> Result<String, GatewayError> {
        let key = request.object_key.as_str();

        match request.method {
            PresignMethod::Put => {
                let custom_headers = request
                    .content_type
                    .as_deref()
                    .map(|content_type| {
                        let value = HeaderValue::from_str(content_type).map_err(|e| {
                            GatewayError::Internal(format!("不正なContent-Type: {e}"))
                        })?;
                        let mut headers = HeaderMap::new();
                        headers.insert(header::CONTENT_TYPE, value);
                        Ok::<_, GatewayError>(headers)
                    })
                    .transpose()?;

                self.bucket
                    .presign_put(key, request.expiry_secs, custom_headers, None)
                    .await
                    .map_err(|e| {
                        GatewayError::Storage(format!("署名付きアップロードURL生成失敗: {e}"))
                    })
            }
            PresignMethod::Get => self
                .bucket
                .presign_get(key, request.expiry_secs, None)
                .await
                .map_err(|e| {
                    GatewayError::Storage(format!("署名付きダウンロードURL生成失敗: {e}"))
                }),
        }
    }
}
