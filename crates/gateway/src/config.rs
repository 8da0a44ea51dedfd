//! # Gateway設定・共有状態
//!
//! 環境変数からの設定読み込みとGatewayの共有状態の定義。
//! 設定は起動時に一度だけ読み込み、検証が通るまでリッスンを開始しない。

use std::net::SocketAddr;

use crate::error::ConfigError;
use crate::storage::PresignStorage;

/// 署名付きURLの有効期限（秒）
pub const PRESIGN_EXPIRY_SECS: u32 = 5 * 60;

/// 開発用Webクライアントのオリジン
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// デフォルトのリッスンアドレス
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// R2（S3互換ストレージ）の接続設定。
#[derive(Clone, PartialEq, Eq)]
pub struct R2Config {
    /// S3互換エンドポイントURL（例: `https://<account>.r2.cloudflarestorage.com`）
    pub endpoint: String,
    /// アクセスキーID
    pub access_key_id: String,
    /// シークレットアクセスキー
    pub secret_access_key: String,
    /// バケット名
    pub bucket_name: String,
}

// シークレットをログに出さない
impl std::fmt::Debug for R2Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("R2Config")
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("bucket_name", &self.bucket_name)
            .finish()
    }
}

impl R2Config {
    /// 任意の参照関数から構築する。
    ///
    /// 未設定・空白のみの値はどちらも `ConfigError::Missing` になる。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = required(&lookup, "R2_ENDPOINT")?;
        let endpoint = normalize_endpoint(&endpoint)?;

        Ok(Self {
            endpoint,
            access_key_id: required(&lookup, "R2_ACCESS_KEY_ID")?,
            secret_access_key: required(&lookup, "R2_SECRET_ACCESS_KEY")?,
            bucket_name: required(&lookup, "R2_BUCKET_NAME")?,
        })
    }
}

/// サーバー全体の設定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub r2: R2Config,
    /// CORSで許可する唯一のオリジン
    pub cors_allowed_origin: String,
    /// リッスンアドレス
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// 環境変数から構築する。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の参照関数から構築する。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let r2 = R2Config::from_lookup(&lookup)?;

        let cors_allowed_origin = optional(&lookup, "CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let bind_addr_raw =
            optional(&lookup, "BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: format!("{bind_addr_raw}: {e}"),
            })?;

        Ok(Self {
            r2,
            cors_allowed_origin,
            bind_addr,
        })
    }
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

/// エンドポイントURLを検証し、末尾のスラッシュを取り除く。
///
/// パススタイルのURLはエンドポイントの後ろにバケット名を連結するため、
/// パス・クエリ・フラグメント・ユーザー情報を含むエンドポイントは受け付けない。
fn normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: "R2_ENDPOINT",
        reason,
    };

    let url = url::Url::parse(raw).map_err(|e| invalid(format!("{raw}: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!(
            "http(s)のURLである必要があります: {raw}"
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(format!("ホスト名がありません: {raw}")));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid(format!("ユーザー情報は指定できません: {raw}")));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(format!(
            "パス・クエリ・フラグメントは指定できません: {raw}"
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

/// Gatewayの共有状態。
/// 起動後は不変で、全リクエストから読み取り専用で共有される。
pub struct GatewayState {
    /// 署名付きURLの発行元（R2等、トレイトで抽象化）
    pub storage: Box<dyn PresignStorage>,
    /// 署名付きURLの有効期限（秒）
    pub presign_expiry_secs: u32,
}
