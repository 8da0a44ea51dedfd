//! # DocPort Gateway
//!
//! PDFドキュメントをクライアントがオブジェクトストレージ（Cloudflare R2等）へ
//! 直接アップロード/ダウンロードするための署名付きURLを発行する。
//! ファイル本体はGatewayを経由しない。
//!
//! ## API エンドポイント
//! - `GET /` — ヘルスチェック
//! - `POST /presign-upload` — 署名付きアップロードURL発行（5分、application/pdf固定）
//! - `GET /presign-download?key=<key>` — 署名付きダウンロードURL発行（5分）
//!
//! ## 環境変数
//! - `R2_ENDPOINT`, `R2_ACCESS_KEY_ID`, `R2_SECRET_ACCESS_KEY`, `R2_BUCKET_NAME`（必須）
//! - `CORS_ALLOWED_ORIGIN`（デフォルト: `http://localhost:5173`）
//! - `BIND_ADDR`（デフォルト: `0.0.0.0:8000`）
//! - `RUST_LOG`（デフォルト: `info`）

mod config;
mod endpoints;
mod error;
mod storage;

use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::{GatewayState, ServerConfig, PRESIGN_EXPIRY_SECS};
use crate::error::ConfigError;
use crate::storage::S3PresignStorage;

/// 単一オリジンのみを許可するCORSレイヤーを構築する。
///
/// 一致しないオリジンには `Access-Control-Allow-Origin` を返さない。
/// 認証情報付きリクエストではワイルドカードが使えないため、
/// メソッドとヘッダーはリクエストの内容をそのまま許可する。
fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(allowed_origin).map_err(|e| ConfigError::Invalid {
        name: "CORS_ALLOWED_ORIGIN",
        reason: format!("{allowed_origin}: {e}"),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// ルーターを構築する。
fn build_router(state: Arc<GatewayState>, cors: CorsLayer) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(endpoints::handle_health))
        .route(
            "/presign-upload",
            axum::routing::post(endpoints::handle_presign_upload),
        )
        .route(
            "/presign-download",
            axum::routing::get(endpoints::handle_presign_download),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "シグナルハンドラの登録に失敗");
        std::future::pending::<()>().await;
    }
    tracing::info!("シャットダウンします");
}

// ---------------------------------------------------------------------------
// エントリポイント
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .envは任意。存在しなければ環境変数のみを使う
    let dotenv_path = dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Some(path) = dotenv_path {
        tracing::info!(path = %path.display(), ".envを読み込みました");
    }

    let config = ServerConfig::from_env()?;
    tracing::info!(
        r2_endpoint = %config.r2.endpoint,
        r2_bucket = %config.r2.bucket_name,
        cors_allowed_origin = %config.cors_allowed_origin,
        "設定を読み込みました"
    );

    let storage = S3PresignStorage::new(&config.r2)?;
    let cors = cors_layer(&config.cors_allowed_origin)?;

    let state = Arc::new(GatewayState {
        storage: Box::new(storage),
        presign_expiry_secs: PRESIGN_EXPIRY_SECS,
    });

    let app = build_router(state, cors);

    tracing::info!("Gatewayを {} で起動します", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// テスト
// ---------------------------------------------------------------------------
