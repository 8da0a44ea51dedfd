//! # Gatewayエンドポイント

pub mod health;
pub mod presign_upload;
pub mod presign_download;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use health::handle_health;
pub use presign_upload::handle_presign_upload;
pub use presign_download::handle_presign_download;
