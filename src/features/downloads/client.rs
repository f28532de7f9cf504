//! Client helper for the download-info endpoint.

use crate::{
    app_lib::{AppError, get_json},
    features::downloads::types::ClientDownloadInfo,
};

/// Fetches the download URLs the server advertises to this client.
pub async fn client_info(token: &str) -> Result<ClientDownloadInfo, AppError> {
    get_json("/downloads/client-info", Some(token)).await
}
