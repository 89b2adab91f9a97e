//! `favorites/*` endpoints
//!
//! `favorites/create` and `favorites/destroy` take the status ID in the path.

use percent_encoding::utf8_percent_encode;

use crate::oauth::OAUTH_ENCODE_SET;
use crate::types::Status;
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Unfavorite a status (`id` required)
    pub async fn favorites_destroy(&self, params: &ReqParams) -> Result<ApiResponse<Status>> {
        params.require(&["id"])?;
        let path = format!("favorites/destroy/{}", path_segment(params));
        self.post(&path, params).await
    }

    /// A user's favorites; the current user's when `id` is unset
    pub async fn favorites(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        self.get("favorites/id", params).await
    }

    /// Favorite a status (`id` required)
    pub async fn favorites_create(&self, params: &ReqParams) -> Result<ApiResponse<Status>> {
        params.require(&["id"])?;
        let path = format!("favorites/create/{}", path_segment(params));
        self.post(&path, params).await
    }
}

fn path_segment(params: &ReqParams) -> String {
    utf8_percent_encode(params.id.as_deref().unwrap_or_default(), OAUTH_ENCODE_SET).to_string()
}
