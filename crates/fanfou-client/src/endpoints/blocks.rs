//! `blocks/*` endpoints

use crate::types::User;
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// IDs of blocked users
    pub async fn blocks_ids(&self, params: &ReqParams) -> Result<ApiResponse<Vec<String>>> {
        self.get("blocks/ids", params).await
    }

    /// Blocked users
    pub async fn blocks_blocking(&self, params: &ReqParams) -> Result<ApiResponse<Vec<User>>> {
        self.get("blocks/blocking", params).await
    }

    /// Block a user (`id` required)
    pub async fn blocks_create(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        params.require(&["id"])?;
        self.post("blocks/create", params).await
    }

    /// The blocked user, if `id` is blocked (`id` required)
    pub async fn blocks_exists(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        params.require(&["id"])?;
        self.get("blocks/exists", params).await
    }

    /// Unblock a user (`id` required)
    pub async fn blocks_destroy(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        params.require(&["id"])?;
        self.post("blocks/destroy", params).await
    }
}
