//! `followers/ids` and `friends/ids`

use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// IDs of a user's followers
    pub async fn followers_ids(&self, params: &ReqParams) -> Result<ApiResponse<Vec<String>>> {
        self.get("followers/ids", params).await
    }

    /// IDs of the users a user follows
    pub async fn friends_ids(&self, params: &ReqParams) -> Result<ApiResponse<Vec<String>>> {
        self.get("friends/ids", params).await
    }
}
