//! `trends/*` endpoints

use crate::types::Trends;
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Current trending topics
    pub async fn trends_list(&self, params: &ReqParams) -> Result<ApiResponse<Trends>> {
        self.get("trends/list", params).await
    }
}
