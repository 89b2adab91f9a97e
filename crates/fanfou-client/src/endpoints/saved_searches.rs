//! `saved_searches/*` endpoints

use crate::types::SavedSearch;
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Save a search (`query` required)
    pub async fn saved_searches_create(&self, params: &ReqParams) -> Result<ApiResponse<SavedSearch>> {
        params.require(&["query"])?;
        self.post("saved_searches/create", params).await
    }

    /// Delete a saved search (`id` required)
    pub async fn saved_searches_destroy(&self, params: &ReqParams) -> Result<ApiResponse<SavedSearch>> {
        params.require(&["id"])?;
        self.post("saved_searches/destroy", params).await
    }

    /// A saved search (`id` required)
    pub async fn saved_searches_show(&self, params: &ReqParams) -> Result<ApiResponse<SavedSearch>> {
        params.require(&["id"])?;
        self.get("saved_searches/show", params).await
    }

    /// All saved searches
    pub async fn saved_searches_list(&self, params: &ReqParams) -> Result<ApiResponse<Vec<SavedSearch>>> {
        self.get("saved_searches/list", params).await
    }
}
