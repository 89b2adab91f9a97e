//! `search/*` endpoints

use crate::types::{Status, UserSearchResult};
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Search public statuses (`q` required)
    pub async fn search_public_timeline(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        params.require(&["q"])?;
        self.get("search/public_timeline", params).await
    }

    /// Search users (`q` required)
    pub async fn search_users(&self, params: &ReqParams) -> Result<ApiResponse<UserSearchResult>> {
        params.require(&["q"])?;
        self.get("search/users", params).await
    }

    /// Search one user's statuses (`q` required)
    pub async fn search_user_timeline(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        params.require(&["q"])?;
        self.get("search/user_timeline", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::endpoints::test_support::{recording_client, silent_client};
    use crate::{Error, ReqParams};

    #[tokio::test]
    async fn test_search_users() {
        let (client, seen) = recording_client(200, r#"{"total_number":1,"users":[{"id":"rustacean"}]}"#);
        let response = client.search_users(&ReqParams::new().q("rust")).await.unwrap();
        assert_eq!(response.data.total_number, 1);
        assert_eq!(response.data.users[0].id, "rustacean");
        assert_eq!(seen.lock().unwrap()[0].params, vec![("q".to_string(), "rust".to_string())]);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let client = silent_client();
        for result in [
            client.search_public_timeline(&ReqParams::new()).await.map(|_| ()),
            client.search_user_timeline(&ReqParams::new().id("alice")).await.map(|_| ()),
        ] {
            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }
}
