//! `users/*` endpoints

use crate::types::User;
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Users carrying a tag (`tag` required)
    pub async fn users_tagged(&self, params: &ReqParams) -> Result<ApiResponse<Vec<User>>> {
        params.require(&["tag"])?;
        self.get("users/tagged", params).await
    }

    /// A user's profile; the current user when `id` is unset
    pub async fn users_show(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        self.get("users/show", params).await
    }

    /// Tags of a user
    pub async fn users_tag_list(&self, params: &ReqParams) -> Result<ApiResponse<Vec<String>>> {
        self.get("users/tag_list", params).await
    }

    /// Followers of a user
    pub async fn users_followers(&self, params: &ReqParams) -> Result<ApiResponse<Vec<User>>> {
        self.get("users/followers", params).await
    }

    /// Suggested users to follow
    pub async fn users_recommendation(&self, params: &ReqParams) -> Result<ApiResponse<Vec<User>>> {
        self.get("users/recommendation", params).await
    }

    /// Hide a suggested user (`id` required)
    pub async fn users_cancel_recommendation(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        params.require(&["id"])?;
        self.post("users/cancel_recommendation", params).await
    }

    /// Users a user follows
    pub async fn users_friends(&self, params: &ReqParams) -> Result<ApiResponse<Vec<User>>> {
        self.get("users/friends", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::endpoints::test_support::{recording_client, silent_client};
    use crate::{Error, ReqParams};

    #[tokio::test]
    async fn test_users_show_without_id() {
        let (client, seen) = recording_client(200, r#"{"id":"me","screen_name":"Me"}"#);
        let response = client.users_show(&ReqParams::new()).await.unwrap();
        assert_eq!(response.data.screen_name, "Me");
        assert!(seen.lock().unwrap()[0].params.is_empty());
    }

    #[tokio::test]
    async fn test_users_tagged_requires_tag() {
        let err = silent_client().users_tagged(&ReqParams::new()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
