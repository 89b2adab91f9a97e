//! `friendships/*` endpoints

use crate::types::{Relationship, User};
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Follow a user (`id` required)
    pub async fn friendships_create(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        params.require(&["id"])?;
        self.post("friendships/create", params).await
    }

    /// Unfollow a user (`id` required)
    pub async fn friendships_destroy(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        params.require(&["id"])?;
        self.post("friendships/destroy", params).await
    }

    /// Pending follow requests
    pub async fn friendships_requests(&self, params: &ReqParams) -> Result<ApiResponse<Vec<User>>> {
        self.get("friendships/requests", params).await
    }

    /// Reject a follow request (`id` required)
    pub async fn friendships_deny(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        params.require(&["id"])?;
        self.post("friendships/deny", params).await
    }

    /// Whether `user_a` follows `user_b` (both required)
    ///
    /// This is the boolean endpoint: convert the result with
    /// [`Outcome::from`](crate::Outcome) and read
    /// [`Outcome::flag`](crate::Outcome::flag) to get `false` on any failure.
    pub async fn friendships_exists(&self, params: &ReqParams) -> Result<ApiResponse<bool>> {
        params.require(&["user_a", "user_b"])?;
        self.get("friendships/exists", params).await
    }

    /// Accept a follow request (`id` required)
    pub async fn friendships_accept(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        params.require(&["id"])?;
        self.post("friendships/accept", params).await
    }

    /// Relationship between two users
    pub async fn friendships_show(&self, params: &ReqParams) -> Result<ApiResponse<Relationship>> {
        self.get("friendships/show", params).await
    }
}
