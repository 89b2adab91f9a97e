//! `statuses/*` endpoints

use crate::types::{Status, User};
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Delete one of the current user's statuses (`id` required)
    pub async fn statuses_destroy(&self, params: &ReqParams) -> Result<ApiResponse<Status>> {
        params.require(&["id"])?;
        self.post("statuses/destroy", params).await
    }

    /// Timeline of the current user and the users they follow
    pub async fn statuses_home_timeline(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        self.get("statuses/home_timeline", params).await
    }

    /// Latest public statuses
    pub async fn statuses_public_timeline(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        self.get("statuses/public_timeline", params).await
    }

    /// Replies to the current user
    pub async fn statuses_replies(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        self.get("statuses/replies", params).await
    }

    /// Followers of a user, with their latest status
    pub async fn statuses_followers(&self, params: &ReqParams) -> Result<ApiResponse<Vec<User>>> {
        self.get("statuses/followers", params).await
    }

    /// Post a status (`status` required)
    ///
    /// Set `in_reply_to_status_id` to reply or `repost_status_id` to repost.
    pub async fn statuses_update(&self, params: &ReqParams) -> Result<ApiResponse<Status>> {
        params.require(&["status"])?;
        self.post("statuses/update", params).await
    }

    /// Statuses posted by a user
    pub async fn statuses_user_timeline(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        self.get("statuses/user_timeline", params).await
    }

    /// Users a user follows, with their latest status
    pub async fn statuses_friends(&self, params: &ReqParams) -> Result<ApiResponse<Vec<User>>> {
        self.get("statuses/friends", params).await
    }

    /// Conversation a status belongs to (`id` required)
    pub async fn statuses_context_timeline(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        params.require(&["id"])?;
        self.get("statuses/context_timeline", params).await
    }

    /// Statuses mentioning the current user
    pub async fn statuses_mentions(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        self.get("statuses/mentions", params).await
    }

    /// A single status (`id` required)
    pub async fn statuses_show(&self, params: &ReqParams) -> Result<ApiResponse<Status>> {
        params.require(&["id"])?;
        self.get("statuses/show", params).await
    }
}
