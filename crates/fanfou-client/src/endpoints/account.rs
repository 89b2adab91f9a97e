//! `account/*` endpoints

use crate::types::{Notification, NotifyNum, RateLimitStatus, User};
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Profile of the authenticated user
    pub async fn account_verify_credentials(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        self.get("account/verify_credentials", params).await
    }

    /// Upload a new profile image (`image` file required)
    pub async fn account_update_profile_image(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        let image = params.require_file("image")?;
        self.upload("account/update_profile_image", "image", image, params)
            .await
    }

    /// Remaining API quota
    pub async fn account_rate_limit_status(
        &self,
        params: &ReqParams,
    ) -> Result<ApiResponse<RateLimitStatus>> {
        self.get("account/rate_limit_status", params).await
    }

    /// Update profile fields (`url`, `location`, `description`, `name`, `email`)
    pub async fn account_update_profile(&self, params: &ReqParams) -> Result<ApiResponse<User>> {
        self.post("account/update_profile", params).await
    }

    /// Unread mentions, messages and follow requests
    pub async fn account_notification(&self, params: &ReqParams) -> Result<ApiResponse<Notification>> {
        self.get("account/notification", params).await
    }

    /// Set the notification badge number (`notify_num` required)
    pub async fn account_update_notify_num(&self, params: &ReqParams) -> Result<ApiResponse<NotifyNum>> {
        params.require(&["notify_num"])?;
        self.post("account/update_notify_num", params).await
    }

    /// Current notification badge number
    pub async fn account_notify_num(&self, params: &ReqParams) -> Result<ApiResponse<NotifyNum>> {
        self.get("account/notify_num", params).await
    }
}
