//! `photos/*` endpoints

use crate::types::Status;
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Statuses with photos posted by a user
    pub async fn photos_user_timeline(&self, params: &ReqParams) -> Result<ApiResponse<Vec<Status>>> {
        self.get("photos/user_timeline", params).await
    }

    /// Post a status with a photo (`photo` file required)
    ///
    /// `status`, `source` and `location` are sent as text parts next to the file.
    pub async fn photos_upload(&self, params: &ReqParams) -> Result<ApiResponse<Status>> {
        let photo = params.require_file("photo")?;
        self.upload("photos/upload", "photo", photo, params).await
    }
}
