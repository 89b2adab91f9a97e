//! `direct_messages/*` endpoints

use crate::types::{Conversation, DirectMessage};
use crate::{ApiResponse, Client, ReqParams, Result};

impl Client {
    /// Delete a direct message (`id` required)
    pub async fn direct_messages_destroy(&self, params: &ReqParams) -> Result<ApiResponse<DirectMessage>> {
        params.require(&["id"])?;
        self.post("direct_messages/destroy", params).await
    }

    /// Messages exchanged with one user (`id` required)
    pub async fn direct_messages_conversation(
        &self,
        params: &ReqParams,
    ) -> Result<ApiResponse<Vec<DirectMessage>>> {
        params.require(&["id"])?;
        self.get("direct_messages/conversation", params).await
    }

    /// Send a direct message (`user` and `text` required)
    pub async fn direct_messages_new(&self, params: &ReqParams) -> Result<ApiResponse<DirectMessage>> {
        params.require(&["user", "text"])?;
        self.post("direct_messages/new", params).await
    }

    /// Conversations of the current user
    pub async fn direct_messages_conversation_list(
        &self,
        params: &ReqParams,
    ) -> Result<ApiResponse<Vec<Conversation>>> {
        self.get("direct_messages/conversation_list", params).await
    }

    /// Received messages
    pub async fn direct_messages_inbox(&self, params: &ReqParams) -> Result<ApiResponse<Vec<DirectMessage>>> {
        self.get("direct_messages/inbox", params).await
    }

    /// Sent messages
    pub async fn direct_messages_sent(&self, params: &ReqParams) -> Result<ApiResponse<Vec<DirectMessage>>> {
        self.get("direct_messages/sent", params).await
    }
}
