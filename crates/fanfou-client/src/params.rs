//! Per-call request parameters
//!
//! [`ReqParams`] carries every parameter any Fanfou endpoint accepts. Each
//! endpoint forwards the text parameters that are set; the server ignores the
//! ones it does not define. `photo` and `image` are local file paths uploaded
//! as multipart parts by the endpoints that take them.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

macro_rules! req_params {
    ($( $(#[$doc:meta])* $field:ident => $wire:literal ),* $(,)?) => {
        /// Parameters for a single API call
        ///
        /// # Examples
        /// ```
        /// use fanfou_client::ReqParams;
        ///
        /// let params = ReqParams::new().id("alice").count("20");
        /// assert_eq!(params.get("count"), Some("20"));
        /// ```
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct ReqParams {
            $( $(#[$doc])* pub $field: Option<String>, )*
            /// Photo file for `photos/upload`
            pub photo: Option<PathBuf>,
            /// Image file for `account/update_profile_image`
            pub image: Option<PathBuf>,
        }

        impl ReqParams {
            $(
                $(#[$doc])*
                pub fn $field(mut self, value: impl Into<String>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Look up a text parameter by its wire name
            pub fn get(&self, key: &str) -> Option<&str> {
                match key {
                    $( $wire => self.$field.as_deref(), )*
                    _ => None,
                }
            }

            /// All set text parameters as `(wire name, value)` pairs
            pub fn pairs(&self) -> Vec<(String, String)> {
                let mut pairs = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        pairs.push(($wire.to_string(), value.clone()));
                    }
                )*
                pairs
            }
        }
    };
}

req_params! {
    /// Target user or status ID
    id => "id",
    /// Search query
    q => "q",
    /// User tag
    tag => "tag",
    /// Only return results newer than this ID
    since_id => "since_id",
    /// Only return results older than this ID
    max_id => "max_id",
    /// Page size
    count => "count",
    /// Page number
    page => "page",
    /// Response mode ("default" or "lite")
    mode => "mode",
    /// Text format ("html" for rendered text)
    format => "format",
    /// JSONP callback
    callback => "callback",
    /// Status text
    status => "status",
    /// Status being replied to
    in_reply_to_status_id => "in_reply_to_status_id",
    /// User being replied to
    in_reply_to_user_id => "in_reply_to_user_id",
    /// Status being reposted
    repost_status_id => "repost_status_id",
    /// Client name shown as the status source
    source => "source",
    /// Location text
    location => "location",
    /// Profile URL
    url => "url",
    /// Profile name
    name => "name",
    /// Profile email
    email => "email",
    /// Profile description
    description => "description",
    /// Notification badge number
    notify_num => "notify_num",
    /// Saved search query
    query => "query",
    /// Direct message recipient
    user => "user",
    /// Direct message text
    text => "text",
    /// Direct message being replied to
    in_reply_to_id => "in_reply_to_id",
    /// First user of a friendship check
    user_a => "user_a",
    /// Second user of a friendship check
    user_b => "user_b",
    /// Relationship source user ID
    source_id => "source_id",
    /// Relationship source login name
    source_login_name => "source_login_name",
    /// Relationship target user ID
    target_id => "target_id",
    /// Relationship target login name
    target_login_name => "target_login_name",
}

impl ReqParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the photo file
    pub fn photo(mut self, path: impl Into<PathBuf>) -> Self {
        self.photo = Some(path.into());
        self
    }

    /// Set the profile image file
    pub fn image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }

    /// Fail with [`Error::Validation`] unless every named parameter is set and non-empty
    pub fn require(&self, keys: &[&str]) -> Result<()> {
        let missing: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|key| self.get(key).map_or(true, str::is_empty))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(format!(
                "missing required parameter(s): {}",
                missing.join(", ")
            )))
        }
    }

    /// Return the file path for `field`, failing if it is absent
    pub fn require_file(&self, field: &str) -> Result<&Path> {
        let path = match field {
            "photo" => self.photo.as_deref(),
            "image" => self.image.as_deref(),
            _ => None,
        };
        path.ok_or_else(|| Error::Validation(format!("missing required file: {field}")))
    }
}
