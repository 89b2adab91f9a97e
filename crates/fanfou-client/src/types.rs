//! Fanfou API payload types

use serde::{Deserialize, Deserializer, Serialize};

/// A status (message) on a timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Status ID
    pub id: String,
    /// Numeric status ID
    #[serde(default)]
    pub rawid: u64,
    /// Message text
    pub text: String,
    /// Creation time as returned by the API
    #[serde(default)]
    pub created_at: String,
    /// Client the status was posted from (HTML)
    #[serde(default)]
    pub source: String,
    /// Whether the text was truncated
    #[serde(default)]
    pub truncated: bool,
    /// In reply to status ID
    #[serde(default)]
    pub in_reply_to_status_id: Option<String>,
    /// In reply to user ID
    #[serde(default)]
    pub in_reply_to_user_id: Option<String>,
    /// In reply to screen name
    #[serde(default)]
    pub in_reply_to_screen_name: Option<String>,
    /// Repost status ID
    #[serde(default)]
    pub repost_status_id: Option<String>,
    /// The reposted status, when this status is a repost
    #[serde(default)]
    pub repost_status: Option<Box<Status>>,
    /// Repost user ID
    #[serde(default)]
    pub repost_user_id: Option<String>,
    /// Repost screen name
    #[serde(default)]
    pub repost_screen_name: Option<String>,
    /// Whether the current user favorited this status
    #[serde(default)]
    pub favorited: bool,
    /// Author
    #[serde(default)]
    pub user: Option<User>,
    /// Attached photo
    #[serde(default)]
    pub photo: Option<Photo>,
    /// Location text
    #[serde(default)]
    pub location: Option<String>,
    /// Whether the current user posted this status
    #[serde(default)]
    pub is_self: bool,
}

/// Photo attached to a status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Page URL
    #[serde(default)]
    pub url: String,
    /// Medium-size image URL
    #[serde(default)]
    pub imageurl: String,
    /// Thumbnail URL
    #[serde(default)]
    pub thumburl: String,
    /// Full-size image URL
    #[serde(default)]
    pub largeurl: String,
}

/// A user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID (login name)
    pub id: String,
    /// Unique numeric-like ID
    #[serde(default)]
    pub unique_id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Screen name
    #[serde(default)]
    pub screen_name: String,
    /// Location
    #[serde(default)]
    pub location: String,
    /// Gender
    #[serde(default)]
    pub gender: String,
    /// Birthday
    #[serde(default)]
    pub birthday: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Profile image URL
    #[serde(default)]
    pub profile_image_url: String,
    /// Profile image URL large
    #[serde(default)]
    pub profile_image_url_large: String,
    /// URL
    #[serde(default)]
    pub url: String,
    /// Whether the profile is protected
    #[serde(default)]
    pub protected: bool,
    /// Followers count
    #[serde(default)]
    pub followers_count: u64,
    /// Friends count
    #[serde(default)]
    pub friends_count: u64,
    /// Favourites count
    #[serde(default)]
    pub favourites_count: u64,
    /// Statuses count
    #[serde(default)]
    pub statuses_count: u64,
    /// Photo count
    #[serde(default)]
    pub photo_count: u64,
    /// Whether the current user follows this user
    #[serde(default)]
    pub following: bool,
    /// Notifications
    #[serde(default)]
    pub notifications: bool,
    /// Created at
    #[serde(default)]
    pub created_at: String,
    /// UTC offset in seconds
    #[serde(default)]
    pub utc_offset: i64,
    /// Latest status, when embedded
    #[serde(default)]
    pub status: Option<Box<Status>>,
}

/// A direct message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectMessage {
    /// Message ID
    pub id: String,
    /// Message text
    pub text: String,
    /// Sender ID
    #[serde(default)]
    pub sender_id: String,
    /// Recipient ID
    #[serde(default)]
    pub recipient_id: String,
    /// Created at
    #[serde(default)]
    pub created_at: String,
    /// Sender screen name
    #[serde(default)]
    pub sender_screen_name: String,
    /// Recipient screen name
    #[serde(default)]
    pub recipient_screen_name: String,
    /// Sender
    #[serde(default)]
    pub sender: Option<User>,
    /// Recipient
    #[serde(default)]
    pub recipient: Option<User>,
    /// Message this one replies to
    #[serde(default)]
    pub in_reply_to: Option<Box<DirectMessage>>,
}

/// One entry of the conversation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Latest message in the conversation
    pub dm: DirectMessage,
    /// The other participant
    pub otherid: String,
    /// Number of messages
    #[serde(default)]
    pub msg_num: u64,
    /// Whether the conversation has unread messages
    #[serde(default)]
    pub new_conv: bool,
}

/// A saved search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    /// Search ID
    pub id: i64,
    /// Query text
    pub query: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Created at
    #[serde(default)]
    pub created_at: String,
}

/// Trending topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trends {
    /// Snapshot time
    pub as_of: String,
    /// Topics
    pub trends: Vec<Trend>,
}

/// A trending topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    /// Name
    pub name: String,
    /// Query
    pub query: String,
    /// URL
    #[serde(default)]
    pub url: String,
}

/// API rate limit counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    /// Reset time
    pub reset_time: String,
    /// Remaining hits
    pub remaining_hits: u64,
    /// Hourly limit
    pub hourly_limit: u64,
    /// Reset time in seconds
    pub reset_time_in_seconds: u64,
}

/// Unread counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Mentions
    pub mentions: u64,
    /// Direct messages
    pub direct_messages: u64,
    /// Friend requests
    pub friend_requests: u64,
}

/// Notification badge number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyNum {
    /// Operation result ("ok" on update)
    #[serde(default)]
    pub result: String,
    /// Notify num
    pub notify_num: u64,
}

/// Result of `search/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSearchResult {
    /// Total matches on the server
    pub total_number: u64,
    /// Matches on this page
    pub users: Vec<User>,
}

/// Result of `friendships/show`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Relationship
    pub relationship: RelationshipPair,
}

/// Both sides of a relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipPair {
    /// Source
    pub source: RelationshipSide,
    /// Target
    pub target: RelationshipSide,
}

/// One side of a relationship
///
/// The API encodes the flags as either JSON booleans or `"true"`/`"false"`
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipSide {
    /// ID
    pub id: String,
    /// Screen name
    #[serde(default)]
    pub screen_name: String,
    /// Following
    #[serde(default, deserialize_with = "bool_or_string")]
    pub following: bool,
    /// Followed by
    #[serde(default, deserialize_with = "bool_or_string")]
    pub followed_by: bool,
    /// Notifications enabled
    #[serde(default, deserialize_with = "bool_or_string")]
    pub notifications_enabled: bool,
    /// Blocking
    #[serde(default, deserialize_with = "bool_or_string")]
    pub blocking: bool,
}

fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => match s.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!("invalid flag: {other}"))),
        },
    }
}
