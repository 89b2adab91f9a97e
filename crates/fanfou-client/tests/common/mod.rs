//! Shared fixtures for the endpoint contract tests
//!
//! `endpoints()` is the table of every client endpoint: wire method and path,
//! a well-formed 200 body, and a function that calls the endpoint and reduces
//! its result to a [`Probe`].

#![allow(dead_code)]

use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use bytes::Bytes;
use fanfou_client::{
    AccessToken, ApiResponse, Client, ClientConfig, ConsumerCredentials, Error, Outcome,
    ReqParams, Result,
};
use tempfile::NamedTempFile;

pub const CONSUMER_KEY: &str = "CK";
pub const CONSUMER_SECRET: &str = "CS";
pub const ACCESS_TOKEN: &str = "AT";
pub const ACCESS_SECRET: &str = "AS";

pub const STATUS: &str = r#"{"id":"s1","rawid":1,"text":"hello","created_at":"Sat Jun 02 10:00:00 +0000 2018","user":{"id":"alice"}}"#;
pub const STATUSES: &str = r#"[{"id":"s1","text":"hello"},{"id":"s2","text":"world"}]"#;
pub const USER: &str = r#"{"id":"alice","name":"Alice","screen_name":"Alice"}"#;
pub const USERS: &str = r#"[{"id":"alice"},{"id":"bob"}]"#;
pub const IDS: &str = r#"["alice","bob"]"#;
pub const DM: &str = r#"{"id":"m1","text":"hi","sender_id":"alice","recipient_id":"bob"}"#;
pub const DMS: &str = r#"[{"id":"m1","text":"hi"}]"#;
pub const CONVERSATIONS: &str = r#"[{"dm":{"id":"m1","text":"hi"},"otherid":"bob","msg_num":1,"new_conv":true}]"#;
pub const SAVED_SEARCH: &str = r#"{"id":7,"query":"rust","name":"rust"}"#;
pub const SAVED_SEARCHES: &str = r#"[{"id":7,"query":"rust"}]"#;
pub const TRENDS: &str = r#"{"as_of":"Sat Jun 02 10:00:00 +0000 2018","trends":[{"name":"rust","query":"rust","url":"http://fanfou.com/q/rust"}]}"#;
pub const RATE_LIMIT: &str = r#"{"reset_time":"Sat Jun 02 11:00:00 +0000 2018","remaining_hits":150,"hourly_limit":150,"reset_time_in_seconds":1527937200}"#;
pub const NOTIFICATION: &str = r#"{"mentions":1,"direct_messages":2,"friend_requests":0}"#;
pub const NOTIFY_NUM: &str = r#"{"result":"ok","notify_num":3}"#;
pub const USER_SEARCH: &str = r#"{"total_number":1,"users":[{"id":"alice"}]}"#;
pub const RELATIONSHIP: &str = r#"{"relationship":{"source":{"id":"alice","following":"true"},"target":{"id":"bob","followed_by":"true"}}}"#;
pub const FLAG: &str = "true";

pub const CLIENT_ERROR: &str = r#"{"request":"/mock.json","error":"bad request"}"#;
pub const SERVER_ERROR: &str = r#"{"request":"/mock.json","error":"internal server error"}"#;
/// Truncated JSON
pub const CHAOS_TRUNCATED: &str = r#"{"id": "s1", "text": "#;
/// Valid JSON of the wrong shape for every endpoint
pub const CHAOS_WRONG_SHAPE: &str = r#"{"unexpected": true}"#;

/// A call result reduced to the shape every endpoint shares
#[derive(Debug)]
pub struct Probe {
    pub has_result: bool,
    /// `Outcome::flag()` for the boolean endpoint, `None` elsewhere
    pub flag: Option<bool>,
    pub raw: Option<Bytes>,
    pub error: Option<Error>,
}

impl Probe {
    pub fn payload<T>(result: Result<ApiResponse<T>>) -> Self {
        let outcome = Outcome::from(result);
        Self {
            has_result: outcome.result.is_some(),
            flag: None,
            raw: outcome.raw,
            error: outcome.error,
        }
    }

    pub fn flag(result: Result<ApiResponse<bool>>) -> Self {
        let outcome = Outcome::from(result);
        Self {
            has_result: outcome.result.is_some(),
            flag: Some(outcome.flag()),
            raw: outcome.raw,
            error: outcome.error,
        }
    }
}

pub type Call = for<'a> fn(&'a Client, &'a ReqParams) -> Pin<Box<dyn Future<Output = Probe> + 'a>>;

/// One row of the endpoint table
pub struct Endpoint {
    pub name: &'static str,
    pub method: &'static str,
    /// Wire path for `full_params()`
    pub path: &'static str,
    pub ok_body: &'static str,
    /// Whether the endpoint rejects an empty `ReqParams`
    pub has_required: bool,
    pub call: Call,
}

impl Endpoint {
    pub fn is_boolean(&self) -> bool {
        self.name == "friendships_exists"
    }
}

macro_rules! endpoint {
    ($kind:ident, $name:ident, $method:literal, $path:literal, $body:expr, $required:expr) => {
        Endpoint {
            name: stringify!($name),
            method: $method,
            path: $path,
            ok_body: $body,
            has_required: $required,
            call: {
                fn call<'a>(
                    client: &'a Client,
                    params: &'a ReqParams,
                ) -> Pin<Box<dyn Future<Output = Probe> + 'a>> {
                    Box::pin(async move { Probe::$kind(client.$name(params).await) })
                }
                call
            },
        }
    };
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint!(payload, search_public_timeline, "GET", "/search/public_timeline.json", STATUSES, true),
        endpoint!(payload, search_users, "GET", "/search/users.json", USER_SEARCH, true),
        endpoint!(payload, search_user_timeline, "GET", "/search/user_timeline.json", STATUSES, true),
        endpoint!(payload, blocks_ids, "GET", "/blocks/ids.json", IDS, false),
        endpoint!(payload, blocks_blocking, "GET", "/blocks/blocking.json", USERS, false),
        endpoint!(payload, blocks_create, "POST", "/blocks/create.json", USER, true),
        endpoint!(payload, blocks_exists, "GET", "/blocks/exists.json", USER, true),
        endpoint!(payload, blocks_destroy, "POST", "/blocks/destroy.json", USER, true),
        endpoint!(payload, users_tagged, "GET", "/users/tagged.json", USERS, true),
        endpoint!(payload, users_show, "GET", "/users/show.json", USER, false),
        endpoint!(payload, users_tag_list, "GET", "/users/tag_list.json", IDS, false),
        endpoint!(payload, users_followers, "GET", "/users/followers.json", USERS, false),
        endpoint!(payload, users_recommendation, "GET", "/users/recommendation.json", USERS, false),
        endpoint!(payload, users_cancel_recommendation, "POST", "/users/cancel_recommendation.json", USER, true),
        endpoint!(payload, users_friends, "GET", "/users/friends.json", USERS, false),
        endpoint!(payload, account_verify_credentials, "GET", "/account/verify_credentials.json", USER, false),
        endpoint!(payload, account_update_profile_image, "POST", "/account/update_profile_image.json", USER, true),
        endpoint!(payload, account_rate_limit_status, "GET", "/account/rate_limit_status.json", RATE_LIMIT, false),
        endpoint!(payload, account_update_profile, "POST", "/account/update_profile.json", USER, false),
        endpoint!(payload, account_notification, "GET", "/account/notification.json", NOTIFICATION, false),
        endpoint!(payload, account_update_notify_num, "POST", "/account/update_notify_num.json", NOTIFY_NUM, true),
        endpoint!(payload, account_notify_num, "GET", "/account/notify_num.json", NOTIFY_NUM, false),
        endpoint!(payload, saved_searches_create, "POST", "/saved_searches/create.json", SAVED_SEARCH, true),
        endpoint!(payload, saved_searches_destroy, "POST", "/saved_searches/destroy.json", SAVED_SEARCH, true),
        endpoint!(payload, saved_searches_show, "GET", "/saved_searches/show.json", SAVED_SEARCH, true),
        endpoint!(payload, saved_searches_list, "GET", "/saved_searches/list.json", SAVED_SEARCHES, false),
        endpoint!(payload, photos_user_timeline, "GET", "/photos/user_timeline.json", STATUSES, false),
        endpoint!(payload, photos_upload, "POST", "/photos/upload.json", STATUS, true),
        endpoint!(payload, trends_list, "GET", "/trends/list.json", TRENDS, false),
        endpoint!(payload, followers_ids, "GET", "/followers/ids.json", IDS, false),
        endpoint!(payload, friends_ids, "GET", "/friends/ids.json", IDS, false),
        endpoint!(payload, favorites_destroy, "POST", "/favorites/destroy/s1.json", STATUS, true),
        endpoint!(payload, favorites, "GET", "/favorites/id.json", STATUSES, false),
        endpoint!(payload, favorites_create, "POST", "/favorites/create/s1.json", STATUS, true),
        endpoint!(payload, friendships_create, "POST", "/friendships/create.json", USER, true),
        endpoint!(payload, friendships_destroy, "POST", "/friendships/destroy.json", USER, true),
        endpoint!(payload, friendships_requests, "GET", "/friendships/requests.json", USERS, false),
        endpoint!(payload, friendships_deny, "POST", "/friendships/deny.json", USER, true),
        endpoint!(flag, friendships_exists, "GET", "/friendships/exists.json", FLAG, true),
        endpoint!(payload, friendships_accept, "POST", "/friendships/accept.json", USER, true),
        endpoint!(payload, friendships_show, "GET", "/friendships/show.json", RELATIONSHIP, false),
        endpoint!(payload, statuses_destroy, "POST", "/statuses/destroy.json", STATUS, true),
        endpoint!(payload, statuses_home_timeline, "GET", "/statuses/home_timeline.json", STATUSES, false),
        endpoint!(payload, statuses_public_timeline, "GET", "/statuses/public_timeline.json", STATUSES, false),
        endpoint!(payload, statuses_replies, "GET", "/statuses/replies.json", STATUSES, false),
        endpoint!(payload, statuses_followers, "GET", "/statuses/followers.json", USERS, false),
        endpoint!(payload, statuses_update, "POST", "/statuses/update.json", STATUS, true),
        endpoint!(payload, statuses_user_timeline, "GET", "/statuses/user_timeline.json", STATUSES, false),
        endpoint!(payload, statuses_friends, "GET", "/statuses/friends.json", USERS, false),
        endpoint!(payload, statuses_context_timeline, "GET", "/statuses/context_timeline.json", STATUSES, true),
        endpoint!(payload, statuses_mentions, "GET", "/statuses/mentions.json", STATUSES, false),
        endpoint!(payload, statuses_show, "GET", "/statuses/show.json", STATUS, true),
        endpoint!(payload, direct_messages_destroy, "POST", "/direct_messages/destroy.json", DM, true),
        endpoint!(payload, direct_messages_conversation, "GET", "/direct_messages/conversation.json", DMS, true),
        endpoint!(payload, direct_messages_new, "POST", "/direct_messages/new.json", DM, true),
        endpoint!(payload, direct_messages_conversation_list, "GET", "/direct_messages/conversation_list.json", CONVERSATIONS, false),
        endpoint!(payload, direct_messages_inbox, "GET", "/direct_messages/inbox.json", DMS, false),
        endpoint!(payload, direct_messages_sent, "GET", "/direct_messages/sent.json", DMS, false),
    ]
}

/// Install a test log subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Authorized client pointed at `base_url`
pub fn client(base_url: &str) -> Client {
    init_tracing();
    Client::with_config(
        ConsumerCredentials::new(CONSUMER_KEY, CONSUMER_SECRET),
        ClientConfig::new(base_url),
    )
    .authorize(AccessToken::new(ACCESS_TOKEN, ACCESS_SECRET))
    .expect("test credentials are valid")
}

/// Upload fixture on disk
pub fn upload_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(b"\x89PNG fake image").expect("write temp file");
    file
}

/// Parameters satisfying every endpoint's requirements
pub fn full_params(upload: &NamedTempFile) -> ReqParams {
    ReqParams::new()
        .id("s1")
        .q("rust")
        .tag("dev")
        .status("hello fanfou")
        .notify_num("3")
        .query("rust")
        .user("bob")
        .text("hi bob")
        .user_a("alice")
        .user_b("bob")
        .photo(upload.path())
        .image(upload.path())
}
