//! Endpoint methods
//!
//! One method on [`Client`](crate::Client) per remote endpoint, grouped by
//! API section. Every method takes a [`ReqParams`](crate::ReqParams), checks
//! the parameters the endpoint cannot work without, and returns
//! `Result<ApiResponse<T>>` where `T` is the endpoint's payload type.
//!
//! Required parameters are checked before any network I/O and reported as
//! [`Error::Validation`](crate::Error::Validation).

mod account;
mod blocks;
mod direct_messages;
mod favorites;
mod friendships;
mod graph;
mod photos;
mod saved_searches;
mod search;
mod statuses;
mod trends;
mod users;
