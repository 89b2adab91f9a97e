//! Fanfou SDK
//!
//! Re-exports the [`fanfou_client`] crate under a single name.

pub use fanfou_client::*;
