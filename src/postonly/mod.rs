//! Post-only enforcement in front of an exchange client.
//!
//! - `flags`: `POST_ONLY` and its peer flag bits, plus pure predicates over them
//! - `policy`: the gate deciding reject or forward
//! - `client`: the forwarding wrapper and the traits it forwards to
//!
//! The gate never adds the flag on the caller's behalf. Only
//! [`PostOnlyClient::submit_limit_order`] and its async twin build an order
//! themselves, and those always carry `POST_ONLY`.

mod client;
mod config;
mod flags;
mod policy;
mod types;

pub use client::{ClientInfo, PostOnlyClient, SubmitOrder, SubmitOrderAsync};
pub use config::{PostOnlyConfig, REST_HOST, RawCredentials, WSS_HOST};
pub use flags::{
    OrderFlags, POST_ONLY_FLAG, add_post_only_flag, combine_flags, has_post_only_flag,
    is_limit_order, known_flags,
};
pub use policy::{check_order, validate_order_parameters};
pub use types::{OrderRequest, OrderType};
