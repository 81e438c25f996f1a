//! Post-only order gate for Bitfinex exchange clients.
//!
//! [`PostOnlyClient`] wraps any client that implements [`SubmitOrder`] and/or
//! [`SubmitOrderAsync`] and refuses, before anything reaches the exchange,
//! every order that is not an `EXCHANGE LIMIT` order carrying the
//! [`POST_ONLY`](OrderFlags::POST_ONLY) flag (`4096`). Accepted orders are
//! forwarded exactly as the caller built them; the gate never rewrites a
//! parameter.
//!
//! ```
//! use bfx_postonly::{OrderRequest, PostOnlyClient, SubmitOrder};
//! use rust_decimal::Decimal;
//!
//! struct Echo;
//!
//! impl SubmitOrder for Echo {
//!     type Response = OrderRequest;
//!     type Error = bfx_postonly::Error;
//!
//!     fn submit_order(&self, order: OrderRequest) -> bfx_postonly::Result<OrderRequest> {
//!         Ok(order)
//!     }
//! }
//!
//! let client = PostOnlyClient::new(Echo);
//! let sent = client
//!     .submit_limit_order("tBTCUSD", Decimal::new(1, 3), Decimal::from(30_000))
//!     .unwrap();
//! assert_eq!(sent.flags, Some(4096));
//!
//! let market = OrderRequest::builder()
//!     .order_type("EXCHANGE MARKET")
//!     .symbol("tBTCUSD")
//!     .amount(Decimal::ONE)
//!     .build();
//! assert!(client.submit_order(market).is_err());
//! ```

pub mod error;
pub mod postonly;

pub use error::Error;
pub use postonly::{
    ClientInfo, OrderFlags, OrderRequest, OrderType, POST_ONLY_FLAG, PostOnlyClient,
    PostOnlyConfig, RawCredentials, SubmitOrder, SubmitOrderAsync, add_post_only_flag,
    check_order, combine_flags, has_post_only_flag, is_limit_order, known_flags,
    validate_order_parameters,
};

pub type Result<T> = std::result::Result<T, Error>;
