use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::Result;
use crate::error::Error;
use crate::postonly::config::PostOnlyConfig;
use crate::postonly::policy;
use crate::postonly::types::OrderRequest;

/// Synchronous order submission, e.g. an authenticated REST client.
///
/// `Error` must be able to carry a gate rejection; errors the client itself
/// produces pass through the gate untouched.
pub trait SubmitOrder {
    type Response;
    type Error: From<Error>;

    fn submit_order(&self, order: OrderRequest) -> std::result::Result<Self::Response, Self::Error>;
}

/// Asynchronous order submission, e.g. a websocket `inputs` channel.
#[async_trait]
pub trait SubmitOrderAsync: Send + Sync {
    type Response;
    type Error: From<Error>;

    async fn submit_order_async(
        &self,
        order: OrderRequest,
    ) -> std::result::Result<Self::Response, Self::Error>;
}

/// Configuration summary reported by [`PostOnlyClient::client_info`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ClientInfo {
    pub api_key_set: bool,
    pub rest_host: String,
    pub wss_host: String,
    pub post_only_enforced: bool,
    pub wrapper_version: &'static str,
}

/// Wraps an exchange client and only forwards post-only `EXCHANGE LIMIT`
/// orders to it.
///
/// Implements [`SubmitOrder`] and [`SubmitOrderAsync`] whenever the wrapped
/// client does, so it can stand in wherever the client was used.
#[derive(Clone, Debug)]
pub struct PostOnlyClient<C> {
    inner: C,
    config: PostOnlyConfig,
}

impl<C> PostOnlyClient<C> {
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self::with_config(inner, PostOnlyConfig::default())
    }

    #[must_use]
    pub fn with_config(inner: C, config: PostOnlyConfig) -> Self {
        #[cfg(feature = "tracing")]
        tracing::info!(
            rest_host = %config.rest_host,
            wss_host = %config.wss_host,
            api_key_set = config.has_credentials(),
            "post-only client initialized"
        );

        Self { inner, config }
    }

    /// The wrapped client. Orders submitted through it directly skip the gate.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }

    #[must_use]
    pub fn config(&self) -> &PostOnlyConfig {
        &self.config
    }

    #[must_use]
    pub fn client_info(&self) -> ClientInfo {
        ClientInfo {
            api_key_set: self.config.has_credentials(),
            rest_host: self.config.rest_host.to_string(),
            wss_host: self.config.wss_host.to_string(),
            post_only_enforced: true,
            wrapper_version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Submits an `EXCHANGE LIMIT` order with flags set to exactly `POST_ONLY`.
    pub fn submit_limit_order<S>(
        &self,
        symbol: S,
        amount: Decimal,
        price: Decimal,
    ) -> std::result::Result<<C as SubmitOrder>::Response, <C as SubmitOrder>::Error>
    where
        C: SubmitOrder,
        S: Into<String>,
    {
        SubmitOrder::submit_order(self, OrderRequest::post_only_limit(symbol, amount, price))
    }

    /// Async counterpart of [`PostOnlyClient::submit_limit_order`].
    pub async fn submit_limit_order_async<S>(
        &self,
        symbol: S,
        amount: Decimal,
        price: Decimal,
    ) -> std::result::Result<<C as SubmitOrderAsync>::Response, <C as SubmitOrderAsync>::Error>
    where
        C: SubmitOrderAsync,
        S: Into<String>,
    {
        let order = OrderRequest::post_only_limit(symbol, amount, price);
        SubmitOrderAsync::submit_order_async(self, order).await
    }
}

impl<C: SubmitOrder> SubmitOrder for PostOnlyClient<C> {
    type Response = C::Response;
    type Error = C::Error;

    fn submit_order(&self, order: OrderRequest) -> std::result::Result<Self::Response, Self::Error> {
        admit(&order)?;
        self.inner.submit_order(order)
    }
}

#[async_trait]
impl<C: SubmitOrderAsync> SubmitOrderAsync for PostOnlyClient<C> {
    type Response = C::Response;
    type Error = C::Error;

    async fn submit_order_async(
        &self,
        order: OrderRequest,
    ) -> std::result::Result<Self::Response, Self::Error> {
        admit(&order)?;
        self.inner.submit_order_async(order).await
    }
}

fn admit(order: &OrderRequest) -> Result<()> {
    let verdict = policy::check_order(order);

    #[cfg(feature = "tracing")]
    if let Err(err) = &verdict {
        tracing::warn!(
            order_type = %order.order_type,
            symbol = %order.symbol,
            flags = ?order.flags,
            error = %err,
            "rejected order before submission"
        );
    } else {
        tracing::debug!(
            order_type = %order.order_type,
            symbol = %order.symbol,
            flags = ?order.flags,
            "submitting post-only order: {order}"
        );
    }

    verdict
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::Kind;

    #[derive(Default)]
    struct Recorder {
        sent: RefCell<Vec<OrderRequest>>,
    }

    impl SubmitOrder for Recorder {
        type Response = usize;
        type Error = Error;

        fn submit_order(&self, order: OrderRequest) -> Result<usize> {
            self.sent.borrow_mut().push(order);
            Ok(self.sent.borrow().len())
        }
    }

    #[test]
    fn forwards_accepted_order_unchanged() {
        let client = PostOnlyClient::new(Recorder::default());
        let order = OrderRequest::builder()
            .order_type("exchange limit")
            .symbol("tBTCUSD")
            .amount(dec!(0.001))
            .price(dec!(30000))
            .flags(4096 | 64)
            .cid(7)
            .build();

        let response = client.submit_order(order.clone()).expect("accepted");

        assert_eq!(response, 1);
        assert_eq!(client.inner().sent.borrow().as_slice(), [order]);
    }

    #[test]
    fn rejected_order_never_reaches_client() {
        let client = PostOnlyClient::new(Recorder::default());
        let order = OrderRequest::builder()
            .order_type("EXCHANGE LIMIT")
            .symbol("tBTCUSD")
            .amount(dec!(0.001))
            .price(dec!(30000))
            .build();

        let err = client.submit_order(order).expect_err("missing post-only");

        assert_eq!(err.kind(), Kind::PostOnlyViolation);
        assert!(client.inner().sent.borrow().is_empty(), "nothing forwarded");
    }

    #[test]
    fn client_info_reports_config() {
        let client = PostOnlyClient::new(Recorder::default());

        let info = client.client_info();

        assert!(!info.api_key_set, "default config has no key");
        assert!(info.post_only_enforced, "always enforced");
        assert_eq!(info.rest_host, "https://api.bitfinex.com/v2");
        assert_eq!(info.wss_host, "wss://api.bitfinex.com/ws/2");
        assert_eq!(info.wrapper_version, env!("CARGO_PKG_VERSION"));
    }
}
