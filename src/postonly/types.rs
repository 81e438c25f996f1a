use std::fmt;
use std::str::FromStr;

use bon::Builder;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::Value;
use strum_macros::Display;

use crate::Result;
use crate::error::Error;
use crate::postonly::flags::{OrderFlags, has_post_only_flag};

const TIF_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Bitfinex v2 order types.
///
/// The un-prefixed variants trade on margin; the `Exchange*` variants trade
/// from the exchange wallet.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum OrderType {
    #[strum(serialize = "LIMIT")]
    Limit,
    #[strum(serialize = "MARKET")]
    Market,
    #[strum(serialize = "STOP")]
    Stop,
    #[strum(serialize = "STOP LIMIT")]
    StopLimit,
    #[strum(serialize = "TRAILING STOP")]
    TrailingStop,
    #[strum(serialize = "FOK")]
    Fok,
    #[strum(serialize = "IOC")]
    Ioc,
    #[strum(serialize = "EXCHANGE LIMIT")]
    ExchangeLimit,
    #[strum(serialize = "EXCHANGE MARKET")]
    ExchangeMarket,
    #[strum(serialize = "EXCHANGE STOP")]
    ExchangeStop,
    #[strum(serialize = "EXCHANGE STOP LIMIT")]
    ExchangeStopLimit,
    #[strum(serialize = "EXCHANGE TRAILING STOP")]
    ExchangeTrailingStop,
    #[strum(serialize = "EXCHANGE FOK")]
    ExchangeFok,
    #[strum(serialize = "EXCHANGE IOC")]
    ExchangeIoc,
}

impl OrderType {
    pub fn parse(value: &str) -> Result<OrderType> {
        match value.trim().to_ascii_uppercase().as_str() {
            "LIMIT" => Ok(OrderType::Limit),
            "MARKET" => Ok(OrderType::Market),
            "STOP" => Ok(OrderType::Stop),
            "STOP LIMIT" => Ok(OrderType::StopLimit),
            "TRAILING STOP" => Ok(OrderType::TrailingStop),
            "FOK" => Ok(OrderType::Fok),
            "IOC" => Ok(OrderType::Ioc),
            "EXCHANGE LIMIT" => Ok(OrderType::ExchangeLimit),
            "EXCHANGE MARKET" => Ok(OrderType::ExchangeMarket),
            "EXCHANGE STOP" => Ok(OrderType::ExchangeStop),
            "EXCHANGE STOP LIMIT" => Ok(OrderType::ExchangeStopLimit),
            "EXCHANGE TRAILING STOP" => Ok(OrderType::ExchangeTrailingStop),
            "EXCHANGE FOK" => Ok(OrderType::ExchangeFok),
            "EXCHANGE IOC" => Ok(OrderType::ExchangeIoc),
            other => Err(Error::validation(format!("unknown order type `{other}`"))),
        }
    }
}

impl FromStr for OrderType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OrderType::parse(s)
    }
}

/// Parameters of a single order submission, in the shape of the Bitfinex v2
/// `submit order` body.
///
/// `order_type` stays a plain string so that a rejected order reports the
/// exact text the caller sent.
#[non_exhaustive]
#[derive(Builder, Clone, Debug, PartialEq, Serialize)]
pub struct OrderRequest {
    #[serde(rename = "type")]
    #[builder(into)]
    pub order_type: String,
    #[builder(into)]
    pub symbol: String,
    /// Positive buys, negative sells.
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lev: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_trailing: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_aux_limit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_oco_stop: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<u64>,
    /// Auto-cancel time, sent as `YYYY-MM-DD HH:MM:SS` UTC.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_tif"
    )]
    pub tif: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl OrderRequest {
    /// An `EXCHANGE LIMIT` order whose flags are exactly `POST_ONLY`.
    #[must_use]
    pub fn post_only_limit<S: Into<String>>(symbol: S, amount: Decimal, price: Decimal) -> Self {
        OrderRequest::builder()
            .order_type(OrderType::ExchangeLimit.to_string())
            .symbol(symbol)
            .amount(amount)
            .price(price)
            .flags(OrderFlags::POST_ONLY.bits())
            .build()
    }
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} order for {}: amount={}",
            self.order_type, self.symbol, self.amount
        )?;
        match self.price {
            Some(price) => write!(f, ", price={price}")?,
            None => f.write_str(", price=none")?,
        }
        let status = if has_post_only_flag(self.flags) {
            "POST_ONLY"
        } else {
            "NOT POST_ONLY"
        };
        write!(f, ", flags={} ({status})", self.flags.unwrap_or_default())
    }
}

fn serialize_tif<S: Serializer>(
    tif: &Option<DateTime<Utc>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match tif {
        Some(tif) => serializer.collect_str(&tif.format(TIF_FORMAT)),
        None => serializer.serialize_none(),
    }
}
