use crate::Result;
use crate::error::Error;
use crate::postonly::flags::{has_post_only_flag, is_limit_order};
use crate::postonly::types::OrderRequest;

/// Decides whether `order` may be sent to the exchange.
///
/// The type is checked first, so an order that is neither `EXCHANGE LIMIT`
/// nor post-only fails as an invalid order type. The order is never modified.
pub fn check_order(order: &OrderRequest) -> Result<()> {
    if !is_limit_order(&order.order_type) {
        return Err(Error::invalid_order_type(order.order_type.as_str()));
    }
    if !has_post_only_flag(order.flags) {
        return Err(Error::post_only_violation(order.flags));
    }
    Ok(())
}

/// Sanity checks on the order's values. Independent of [`check_order`].
pub fn validate_order_parameters(order: &OrderRequest) -> Result<()> {
    if order.symbol.trim().is_empty() {
        return Err(Error::validation("Unable to build Order: symbol is empty"));
    }
    if order.amount.is_zero() {
        return Err(Error::validation("Unable to build Order: amount cannot be zero"));
    }
    if is_limit_order(&order.order_type) {
        match order.price {
            None => {
                return Err(Error::validation(
                    "Unable to build Order: price is required for limit orders",
                ));
            }
            Some(price) if price.is_zero() || price.is_sign_negative() => {
                return Err(Error::validation(format!(
                    "Unable to build Order: price must be positive, got {price}"
                )));
            }
            Some(_) => {}
        }
    }
    Ok(())
}
