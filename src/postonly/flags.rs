use bitflags::bitflags;

use crate::Result;
use crate::error::Error;

/// Bitfinex `POST_ONLY` flag value (`0x1000`).
pub const POST_ONLY_FLAG: u32 = 4096;

const EXCHANGE_LIMIT: &str = "EXCHANGE LIMIT";

bitflags! {
    /// Order flags understood by the Bitfinex v2 order endpoints.
    ///
    /// Bits outside the named set are kept as-is, so an arbitrary bitmask
    /// survives a trip through this type.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct OrderFlags: u32 {
        const HIDDEN = 64;
        const CLOSE = 512;
        const REDUCE_ONLY = 1024;
        const POST_ONLY = POST_ONLY_FLAG;
        const OCO = 16_384;
        const NO_VWR = 262_144;
        const NO_VAR_RATES = 524_288;
    }
}

/// Whether `order_type` names the exchange limit order, ignoring ASCII case.
///
/// Whitespace is significant: the gate forwards the type string as given, so
/// a padded type must not pass.
#[must_use]
pub fn is_limit_order(order_type: &str) -> bool {
    order_type.eq_ignore_ascii_case(EXCHANGE_LIMIT)
}

/// Whether the `POST_ONLY` bit is set. Absent flags count as zero.
#[must_use]
pub fn has_post_only_flag(flags: Option<u32>) -> bool {
    OrderFlags::from_bits_retain(flags.unwrap_or_default()).contains(OrderFlags::POST_ONLY)
}

/// Returns `flags` with the `POST_ONLY` bit set.
///
/// Meant for callers building their own orders; the gate never calls this.
#[must_use]
pub fn add_post_only_flag(flags: Option<u32>) -> u32 {
    (OrderFlags::from_bits_retain(flags.unwrap_or_default()) | OrderFlags::POST_ONLY).bits()
}

/// ORs together the named flags, e.g. `["hidden", "POST_ONLY"]` gives `4160`.
pub fn combine_flags<I, S>(names: I) -> Result<u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .try_fold(OrderFlags::empty(), |combined, name| {
            let name = name.as_ref();
            OrderFlags::from_name(&name.trim().to_ascii_uppercase())
                .map(|flag| combined | flag)
                .ok_or_else(|| Error::validation(format!("unknown order flag `{name}`")))
        })
        .map(|combined| combined.bits())
}

/// Name/value pairs of every named flag.
pub fn known_flags() -> impl Iterator<Item = (&'static str, u32)> {
    OrderFlags::all()
        .iter_names()
        .map(|(name, flag)| (name, flag.bits()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Kind, Validation};

    #[test]
    fn limit_order_detection() {
        assert!(is_limit_order("EXCHANGE LIMIT"), "canonical spelling");
        assert!(is_limit_order("exchange limit"), "lower case");
        assert!(is_limit_order("Exchange Limit"), "mixed case");

        assert!(!is_limit_order("LIMIT"), "margin limit is not allowed");
        assert!(!is_limit_order("EXCHANGE MARKET"), "market");
        assert!(!is_limit_order("EXCHANGE STOP LIMIT"), "stop limit");
        assert!(!is_limit_order("STOP"), "stop");
        assert!(!is_limit_order(""), "empty");
        assert!(!is_limit_order("EXCHANGE  LIMIT"), "inner spacing is not normalized");
        assert!(!is_limit_order(" exchange limit\n"), "padded type");
        assert!(!is_limit_order("EXCHANGE LIMIT "), "trailing space");
    }

    #[test]
    fn post_only_detection() {
        assert!(has_post_only_flag(Some(4096)), "bare post-only");
        assert!(has_post_only_flag(Some(4096 | 64)), "post-only + hidden");
        assert!(has_post_only_flag(Some(u32::MAX)), "every bit");

        assert!(!has_post_only_flag(Some(64)), "hidden only");
        assert!(!has_post_only_flag(Some(0)), "zero");
        assert!(!has_post_only_flag(None), "absent");
    }

    #[test]
    fn add_post_only_keeps_existing_bits() {
        assert_eq!(add_post_only_flag(None), 4096);
        assert_eq!(add_post_only_flag(Some(0)), 4096);
        assert_eq!(add_post_only_flag(Some(64)), 4096 | 64);
        assert_eq!(add_post_only_flag(Some(4096)), 4096);
        assert_eq!(add_post_only_flag(Some(1 << 30)), (1 << 30) | 4096);
    }

    #[test]
    fn combine_named_flags() {
        assert_eq!(combine_flags(["POST_ONLY"]).expect("known flag"), 4096);
        assert_eq!(
            combine_flags(["hidden", "post_only"]).expect("known flags"),
            64 | 4096
        );
        assert_eq!(
            combine_flags(["POST_ONLY", "POST_ONLY"]).expect("repeated flag"),
            4096
        );
        assert_eq!(combine_flags(["no_vwr"]).expect("known flag"), 262_144);
        assert_eq!(
            combine_flags(["NO_VWR", "POST_ONLY"]).expect("known flags"),
            262_144 | 4096
        );
        assert_eq!(combine_flags(Vec::<&str>::new()).expect("no flags"), 0);
    }

    #[test]
    fn combine_rejects_unknown_names() {
        let err = combine_flags(["HIDDEN", "INVALID_FLAG"]).expect_err("unknown flag");

        assert_eq!(err.kind(), Kind::Validation);
        let reason = &err
            .downcast_ref::<Validation>()
            .expect("validation payload")
            .reason;
        assert!(reason.contains("INVALID_FLAG"), "reason names the flag: {reason}");
    }

    #[test]
    fn known_flag_table() {
        let table: Vec<_> = known_flags().collect();

        assert_eq!(
            table,
            vec![
                ("HIDDEN", 64),
                ("CLOSE", 512),
                ("REDUCE_ONLY", 1024),
                ("POST_ONLY", 4096),
                ("OCO", 16_384),
                ("NO_VWR", 262_144),
                ("NO_VAR_RATES", 524_288),
            ]
        );
    }
}
