use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

use crate::postonly::POST_ONLY_FLAG;

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Malformed input caught locally, e.g. an unknown flag name
    Validation,
    /// Order type other than `EXCHANGE LIMIT`
    InvalidOrderType,
    /// Flags without the `POST_ONLY` bit
    PostOnlyViolation,
    /// Bad credentials or host configuration
    Configuration,
}

/// Error raised by the gate and its helpers.
///
/// The typed payload behind a kind is recoverable with [`Error::downcast_ref`].
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    #[must_use]
    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let source = self.source.as_deref()?;
        source.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(reason: S) -> Self {
        Validation {
            reason: reason.into(),
        }
        .into()
    }

    pub fn invalid_order_type<S: Into<String>>(order_type: S) -> Self {
        InvalidOrderType {
            order_type: order_type.into(),
        }
        .into()
    }

    #[must_use]
    pub fn post_only_violation(flags: Option<u32>) -> Self {
        PostOnlyViolation { flags }.into()
    }

    pub fn configuration<S: Into<String>>(reason: S) -> Self {
        Configuration {
            reason: reason.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

/// The rejected order type, exactly as the caller supplied it.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidOrderType {
    pub order_type: String,
}

impl fmt::Display for InvalidOrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "order type `{}` is not allowed; only EXCHANGE LIMIT orders may be submitted",
            self.order_type
        )
    }
}

impl StdError for InvalidOrderType {}

/// The flags observed on the rejected order; `None` when the order carried none.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PostOnlyViolation {
    pub flags: Option<u32>,
}

impl fmt::Display for PostOnlyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flags {
            Some(flags) => write!(
                f,
                "flags {flags} do not include POST_ONLY ({POST_ONLY_FLAG})"
            ),
            None => write!(f, "order has no flags; POST_ONLY ({POST_ONLY_FLAG}) is required"),
        }
    }
}

impl StdError for PostOnlyViolation {}

#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Configuration {
    pub reason: String,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "configuration error: {}", self.reason)
    }
}

impl StdError for Configuration {}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<InvalidOrderType> for Error {
    fn from(err: InvalidOrderType) -> Self {
        Error::with_source(Kind::InvalidOrderType, err)
    }
}

impl From<PostOnlyViolation> for Error {
    fn from(err: PostOnlyViolation) -> Self {
        Error::with_source(Kind::PostOnlyViolation, err)
    }
}

impl From<Configuration> for Error {
    fn from(err: Configuration) -> Self {
        Error::with_source(Kind::Configuration, err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(Kind::Configuration, err)
    }
}
