use std::sync::LazyLock;

use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use crate::Result;
use crate::error::Error;

pub const REST_HOST: &str = "https://api.bitfinex.com/v2";
pub const WSS_HOST: &str = "wss://api.bitfinex.com/ws/2";

static DEFAULT_REST_HOST: LazyLock<Url> =
    LazyLock::new(|| Url::parse(REST_HOST).expect("REST_HOST is a valid https url"));
static DEFAULT_WSS_HOST: LazyLock<Url> =
    LazyLock::new(|| Url::parse(WSS_HOST).expect("WSS_HOST is a valid wss url"));

/// Raw credential values typically passed from app-level bot config.
#[derive(Clone, Debug)]
pub struct RawCredentials {
    pub api_key: SecretString,
    pub api_secret: SecretString,
}

/// Credentials and hosts of the wrapped client.
///
/// The gate does not use any of this to decide anything; it is reported back
/// through [`PostOnlyClient::client_info`](crate::PostOnlyClient::client_info).
#[derive(Clone, Debug)]
pub struct PostOnlyConfig {
    pub api_key: Option<SecretString>,
    pub api_secret: Option<SecretString>,
    pub rest_host: Url,
    pub wss_host: Url,
}

impl PostOnlyConfig {
    /// Builds a config from string inputs. Blank credentials count as unset.
    pub fn from_raw(rest_host: &str, wss_host: &str, raw: RawCredentials) -> Result<Self> {
        let rest_host = Url::parse(rest_host)?;
        let wss_host = Url::parse(wss_host)?;

        Self::new(
            non_blank(raw.api_key),
            non_blank(raw.api_secret),
            rest_host,
            wss_host,
        )
    }

    pub fn new(
        api_key: Option<SecretString>,
        api_secret: Option<SecretString>,
        rest_host: Url,
        wss_host: Url,
    ) -> Result<Self> {
        match (&api_key, &api_secret) {
            (Some(_), None) => {
                return Err(Error::configuration("api key set without api secret"));
            }
            (None, Some(_)) => {
                return Err(Error::configuration("api secret set without api key"));
            }
            _ => {}
        }
        if !matches!(rest_host.scheme(), "http" | "https") {
            return Err(Error::configuration(format!(
                "rest host must be http(s), got scheme `{}`",
                rest_host.scheme()
            )));
        }
        if !matches!(wss_host.scheme(), "ws" | "wss") {
            return Err(Error::configuration(format!(
                "websocket host must be ws(s), got scheme `{}`",
                wss_host.scheme()
            )));
        }

        Ok(Self {
            api_key,
            api_secret,
            rest_host,
            wss_host,
        })
    }

    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for PostOnlyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            rest_host: DEFAULT_REST_HOST.clone(),
            wss_host: DEFAULT_WSS_HOST.clone(),
        }
    }
}

fn non_blank(secret: SecretString) -> Option<SecretString> {
    (!secret.expose_secret().trim().is_empty()).then_some(secret)
}
