//! Operation façade: one method per reseller API operation.
//!
//! Each method validates its arguments, builds the endpoint path and body,
//! issues exactly one gateway call and reshapes the response where the
//! operation defines a shape.
//!
//! # Structure
//!
//! - `plans` - purchasing and reading plans, product info
//! - `whitelist` - IPv6/datacenter IP whitelists
//! - `gigabytes` - bandwidth allotment adjustments
//! - `lists` - country/state/city/ISP catalogues
//! - `credentials` - username/password rotation

mod credentials;
mod gigabytes;
mod lists;
mod plans;
mod validate;
mod whitelist;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::gateway::{DEFAULT_BASE_URL, Gateway};

/// Client for the Lightning Proxies reseller API.
#[derive(Clone)]
pub struct LightningProxies {
    gateway: Gateway,
}

impl LightningProxies {
    /// Client against the production endpoint.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        Ok(Self::from_gateway(Gateway::new(api_key, base_url)?))
    }

    /// Client over a preconfigured gateway (custom reqwest client or logger).
    pub fn from_gateway(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

/// Pulls the array stored under `field` out of a response object.
fn take_list(mut response: Value, field: &str) -> Result<Vec<Value>> {
    match response.get_mut(field).map(Value::take) {
        None | Some(Value::Null) => Err(Error::unexpected(format!(
            "Response JSON does not contain '{}'.",
            field
        ))),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(Error::unexpected(format!(
            "Response field '{}' is not a list as expected.",
            field
        ))),
    }
}
