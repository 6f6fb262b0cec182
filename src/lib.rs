//! Client for the Lightning Proxies reseller API.
//!
//! [`LightningProxies`] exposes one async method per remote operation. Each
//! validates its arguments, issues a single request through the
//! [`gateway::Gateway`] and returns the parsed JSON or an [`Error`].

pub mod api;
pub mod error;
pub mod gateway;
pub mod model;

pub use api::LightningProxies;
pub use error::{Error, ErrorKind, Result};
pub use gateway::{DEFAULT_BASE_URL, Gateway, LogSink, NullLog, RequestLog};
pub use model::{
    Action, Amount, CredentialPlan, DatacenterTerm, IspRegion, Ipv6Order, PlanKind, PlanOption,
    PlanOrder, PlanType, ProxyType, PurchaseParams,
};
