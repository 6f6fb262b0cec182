//! Credential rotation parameters.

use crate::error::{Error, Result};

closed_set! {
    /// Plan types whose credentials can be changed.
    pub enum PlanType("plan_type") {
        Residential => "residential",
        Isp => "isp",
    }
}

closed_set! {
    /// Proxy protocol of an ISP plan.
    pub enum ProxyType("proxy_type") {
        Http => "http",
        Socks => "socks",
    }
}

/// Target plan of a credential change. ISP plans always carry a proxy type;
/// residential plans never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPlan {
    Residential,
    Isp { proxy_type: ProxyType },
}

impl CredentialPlan {
    /// Validates string inputs into a plan.
    ///
    /// `proxy_type` is required for `isp` and must be absent for `residential`.
    pub fn parse(plan_type: &str, proxy_type: Option<&str>) -> Result<Self> {
        match plan_type.parse::<PlanType>()? {
            PlanType::Isp => match proxy_type {
                Some(proxy_type) => Ok(CredentialPlan::Isp {
                    proxy_type: proxy_type.parse()?,
                }),
                None => Err(Error::invalid(
                    "Proxy type must be either 'http' or 'socks' for ISP plans.",
                )),
            },
            PlanType::Residential => match proxy_type {
                Some(_) => Err(Error::invalid(
                    "Proxy type should be omitted for residential plans.",
                )),
                None => Ok(CredentialPlan::Residential),
            },
        }
    }

    pub fn plan_type(&self) -> PlanType {
        match self {
            CredentialPlan::Residential => PlanType::Residential,
            CredentialPlan::Isp { .. } => PlanType::Isp,
        }
    }

    pub fn proxy_type(&self) -> Option<ProxyType> {
        match self {
            CredentialPlan::Residential => None,
            CredentialPlan::Isp { proxy_type } => Some(*proxy_type),
        }
    }
}
