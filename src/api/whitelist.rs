//! IP whitelist management for IPv6 and datacenter plans.

use serde_json::Value;

use super::{LightningProxies, validate};
use crate::error::Result;
use crate::model::{Action, PlanKind};

impl LightningProxies {
    /// `POST plan/{kind}/{action}/whitelist/{plan_id}/{ip_address}`
    async fn manage_whitelist(
        &self,
        kind: PlanKind,
        action: Action,
        plan_id: &str,
        ip_address: &str,
    ) -> Result<Value> {
        validate::require("plan_id", plan_id)?;
        validate::ip_address(ip_address)?;
        let path = format!(
            "plan/{}/{}/whitelist/{}/{}",
            kind, action, plan_id, ip_address
        );
        self.gateway.post(&path, None, None).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn manage_ipv6_whitelist(
        &self,
        action: Action,
        plan_id: &str,
        ip_address: &str,
    ) -> Result<Value> {
        self.manage_whitelist(PlanKind::Ipv6, action, plan_id, ip_address)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn manage_datacenter_whitelist(
        &self,
        action: Action,
        plan_id: &str,
        ip_address: &str,
    ) -> Result<Value> {
        self.manage_whitelist(PlanKind::Datacenter, action, plan_id, ip_address)
            .await
    }
}
