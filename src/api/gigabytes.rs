//! Gigabyte allotment adjustments.
//!
//! All three plan lines share the `{action}/{plan_id}/{gb}` endpoint; they
//! differ only in which amounts they accept.

use serde_json::Value;

use super::{LightningProxies, validate};
use crate::error::Result;
use crate::model::{Action, Amount};

impl LightningProxies {
    async fn adjust_gigabytes(&self, action: Action, plan_id: &str, gb: Amount) -> Result<Value> {
        let path = format!("{}/{}/{}", action, plan_id, gb);
        self.gateway.post(&path, None, None).await
    }

    /// IPv6 plans accept whole gigabytes only.
    #[tracing::instrument(skip(self, gb))]
    pub async fn manage_ipv6_gigabyte(
        &self,
        action: Action,
        plan_id: &str,
        gb: impl Into<Amount>,
    ) -> Result<Value> {
        let gb = gb.into();
        validate::require("plan_id", plan_id)?;
        validate::whole_gigabytes(gb)?;
        self.adjust_gigabytes(action, plan_id, gb).await
    }

    /// Adding takes whole gigabytes; removing also accepts fractions (`0.15`).
    #[tracing::instrument(skip(self, gb))]
    pub async fn manage_residential_gigabyte(
        &self,
        action: Action,
        plan_id: &str,
        gb: impl Into<Amount>,
    ) -> Result<Value> {
        let gb = gb.into();
        validate::require("plan_id", plan_id)?;
        validate::gigabytes(action, gb)?;
        self.adjust_gigabytes(action, plan_id, gb).await
    }

    /// Same rules as [`LightningProxies::manage_residential_gigabyte`].
    #[tracing::instrument(skip(self, gb))]
    pub async fn manage_mobile_gigabyte(
        &self,
        action: Action,
        plan_id: &str,
        gb: impl Into<Amount>,
    ) -> Result<Value> {
        let gb = gb.into();
        validate::require("plan_id", plan_id)?;
        validate::gigabytes(action, gb)?;
        self.adjust_gigabytes(action, plan_id, gb).await
    }
}
