//! Credential rotation.

use serde::Serialize;
use serde_json::Value;

use super::{LightningProxies, validate};
use crate::error::Result;
use crate::model::{CredentialPlan, PlanType, ProxyType};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsChange<'a> {
    plan_type: PlanType,
    username: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    proxy_type: Option<ProxyType>,
}

impl LightningProxies {
    /// Sets a new username and password on a subscription.
    /// `POST credentials-change/{subscription_id}`.
    ///
    /// Both values must be ASCII alphanumeric; residential plans also
    /// require at least 8 characters each.
    #[tracing::instrument(skip(self, username, password))]
    pub async fn change_credentials(
        &self,
        subscription_id: &str,
        plan: CredentialPlan,
        username: &str,
        password: &str,
    ) -> Result<Value> {
        validate::require("subscription_id", subscription_id)?;
        let plan_type = plan.plan_type();
        validate::credential("Username", username, plan_type)?;
        validate::credential("Password", password, plan_type)?;

        let body = serde_json::to_value(CredentialsChange {
            plan_type,
            username,
            password,
            proxy_type: plan.proxy_type(),
        })?;
        let path = format!("credentials-change/{}", subscription_id);
        self.gateway.post(&path, None, Some(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::model::{CredentialPlan, ProxyType};
    use crate::test_utils::client;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_residential_change() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/credentials-change/sub-1")
            .match_body(Matcher::Json(json!({
                "planType": "residential",
                "username": "NewUser123",
                "password": "NewPass123"
            })))
            .with_status(200)
            .with_body(r#"{"message":"updated"}"#)
            .create_async()
            .await;

        let result = client(&server.url())
            .change_credentials("sub-1", CredentialPlan::Residential, "NewUser123", "NewPass123")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result["message"], "updated");
    }

    #[tokio::test]
    async fn test_isp_change_includes_proxy_type() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/credentials-change/sub-2")
            .match_body(Matcher::Json(json!({
                "planType": "isp",
                "username": "abc",
                "password": "xyz",
                "proxyType": "socks"
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let plan = CredentialPlan::Isp {
            proxy_type: ProxyType::Socks,
        };
        client(&server.url())
            .change_credentials("sub-2", plan, "abc", "xyz")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_short_residential_username_is_rejected() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let err = client(&server.url())
            .change_credentials("sub-1", CredentialPlan::Residential, "abc", "validpass1")
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("Username must be at least 8 characters"));
    }

    #[tokio::test]
    async fn test_non_alphanumeric_password_and_empty_subscription() {
        let api = client("http://127.0.0.1:1");
        let plan = CredentialPlan::Isp {
            proxy_type: ProxyType::Http,
        };

        let err = api
            .change_credentials("sub-1", plan, "ISPUser123", "ISP-Pass")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Password must contain only alphanumeric"));

        let err = api
            .change_credentials("", plan, "ISPUser123", "ISPPass123")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("subscription_id"));
    }

    #[test]
    fn test_isp_with_unknown_proxy_type_is_rejected() {
        let err = CredentialPlan::parse("isp", Some("ftp")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
