//! Plan purchase, plan reads and product info.

use serde_json::Value;

use super::{LightningProxies, validate};
use crate::error::Result;
use crate::model::{PlanKind, PlanOrder};

impl LightningProxies {
    /// Purchases a plan. `POST getplan/{option}`.
    #[tracing::instrument(skip(self))]
    pub async fn purchase_plan(&self, order: &PlanOrder) -> Result<Value> {
        order.validate()?;
        let payload = order.payload()?;
        let path = format!("getplan/{}", order.option());
        self.gateway.post(&path, None, Some(&payload)).await
    }

    /// Reads a plan of the given kind. `GET plan/{kind}/read/{plan_id}`.
    #[tracing::instrument(skip(self))]
    pub async fn get_proxy_info(&self, kind: PlanKind, plan_id: &str) -> Result<Value> {
        validate::require("plan_id", plan_id)?;
        let path = format!("plan/{}/read/{}", kind, plan_id);
        self.gateway.get(&path, None).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_residential_proxy_info(&self, plan_id: &str) -> Result<Value> {
        self.get_proxy_info(PlanKind::Residential, plan_id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_ipv6_proxy_info(&self, plan_id: &str) -> Result<Value> {
        self.get_proxy_info(PlanKind::Ipv6, plan_id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_datacenter_proxy_info(&self, plan_id: &str) -> Result<Value> {
        self.get_proxy_info(PlanKind::Datacenter, plan_id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_mobile_proxy_info(&self, plan_id: &str) -> Result<Value> {
        self.get_proxy_info(PlanKind::Mobile, plan_id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_isp_proxy_info(&self, plan_id: &str) -> Result<Value> {
        self.get_proxy_info(PlanKind::Isp, plan_id).await
    }

    /// Lists residential plans one page at a time. `POST plan/{page}-{limit}`.
    #[tracing::instrument(skip(self))]
    pub async fn get_residential_mass_check(&self, page: u32, limit: u32) -> Result<Value> {
        validate::positive_integer("page", page)?;
        validate::positive_integer("limit", limit)?;
        let path = format!("plan/{}-{}", page, limit);
        self.gateway.post(&path, None, None).await
    }

    /// General product information. `GET info/{plan_id}`.
    #[tracing::instrument(skip(self))]
    pub async fn get_product_info(&self, plan_id: &str) -> Result<Value> {
        validate::require("plan_id", plan_id)?;
        self.gateway.get(&format!("info/{}", plan_id), None).await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::model::{Amount, DatacenterTerm, IspRegion, Ipv6Order, PlanKind, PlanOrder};
    use crate::test_utils::client;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_purchase_isp_plan() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/getplan/ISP")
            .match_header("x-api-key", "test-key")
            .match_body(Matcher::Json(json!({"ip": "1.2.3.4", "region": "fra"})))
            .with_status(200)
            .with_body(r#"{"planId":"isp-1"}"#)
            .create_async()
            .await;

        let order = PlanOrder::Isp {
            ip: "1.2.3.4".to_string(),
            region: IspRegion::Fra,
        };
        let result = client(&server.url()).purchase_plan(&order).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result["planId"], "isp-1");
    }

    #[tokio::test]
    async fn test_purchase_residential_plan_stringifies_bandwidth() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/getplan/residential")
            .match_body(Matcher::Json(json!({"bandwidth": "10"})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let order = PlanOrder::Residential {
            bandwidth: Amount::from(10),
        };
        client(&server.url()).purchase_plan(&order).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_purchase_datacenter_and_ipv6_paths() {
        let mut server = Server::new_async().await;
        let datacenter = server
            .mock("POST", "/getplan/datacenter")
            .match_body(Matcher::Json(json!({"plan": "7"})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let ipv6 = server
            .mock("POST", "/getplan/IPv6")
            .match_body(Matcher::Json(json!({"plan": 30, "speed": 100})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let api = client(&server.url());
        api.purchase_plan(&PlanOrder::Datacenter {
            plan: DatacenterTerm::SevenDays,
        })
        .await
        .unwrap();
        api.purchase_plan(&PlanOrder::Ipv6(Ipv6Order::Unlimited {
            plan: Amount::from(30),
            speed: Amount::from(100),
        }))
        .await
        .unwrap();

        datacenter.assert_async().await;
        ipv6.assert_async().await;
    }

    #[tokio::test]
    async fn test_purchase_rejects_invalid_order_without_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let order = PlanOrder::Mobile {
            bandwidth: Amount::from(-5),
        };
        let err = client(&server.url()).purchase_plan(&order).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_get_proxy_info_paths() {
        let mut server = Server::new_async().await;
        let mut mocks = Vec::new();
        for kind in PlanKind::ALL {
            mocks.push(
                server
                    .mock("GET", format!("/plan/{}/read/p1", kind).as_str())
                    .with_status(200)
                    .with_body(format!(r#"{{"kind":"{}"}}"#, kind))
                    .create_async()
                    .await,
            );
        }

        let api = client(&server.url());
        assert_eq!(api.get_residential_proxy_info("p1").await.unwrap()["kind"], "residential");
        assert_eq!(api.get_ipv6_proxy_info("p1").await.unwrap()["kind"], "ipv6");
        assert_eq!(api.get_datacenter_proxy_info("p1").await.unwrap()["kind"], "datacenter");
        assert_eq!(api.get_mobile_proxy_info("p1").await.unwrap()["kind"], "mobile");
        assert_eq!(api.get_isp_proxy_info("p1").await.unwrap()["kind"], "isp");

        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn test_empty_plan_id_never_reaches_network() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let api = client(&server.url());
        for kind in PlanKind::ALL {
            let err = api.get_proxy_info(*kind, "").await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        assert!(api.get_residential_proxy_info("").await.is_err());
        assert!(api.get_ipv6_proxy_info("").await.is_err());
        assert!(api.get_datacenter_proxy_info("").await.is_err());
        assert!(api.get_mobile_proxy_info("").await.is_err());
        assert!(api.get_isp_proxy_info("").await.is_err());
        assert!(api.get_product_info("").await.is_err());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_mass_check() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/plan/2-50")
            .with_status(200)
            .with_body(r#"[{"planId":"a"},{"planId":"b"}]"#)
            .create_async()
            .await;

        let api = client(&server.url());
        let result = api.get_residential_mass_check(2, 50).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_mass_check_rejects_zero() {
        let api = client("http://127.0.0.1:1");
        let err = api.get_residential_mass_check(0, 10).await.unwrap_err();
        assert!(err.to_string().contains("'page'"));
        let err = api.get_residential_mass_check(1, 0).await.unwrap_err();
        assert!(err.to_string().contains("'limit'"));
    }

    #[tokio::test]
    async fn test_product_info() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/info/p9")
            .with_status(200)
            .with_body(r#"{"product":"residential"}"#)
            .create_async()
            .await;

        let result = client(&server.url()).get_product_info("p9").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, json!({"product": "residential"}));
    }

    #[tokio::test]
    async fn test_auth_and_server_errors_surface() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/info/locked")
            .with_status(401)
            .with_body("bad key")
            .create_async()
            .await;
        server
            .mock("GET", "/info/broken")
            .with_status(500)
            .with_body("server fell over")
            .create_async()
            .await;

        let api = client(&server.url());
        let auth = api.get_product_info("locked").await.unwrap_err();
        assert_eq!(auth.kind(), ErrorKind::Authentication);
        assert!(auth.to_string().contains("bad key"));

        let other = api.get_product_info("broken").await.unwrap_err();
        assert_eq!(other.kind(), ErrorKind::Api);
        assert!(other.to_string().contains("server fell over"));
    }
}
