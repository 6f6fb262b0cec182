//! Location and ISP catalogues.

use serde::Serialize;
use serde_json::Value;

use super::{LightningProxies, take_list, validate};
use crate::error::{Error, Result};

#[derive(Serialize)]
struct LocationQuery {
    country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
}

impl LocationQuery {
    fn body(country_code: &str, state: Option<&str>) -> Result<Value> {
        validate::require("country_code", country_code)?;
        if let Some(state) = state {
            validate::require("state", state)?;
        }
        let query = LocationQuery {
            country_code: country_code.to_lowercase(),
            state: state.map(str::to_lowercase),
        };
        Ok(serde_json::to_value(query)?)
    }
}

impl LightningProxies {
    /// Countries available for residential proxies.
    #[tracing::instrument(skip(self))]
    pub async fn get_residential_countries(&self) -> Result<Vec<Value>> {
        let response = self.gateway.post("getlist/country_list", None, None).await?;
        take_list(response, "country_list")
    }

    /// States of a country. `country_code` is sent lower-cased.
    #[tracing::instrument(skip(self))]
    pub async fn get_residential_states(&self, country_code: &str) -> Result<Vec<Value>> {
        let body = LocationQuery::body(country_code, None)?;
        let response = self
            .gateway
            .post("getlist/state_list", None, Some(&body))
            .await?;
        take_list(response, "state_list")
    }

    /// Cities of a state. Both inputs are sent lower-cased.
    #[tracing::instrument(skip(self))]
    pub async fn get_residential_cities(
        &self,
        country_code: &str,
        state: &str,
    ) -> Result<Vec<Value>> {
        let body = LocationQuery::body(country_code, Some(state))?;
        let response = self
            .gateway
            .post("getlist/city_list", None, Some(&body))
            .await?;
        take_list(response, "city_list")
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_residential_isp_list(&self, country_code: &str) -> Result<Vec<Value>> {
        let body = LocationQuery::body(country_code, None)?;
        let response = self
            .gateway
            .post("getlist/isp_list", None, Some(&body))
            .await?;
        take_list(response, "isp_list")
    }

    /// Countries available for mobile proxies. The endpoint answers with a
    /// bare array.
    #[tracing::instrument(skip(self))]
    pub async fn get_mobile_countries(&self) -> Result<Vec<Value>> {
        match self.gateway.post("getlist/mobile/country", None, None).await? {
            Value::Array(items) => Ok(items),
            _ => Err(Error::unexpected("Response JSON is not a list as expected.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorKind};
    use crate::test_utils::client;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_countries_returned_unchanged() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/getlist/country_list")
            .with_status(200)
            .with_body(r#"{"country_list":[{"country_name":"US","country_code":"us"}]}"#)
            .create_async()
            .await;

        let countries = client(&server.url()).get_residential_countries().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            countries,
            vec![json!({"country_name": "US", "country_code": "us"})]
        );
    }

    #[tokio::test]
    async fn test_countries_missing_field() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/getlist/country_list")
            .with_status(200)
            .with_body(r#"{"countries":[]}"#)
            .create_async()
            .await;

        let err = client(&server.url())
            .get_residential_countries()
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.to_string().contains("country_list"));
    }

    #[tokio::test]
    async fn test_states_lowercases_country_code() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/getlist/state_list")
            .match_body(Matcher::Json(json!({"country_code": "us"})))
            .with_status(200)
            .with_body(r#"{"state_list":[{"code":"arizona"}]}"#)
            .create_async()
            .await;

        let states = client(&server.url())
            .get_residential_states("US")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(states[0]["code"], "arizona");
    }

    #[tokio::test]
    async fn test_cities_lowercases_both_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/getlist/city_list")
            .match_body(Matcher::Json(
                json!({"country_code": "us", "state": "arizona"}),
            ))
            .with_status(200)
            .with_body(r#"{"city_list":[{"code":"phoenix"}]}"#)
            .create_async()
            .await;

        let cities = client(&server.url())
            .get_residential_cities("Us", "Arizona")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(cities.len(), 1);
    }

    #[tokio::test]
    async fn test_isp_list() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/getlist/isp_list")
            .match_body(Matcher::Json(json!({"country_code": "de"})))
            .with_status(200)
            .with_body(r#"{"isp_list":[{"name":"Telekom","asn":3320,"country":"de"}]}"#)
            .create_async()
            .await;

        let isps = client(&server.url())
            .get_residential_isp_list("DE")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(isps[0]["asn"], 3320);
    }

    #[tokio::test]
    async fn test_empty_location_inputs_never_reach_network() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let api = client(&server.url());
        assert_eq!(
            api.get_residential_states("").await.unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(api.get_residential_cities("us", "").await.is_err());
        assert!(api.get_residential_isp_list("").await.is_err());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_mobile_countries_requires_array() {
        let mut server = Server::new_async().await;
        let list = server
            .mock("POST", "/getlist/mobile/country")
            .with_status(200)
            .with_body(r#"[{"id":1,"name":"Germany","iso2":"DE"}]"#)
            .expect(1)
            .create_async()
            .await;

        let api = client(&server.url());
        let countries = api.get_mobile_countries().await.unwrap();
        assert_eq!(countries[0]["iso2"], "DE");
        list.assert_async().await;

        let mut other = Server::new_async().await;
        other
            .mock("POST", "/getlist/mobile/country")
            .with_status(200)
            .with_body(r#"{"error":"not a list"}"#)
            .create_async()
            .await;

        let err = client(&other.url()).get_mobile_countries().await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }
}
