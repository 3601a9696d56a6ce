use crate::core::{FundDetails, FundProvider, FundSummary, NavPoint, SchemeMeta};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

/// Fund data from the public mfapi.in endpoints.
pub struct MfApiProvider {
    base_url: String,
    client: Client,
}

impl MfApiProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fundtracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_text(&self, url: Url, what: &str) -> Result<String> {
        debug!("Requesting {} from {}", what, url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request for {what}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Request for {what} failed with status {status}"));
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to get response text for {what}"))
    }
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(default)]
    meta: Option<MetaResponse>,
    #[serde(default)]
    data: Vec<NavPoint>,
}

#[derive(Debug, Deserialize)]
struct MetaResponse {
    scheme_name: Option<String>,
    fund_house: Option<String>,
    scheme_type: Option<String>,
    scheme_category: Option<String>,
}

#[async_trait]
impl FundProvider for MfApiProvider {
    async fn search(&self, query: &str) -> Result<Vec<FundSummary>> {
        let url = Url::parse_with_params(&format!("{}/mf/search", self.base_url), &[("q", query)])
            .with_context(|| format!("Invalid search URL for base: {}", self.base_url))?;
        let what = format!("search '{query}'");
        let response_text = self.get_text(url, &what).await?;

        let funds: Vec<FundSummary> = serde_json::from_str(&response_text).with_context(|| {
            format!("Failed to parse search response for '{query}'. Response: '{response_text}'")
        })?;
        debug!("Search '{}' matched {} funds", query, funds.len());
        Ok(funds)
    }

    async fn fetch_details(&self, scheme_code: u64) -> Result<Option<FundDetails>> {
        let url = Url::parse(&format!("{}/mf/{}", self.base_url, scheme_code))
            .with_context(|| format!("Invalid detail URL for base: {}", self.base_url))?;
        let what = format!("scheme {scheme_code}");
        let response_text = self.get_text(url, &what).await?;

        if response_text.trim().is_empty() {
            return Err(anyhow!("Received empty response for scheme: {}", scheme_code));
        }

        let detail: DetailResponse = serde_json::from_str(&response_text).with_context(|| {
            format!("Failed to parse detail response for scheme: {scheme_code}. Response: '{response_text}'")
        })?;

        let Some(meta) = detail.meta else {
            return Ok(None);
        };
        let Some(scheme_name) = meta.scheme_name else {
            return Ok(None);
        };

        let (nav, date) = match detail.data.first() {
            Some(latest) => (latest.nav.clone(), latest.date.clone()),
            None => (
                "0".to_string(),
                chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            ),
        };

        Ok(Some(FundDetails {
            summary: FundSummary {
                scheme_code,
                scheme_name,
                nav,
                date,
            },
            meta: SchemeMeta {
                fund_house: meta.fund_house,
                scheme_type: meta.scheme_type,
                scheme_category: meta.scheme_category,
            },
            history: detail.data,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_detail_mock_server(
        scheme_code: u64,
        mock_response: &str,
        status_code: u16,
    ) -> MockServer {
        let mock_server = MockServer::start().await;
        let expected_path = format!("/mf/{scheme_code}");

        Mock::given(method("GET"))
            .and(path(&expected_path))
            .respond_with(ResponseTemplate::new(status_code).set_body_string(mock_response))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_server
    }

    async fn create_search_mock_server(
        query: &str,
        mock_response: &str,
        status_code: u16,
    ) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/mf/search"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(status_code).set_body_string(mock_response))
            .mount(&mock_server)
            .await;
        mock_server
    }

    const DETAIL_JSON: &str = r#"{
        "meta": {
            "fund_house": "Aditya Birla Sun Life Mutual Fund",
            "scheme_type": "Open Ended Schemes",
            "scheme_category": "Equity Scheme - ELSS",
            "scheme_code": 118551,
            "scheme_name": "Aditya Birla Sun Life Tax Relief 96 - Growth"
        },
        "data": [
            {"date": "21-06-2024", "nav": "85.67000"},
            {"date": "20-06-2024", "nav": "85.12000"}
        ],
        "status": "SUCCESS"
    }"#;

    #[tokio::test]
    async fn test_successful_search() {
        let mock_response = r#"[
            {"schemeCode": 120503, "schemeName": "HDFC Equity Fund - Growth"},
            {"schemeCode": 100119, "schemeName": "HDFC Balanced Advantage Fund", "nav": "410.2", "date": "2024-06-21"}
        ]"#;
        let mock_server = create_search_mock_server("hdfc equity", mock_response, 200).await;

        let provider = MfApiProvider::new(&mock_server.uri()).unwrap();
        let funds = provider.search("hdfc equity").await.unwrap();

        assert_eq!(funds.len(), 2);
        assert_eq!(funds[0].scheme_code, 120503);
        assert_eq!(funds[0].scheme_name, "HDFC Equity Fund - Growth");
        assert!(funds[0].nav.is_empty());
        assert_eq!(funds[1].nav, "410.2");
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let mock_server = create_search_mock_server("hdfc", "Server Error", 500).await;

        let provider = MfApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.search("hdfc").await;

        assert!(result.is_err());
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("failed with status 500"), "{error_msg}");
    }

    #[tokio::test]
    async fn test_search_malformed_response() {
        let mock_server = create_search_mock_server("hdfc", r#"{"error": "oops"}"#, 200).await;

        let provider = MfApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.search("hdfc").await;

        assert!(result.is_err());
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("Failed to parse search response for 'hdfc'"));
    }

    #[tokio::test]
    async fn test_successful_detail_fetch() {
        let mock_server = create_detail_mock_server(118551, DETAIL_JSON, 200).await;

        let provider = MfApiProvider::new(&mock_server.uri()).unwrap();
        let details = provider.fetch_details(118551).await.unwrap().unwrap();

        assert_eq!(details.summary.scheme_code, 118551);
        assert_eq!(
            details.summary.scheme_name,
            "Aditya Birla Sun Life Tax Relief 96 - Growth"
        );
        assert_eq!(details.summary.nav, "85.67000");
        assert_eq!(details.summary.date, "21-06-2024");
        assert_eq!(details.history.len(), 2);
        assert_eq!(
            details.meta.scheme_category.as_deref(),
            Some("Equity Scheme - ELSS")
        );
    }

    #[tokio::test]
    async fn test_detail_without_history_uses_defaults() {
        let mock_response = r#"{"meta": {"scheme_name": "New Fund"}, "data": []}"#;
        let mock_server = create_detail_mock_server(1, mock_response, 200).await;

        let provider = MfApiProvider::new(&mock_server.uri()).unwrap();
        let details = provider.fetch_details(1).await.unwrap().unwrap();

        assert_eq!(details.summary.nav, "0");
        assert_eq!(
            details.summary.date,
            chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
        );
        assert!(details.history.is_empty());
    }

    #[tokio::test]
    async fn test_detail_for_unknown_scheme() {
        let mock_response = r#"{"meta": {}, "data": [], "status": "SUCCESS"}"#;
        let mock_server = create_detail_mock_server(999999, mock_response, 200).await;

        let provider = MfApiProvider::new(&mock_server.uri()).unwrap();
        let details = provider.fetch_details(999999).await.unwrap();

        assert!(details.is_none());
    }

    #[tokio::test]
    async fn test_detail_empty_response() {
        let mock_server = create_detail_mock_server(118551, "", 200).await;

        let provider = MfApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.fetch_details(118551).await;

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Received empty response for scheme: 118551"
        );
    }

    #[tokio::test]
    async fn test_detail_malformed_response() {
        let mock_server = create_detail_mock_server(118551, r#"{"data": "abc"}"#, 200).await;

        let provider = MfApiProvider::new(&mock_server.uri()).unwrap();
        let result = provider.fetch_details(118551).await;

        assert!(result.is_err());
        let error_message = result.unwrap_err().to_string();
        assert!(error_message.contains("Failed to parse detail response for scheme: 118551"));
        assert!(error_message.contains(r#"Response: '{"data": "abc"}'"#));
    }
}
