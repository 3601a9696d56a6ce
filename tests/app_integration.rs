use fundtracker::core::saved::SavedFunds;
use fundtracker::core::session::SessionStore;
use fundtracker::store::disk::DiskStorage;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

// Mock server and config helpers
mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn mount_search(mock_server: &MockServer, query: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path("/mf/search"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(mock_server)
            .await;
    }

    pub async fn mount_detail(mock_server: &MockServer, scheme_code: u64, body: &str, calls: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/mf/{scheme_code}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(calls)
            .mount(mock_server)
            .await;
    }

    /// Writes a config pointing the provider at the mock server and the store at `data_dir`.
    pub fn write_config(
        config_file: &tempfile::NamedTempFile,
        base_url: &str,
        data_dir: &std::path::Path,
    ) {
        let config_content = format!(
            r#"
            providers:
              mfapi:
                base_url: {}
            data_path: "{}"
        "#,
            base_url,
            data_dir.display()
        );
        std::fs::write(config_file.path(), config_content).expect("Failed to write config file");
    }
}

const SEARCH_JSON: &str = r#"[
    {"schemeCode": 120503, "schemeName": "HDFC Equity Fund - Growth"},
    {"schemeCode": 100119, "schemeName": "HDFC Balanced Advantage Fund - Growth"}
]"#;

const DETAIL_JSON: &str = r#"{
    "meta": {
        "fund_house": "HDFC Mutual Fund",
        "scheme_type": "Open Ended Schemes",
        "scheme_category": "Equity Scheme - Flexi Cap Fund",
        "scheme_code": 120503,
        "scheme_name": "HDFC Equity Fund - Growth"
    },
    "data": [
        {"date": "21-06-2024", "nav": "892.45600"},
        {"date": "20-06-2024", "nav": "889.10200"}
    ],
    "status": "SUCCESS"
}"#;

fn open_store(data_dir: &Path) -> Arc<DiskStorage> {
    Arc::new(DiskStorage::open(&data_dir.join("storage")).expect("Failed to open storage"))
}

async fn run(command: fundtracker::AppCommand, config_path: &Path) {
    let result = fundtracker::run_command(command, Some(config_path.to_str().unwrap())).await;
    assert!(
        result.is_ok(),
        "Command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_search_flow_with_mock() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_search(&mock_server, "hdfc", 200, SEARCH_JSON).await;

    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), data_dir.path());

    run(
        fundtracker::AppCommand::Search {
            query: "hdfc".to_string(),
            open: None,
        },
        config_file.path(),
    )
    .await;
}

#[test_log::test(tokio::test)]
async fn test_search_failure_is_not_fatal() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_search(&mock_server, "hdfc", 500, "Server Error").await;

    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), data_dir.path());

    info!("Search against failing endpoint should fall back to sample funds");
    run(
        fundtracker::AppCommand::Search {
            query: "hdfc".to_string(),
            open: Some(1),
        },
        config_file.path(),
    )
    .await;
}

#[test_log::test(tokio::test)]
async fn test_save_and_remove_flow_with_mock() {
    let mock_server = wiremock::MockServer::start().await;
    // The detail view is entered twice without navigation state: one fetch each
    test_utils::mount_detail(&mock_server, 120503, DETAIL_JSON, 2).await;

    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), data_dir.path());

    run(
        fundtracker::AppCommand::Login {
            name: "Asha".to_string(),
            email: Some("asha@example.com".to_string()),
            token: Some("token-123".to_string()),
        },
        config_file.path(),
    )
    .await;

    run(
        fundtracker::AppCommand::Fund {
            scheme_code: 120503,
            toggle_save: true,
        },
        config_file.path(),
    )
    .await;

    {
        let saved = SavedFunds::new(open_store(data_dir.path()));
        let funds = saved.list().await;
        info!(?funds, "Saved funds after toggling");
        assert_eq!(funds.len(), 1);
        assert_eq!(funds[0].scheme_code, 120503);
        assert_eq!(funds[0].nav, "892.45600");
        assert_eq!(funds[0].date, "21-06-2024");
    }

    run(
        fundtracker::AppCommand::Fund {
            scheme_code: 120503,
            toggle_save: true,
        },
        config_file.path(),
    )
    .await;

    let storage = open_store(data_dir.path());
    assert!(SavedFunds::new(storage.clone()).list().await.is_empty());
    assert_eq!(
        SessionStore::new(storage).token().await,
        Some("token-123".to_string())
    );
}

#[test_log::test(tokio::test)]
async fn test_logout_clears_session_on_disk() {
    let mock_server = wiremock::MockServer::start().await;
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), data_dir.path());

    run(
        fundtracker::AppCommand::Login {
            name: "Ravi".to_string(),
            email: None,
            token: None,
        },
        config_file.path(),
    )
    .await;
    run(fundtracker::AppCommand::Logout, config_file.path()).await;

    let storage = open_store(data_dir.path());
    let session = SessionStore::new(storage);
    assert!(!session.is_logged_in().await);
    assert!(session.user().await.name.is_none());

    // Gated views redirect instead of failing
    drop(session);
    run(fundtracker::AppCommand::Dashboard, config_file.path()).await;
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file_fails() {
    let result =
        fundtracker::run_command(fundtracker::AppCommand::Dashboard, Some("/nonexistent.yaml"))
            .await;
    assert!(result.is_err());

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read config file"), "{message}");
}
