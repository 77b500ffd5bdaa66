//! Provider tests with HTTP mocking.

mod godaddy_tests {
    use crate::config::{Credentials, RecordType};
    use crate::error::DdnsError;
    use crate::hostname::Hostname;
    use crate::providers::{DnsProvider, GoDaddyProvider, RecordUpdate};
    use std::net::IpAddr;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer, credentials: Credentials) -> GoDaddyProvider {
        GoDaddyProvider::with_base_url(credentials, server.uri()).unwrap()
    }

    fn update(hostname: &str, record_type: RecordType, ips: &[&str]) -> RecordUpdate {
        let addresses: Vec<IpAddr> = ips.iter().map(|ip| ip.parse().unwrap()).collect();
        RecordUpdate::new(Hostname::parse(hostname).unwrap(), record_type, &addresses, 3600)
    }

    async fn failure_for(status: u16, credentials: Credentials) -> (u16, String) {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = provider(&mock_server, credentials)
            .replace_records(&update("home.example.com", RecordType::A, &["203.0.113.5"]))
            .await
            .unwrap_err();

        match err {
            DdnsError::ProviderUpdateFailed { status, message } => (status, message),
            other => panic!("unexpected error: {other}"),
        }
    }

    fn creds() -> Credentials {
        Credentials::new("api-key", "api-secret")
    }

    #[tokio::test]
    async fn test_godaddy_update_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/domains/example.com/records/A/home"))
            .and(header("Authorization", "sso-key api-key:api-secret"))
            .and(header("Content-Type", "application/json"))
            .and(header("Accept", "application/json"))
            .and(body_json(serde_json::json!([
                {"data": "203.0.113.5", "ttl": 3600, "name": "home", "type": "A"}
            ])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        provider(&mock_server, creds())
            .replace_records(&update("home.example.com", RecordType::A, &["203.0.113.5"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_godaddy_apex_aaaa() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/domains/example.com/records/AAAA/@"))
            .and(body_json(serde_json::json!([
                {"data": "::1", "ttl": 3600, "name": "@", "type": "AAAA"}
            ])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        provider(&mock_server, creds())
            .replace_records(&update("example.com", RecordType::Aaaa, &["::1"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_godaddy_multiple_records_keep_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/domains/example.com/records/A/www"))
            .and(body_json(serde_json::json!([
                {"data": "198.51.100.2", "ttl": 3600, "name": "www", "type": "A"},
                {"data": "198.51.100.1", "ttl": 3600, "name": "www", "type": "A"}
            ])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        provider(&mock_server, creds())
            .replace_records(&update(
                "www.example.com",
                RecordType::A,
                &["198.51.100.2", "198.51.100.1"],
            ))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_godaddy_bad_request() {
        let (status, message) = failure_for(400, creds()).await;
        assert_eq!(status, 400);
        assert!(message.contains("malformed"));
        assert!(message.contains("/v1/domains/example.com/records/A/home"));
    }

    #[tokio::test]
    async fn test_godaddy_unauthorized_with_credentials() {
        let (status, message) = failure_for(401, creds()).await;
        assert_eq!(status, 401);
        assert!(message.contains("option incorrect"));
    }

    #[tokio::test]
    async fn test_godaddy_unauthorized_without_credentials() {
        let (status, message) = failure_for(401, Credentials::new("api-key", "")).await;
        assert_eq!(status, 401);
        assert!(message.contains("option missing"));
    }

    #[tokio::test]
    async fn test_godaddy_forbidden() {
        let (_, message) = failure_for(403, creds()).await;
        assert!(message.contains("denied permission"));
    }

    #[tokio::test]
    async fn test_godaddy_not_found() {
        let (_, message) = failure_for(404, creds()).await;
        assert_eq!(message, "home.example.com not found at GoDaddy.");
    }

    #[tokio::test]
    async fn test_godaddy_unprocessable() {
        let (_, message) = failure_for(422, creds()).await;
        assert_eq!(
            message,
            "\"home.example.com\" has invalid domain or lacks A record."
        );
    }

    #[tokio::test]
    async fn test_godaddy_rate_limited() {
        let (_, message) = failure_for(429, creds()).await;
        assert!(message.contains("too many requests"));
    }

    #[tokio::test]
    async fn test_godaddy_unavailable() {
        let (_, message) = failure_for(503, creds()).await;
        assert_eq!(message, "\"home.example.com\" is unavailable.");
    }

    #[tokio::test]
    async fn test_godaddy_other_status() {
        let (status, message) = failure_for(500, creds()).await;
        assert_eq!(status, 500);
        assert_eq!(message, "GoDaddy API failure because \"500\".");
    }

    #[tokio::test]
    async fn test_godaddy_messages_are_distinct() {
        let mut messages = Vec::new();
        for status in [400, 401, 403, 404, 422, 429, 503, 418] {
            messages.push(failure_for(status, creds()).await.1);
        }
        messages.push(failure_for(401, Credentials::default()).await.1);

        let mut unique = messages.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), messages.len());
    }

    #[test]
    fn test_godaddy_name() {
        let provider = GoDaddyProvider::new(creds()).unwrap();
        assert_eq!(provider.name(), "godaddy");
    }
}
