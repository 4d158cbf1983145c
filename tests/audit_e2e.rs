//! End-to-end audits against a local mock HTTP server.

use coppascan::{
    AuditConfig, BatchRunner, FetchError, Fetcher, HttpFetcher, SiteAuditor, TrackerReport,
    TrackerRegistry, Verdict,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn runner_for(config: &AuditConfig) -> BatchRunner {
    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout()).unwrap();
    let auditor = SiteAuditor::new(Arc::new(fetcher), Arc::new(config.registry()));
    BatchRunner::new(auditor, config.concurrency)
}

#[tokio::test]
async fn full_audit_of_a_well_behaved_site() {
    let server = MockServer::start().await;

    let origin_html = r#"<html><body>
        <a href="/about">About us</a>
        <a href="/privacy">Privacy policy</a>
        <form><input name="parent_email"><input type="submit"></form>
        <p>A guardian must approve new accounts.</p>
        <script src="https://www.Google-Analytics.com/ga.js"></script>
        <script src="https://static.hotjar.com/h.js"></script>
    </body></html>"#;

    let policy_html = r#"<html><body>
        <h1>Privacy Policy</h1>
        <p>We do not knowingly collect data from children under 13.</p>
    </body></html>"#;

    // The origin URL is hit twice: once parsed, once raw for the
    // tracker scan.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(origin_html))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/privacy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(policy_html))
        .expect(1)
        .mount(&server)
        .await;

    let config = AuditConfig::default();
    let urls = vec![server.uri()];
    let records = runner_for(&config).run_all(&urls).await.unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.website, server.uri());
    assert_eq!(record.privacy_policy_link_present, Verdict::Yes);
    assert_eq!(record.privacy_policy_child_section, Verdict::Yes);
    assert_eq!(record.asks_for_personal_data, Verdict::Yes);
    assert_eq!(record.parental_consent_mechanism, Verdict::Yes);
    assert_eq!(
        record.third_party_trackers_detected,
        TrackerReport::Found(vec![
            "google-analytics.com".to_string(),
            "hotjar.com".to_string(),
        ])
    );
    assert_eq!(record.ads_visible_to_children, Verdict::Manual);
    assert_eq!(record.ad_type, Verdict::Manual);
    assert_eq!(record.child_friendly_ui, Verdict::Manual);
}

#[tokio::test]
async fn requests_carry_the_configured_user_agent() {
    let server = MockServer::start().await;

    // Only requests with the default identity get a body back.
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<form><input name="email"></form>"#),
        )
        .expect(2)
        .mount(&server)
        .await;

    let config = AuditConfig::default();
    let urls = vec![server.uri()];
    let records = runner_for(&config).run_all(&urls).await.unwrap();

    assert_eq!(records[0].asks_for_personal_data, Verdict::Yes);
}

#[tokio::test]
async fn error_status_degrades_verdicts_but_body_is_still_scanned() {
    let server = MockServer::start().await;

    // A 500 means no parsed page, but the raw tracker scan reads
    // whatever body came back.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("<html>maintenance page, hotjar.com beacon</html>"),
        )
        .mount(&server)
        .await;

    let config = AuditConfig::default();
    let urls = vec![server.uri()];
    let records = runner_for(&config).run_all(&urls).await.unwrap();

    let record = &records[0];
    assert_eq!(record.privacy_policy_link_present, Verdict::No);
    assert_eq!(record.privacy_policy_child_section, Verdict::NotFound);
    assert_eq!(record.asks_for_personal_data, Verdict::No);
    assert_eq!(record.parental_consent_mechanism, Verdict::No);
    assert_eq!(
        record.third_party_trackers_detected,
        TrackerReport::Found(vec!["hotjar.com".to_string()])
    );
}

#[tokio::test]
async fn timeout_degrades_every_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>too slow</p>")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = AuditConfig::default();
    let fetcher = HttpFetcher::new(&config.user_agent, Duration::from_millis(150)).unwrap();
    let auditor = SiteAuditor::new(Arc::new(fetcher), Arc::new(config.registry()));
    let runner = BatchRunner::new(auditor, 1);

    let urls = vec![server.uri()];
    let records = runner.run_all(&urls).await.unwrap();

    let record = &records[0];
    assert_eq!(record.privacy_policy_link_present, Verdict::No);
    assert_eq!(record.privacy_policy_child_section, Verdict::NotFound);
    assert_eq!(record.asks_for_personal_data, Verdict::No);
    assert_eq!(record.parental_consent_mechanism, Verdict::No);
    assert_eq!(record.third_party_trackers_detected, TrackerReport::Error);
}

#[tokio::test]
async fn unreachable_policy_page_reads_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="/privacy">Privacy</a>"#),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/privacy"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = AuditConfig::default();
    let urls = vec![server.uri()];
    let records = runner_for(&config).run_all(&urls).await.unwrap();

    let record = &records[0];
    assert_eq!(record.privacy_policy_link_present, Verdict::Yes);
    assert_eq!(record.privacy_policy_child_section, Verdict::NotFound);
}

#[tokio::test]
async fn concurrent_batch_keeps_input_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>slow site</p>")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>fast site</p>"))
        .mount(&server)
        .await;

    let mut config = AuditConfig::default();
    config.concurrency = 4;
    let urls = vec![
        format!("{}/slow", server.uri()),
        format!("{}/fast", server.uri()),
    ];
    let records = runner_for(&config).run_all(&urls).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].website, urls[0]);
    assert_eq!(records[1].website, urls[1]);
}

#[tokio::test]
async fn fetcher_reports_status_errors_without_retrying() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::with_defaults().unwrap();
    let result = fetcher.fetch(&format!("{}/missing", server.uri())).await;

    assert!(matches!(result, Err(FetchError::Status(404))));
}

#[tokio::test]
async fn custom_tracker_registry_is_honored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<script src='https://cdn.custom-metrics.example/t.js'></script>"),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::with_defaults().unwrap();
    let registry = TrackerRegistry::new(["custom-metrics.example"]);
    let auditor = SiteAuditor::new(Arc::new(fetcher), Arc::new(registry));
    let runner = BatchRunner::new(auditor, 1);

    let urls = vec![server.uri()];
    let records = runner.run_all(&urls).await.unwrap();

    assert_eq!(
        records[0].third_party_trackers_detected,
        TrackerReport::Found(vec!["custom-metrics.example".to_string()])
    );
}
