use super::*;
use std::collections::HashMap;
use std::path::Path;

/// Fresh temp directory holding a site root with an `index.html`, plus a `pkg/` directory.
fn fixture(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("folio-serve-{}-{name}", std::process::id()));
    let site = root.join("site");
    let pkg = root.join("pkg");
    std::fs::create_dir_all(&site).expect("create site dir");
    std::fs::create_dir_all(&pkg).expect("create pkg dir");
    std::fs::write(site.join("index.html"), "<html><body>portfolio</body></html>").expect("write index");
    std::fs::write(pkg.join("folio.js"), "export default function init() {}").expect("write bundle");
    root
}

fn lookup(vars: HashMap<&'static str, String>) -> impl Fn(&str) -> Result<String, VarError> {
    move |key| vars.get(key).cloned().ok_or(VarError::NotPresent)
}

fn config_for(root: &Path) -> ServeConfig {
    ServeConfig { port: 0, site_dir: root.join("site"), pkg_dir: root.join("pkg") }
}

async fn spawn(config: &ServeConfig) -> (String, tokio::task::JoinHandle<Result<(), std::io::Error>>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = app(config);
    let handle = tokio::spawn(async move { axum::serve(listener, app).await });
    (format!("http://{addr}"), handle)
}

// =============================================================
// ServeConfig
// =============================================================

#[test]
fn config_uses_defaults_and_reports_missing_site() {
    // Default site dir is relative and absent in the test working directory.
    let result = ServeConfig::from_lookup(lookup(HashMap::from([(
        "FOLIO_SITE_DIR",
        "/definitely/not/a/folio/site".to_owned(),
    )])));
    assert!(matches!(result, Err(ServeError::MissingSiteDir { .. })));
}

#[test]
fn config_reads_overrides() {
    let root = fixture("overrides");
    let config = ServeConfig::from_lookup(lookup(HashMap::from([
        ("PORT", " 9123 ".to_owned()),
        ("FOLIO_SITE_DIR", root.join("site").display().to_string()),
        ("FOLIO_PKG_DIR", root.join("pkg").display().to_string()),
    ])))
    .expect("config should load");
    assert_eq!(config.port, 9123);
    assert_eq!(config.site_dir, root.join("site"));
    assert_eq!(config.bind_addr(), "0.0.0.0:9123");
}

#[test]
fn config_defaults_port() {
    let root = fixture("default-port");
    let config = ServeConfig::from_lookup(lookup(HashMap::from([(
        "FOLIO_SITE_DIR",
        root.join("site").display().to_string(),
    )])))
    .expect("config should load");
    assert_eq!(config.port, 8080);
    assert_eq!(config.pkg_dir, PathBuf::from("pkg"));
}

#[test]
fn config_rejects_bad_port() {
    let root = fixture("bad-port");
    let result = ServeConfig::from_lookup(lookup(HashMap::from([
        ("PORT", "eighty".to_owned()),
        ("FOLIO_SITE_DIR", root.join("site").display().to_string()),
    ])));
    match result {
        Err(ServeError::InvalidPort { value, .. }) => assert_eq!(value, "eighty"),
        other => panic!("expected InvalidPort, got {other:?}"),
    }
}

// =============================================================
// Router
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let root = fixture("healthz");
    let (base, server) = spawn(&config_for(&root)).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    server.abort();
}

#[tokio::test]
async fn root_serves_index_html() {
    let root = fixture("index");
    let (base, server) = spawn(&config_for(&root)).await;
    let resp = reqwest::get(format!("{base}/")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("portfolio"));
    server.abort();
}

#[tokio::test]
async fn pkg_serves_bundle() {
    let root = fixture("pkg");
    let (base, server) = spawn(&config_for(&root)).await;
    let resp = reqwest::get(format!("{base}/pkg/folio.js")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.text().await.expect("body").contains("init"));
    server.abort();
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let root = fixture("missing");
    let (base, server) = spawn(&config_for(&root)).await;
    let resp = reqwest::get(format!("{base}/nope.html")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    server.abort();
}
