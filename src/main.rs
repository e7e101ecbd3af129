use folio::routes::{self, ServeConfig, ServeError};

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    tracing_subscriber::fmt::init();

    let config = ServeConfig::from_env()?;
    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServeError::Bind)?;

    tracing::info!(port = config.port, site = %config.site_dir.display(), pkg = %config.pkg_dir.display(), "folio-serve listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
