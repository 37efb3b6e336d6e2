#[tokio::main]
async fn main() -> anyhow::Result<()> {
    optiviz_observability::init();

    let addr = std::env::var("OPTIVIZ_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

    let app = optiviz_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
