#[tokio::main]
async fn main() {
    facturas_observability::init();

    let reports_dir = facturas_api::app::reports_dir_from_env();
    if let Err(e) = std::fs::create_dir_all(&reports_dir) {
        tracing::warn!(
            path = %reports_dir.display(),
            error = %e,
            "could not create reports directory; report persistence will fail"
        );
    }

    let app = facturas_api::app::build_app(reports_dir).await;

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
