mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port = config::port_from_env().expect("invalid PORT");
    let app = routes::app().expect("leptos configuration failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gallery listening");
    axum::serve(listener, app).await.expect("server failed");
}
