use crate::source::qq::QQMusic;
use crate::source::qq::sign::DigestSigner;
use crate::util::config::Config;
use crate::util::http::HttpTransport;
use axum::Router;
use axum::middleware::from_fn;
use axum::routing;
use axum::serve;
use dotenv::dotenv;
use mimalloc::MiMalloc;
use reqwest::{Client, ClientBuilder};
use std::net::SocketAddr;
use std::sync::{Arc, LazyLock};
use tokio::main;
use tokio::net;
use tower::ServiceBuilder;
use tracing_subscriber::fmt;

mod middlewares;
mod models;
mod playback;
mod routes;
mod source;
mod util;

#[global_allocator]
static ALLOCATOR: MiMalloc = MiMalloc;
static CONFIG: LazyLock<Config> = LazyLock::new(Config::new);
static REQWEST: LazyLock<Client> = LazyLock::new(|| {
    ClientBuilder::new()
        .build()
        .expect("Failed to create reqwest client")
});
static VENDOR: LazyLock<QQMusic> = LazyLock::new(|| {
    let transport = HttpTransport::new(REQWEST.clone(), &CONFIG.vendor)
        .expect("Failed to create vendor transport");
    QQMusic::new(
        Arc::new(transport),
        Arc::new(DigestSigner),
        CONFIG.vendor.clone(),
    )
});

#[main(flavor = "multi_thread")]
async fn main() {
    dotenv().ok();

    let subscriber = fmt()
        .pretty()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_target(true)
        .with_max_level(CONFIG.log_level())
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global logger");

    LazyLock::force(&REQWEST);
    LazyLock::force(&VENDOR);

    let app = Router::new()
        .route("/api/getRecommend", routing::get(routes::endpoints::get_recommend))
        .route(
            "/api/getSingerList",
            routing::get(routes::endpoints::get_singer_list),
        )
        .route(
            "/api/getSingerDetail",
            routing::get(routes::endpoints::get_singer_detail),
        )
        .route("/api/getSongsUrl", routing::get(routes::endpoints::get_songs_url))
        .route("/api/getLyric", routing::get(routes::endpoints::get_lyric))
        .route("/api/getAlbum", routing::get(routes::endpoints::get_album))
        .route("/api/getTopList", routing::get(routes::endpoints::get_top_list))
        .route(
            "/api/getTopDetail",
            routing::get(routes::endpoints::get_top_detail),
        )
        .route("/api/getHotKeys", routing::get(routes::endpoints::get_hot_keys))
        .route("/api/search", routing::get(routes::endpoints::search))
        .route_layer(ServiceBuilder::new().layer(from_fn(middlewares::log::request)))
        .route("/", routing::get(routes::global::landing));

    let listener = match net::TcpListener::bind(format!("{}:{}", CONFIG.address, CONFIG.port)).await
    {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(
                "Failed to bind to {}:{} [{}]",
                CONFIG.address,
                CONFIG.port,
                error
            );
            return;
        }
    };

    if let Ok(address) = listener.local_addr() {
        tracing::info!("Server is bound to {}", address);
    }

    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .ok();
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received, draining connections");
    }
}
