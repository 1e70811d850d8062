use axum::body::Body;
use axum::extract::Request;
use axum::http::Response;
use axum::middleware::Next;
use tokio::time::Instant;

pub async fn request(request: Request, next: Next) -> Response<Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    tracing::info!("Received a request! [Endpoint: {} {}]", method, uri);

    let response = next.run(request).await;

    tracing::debug!(
        "Request handled [Endpoint: {} {}] [Status: {}] [Elapsed: {:?}]",
        method,
        uri,
        response.status(),
        start.elapsed()
    );

    response
}
