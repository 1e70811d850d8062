use axum::response::IntoResponse;

pub async fn landing() -> impl IntoResponse {
    concat!("kanade v", env!("CARGO_PKG_VERSION"), " is running")
}
