use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags every request with an id: the caller's `x-request-id` is reused when
/// present, a fresh uuid is issued otherwise. The id is recorded on the
/// request span and echoed back in the response headers.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let header_value = match request.headers().get(REQUEST_ID_HEADER) {
        Some(incoming) => incoming.clone(),
        None => {
            let generated = Uuid::new_v4().to_string();
            let value = HeaderValue::from_str(&generated)
                .expect("a hyphenated uuid is a valid header value");
            request
                .headers_mut()
                .insert(REQUEST_ID_HEADER, value.clone());
            value
        }
    };

    let span = tracing::info_span!(
        "request",
        request_id = %header_value.to_str().unwrap_or("non-ascii"),
        method = %request.method(),
        uri = %request.uri().path()
    );

    let _guard = span.enter();

    let mut response = next.run(request).await;

    response
        .headers_mut()
        .insert(REQUEST_ID_HEADER, header_value);

    response
}
