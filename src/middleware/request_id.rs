use crate::tracing::RequestId;
use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

/// Header carrying the correlation id in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// Caller-supplied id, if it is short, non-blank and header-safe.
fn inbound_request_id(request: &Request) -> Option<String> {
    let raw = request.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    if raw.is_empty() || raw.len() > MAX_REQUEST_ID_LEN {
        return None;
    }
    Some(raw.to_owned())
}

/// Tags every request with an id: the caller's when usable, a fresh UUID
/// otherwise. The id is echoed on the response, stored as an extension and
/// scoped for `ResponseMeta`.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = inbound_request_id(&request)
        .map(RequestId::new)
        .unwrap_or_default();
    let header_name = HeaderName::from_static(REQUEST_ID_HEADER);
    let header_value = HeaderValue::from_str(request_id.as_str()).ok();

    if let Some(value) = &header_value {
        request.headers_mut().insert(header_name.clone(), value.clone());
    }
    request.extensions_mut().insert(request_id.clone());

    let span = tracing::info_span!(
        "warehouse.request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = crate::tracing::scope_request_id(
        request_id,
        next.run(request).instrument(span),
    )
    .await;

    if let Some(value) = header_value {
        response.headers_mut().insert(header_name, value);
    }
    response
}
