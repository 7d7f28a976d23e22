use axum::http::{HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, middleware};
use lbites::domain::config::CorsConfig;
use lbites::domain::constants::header;
use lbites::kernel::prelude::ApiState;
use lbites_kernel::security::headers::SECURITY_HEADERS;
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

/// Tags each request with an unambiguous nanoid.
#[derive(Debug, Clone, Copy, Default)]
struct MakeRequestNanoid;

impl MakeRequestId for MakeRequestNanoid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&lbites_kernel::safe_nanoid!()).ok().map(RequestId::new)
    }
}

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();
    let debug = state.config.app.debug;
    let cors = cors_layer(&state.config.cors);
    let request_id = HeaderName::from_static(header::REQUEST_ID);

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(lbites::server::router::system_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let mut router = Router::new().merge(openapi_routes);

    // Interactive docs are a development-only surface.
    if debug {
        router = router.merge(Scalar::with_url("/api/docs", api_doc));
    }

    router
        .fallback(not_found)
        .layer(middleware::map_response(set_security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestNanoid))
}

fn cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let origins = if cfg.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            cfg.origins_list().iter().filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    let methods = if cfg.methods_list().iter().any(|m| m == "*") {
        AllowMethods::any()
    } else {
        AllowMethods::list(cfg.methods_list().iter().filter_map(|m| m.parse::<Method>().ok()))
    };

    let headers = if cfg.headers_list().iter().any(|h| h == "*") {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(cfg.headers_list().iter().filter_map(|h| h.parse::<HeaderName>().ok()))
    };

    let layer = CorsLayer::new().allow_origin(origins).allow_methods(methods).allow_headers(headers);

    // A wildcard origin cannot be combined with credentials.
    if cfg.credentials && !cfg.allows_any_origin() {
        layer.allow_credentials(true)
    } else {
        layer
    }
}

async fn set_security_headers(mut response: Response) -> Response {
    for (name, value) in SECURITY_HEADERS {
        let name = HeaderName::from_static(name);
        if !response.headers().contains_key(&name) {
            response.headers_mut().insert(name, HeaderValue::from_static(value));
        }
    }
    response
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": { "message": "Resource not found" }
        })),
    )
}
