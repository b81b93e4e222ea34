//! OpenAPI documentation.

use crate::auth::{API_KEY_HEADER, API_KEY_SCHEME};
use crate::error::ErrorResponse;
use crate::models::{Candlestick, CandlestickListResponse, CandlestickPageResponse, PageMetadata};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

/// Path the OpenAPI JSON document is served from.
pub const OPENAPI_JSON_PATH: &str = "/v3/api-docs";

/// Path of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::list_candlesticks,
        crate::api::handlers::get_candlestick,
        crate::api::handlers::find_candlesticks_by_symbol,
    ),
    components(
        schemas(
            Candlestick,
            CandlestickPageResponse,
            CandlestickListResponse,
            PageMetadata,
            ErrorResponse,
        )
    ),
    modifiers(&ApiKeySecurity),
    security(
        ("ApiKeyAuth" = [])
    ),
    tags(
        (name = "Candlesticks", description = "Read-only candlestick data"),
    ),
    info(
        title = "Stocker REST API",
        version = "v1",
        description = "Read-only REST API for stock price candlesticks",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Registers the `X-API-Key` header scheme.
struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            API_KEY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["info"]["title"], "Stocker REST API");
        assert_eq!(json["info"]["version"], "v1");
        assert!(json["paths"]["/api/candlesticks"]["get"].is_object());
        assert!(json["paths"]["/api/candlesticks/{id}"]["get"].is_object());
        assert!(json["paths"]["/api/candlesticks/search/by-symbol"]["get"].is_object());
        assert!(json["paths"]["/api/candlesticks"]["post"].is_null());
    }

    #[test]
    fn test_api_key_security_scheme() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();

        let scheme = &json["components"]["securitySchemes"][API_KEY_SCHEME];
        assert_eq!(scheme["type"], "apiKey");
        assert_eq!(scheme["in"], "header");
        assert_eq!(scheme["name"], API_KEY_HEADER);
        assert!(json["security"][0][API_KEY_SCHEME].is_array());
    }
}
