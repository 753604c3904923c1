pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::distance::handlers as distance;
use crate::state::AppState;
use crate::tools::handlers as tools;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Distance conversion
        .route("/api/distance-conversion", post(distance::handle_convert))
        .route(
            "/api/distance-conversion/units",
            get(distance::handle_list_units),
        )
        // Agent tools
        .route("/api/v1/tools", get(tools::handle_list_tools))
        .route("/api/v1/tools/:name/invoke", post(tools::handle_invoke_tool))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::distance::gateway::ConversionGateway;
    use crate::distance::tool::DistanceConverterTool;
    use crate::tools::ToolRegistry;

    const UNSUPPORTED_MSG: &str = "Unsupported unit. Supported: KILOMETER, AU, LIGHT_YEAR, PARSEC";

    fn test_router() -> Router {
        let gateway = ConversionGateway::default();
        let tools = ToolRegistry::new().register(Arc::new(DistanceConverterTool::new(gateway)));
        build_router(AppState {
            gateway,
            tools: Arc::new(tools),
        })
    }

    async fn post_json(uri: &str, body: Value) -> Response {
        test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get_request(uri: &str) -> Response {
        test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn convert(value: f64, from: &str, to: &str) -> Response {
        post_json(
            "/api/distance-conversion",
            json!({"inputValue": value, "inputUnit": from, "outputUnit": to}),
        )
        .await
    }

    #[tokio::test]
    async fn test_health() {
        let response = get_request("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_convert_au_to_kilometer_complete_response() {
        let response = convert(1.0, "AU", "KILOMETER").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["originalValue"], 1.0);
        assert_eq!(body["originalUnit"], "AU");
        assert_eq!(body["convertedValue"], 149_597_870.7);
        assert_eq!(body["convertedUnit"], "KILOMETER");
        assert_eq!(body["conversionFactor"], 149_597_870.7);
        let timestamp = body["timestamp"].as_str().expect("timestamp string");
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_convert_light_year_to_parsec() {
        let body = body_json(convert(3.26156, "LIGHT_YEAR", "PARSEC").await).await;
        assert_eq!(body["originalUnit"], "LIGHT_YEAR");
        assert_eq!(body["convertedUnit"], "PARSEC");
        let converted = body["convertedValue"].as_f64().unwrap();
        assert!((converted - 1.0).abs() < 1e-4, "{converted}");
    }

    #[tokio::test]
    async fn test_convert_case_insensitive_units() {
        let body = body_json(convert(1.0, "au", "kilometer").await).await;
        assert_eq!(body["originalUnit"], "AU");
        assert_eq!(body["convertedUnit"], "KILOMETER");
    }

    #[tokio::test]
    async fn test_convert_negative_is_bad_request() {
        let response = convert(-5.0, "AU", "KILOMETER").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, "Input value must be non-negative");
    }

    #[tokio::test]
    async fn test_convert_unsupported_input_unit() {
        let response = convert(100.0, "MILE", "KILOMETER").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, UNSUPPORTED_MSG);
    }

    #[tokio::test]
    async fn test_convert_unsupported_output_unit() {
        let response = convert(100.0, "KILOMETER", "METER").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, UNSUPPORTED_MSG);
    }

    #[tokio::test]
    async fn test_convert_both_units_invalid() {
        let response = convert(100.0, "INVALID1", "INVALID2").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, UNSUPPORTED_MSG);
    }

    #[tokio::test]
    async fn test_convert_missing_unit_field() {
        let response = post_json(
            "/api/distance-conversion",
            json!({"inputValue": 1.0, "outputUnit": "AU"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, UNSUPPORTED_MSG);
    }

    #[tokio::test]
    async fn test_convert_zero() {
        let body = body_json(convert(0.0, "AU", "PARSEC").await).await;
        assert_eq!(body["convertedValue"], 0.0);
    }

    #[tokio::test]
    async fn test_convert_same_units() {
        let body = body_json(convert(42.0, "PARSEC", "PARSEC").await).await;
        assert_eq!(body["convertedValue"], 42.0);
        assert_eq!(body["conversionFactor"], 1.0);
    }

    #[tokio::test]
    async fn test_convert_large_value() {
        let body = body_json(convert(1_000_000.0, "PARSEC", "KILOMETER").await).await;
        assert!(body["convertedValue"].as_f64().unwrap() > 3.0e19);
    }

    #[tokio::test]
    async fn test_list_units() {
        let response = get_request("/api/distance-conversion/units").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["baseUnit"], "KILOMETER");
        let units = body["units"].as_array().unwrap();
        assert_eq!(units.len(), 4);
        assert_eq!(units[0], json!({"unit": "KILOMETER", "kilometers": 1.0}));
        assert_eq!(units[1]["unit"], "AU");
        assert_eq!(units[3]["kilometers"], 30_856_775_814_913.672);
    }

    #[tokio::test]
    async fn test_list_tools() {
        let body = body_json(get_request("/api/v1/tools").await).await;
        let tools = body.as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "DistanceConverter");
        assert_eq!(tools[0]["input_schema"]["type"], "object");
    }

    #[tokio::test]
    async fn test_invoke_distance_tool() {
        let response = post_json(
            "/api/v1/tools/DistanceConverter/invoke",
            json!({"value": 1.0, "fromUnit": "AU", "toUnit": "KILOMETER"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["tool"], "DistanceConverter");
        assert_eq!(
            body["output"],
            "1.00000e+00 AU equals 1.49598e+08 KILOMETER (conversion factor: 1.49598e+08)"
        );
    }

    #[tokio::test]
    async fn test_invoke_distance_tool_error_is_text() {
        let response = post_json(
            "/api/v1/tools/DistanceConverter/invoke",
            json!({"value": 1.0, "fromUnit": "MILE", "toUnit": "KILOMETER"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["output"],
            "Error: Invalid unit. Supported units are: KILOMETER, AU, LIGHT_YEAR, PARSEC"
        );
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool_is_not_found() {
        let response = post_json("/api/v1/tools/WikiSearch/invoke", json!({})).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_invoke_with_non_object_args() {
        let response = post_json("/api/v1/tools/DistanceConverter/invoke", json!([1, 2])).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }
}
