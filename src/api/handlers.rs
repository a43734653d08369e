//! HTTP request handlers for the payroll tool API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::response::{ApiError, ApiErrorResponse};
use super::rpc::{CallToolParams, RpcRequest, RpcResponse, INTERNAL_ERROR, INVALID_REQUEST};
use super::state::AppState;
use crate::error::PayrollError;

/// MCP protocol revision announced by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/mcp", post(mcp_handler))
        .route("/tools/:name", post(tool_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /mcp.
///
/// Answers JSON-RPC requests; notifications are acknowledged with 202.
async fn mcp_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request: RpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "Invalid JSON-RPC message");
            return json_response(StatusCode::OK, &RpcResponse::parse_error(err.to_string()));
        }
    };

    if request.jsonrpc != "2.0" {
        warn!(version = %request.jsonrpc, "Unsupported JSON-RPC version");
        return json_response(
            StatusCode::OK,
            &RpcResponse::error(
                request.id,
                INVALID_REQUEST,
                "Unsupported jsonrpc version (expected 2.0)",
            ),
        );
    }

    let RpcRequest {
        method, params, id, ..
    } = request;

    if id.is_none() && method.starts_with("notifications/") {
        debug!(method = %method, "Received client notification");
        return StatusCode::ACCEPTED.into_response();
    }

    let response = match method.as_str() {
        "initialize" => RpcResponse::success(id, initialize_result()),
        "ping" => RpcResponse::success(id, json!({})),
        "tools/list" => match serde_json::to_value(state.registry().list_tools()) {
            Ok(tools) => RpcResponse::success(id, json!({ "tools": tools })),
            Err(err) => RpcResponse::error(id, INTERNAL_ERROR, err.to_string()),
        },
        "tools/call" => {
            let parsed: CallToolParams =
                match params.map(serde_json::from_value).transpose() {
                    Ok(Some(parsed)) => parsed,
                    Ok(None) => {
                        return json_response(
                            StatusCode::OK,
                            &RpcResponse::invalid_params(id, "missing params"),
                        );
                    }
                    Err(err) => {
                        return json_response(
                            StatusCode::OK,
                            &RpcResponse::invalid_params(id, err.to_string()),
                        );
                    }
                };
            let result = state
                .registry()
                .call_tool(&parsed.name, parsed.arguments)
                .await;
            match serde_json::to_value(result) {
                Ok(result) => RpcResponse::success(id, result),
                Err(err) => RpcResponse::error(id, INTERNAL_ERROR, err.to_string()),
            }
        }
        other => RpcResponse::method_not_found(id, other),
    };

    json_response(StatusCode::OK, &response)
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "serverInfo": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        },
        "capabilities": {
            "tools": { "listChanged": false }
        }
    })
}

/// Handler for POST /tools/:name.
///
/// Calls one tool directly; the body is the argument object and may be empty.
async fn tool_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Response {
    let registry = state.registry();
    if !registry.has_tool(&name) {
        let api_error: ApiErrorResponse = PayrollError::UnknownTool { name }.into();
        return api_error.into_response();
    }

    let arguments = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(tool = %name, error = %err, "JSON syntax error");
                return ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::malformed_json(format!("Invalid JSON syntax: {}", err)),
                }
                .into_response();
            }
        }
    };

    match registry.call(&name, arguments).await {
        Ok(value) => json_response(StatusCode::OK, &value),
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    info!("Health check");
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
