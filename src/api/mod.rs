//! HTTP API module for the payroll tools.
//!
//! Exposes the tools over a JSON-RPC 2.0 MCP endpoint (`POST /mcp`), a
//! direct endpoint per tool (`POST /tools/:name`) and `GET /health`.

mod handlers;
mod response;
mod rpc;
mod state;

pub use handlers::{create_router, PROTOCOL_VERSION};
pub use response::{ApiError, ApiErrorResponse};
pub use rpc::{CallToolParams, RpcError, RpcRequest, RpcResponse};
pub use state::AppState;
