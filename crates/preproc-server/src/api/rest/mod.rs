//! REST API implementation
//!
//! - types: Request/response type definitions and shared state
//! - extractors: JSON body and caller role extractors, role gate middleware
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration

mod extractors;
mod handlers;
mod router;
mod tests;
pub mod types;

// Re-export public API
pub use extractors::{require_admin, require_super_admin, CallerRole, JsonExtractor, ROLE_HEADER};
pub use router::create_router;
pub use types::{
    AppState, ConfigView, GenerateResponsePayload, HealthResponse, InfoResponse,
    TestRequestPayload, TestResponsePayload, ValidateRequestPayload,
};
