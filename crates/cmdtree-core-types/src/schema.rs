//! Canonical schema constants for structured logging and events
//!
//! The logging macros emit these keys; the test capture layer and the tests
//! that inspect captured events look them up by the same names.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Recompute pass sizes
pub const FIELD_NODE_COUNT: &str = "node_count";
pub const FIELD_PEAK_STACK: &str = "peak_stack";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
