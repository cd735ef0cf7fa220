//! Structured, leveled logging of request lifecycle events.
//!
//! Observational only: nothing here affects control flow or error content
//! (§4.9). Uses `log::{trace,debug,warn,error}!` directly, matching the
//! lightweight logging footprint seen elsewhere in the retrieved pack (e.g.
//! `jeffmo-libgraphql`'s `graphql` binary) rather than a hand-rolled
//! printer.

use crate::ast::OperationType;

pub fn debug_parse_start(len: usize) {
    log::debug!("parsing query document ({len} bytes)");
}

pub fn debug_parse_end(definition_count: usize) {
    log::debug!("parsed document with {definition_count} definition(s)");
}

pub fn warn_validation_error(rule: &str, message: &str) {
    log::warn!("validation rule `{rule}` failed: {message}");
}

pub fn debug_execute_start(operation_type: OperationType, query_len: usize) {
    log::debug!("executing {operation_type} ({query_len} bytes)");
}

pub fn debug_execute_end(operation_type: OperationType) {
    log::debug!("finished executing {operation_type}");
}

pub fn trace_field(field_name: &str, path: &[String]) {
    log::trace!("resolving field `{field_name}` at {}", path.join("."));
}

pub fn error_field(field_name: &str, message: &str) {
    log::error!("field `{field_name}` resolver error: {message}");
}

pub fn warn_depth_exceeded(depth: usize, max: usize) {
    log::warn!("selection set depth {depth} exceeds configured maximum {max}");
}
