//! Client-facing error messages.

use validator::ValidationErrors;

pub const INVALID_JSON: &str = "Invalid Json format";
pub const NOT_FOUND_RESOURCE: &str = "Resource not found";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const VALIDATION_FAILED: &str = "Validation failed";
pub const INVALID_QUERY: &str = "Invalid query parameters";

const QUERY_DETAIL_PREFIX: &str = "Failed to deserialize query string: ";

pub fn invalid_field(field: &str) -> String {
    format!("The field {} is invalid!", field)
}

/// Names a single offending field. `ValidationErrors` is unordered, so the
/// lexicographically smallest field name is picked to keep responses stable.
pub fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .keys()
        .min()
        .map(|field| invalid_field(field))
        .unwrap_or_else(|| VALIDATION_FAILED.to_string())
}

/// Names the offending parameter of a query-string rejection without echoing
/// the deserializer's own text. `detail` is the rejection's body text, whose
/// error part starts with the parameter path when one is known.
pub fn query_message(detail: &str) -> String {
    let detail = detail.strip_prefix(QUERY_DETAIL_PREFIX).unwrap_or(detail);
    match detail.split_once(':') {
        Some((field, _)) if is_parameter_name(field) => invalid_field(field),
        _ => INVALID_QUERY.to_string(),
    }
}

fn is_parameter_name(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
