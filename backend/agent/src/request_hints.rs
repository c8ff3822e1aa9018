//! Ambient request context rendered into the system prompt.

/// Placeholder substituted for any hint field the request did not carry.
const MISSING: &str = "unknown";

/// Approximate origin of the user's request, derived upstream (reverse-geo).
///
/// Every field is optional; requests with no hints at all are normal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextHints {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Render hints as a fixed four-line block, one line per field.
///
/// Missing fields render the `unknown` placeholder instead of dropping the
/// line, so the prompt keeps a constant shape regardless of hint coverage.
pub fn render_hints(hints: &ContextHints) -> String {
    format!(
        "- lat: {}\n- lon: {}\n- city: {}\n- country: {}",
        coordinate(hints.latitude),
        coordinate(hints.longitude),
        hints.city.as_deref().unwrap_or(MISSING),
        hints.country.as_deref().unwrap_or(MISSING),
    )
}

fn coordinate(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}
