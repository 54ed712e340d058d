//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the logging macros
//! and the assertions made against captured events.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_ROOM_ID: &str = "room_id";
pub const FIELD_CHARACTER_ID: &str = "character_id";

// Collection sizes
pub const FIELD_ROOM_COUNT: &str = "room_count";
pub const FIELD_CHARACTER_COUNT: &str = "character_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_ROOM_ID.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_fields_are_namespaced() {
        assert!(FIELD_ERR_KIND.starts_with("err."));
        assert!(FIELD_ERR_CODE.starts_with("err."));
    }
}
