pub mod validation;

pub use validation::{parse_integer, require_text};
