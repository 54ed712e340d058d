pub mod characters;
pub mod interactive;
pub mod rooms;

use gamedata_core::{ExError, ExErrorKind};
use serde::Serialize;

/// Pretty-printed JSON for `--json` output
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("json_output")
            .with_message(e.to_string())
    })
}
