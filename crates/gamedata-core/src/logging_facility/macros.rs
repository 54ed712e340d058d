//! Canonical logging macros
//!
//! Every service operation brackets its work with these so that start,
//! end and failure events share one field layout.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use gamedata_core::log_op_start;
/// log_op_start!("create_room");
/// log_op_start!("find_character_by_name", search = "Bram");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gamedata_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gamedata_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use gamedata_core::log_op_end;
/// log_op_end!("create_room", duration_ms = 3);
/// log_op_end!("create_room", duration_ms = 3, room_id = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gamedata_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gamedata_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Recoverable kinds (bad input, missing entity) are logged at `WARN`,
/// everything else at `ERROR`.
///
/// # Example
///
/// ```
/// # use gamedata_core::log_op_error;
/// # use gamedata_core::GameDataError;
/// let err = GameDataError::RoomNotFound { room_id: 99 };
/// log_op_error!("create_character", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        if ex_err.is_recoverable() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = gamedata_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = gamedata_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                err.message = ex_err.message(),
            );
        }
    }};
}
