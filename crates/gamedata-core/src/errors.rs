use thiserror::Error;

/// Result type alias using GameDataError
pub type Result<T> = std::result::Result<T, GameDataError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error surfaced by the service layer is classified into one of
/// these kinds. Each kind maps to a stable error code usable by tests and
/// by the console front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }

    /// Whether the user can correct the problem and carry on.
    ///
    /// Only bad input and missing entities are recoverable. Store failures
    /// end the current operation and are left to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExErrorKind::InvalidInput | ExErrorKind::NotFound)
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context a
/// user needs to understand what went wrong (operation, offending field or
/// identifying value, and a human readable message).
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (room id, character name, migration id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the name of the input field that failed validation
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Shorthand for `kind().is_recoverable()`
    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the field context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for the game data operations
///
/// The display strings are the messages shown to the console user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameDataError {
    // ===== Validation Errors =====
    /// A required text answer was empty or whitespace-only
    #[error("{field} cannot be empty.")]
    EmptyField { field: String },

    /// A numeric answer did not parse as an integer
    #[error("Invalid {field}. Please enter a valid number.")]
    InvalidNumber { field: String, input: String },

    // ===== Lookup Errors =====
    /// No room has the requested id
    #[error("Room with ID {room_id} does not exist.")]
    RoomNotFound { room_id: i64 },

    /// No character matches the requested name
    #[error("Character with name '{name}' not found.")]
    CharacterNotFound { name: String },
}

/// Conversion from GameDataError to ExError
///
/// The user-facing message survives the conversion unchanged so the console
/// can print `ExError::message()` directly.
impl From<GameDataError> for ExError {
    fn from(err: GameDataError) -> Self {
        let message = err.to_string();
        match err {
            GameDataError::EmptyField { field } => ExError::new(ExErrorKind::InvalidInput)
                .with_field(field)
                .with_message(message),

            GameDataError::InvalidNumber { field, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field(field)
                .with_message(message),

            GameDataError::RoomNotFound { room_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(format!("Room {}", room_id))
                .with_message(message),

            GameDataError::CharacterNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(name)
                .with_message(message),
        }
    }
}
