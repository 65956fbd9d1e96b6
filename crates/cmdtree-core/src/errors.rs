use cmdtree_core_types::RequestId;
use thiserror::Error;

/// Result type alias using HierarchyError
pub type Result<T> = std::result::Result<T, HierarchyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural
    AlreadyExists,
    UnknownCommander,
    NotFound,

    // Script input
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::UnknownCommander => "ERR_UNKNOWN_COMMANDER",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// (operation, entity, script line, run id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    line_no: Option<usize>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            line_no: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add script line context (1-based)
    pub fn with_line_no(mut self, line_no: usize) -> Self {
        self.line_no = Some(line_no);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
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

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the script line context, if any
    pub fn line_no(&self) -> Option<usize> {
        self.line_no
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
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
        if let Some(line_no) = self.line_no {
            write!(f, " (line: {})", line_no)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for command hierarchy operations
///
/// None of these are fatal: the store is left unchanged by every rejected
/// operation and callers decide whether to surface them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HierarchyError {
    /// The person is already part of the hierarchy
    #[error("Person already exists: {person_id}")]
    DuplicateId { person_id: String },

    /// The commander named by an insert has never been inserted
    #[error("Unknown commander {commander_id} for person {person_id}")]
    UnknownCommander {
        person_id: String,
        commander_id: String,
    },

    /// A query named a person that is not in the hierarchy
    #[error("Unknown query target: {person_id}")]
    UnknownQueryTarget { person_id: String },

    /// A script line could not be parsed into a command
    #[error("Malformed line {line_no}: {reason}")]
    MalformedLine { line_no: usize, reason: String },

    /// Reading the script or writing answers failed
    #[error("I/O error during {op}: {message}")]
    Io { op: String, message: String },

    /// Exporting a snapshot failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl HierarchyError {
    /// Wrap a `std::io::Error` raised during `op`
    pub fn io(op: &str, err: std::io::Error) -> Self {
        HierarchyError::Io {
            op: op.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for HierarchyError {
    fn from(err: serde_json::Error) -> Self {
        HierarchyError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from HierarchyError to ExError
impl From<HierarchyError> for ExError {
    fn from(err: HierarchyError) -> Self {
        let message = err.to_string();
        match err {
            HierarchyError::DuplicateId { person_id } => ExError::new(ExErrorKind::AlreadyExists)
                .with_op("insert")
                .with_entity_id(person_id)
                .with_message(message),

            HierarchyError::UnknownCommander { commander_id, .. } => {
                ExError::new(ExErrorKind::UnknownCommander)
                    .with_op("insert")
                    .with_entity_id(commander_id)
                    .with_message(message)
            }

            HierarchyError::UnknownQueryTarget { person_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_op("query")
                    .with_entity_id(person_id)
                    .with_message(message)
            }

            HierarchyError::MalformedLine { line_no, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("parse_line")
                    .with_line_no(line_no)
                    .with_message(message)
            }

            HierarchyError::Io { op, .. } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),

            HierarchyError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("snapshot_export")
                .with_message(message),
        }
    }
}
