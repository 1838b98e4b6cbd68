use archdiff_core_types::RunId;
use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// testing and the CLI's exit diagnostics. The diff engine itself never
/// fails; these kinds cover the loading and reporting boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,

    // Documents
    /// The document was read but is not a JSON object of the expected shape
    InvalidDocument,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// (operation, file path, entity, run) needed to make a log line useful.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    entity_id: Option<String>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            entity_id: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add entity ID context (architecture id, service codename)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add run ID context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
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

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the run ID context, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(run_id) = &self.run_id {
            write!(f, " (run_id: {})", run_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for ArchDiff loading and reporting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArchDiffError {
    /// The document could not be read from disk
    #[error("Failed to read document {path}: {reason}")]
    DocumentUnreadable { path: String, reason: String },

    /// The document was read but did not parse into the expected shape
    #[error("Malformed document {path}: {reason}")]
    DocumentMalformed { path: String, reason: String },

    /// The requested architecture is not present in the report
    #[error("Architecture not found: {architecture_id}")]
    ArchitectureNotFound { architecture_id: String },

    /// Writing the comparison report failed
    #[error("Failed to export report to {path}: {reason}")]
    ExportFailed { path: String, reason: String },

    /// Reading a previously exported report failed
    #[error("Failed to import report from {path}: {reason}")]
    ImportFailed { path: String, reason: String },

    /// Unknown row filter name
    #[error("Unknown filter: {name}")]
    UnknownFilter { name: String },
}

/// Conversion from ArchDiffError to ExError
impl From<ArchDiffError> for ExError {
    fn from(err: ArchDiffError) -> Self {
        match err {
            ArchDiffError::DocumentUnreadable { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("load_document")
                .with_path(path)
                .with_message(reason),

            ArchDiffError::DocumentMalformed { path, reason } => {
                ExError::new(ExErrorKind::InvalidDocument)
                    .with_op("load_document")
                    .with_path(path)
                    .with_message(reason)
            }

            ArchDiffError::ArchitectureNotFound { architecture_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(architecture_id)
                    .with_message("Architecture not found")
            }

            ArchDiffError::ExportFailed { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("export_rows")
                .with_path(path)
                .with_message(reason),

            ArchDiffError::ImportFailed { path, reason } => {
                ExError::new(ExErrorKind::InvalidDocument)
                    .with_op("read_rows")
                    .with_path(path)
                    .with_message(reason)
            }

            ArchDiffError::UnknownFilter { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_filter")
                .with_message(format!("Unknown filter: {}", name)),
        }
    }
}
