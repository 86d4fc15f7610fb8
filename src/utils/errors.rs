// src/utils/errors.rs

use std::fmt;

use serde_json::Value;
use serde_path_to_error::Segment;
use thiserror::Error;

pub const FALLBACK_MESSAGE: &str = "Internal Server Error";

/// What kind of expected failure a [`KnownError`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownErrorKind {
    Validation,
    NotFound,
    Application,
}

/// Expected, caller-facing failure. Its message is safe to show to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct KnownError {
    kind: KnownErrorKind,
    status: u16,
    body: Option<Value>,
    message: String,
}

impl KnownError {
    pub fn new(kind: KnownErrorKind, status: u16, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            body: None,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(KnownErrorKind::NotFound, 404, message)
    }

    /// Replaces the default `{ "message": ... }` response body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn kind(&self) -> KnownErrorKind {
        self.kind
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for KnownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for KnownError {}

/// One step in the path to an offending input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => f.write_str(k),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A single field-level problem found while validating input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new<P>(path: impl IntoIterator<Item = P>, message: impl Into<String>) -> Self
    where
        P: Into<PathSegment>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{path} - {}", self.message)
    }
}

/// Input did not conform. Always a 400 with no body, so the client shows
/// the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub const STATUS: u16 = 400;

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Folds issues into `a.b - required; c - too long`.
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        let message = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(message)
    }

    /// Names the field deserialization stopped at, e.g.
    /// `user.name - invalid type: integer `5`, expected a string`.
    pub fn from_deserialize(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err
            .path()
            .iter()
            .map(|segment| match segment {
                Segment::Seq { index } => PathSegment::Index(*index),
                Segment::Map { key } => PathSegment::Key(key.clone()),
                Segment::Enum { variant } => PathSegment::Key(variant.clone()),
                Segment::Unknown => PathSegment::Key("?".to_owned()),
            })
            .collect();
        let issue = ValidationIssue {
            path,
            message: err.into_inner().to_string(),
        };
        Self::from_issues(&[issue])
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for KnownError {
    fn from(err: ValidationError) -> Self {
        KnownError::new(KnownErrorKind::Validation, ValidationError::STATUS, err.message)
    }
}

/// Everything an interactor can fail with. The variant is the identity:
/// only `Known` failures control what the client sees.
#[derive(Debug, Error)]
pub enum InteractorError {
    #[error("{0}")]
    Known(KnownError),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
    /// A failure with no error information attached.
    #[error("Internal Server Error")]
    Unknown,
}

impl InteractorError {
    pub fn as_known(&self) -> Option<&KnownError> {
        match self {
            InteractorError::Known(e) => Some(e),
            _ => None,
        }
    }
}

pub fn is_known_error(err: &InteractorError) -> bool {
    matches!(err, InteractorError::Known(_))
}

impl From<KnownError> for InteractorError {
    fn from(err: KnownError) -> Self {
        InteractorError::Known(err)
    }
}

impl From<ValidationError> for InteractorError {
    fn from(err: ValidationError) -> Self {
        InteractorError::Known(err.into())
    }
}
