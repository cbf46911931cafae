//! Uniform outcome reporting.
//!
//! Every use case returns its payload wrapped in an [`Outcome`], which
//! accumulates error messages and structured exception markers. This envelope
//! is the only channel through which failure crosses a layer boundary;
//! business-rule violations never become `Err`.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Kind of a structured exception marker.
///
/// Transport layers read these to choose an outward status distinct from the
/// generic error-message path (e.g. conflict vs. plain validation failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExceptionKind {
    Conflict,
    RateLimited,
    NotFound,
}

/// A structured exception carried alongside the plain error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomException {
    pub kind: ExceptionKind,
    pub message: String,
}

impl CustomException {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: ExceptionKind::Conflict,
            message: message.into(),
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: ExceptionKind::RateLimited,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ExceptionKind::NotFound,
            message: message.into(),
        }
    }
}

/// One field-level validation failure, as reported by input validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
    pub attempted_value: String,
}

impl ValidationFailure {
    fn render(&self) -> String {
        format!(
            "{} on property '{}' with value ({})",
            self.message, self.field, self.attempted_value
        )
    }
}

/// Envelope around a use-case payload plus any accumulated failures.
///
/// Success is derived, never stored: the outcome is successful iff no error
/// message and no custom exception has been recorded. Every mutation
/// re-normalizes the envelope, so a fully clean state always reports its
/// exception list as absent rather than empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Outcome<T> {
    payload: T,
    error_messages: Vec<String>,
    custom_exceptions: Option<Vec<CustomException>>,
}

impl<T> Outcome<T> {
    /// A clean (successful) outcome around `payload`.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            error_messages: Vec::new(),
            custom_exceptions: None,
        }
    }

    /// An outcome pre-populated from structured validation failures.
    pub fn from_validation_failures(payload: T, failures: Vec<ValidationFailure>) -> Self {
        let mut outcome = Self::new(payload);
        outcome.apply_validation_failures(failures);
        outcome
    }

    /// True iff no error message and no custom exception has been recorded.
    pub fn success(&self) -> bool {
        self.error_messages.is_empty()
            && self
                .custom_exceptions
                .as_ref()
                .map_or(true, |excs| excs.is_empty())
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn custom_exceptions(&self) -> Option<&[CustomException]> {
        self.custom_exceptions.as_deref()
    }

    /// Append an error message; `clear` first empties the message list
    /// (replace rather than accumulate).
    pub fn add_error_message(&mut self, message: impl Into<String>, clear: bool) {
        if clear {
            self.error_messages.clear();
        }
        self.error_messages.push(message.into());
        self.normalize();
    }

    pub fn add_error_messages<I>(&mut self, messages: I, clear: bool)
    where
        I: IntoIterator<Item = String>,
    {
        if clear {
            self.error_messages.clear();
        }
        self.error_messages.extend(messages);
        self.normalize();
    }

    /// Append a custom exception; `clear` first empties the exception list.
    pub fn add_custom_exception(&mut self, exception: CustomException, clear: bool) {
        if clear {
            self.custom_exceptions = Some(Vec::new());
        }
        self.custom_exceptions
            .get_or_insert_with(Vec::new)
            .push(exception);
        self.normalize();
    }

    pub fn add_custom_exceptions<I>(&mut self, exceptions: I, clear: bool)
    where
        I: IntoIterator<Item = CustomException>,
    {
        if clear {
            self.custom_exceptions = Some(Vec::new());
        }
        self.custom_exceptions
            .get_or_insert_with(Vec::new)
            .extend(exceptions);
        self.normalize();
    }

    /// Render structured validation failures into error messages, in order.
    pub fn apply_validation_failures(&mut self, failures: Vec<ValidationFailure>) {
        self.error_messages
            .extend(failures.iter().map(ValidationFailure::render));
        self.normalize();
    }

    /// Whether any custom exception of `kind` has been recorded.
    pub fn has_exception(&self, kind: ExceptionKind) -> bool {
        self.custom_exceptions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|exc| exc.kind == kind)
    }

    /// A fully clean envelope resets its exception list to absent.
    fn normalize(&mut self) {
        if self.error_messages.is_empty()
            && self
                .custom_exceptions
                .as_ref()
                .is_some_and(|excs| excs.is_empty())
        {
            self.custom_exceptions = None;
        }
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    // `success` is derived at write time, so the wire shape always agrees
    // with the collections.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 4)?;
        state.serialize_field("payload", &self.payload)?;
        state.serialize_field("success", &self.success())?;
        state.serialize_field("error_messages", &self.error_messages)?;
        state.serialize_field("custom_exceptions", &self.custom_exceptions)?;
        state.end()
    }
}
