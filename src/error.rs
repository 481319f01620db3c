//! Rendering errors and the log-and-suppress policy.

/// Errors that can occur while rendering or writing output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A renderer could not lay out its input. Recoverable: the public
    /// `render_*` wrappers log it and return an empty string.
    #[error("{operation} failed for {context}: {reason}")]
    RenderFailure {
        operation: &'static str,
        context: String,
        reason: String,
    },

    /// A blocking wait was interrupted. Never suppressed.
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Failed to write to console: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Build a `RenderFailure`.
    pub fn failure(
        operation: &'static str,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::RenderFailure {
            operation,
            context: context.into(),
            reason: reason.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Unwrap a render result, logging and suppressing every error.
///
/// Renderers never block, so they can never be cancelled; any error here is
/// a layout failure and the caller gets the empty string.
pub fn or_empty(operation: &'static str, result: Result<String, RenderError>) -> String {
    match result {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(operation, error = %e, "render failed, emitting nothing");
            String::new()
        }
    }
}

/// Log and suppress recoverable errors while letting cancellation through.
///
/// Used around operations that may block on the console.
pub fn suppress_unless_cancelled(
    operation: &'static str,
    result: Result<(), RenderError>,
) -> Result<(), RenderError> {
    match result {
        Ok(()) => Ok(()),
        Err(RenderError::Cancelled) => Err(RenderError::Cancelled),
        Err(e) => {
            tracing::error!(operation, error = %e, "operation failed, continuing");
            Ok(())
        }
    }
}
