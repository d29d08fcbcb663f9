use arbor_core::error::Error;
use arbor_core::span::Span;

/// Create a simple normalization error with no position information
pub fn normalize_error(message: impl Into<String>) -> Error {
    Error::Generic(message.into())
}

/// Create a normalization error anchored to a specific span
pub fn normalize_error_with_span(message: impl Into<String>, span: Span) -> Error {
    Error::MalformedTree(span, message.into())
}
