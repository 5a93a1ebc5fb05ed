use miette::Diagnostic;

/// Errors from the JSON input boundary.
///
/// The renderer itself is total and never fails; only deserializing an
/// entity payload can.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum RichTextError {
    /// Payload was not a valid JSON array of entities.
    #[error("invalid entity payload: {0}")]
    #[diagnostic(code(telemart::richtext::entities))]
    EntityPayload(#[from] serde_json::Error),
}
