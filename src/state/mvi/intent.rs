//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (form submit, row delete)
/// - Remote call results delivered by effect sequences
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: std::fmt::Debug + Send + 'static {
    /// Stable upper-snake name of the intent, used in logs.
    fn kind(&self) -> &'static str;
}
