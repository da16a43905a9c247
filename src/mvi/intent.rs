//! Base trait for intents (completed requests, user actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Request lifecycle events (requested, succeeded, failed)
/// - User actions (authentication, paging)
///
/// Intents are processed by reducers to produce new snapshots.
pub trait Intent: Send + 'static {}
