//! Base trait for state snapshots.

/// Marker trait for state objects.
///
/// Snapshots should be:
/// - Immutable (Clone to derive the next one)
/// - Self-contained (everything selectors need)
/// - Comparable (PartialEq for detecting changes)
pub trait Snapshot: Clone + PartialEq + Default + Send + Sync + 'static {}
