//! Pure derivations from [`AppState`](crate::state::AppState) to view models.
//!
//! Selectors take the state tree explicitly, never do I/O and always return
//! the same value for the same inputs. Values that are always available are
//! wrapped with [`RemoteValue::of`](crate::remote::RemoteValue::of) so they
//! combine uniformly with remote slices.

pub mod analytics;
pub mod coin_display;
pub mod info;
pub mod interest;
pub mod lockbox;
pub mod three_ds;
