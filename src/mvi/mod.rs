//! Model-View-Intent primitives for state updates.
//!
//! Effect code never mutates state in place. It describes what happened
//! with an intent, and a reducer produces the next snapshot.
//!
//! # Architecture
//!
//! ```text
//! Effect ──→ Intent ──→ Reducer ──→ Snapshot ──→ Selector ──→ View
//!   ↑                                                           │
//!   └───────────────────────────────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod snapshot;

pub use intent::Intent;
pub use reducer::Reducer;
pub use snapshot::Snapshot;
