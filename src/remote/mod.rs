//! Remote value snapshots and their applicative combination.
//!
//! ```text
//! state slice ──→ RemoteValue ──┐
//! state slice ──→ RemoteValue ──┼──→ lift(f) ──→ RemoteValue<View> ──→ fold
//! constant   ──→ RemoteValue::of┘
//! ```

mod lift;
mod value;

pub use lift::{lift2, lift3, lift4, lift5, sequence, zip};
pub use value::{RemoteState, RemoteValue, UnwrapError};
