//! State-derivation core of a wallet front end.
//!
//! Remote data lives in [`remote::RemoteValue`] snapshots inside an explicit
//! [`state::AppState`] tree. [`selectors`] combine those snapshots with
//! [`lift!`] into view models, and [`analytics`] turns session tracking into
//! commands handled by a single service task.

pub mod analytics;
pub mod config;
pub mod exchange;
pub mod logging;
pub mod mvi;
pub mod remote;
pub mod selectors;
pub mod state;
pub mod validation;
