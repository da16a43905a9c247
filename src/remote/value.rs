//! Snapshot container for asynchronously sourced values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle snapshot of a value fetched from somewhere else.
///
/// A `RemoteValue` never changes in place. Effect code publishes a new
/// snapshot whenever the underlying request moves on, and readers decide
/// what to render with [`RemoteValue::fold`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum RemoteValue<T, E = String> {
    /// No request has been issued yet.
    #[default]
    NotAsked,
    /// A request is in flight.
    Loading,
    /// The request failed.
    Failure(E),
    /// The request succeeded with a payload.
    Success(T),
}

/// Raised by [`RemoteValue::get_or_fail`] when the payload is not there.
///
/// Callers only use `get_or_fail` after asserting success, so hitting this
/// is a programming error rather than a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a successful remote value, found {state}")]
pub struct UnwrapError {
    pub state: RemoteState,
}

/// Payload-free tag of a [`RemoteValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteState {
    NotAsked,
    Loading,
    Failure,
    Success,
}

impl std::fmt::Display for RemoteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteState::NotAsked => write!(f, "not asked"),
            RemoteState::Loading => write!(f, "loading"),
            RemoteState::Failure => write!(f, "failure"),
            RemoteState::Success => write!(f, "success"),
        }
    }
}

impl<T, E> RemoteValue<T, E> {
    /// Wrap an always-available value as an immediate success.
    pub fn of(value: T) -> Self {
        RemoteValue::Success(value)
    }

    pub fn state(&self) -> RemoteState {
        match self {
            RemoteValue::NotAsked => RemoteState::NotAsked,
            RemoteValue::Loading => RemoteState::Loading,
            RemoteValue::Failure(_) => RemoteState::Failure,
            RemoteValue::Success(_) => RemoteState::Success,
        }
    }

    pub fn is_not_asked(&self) -> bool {
        matches!(self, RemoteValue::NotAsked)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteValue::Loading)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteValue::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RemoteValue::Success(_))
    }

    pub fn as_ref(&self) -> RemoteValue<&T, &E> {
        match self {
            RemoteValue::NotAsked => RemoteValue::NotAsked,
            RemoteValue::Loading => RemoteValue::Loading,
            RemoteValue::Failure(e) => RemoteValue::Failure(e),
            RemoteValue::Success(t) => RemoteValue::Success(t),
        }
    }

    /// Transform the payload, leaving every other state untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteValue<U, E> {
        match self {
            RemoteValue::NotAsked => RemoteValue::NotAsked,
            RemoteValue::Loading => RemoteValue::Loading,
            RemoteValue::Failure(e) => RemoteValue::Failure(e),
            RemoteValue::Success(t) => RemoteValue::Success(f(t)),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> RemoteValue<T, F> {
        match self {
            RemoteValue::NotAsked => RemoteValue::NotAsked,
            RemoteValue::Loading => RemoteValue::Loading,
            RemoteValue::Failure(e) => RemoteValue::Failure(f(e)),
            RemoteValue::Success(t) => RemoteValue::Success(t),
        }
    }

    /// Chain a dependent lookup onto a successful payload.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> RemoteValue<U, E>) -> RemoteValue<U, E> {
        match self {
            RemoteValue::NotAsked => RemoteValue::NotAsked,
            RemoteValue::Loading => RemoteValue::Loading,
            RemoteValue::Failure(e) => RemoteValue::Failure(e),
            RemoteValue::Success(t) => f(t),
        }
    }

    /// Payload if successful, `default` otherwise.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            RemoteValue::Success(t) => t,
            _ => default,
        }
    }

    pub fn get_or_else_with(self, default: impl FnOnce() -> T) -> T {
        match self {
            RemoteValue::Success(t) => t,
            _ => default(),
        }
    }

    /// Payload if successful, [`UnwrapError`] otherwise.
    pub fn get_or_fail(self) -> Result<T, UnwrapError> {
        match self {
            RemoteValue::Success(t) => Ok(t),
            other => Err(UnwrapError {
                state: other.state(),
            }),
        }
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RemoteValue::Success(t) => Some(t),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            RemoteValue::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// Case analysis over all four states. Exactly one branch runs.
    pub fn fold<U>(
        self,
        on_not_asked: impl FnOnce() -> U,
        on_loading: impl FnOnce() -> U,
        on_failure: impl FnOnce(E) -> U,
        on_success: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            RemoteValue::NotAsked => on_not_asked(),
            RemoteValue::Loading => on_loading(),
            RemoteValue::Failure(e) => on_failure(e),
            RemoteValue::Success(t) => on_success(t),
        }
    }
}

impl<T: Clone, E> RemoteValue<&T, E> {
    pub fn cloned(self) -> RemoteValue<T, E> {
        self.map(Clone::clone)
    }
}

impl<T, E> From<Result<T, E>> for RemoteValue<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(t) => RemoteValue::Success(t),
            Err(e) => RemoteValue::Failure(e),
        }
    }
}

/// An absent value has not been requested yet.
impl<T, E> From<Option<T>> for RemoteValue<T, E> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(t) => RemoteValue::Success(t),
            None => RemoteValue::NotAsked,
        }
    }
}
