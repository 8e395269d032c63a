use core::cell::RefCell;
use core::fmt;

use thiserror::Error;

use kraft_reflect::ops::ConstructError;

// -----------------------------------------------------------------------------
// ErrorKind

/// Who has to act on an [`AdapterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The described type cannot be handled as declared.
    Configuration,
    /// The input does not fit the type.
    Data,
}

// -----------------------------------------------------------------------------
// AdapterError

/// An error raised while building or running a type adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdapterError {
    #[error("Cannot serialize inner class {0}")]
    InnerClass(&'static str),

    #[error("Cannot deserialize abstract class '{0}'")]
    AbstractClass(&'static str),

    #[error("Cannot deserialize sealed class '{0}'")]
    SealedClass(&'static str),

    /// Unnamed parameters are listed by position, as `#0`.
    #[error(
        "Transient constructor parameters must provide a default value. ({}) in {class}",
        .params.join(", ")
    )]
    InvalidParameters {
        class: &'static str,
        params: Vec<String>,
    },

    #[error("{class} declares multiple JSON fields named {param}")]
    DuplicateField {
        class: &'static str,
        param: &'static str,
    },

    #[error("{class} maps the JSON name `{name}` to more than one constructor parameter")]
    DuplicateName {
        class: &'static str,
        name: &'static str,
    },

    #[error("type variable `{name}` of `{owner}` is not bound")]
    UnresolvedTypeVariable {
        owner: &'static str,
        name: &'static str,
    },

    #[error("no adapter can handle `{0}`")]
    MissingAdapter(&'static str),

    #[error("{class} is missing a value for parameter `{param}`")]
    MissingParameter {
        class: &'static str,
        param: &'static str,
    },

    #[error("{class} received null for non-nullable parameter `{param}`")]
    NullParameter {
        class: &'static str,
        param: &'static str,
    },

    #[error("expected a value of type `{expected}`")]
    TypeMismatch { expected: &'static str },

    #[error("`{0}` does not accept null elements")]
    NullElement(&'static str),

    #[error("`{0}` cannot be deserialized without a constructor")]
    Unsupported(&'static str),
}

impl AdapterError {
    /// Classifies the error.
    ///
    /// A missing parameter counts as a configuration error: the class
    /// offered no default for a value the input is allowed to omit.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InnerClass(_)
            | Self::AbstractClass(_)
            | Self::SealedClass(_)
            | Self::InvalidParameters { .. }
            | Self::DuplicateName { .. }
            | Self::UnresolvedTypeVariable { .. }
            | Self::MissingAdapter(_)
            | Self::MissingParameter { .. }
            | Self::Unsupported(_) => ErrorKind::Configuration,
            Self::DuplicateField { .. }
            | Self::NullParameter { .. }
            | Self::TypeMismatch { .. }
            | Self::NullElement(_) => ErrorKind::Data,
        }
    }

    /// Converts a failed constructor call of `class`.
    pub fn from_construct(class: &'static str, err: ConstructError) -> Self {
        match err {
            ConstructError::Missing { param, .. } => Self::MissingParameter { class, param },
            ConstructError::Null { param, .. } => Self::NullParameter { class, param },
            ConstructError::Mismatch { expected, .. } => Self::TypeMismatch { expected },
        }
    }
}

// -----------------------------------------------------------------------------
// JsonError

/// The error returned by [`Json`](crate::Json) entry points.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl JsonError {
    /// Classifies the error, malformed input counts as [`ErrorKind::Data`].
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Adapter(err) => err.kind(),
            Self::Json(_) => ErrorKind::Data,
        }
    }

    /// Returns the adapter error, if any.
    pub const fn as_adapter(&self) -> Option<&AdapterError> {
        match self {
            Self::Adapter(err) => Some(err),
            Self::Json(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Side channel

// Errors cross the serde boundary as strings. The typed error is parked
// here and picked up again by the entry point that started the read.
std::thread_local! {
    static STASH: RefCell<Option<AdapterError>> = const { RefCell::new(None) };
}

/// Parks `err` and returns a serde error carrying its message.
pub(crate) fn stash<E: serde_core::de::Error>(err: AdapterError) -> E {
    let msg = err.to_string();
    STASH.with(|slot| {
        let mut slot = slot.borrow_mut();
        // The innermost error is the cause, keep it.
        if slot.is_none() {
            *slot = Some(err);
        }
    });
    E::custom(msg)
}

/// Takes the parked error, if any.
pub(crate) fn take_stashed() -> Option<AdapterError> {
    STASH.with(|slot| slot.borrow_mut().take())
}

/// Drops any parked error left from an earlier read.
pub(crate) fn clear_stashed() {
    STASH.with(|slot| {
        slot.borrow_mut().take();
    });
}

/// Formats a type for messages, used by `expecting` implementations.
pub(crate) struct Expecting(pub &'static str);

impl fmt::Display for Expecting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a JSON value of `{}`", self.0)
    }
}
