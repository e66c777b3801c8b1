use std::{fmt, rc::Rc};

use crate::{error::RuntimeError, interpreter::object::function::Function};

/// The shared `true` value.
pub const TRUE: Object = Object::Boolean(true);
/// The shared `false` value.
pub const FALSE: Object = Object::Boolean(false);
/// The shared null value, produced by an `if` without a taken branch and by
/// statements that have no value of their own.
pub const NULL: Object = Object::Null;

/// Represents a runtime value in the interpreter.
///
/// Every evaluation of an AST node produces exactly one `Object`. Failures are
/// objects too: an [`Object::Error`] flows through the ordinary result channel
/// and callers tell it apart from a normal value by its [`ObjectKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value. Compared by value, never by identity.
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// An evaluation failure carrying its human-readable message.
    Error(String),
    /// A function value closing over its defining environment.
    Function(Rc<Function>),
    /// A pending `return`: the wrapped value travels up unchanged until the
    /// enclosing function call or program unwraps it.
    ReturnValue(Box<Self>),
}

/// The type discriminator of an [`Object`].
///
/// Its `Display` form is the upper-case type name used in error messages,
/// e.g. `type mismatch: INTEGER + BOOLEAN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `NULL`
    Null,
    /// `ERROR`
    Error,
    /// `FUNCTION`
    Function,
    /// `RETURN_VALUE`
    ReturnValue,
}

impl Object {
    /// Returns the type discriminator of the value.
    ///
    /// # Example
    /// ```
    /// use kestrel::interpreter::object::{Object, ObjectKind, TRUE};
    ///
    /// assert_eq!(Object::Integer(5).kind(), ObjectKind::Integer);
    /// assert_eq!(TRUE.kind().to_string(), "BOOLEAN");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Integer(_) => ObjectKind::Integer,
            Self::Boolean(_) => ObjectKind::Boolean,
            Self::Null => ObjectKind::Null,
            Self::Error(_) => ObjectKind::Error,
            Self::Function(_) => ObjectKind::Function,
            Self::ReturnValue(_) => ObjectKind::ReturnValue,
        }
    }

    /// Returns `true` if the value is an [`Object::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    /// Returns `true` if evaluation of the enclosing node must stop and hand
    /// this value upward unchanged: an error or a pending `return`.
    #[must_use]
    pub const fn interrupts(&self) -> bool {
        matches!(self, Self::Error(..) | Self::ReturnValue(..))
    }

    /// Applies the truthiness rule.
    ///
    /// Only `false` and `null` are falsy; every other value, including the
    /// integer `0`, is truthy.
    ///
    /// # Example
    /// ```
    /// use kestrel::interpreter::object::{FALSE, NULL, Object, TRUE};
    ///
    /// assert!(Object::Integer(0).is_truthy());
    /// assert!(TRUE.is_truthy());
    /// assert!(!FALSE.is_truthy());
    /// assert!(!NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Strips a pending-`return` wrapper, leaving any other value untouched.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::ReturnValue(value) => *value,
            other => other,
        }
    }

    /// Renders the value for display. Same as the `Display` form.
    ///
    /// Integers render in decimal, booleans as `true`/`false`, null as `null`
    /// and errors as their bare message.
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<RuntimeError> for Object {
    fn from(error: RuntimeError) -> Self {
        tracing::debug!(%error, "evaluation error");
        Self::Error(error.to_string())
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Error(message) => write!(f, "{message}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::ReturnValue(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::Error => "ERROR",
            Self::Function => "FUNCTION",
            Self::ReturnValue => "RETURN_VALUE",
        };
        write!(f, "{name}")
    }
}
