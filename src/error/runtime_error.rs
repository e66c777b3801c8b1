use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::object::ObjectKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The evaluator never returns these through `Result`; it converts them into
/// `Object::Error`, whose message is the `Display` form below.
pub enum RuntimeError {
    /// The operands of a binary operator have different types.
    TypeMismatch {
        /// Type of the left operand.
        left:     ObjectKind,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectKind,
    },
    /// The prefix operator is not defined for the operand type.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type of the operand.
        operand:  ObjectKind,
    },
    /// The infix operator is not defined for the operand types.
    UnknownInfixOperator {
        /// Type of the left operand.
        left:     ObjectKind,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectKind,
    },
    /// Tried to use a name that has no binding.
    IdentifierNotFound {
        /// The name of the binding.
        name: String,
    },
    /// Tried to call something that is not a function.
    NotAFunction {
        /// Type of the callee.
        kind: ObjectKind,
    },
    /// The wrong number of arguments was supplied to a function.
    WrongArgumentCount {
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
    },
    /// Attempted integer division by zero.
    DivisionByZero,
    /// Function calls nested deeper than the evaluator allows.
    RecursionLimitExceeded {
        /// The maximum call depth.
        limit: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => write!(f, "type mismatch: {left} {operator} {right}"),
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::WrongArgumentCount { expected, found } => {
                write!(f, "wrong number of arguments: want={expected}, got={found}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::RecursionLimitExceeded { limit } => {
                write!(f, "maximum recursion depth exceeded: limit={limit}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
