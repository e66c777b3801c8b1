use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, object::Object},
};

impl Context {
    /// Evaluates an infix operation between two already evaluated operands.
    ///
    /// - Two integers support arithmetic (`+ - * /`, producing an integer)
    ///   and comparison (`< > == !=`, producing a boolean).
    /// - Two booleans support only `==` and `!=`, compared by value.
    /// - Operands of different types yield `type mismatch: <L> <op> <R>`.
    /// - Any other operator on operands of the same type yields `unknown
    ///   operator: <L> <op> <R>`.
    ///
    /// # Example
    /// ```
    /// use kestrel::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::Context, object::{Object, TRUE}},
    /// };
    ///
    /// let sum = Context::eval_infix(InfixOperator::Add, &Object::Integer(3), &Object::Integer(4));
    /// assert_eq!(sum, Object::Integer(7));
    ///
    /// let error = Context::eval_infix(InfixOperator::Add, &Object::Integer(5), &TRUE);
    /// assert_eq!(error.to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    #[must_use]
    pub fn eval_infix(operator: InfixOperator, left: &Object, right: &Object) -> Object {
        match (left, right) {
            (Object::Integer(l), Object::Integer(r)) => Self::eval_integer_infix(operator, *l, *r),
            (Object::Boolean(l), Object::Boolean(r)) => {
                Self::eval_boolean_infix(operator, *l, *r)
            },
            _ if left.kind() != right.kind() => {
                RuntimeError::TypeMismatch { left: left.kind(),
                                             operator,
                                             right: right.kind() }.into()
            },
            _ => RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                      operator,
                                                      right: right.kind() }.into(),
        }
    }

    /// Integer arithmetic and comparison.
    ///
    /// Arithmetic is 64-bit two's complement and wraps on overflow. Division
    /// truncates toward zero; dividing by zero is an error object.
    fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Object {
        match operator {
            InfixOperator::Add => Object::Integer(left.wrapping_add(right)),
            InfixOperator::Sub => Object::Integer(left.wrapping_sub(right)),
            InfixOperator::Mul => Object::Integer(left.wrapping_mul(right)),
            InfixOperator::Div => {
                if right == 0 {
                    return RuntimeError::DivisionByZero.into();
                }
                Object::Integer(left.wrapping_div(right))
            },
            InfixOperator::Less => Object::from(left < right),
            InfixOperator::Greater => Object::from(left > right),
            InfixOperator::Equal => Object::from(left == right),
            InfixOperator::NotEqual => Object::from(left != right),
        }
    }

    /// Boolean equality. Every other operator is unknown for booleans.
    fn eval_boolean_infix(operator: InfixOperator, left: bool, right: bool) -> Object {
        match operator {
            InfixOperator::Equal => Object::from(left == right),
            InfixOperator::NotEqual => Object::from(left != right),
            _ => RuntimeError::UnknownInfixOperator { left: Object::from(left).kind(),
                                                      operator,
                                                      right: Object::from(right).kind() }.into(),
        }
    }
}
