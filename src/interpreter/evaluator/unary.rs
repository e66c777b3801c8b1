use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, object::Object},
};

impl Context {
    /// Evaluates a prefix operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `Not`: `false` if the operand is truthy, `true` otherwise. Any value
    ///   other than `false` and `null` is truthy, so `!5` is `false`.
    /// - `Negate`: integer negation. Wraps on overflow.
    ///
    /// # Returns
    /// The resulting value, or an error object
    /// `unknown operator: -<TYPE>` when negating a non-integer.
    ///
    /// # Example
    /// ```
    /// use kestrel::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::Context, object::{FALSE, Object, TRUE}},
    /// };
    ///
    /// let v = Context::eval_prefix(PrefixOperator::Negate, &Object::Integer(5));
    /// assert_eq!(v, Object::Integer(-5));
    ///
    /// let v = Context::eval_prefix(PrefixOperator::Not, &Object::Integer(0));
    /// assert_eq!(v, FALSE);
    ///
    /// let v = Context::eval_prefix(PrefixOperator::Negate, &TRUE);
    /// assert_eq!(v.to_string(), "unknown operator: -BOOLEAN");
    /// ```
    #[must_use]
    pub fn eval_prefix(operator: PrefixOperator, right: &Object) -> Object {
        match operator {
            PrefixOperator::Not => Object::from(!right.is_truthy()),
            PrefixOperator::Negate => match right {
                Object::Integer(n) => Object::Integer(n.wrapping_neg()),
                _ => RuntimeError::UnknownPrefixOperator { operator,
                                                           operand: right.kind() }.into(),
            },
        }
    }
}
