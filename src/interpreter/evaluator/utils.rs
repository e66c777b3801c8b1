use crate::{
    ast::{BlockStatement, Expression, Identifier},
    error::RuntimeError,
    interpreter::{
        evaluator::core::Context,
        object::{NULL, Object},
    },
};

impl Context {
    /// Evaluates the statements of a block in order.
    ///
    /// Yields the value of the last statement, or `null` for an empty block.
    /// An error or pending return stops the block and is handed up still
    /// wrapped, so that a `return` inside nested blocks reaches the enclosing
    /// function call or program.
    pub fn eval_block(&self, block: &BlockStatement) -> Object {
        let mut result = NULL;

        for statement in &block.statements {
            result = self.eval_statement(statement);

            if result.interrupts() {
                return result;
            }
        }

        result
    }

    /// Evaluates a conditional.
    ///
    /// The consequence runs if the condition is truthy, otherwise the
    /// alternative. Without an alternative the value is `null`.
    pub fn eval_if(&self,
                   condition: &Expression,
                   consequence: &BlockStatement,
                   alternative: Option<&BlockStatement>)
                   -> Object {
        let condition = self.eval_expression(condition);
        if condition.interrupts() {
            return condition;
        }

        if condition.is_truthy() {
            self.eval_block(consequence)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative)
        } else {
            NULL
        }
    }

    /// Resolves an identifier through the environment chain.
    pub fn eval_identifier(&self, identifier: &Identifier) -> Object {
        self.environment()
            .borrow()
            .get(&identifier.name)
            .unwrap_or_else(|| {
                RuntimeError::IdentifierNotFound { name: identifier.name.clone() }.into()
            })
    }
}
