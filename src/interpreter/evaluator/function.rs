use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{BlockStatement, Expression, Identifier},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, MAX_CALL_DEPTH},
            environment::Environment,
        },
        object::{Function, Object},
    },
};

impl Context {
    /// Creates a function value that captures the current environment.
    pub fn eval_function_literal(&self, parameters: &[Identifier], body: &BlockStatement) -> Object {
        Object::Function(Rc::new(Function { parameters: parameters.to_vec(),
                                            body:       body.clone(),
                                            env:        Rc::clone(self.environment()), }))
    }

    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    /// The first of them that yields an error or a pending return is handed up
    /// unchanged and nothing after it is evaluated.
    pub fn eval_call(&self, callee: &Expression, arguments: &[Expression]) -> Object {
        let callee = self.eval_expression(callee);
        if callee.interrupts() {
            return callee;
        }

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            let value = self.eval_expression(argument);
            if value.interrupts() {
                return value;
            }
            values.push(value);
        }

        self.apply_function(&callee, values)
    }

    /// Applies a function value to already evaluated arguments.
    ///
    /// The body runs in a fresh environment enclosed by the function's defining
    /// environment, with each parameter bound to its argument. A `return` in
    /// the body ends the call and yields its value; it never escapes the call.
    ///
    /// # Returns
    /// The call's value, or an error object when `callee` is not a function
    /// (`not a function: <TYPE>`), the argument count does not match
    /// (`wrong number of arguments: want=<N>, got=<M>`) or calls already nest
    /// [`MAX_CALL_DEPTH`] deep.
    pub fn apply_function(&self, callee: &Object, arguments: Vec<Object>) -> Object {
        let Object::Function(function) = callee else {
            return RuntimeError::NotAFunction { kind: callee.kind() }.into();
        };

        if function.parameters.len() != arguments.len() {
            return RuntimeError::WrongArgumentCount { expected: function.parameters.len(),
                                                      found:    arguments.len(), }.into();
        }

        if self.call_depth() >= MAX_CALL_DEPTH {
            return RuntimeError::RecursionLimitExceeded { limit: MAX_CALL_DEPTH }.into();
        }

        let mut env = Environment::new_enclosed(Rc::clone(&function.env));
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            env.set(&parameter.name, argument);
        }

        self.for_call(Rc::new(RefCell::new(env)))
            .eval_block(&function.body)
            .unwrap_return()
    }
}
