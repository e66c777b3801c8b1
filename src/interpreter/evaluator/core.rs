use std::{cell::RefCell, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Expression, Program, Statement},
    interpreter::{
        evaluator::environment::Environment,
        object::{NULL, Object},
    },
    stack::ensure_sufficient_stack,
};

/// How deeply function calls may nest before evaluation yields an error.
pub const MAX_CALL_DEPTH: usize = 1000;

/// Stores the runtime evaluation context.
///
/// The context owns the environment that `let` bindings are written to and
/// identifiers are resolved against.
///
/// ## Usage
///
/// `Context` is created once and may be reused for several programs; bindings
/// made by one program are visible to the next, which is what an interactive
/// session wants.
///
/// # Example
/// ```
/// use kestrel::{evaluate_source, interpreter::evaluator::Context};
///
/// let mut context = Context::new();
/// evaluate_source("let double = fn(x) { x * 2 };", &mut context).unwrap();
///
/// let result = evaluate_source("double(21)", &mut context).unwrap();
/// assert_eq!(result.to_string(), "42");
/// ```
#[derive(Debug, Default)]
pub struct Context {
    env:   Rc<RefCell<Environment>>,
    /// Number of function calls this context is nested in.
    depth: usize,
}

impl Context {
    /// Creates a new evaluation context with an empty global environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that evaluates inside an existing environment.
    #[must_use]
    pub const fn with_environment(env: Rc<RefCell<Environment>>) -> Self {
        Self { env, depth: 0 }
    }

    /// Creates the context for the body of a call made from this context.
    pub(crate) const fn for_call(&self, env: Rc<RefCell<Environment>>) -> Self {
        Self { env,
               depth: self.depth + 1 }
    }

    /// Returns how many function calls this context is nested in.
    #[must_use]
    pub const fn call_depth(&self) -> usize {
        self.depth
    }

    /// Returns the environment bindings are written to.
    #[must_use]
    pub const fn environment(&self) -> &Rc<RefCell<Environment>> {
        &self.env
    }

    /// Evaluates a whole program.
    ///
    /// Statements are evaluated in order and the result of the last one is
    /// returned. Evaluation stops at the first statement that yields an error
    /// or a pending `return`. A pending `return` is unwrapped here, at the
    /// outermost boundary, so the caller receives the returned value itself.
    ///
    /// # Returns
    /// The program's value, `null` for an empty program, or an
    /// [`Object::Error`].
    #[tracing::instrument(level = "trace", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&self, program: &Program) -> Object {
        let mut result = NULL;

        for statement in &program.statements {
            result = self.eval_statement(statement);

            if result.interrupts() {
                return result.unwrap_return();
            }
        }

        result
    }

    /// Evaluates a single statement.
    ///
    /// - `let` evaluates its value and binds it; the statement itself yields
    ///   `null`.
    /// - `return` wraps its value in a pending return.
    /// - An expression statement yields its expression's value.
    /// - A nested block yields the block's value.
    ///
    /// Errors from the inner expression are returned as they are.
    pub fn eval_statement(&self, statement: &Statement) -> Object {
        trace!(line = statement.line_number(), "eval_statement");

        match statement {
            Statement::Expression { expr, .. } => self.eval_expression(expr),
            Statement::Return { value, .. } => {
                let value = self.eval_expression(value);
                if value.interrupts() {
                    return value;
                }
                Object::ReturnValue(Box::new(value))
            },
            Statement::Let { name, value, .. } => {
                let value = self.eval_expression(value);
                if value.interrupts() {
                    return value;
                }
                self.env.borrow_mut().set(&name.name, value);
                NULL
            },
            Statement::Block(block) => self.eval_block(block),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant. Composite expressions evaluate
    /// their children first, left to right, and stop at the first child that
    /// yields an error or a pending return, handing that value up unchanged.
    pub fn eval_expression(&self, expr: &Expression) -> Object {
        ensure_sufficient_stack(|| self.eval_expression_at(expr))
    }

    fn eval_expression_at(&self, expr: &Expression) -> Object {
        match expr {
            Expression::IntegerLiteral { value, .. } => Object::Integer(*value),
            Expression::BooleanLiteral { value, .. } => Object::from(*value),
            Expression::Identifier(identifier) => self.eval_identifier(identifier),
            Expression::Prefix { operator, right, .. } => {
                let right = self.eval_expression(right);
                if right.interrupts() {
                    return right;
                }
                Self::eval_prefix(*operator, &right)
            },
            Expression::Infix { left,
                                operator,
                                right,
                                .. } => {
                let left = self.eval_expression(left);
                if left.interrupts() {
                    return left;
                }
                let right = self.eval_expression(right);
                if right.interrupts() {
                    return right;
                }
                Self::eval_infix(*operator, &left, &right)
            },
            Expression::If { condition,
                             consequence,
                             alternative,
                             .. } => self.eval_if(condition, consequence, alternative.as_ref()),
            Expression::FunctionLiteral { parameters, body, .. } => {
                self.eval_function_literal(parameters, body)
            },
            Expression::Call { callee, arguments, .. } => self.eval_call(callee, arguments),
        }
    }
}

/// Evaluates a program in a fresh context.
///
/// # Example
/// ```
/// use kestrel::{interpreter::evaluator::eval, parse};
///
/// let (program, errors) = parse("5 * (-5 + 10)");
/// assert!(errors.is_empty());
///
/// assert_eq!(eval(&program).to_string(), "25");
/// ```
#[must_use]
pub fn eval(program: &Program) -> Object {
    Context::new().eval_program(program)
}
