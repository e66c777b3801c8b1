use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    ast::{BlockStatement, Identifier},
    interpreter::evaluator::environment::Environment,
};

/// A function value.
///
/// Created each time a function literal is evaluated. The function keeps a
/// shared handle to the environment it was defined in, so it can see bindings
/// made there after its creation, including its own name.
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<Identifier>,
    /// The body evaluated on every call.
    pub body:       BlockStatement,
    /// The defining environment.
    pub env:        Rc<RefCell<Environment>>,
}

// Identity comparison: the captured environment may refer back to the
// function itself.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Function {}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self.parameters
                             .iter()
                             .map(|parameter| parameter.name.as_str())
                             .collect::<Vec<_>>()
                             .join(", ");
        write!(f, "fn({parameters}) {}", self.body)
    }
}
