use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::object::Object;

/// A set of name bindings with an optional enclosing environment.
///
/// Lookups search this environment first and then each enclosing one in turn.
/// New bindings always go into this environment, shadowing outer ones.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use kestrel::interpreter::{evaluator::environment::Environment, object::Object};
///
/// let global = Rc::new(RefCell::new(Environment::new()));
/// global.borrow_mut().set("x", Object::Integer(1));
///
/// let mut local = Environment::new_enclosed(Rc::clone(&global));
/// local.set("y", Object::Integer(2));
///
/// assert_eq!(local.get("x"), Some(Object::Integer(1)));
/// assert_eq!(local.get("y"), Some(Object::Integer(2)));
/// assert_eq!(global.borrow().get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Self>>>,
}

impl Environment {
    /// Creates an empty environment with no enclosing scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment enclosed by `outer`.
    #[must_use]
    pub fn new_enclosed(outer: Rc<RefCell<Self>>) -> Self {
        Self { store: HashMap::new(),
               outer: Some(outer), }
    }

    /// Looks up a name, searching outward through enclosing environments.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref()?.borrow().get(name),
        }
    }

    /// Binds `name` in this environment, replacing any previous binding here.
    pub fn set(&mut self, name: &str, value: Object) {
        self.store.insert(name.to_string(), value);
    }
}
