/// Core runtime value representation.
///
/// Defines the `Object` enum, its type discriminator and the shared
/// `TRUE`/`FALSE`/`NULL` constants.
pub mod core;
/// User-defined function values.
///
/// Defines the `Function` object produced by evaluating a function literal,
/// together with the environment it closes over.
pub mod function;

pub use self::{
    core::{FALSE, NULL, Object, ObjectKind, TRUE},
    function::Function,
};
