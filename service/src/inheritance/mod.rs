//! Inheritance ordering for vocabulary classes
//!
//! Vocabulary subclassing is external data: it can name undeclared parents and
//! it can be cyclic. The linearizer orders what it can and appends the rest.

pub mod linearize;

pub use linearize::{Linearization, linearize};
