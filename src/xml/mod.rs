//! XML utilities for consuming CCMM DOM trees.

mod scope;

pub use scope::ElementScope;
