//! Launch argument declaration and resolution

mod registry;

pub use registry::*;
