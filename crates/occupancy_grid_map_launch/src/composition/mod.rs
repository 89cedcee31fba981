//! Composable-node descriptors and container resolution

pub mod container;
pub mod executable;
pub mod node;

pub use container::*;
pub use executable::*;
pub use node::*;
