//! Occupancy Grid Map Launch Composition
//!
//! Resolves the launch description for the occupancy-grid-map composable
//! node in a single pass: which component-container executable to use,
//! whether to create a new container or load into one that already runs,
//! and how the node's topics, parameters and transport hints are wired.
//!
//! # Overview
//!
//! The resolution pipeline:
//! - Declare the launch arguments and apply `key:=value` overrides
//! - Select the container executable from `use_multithread`
//! - Build the composable-node descriptors from the argument values
//! - Emit either a `create_container` or a `load_into_existing` directive,
//!   decided by whether the `container` argument is empty
//!
//! The grid-mapping logic itself lives in a compiled component plugin;
//! this crate only references it by package/plugin identity and hands the
//! resolved directives to the launch runtime that spawns and supervises
//! the processes.
//!
//! # Example
//!
//! ```
//! use occupancy_grid_map_launch::{ContainerDirective, LaunchPlan};
//! use std::collections::HashMap;
//!
//! let overrides = HashMap::from([("container".to_string(), "perception".to_string())]);
//! let plan = LaunchPlan::resolve(overrides).unwrap();
//! assert!(matches!(plan.container, ContainerDirective::LoadIntoExisting { .. }));
//! ```

pub mod cli;
pub mod composition;
pub mod config;
pub mod plan;

pub use cli::{LaunchArgs, OutputFormat};
pub use composition::{
    ComposableNode, ContainerDirective, ContainerExecutable, ParamValue, Remapping,
};
pub use config::{ArgumentRegistry, LaunchArgument, RegistryError};
pub use plan::{LaunchError, LaunchPlan};
