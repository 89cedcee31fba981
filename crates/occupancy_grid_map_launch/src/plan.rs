//! Single-pass launch resolution

use crate::composition::{occupancy_grid_map_nodes, ContainerDirective, ContainerExecutable};
use crate::config::{ArgumentRegistry, RegistryError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fully resolved launch description for this launch unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchPlan {
    /// Effective argument values, in declaration order
    pub args: IndexMap<String, String>,
    /// The single container directive to execute
    pub container: ContainerDirective,
}

/// Declare the launch arguments for this unit
fn declare_arguments(registry: &mut ArgumentRegistry) -> Result<(), RegistryError> {
    registry.declare("container", Some(""))?;
    registry.declare("use_multithread", Some("false"))?;
    registry.declare("use_intra_process", Some("false"))?;
    registry.declare("input/laserscan", Some("virtual_scan/laserscan"))?;
    registry.declare("input/obstacle_pointcloud", Some("no_ground/pointcloud"))?;
    registry.declare("input/raw_pointcloud", Some("concatenated/pointcloud"))?;
    registry.declare("output", Some("occupancy_grid"))?;
    Ok(())
}

impl LaunchPlan {
    /// Run the resolution pass: declare arguments, apply overrides, select
    /// the executable, build the node descriptors and decide the container
    /// directive. Any registry failure aborts before a directive exists.
    pub fn resolve(overrides: HashMap<String, String>) -> Result<Self, LaunchError> {
        let mut registry = ArgumentRegistry::new().with_overrides(overrides);
        declare_arguments(&mut registry)?;
        registry.validate_overrides()?;

        let executable = ContainerExecutable::select(&registry.resolve("use_multithread")?);
        let nodes = occupancy_grid_map_nodes(&registry)?;
        let container =
            ContainerDirective::resolve(&registry.resolve("container")?, executable, nodes);

        Ok(Self {
            args: registry.resolved()?,
            container,
        })
    }
}

/// Errors that can occur during launch resolution
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Argument error: {0}")]
    Registry(#[from] RegistryError),
}

impl std::fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Launch Plan")?;
        writeln!(f, "===========")?;
        writeln!(f)?;

        writeln!(f, "Arguments:")?;
        for (name, value) in &self.args {
            writeln!(f, "  {}: {}", name, value)?;
        }
        writeln!(f)?;

        match &self.container {
            ContainerDirective::CreateContainer {
                name,
                namespace,
                package,
                executable,
                output,
                nodes,
            } => {
                writeln!(f, "Create container:")?;
                writeln!(f, "  Name: {}", name)?;
                writeln!(f, "  Namespace: '{}'", namespace)?;
                writeln!(f, "  Package: {}", package)?;
                writeln!(f, "  Executable: {}", executable.executable_name())?;
                writeln!(f, "  Output: {}", output)?;
                write_nodes(f, nodes)?;
            }
            ContainerDirective::LoadIntoExisting {
                target_container,
                nodes,
            } => {
                writeln!(f, "Load into existing container:")?;
                writeln!(f, "  Target: {}", target_container)?;
                write_nodes(f, nodes)?;
            }
        }

        Ok(())
    }
}

fn write_nodes(
    f: &mut std::fmt::Formatter<'_>,
    nodes: &[crate::composition::ComposableNode],
) -> std::fmt::Result {
    writeln!(f, "  Nodes:")?;
    for (i, node) in nodes.iter().enumerate() {
        writeln!(f, "    {}. {} ({}/{})", i + 1, node.name, node.package, node.plugin)?;
        if !node.remappings.is_empty() {
            writeln!(f, "       Remappings:")?;
            for remap in &node.remappings {
                writeln!(f, "         {} -> {}", remap.from, remap.to)?;
            }
        }
        if !node.parameters.is_empty() {
            writeln!(f, "       Parameters:")?;
            for (key, value) in &node.parameters {
                writeln!(f, "         {}: {}", key, value)?;
            }
        }
        if !node.extra_arguments.is_empty() {
            writeln!(f, "       Extra arguments:")?;
            for (key, value) in &node.extra_arguments {
                writeln!(f, "         {}: {}", key, value)?;
            }
        }
    }
    Ok(())
}
