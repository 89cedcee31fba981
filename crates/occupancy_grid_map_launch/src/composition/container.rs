//! Container directive resolution

use crate::composition::executable::ContainerExecutable;
use crate::composition::node::ComposableNode;
use serde::{Deserialize, Serialize};

/// Name of the container created when none is supplied
pub const CONTAINER_NAME: &str = "occupancy_grid_map_container";
/// Namespace of the created container (root)
pub const CONTAINER_NAMESPACE: &str = "";
/// Package providing the component-container executables
pub const CONTAINER_PACKAGE: &str = "rclcpp_components";

const CONTAINER_OUTPUT: &str = "screen";

/// Directive handed to the launch runtime
///
/// Exactly one variant is produced per resolution, decided by whether the
/// `container` argument is empty. The node set is built before this
/// decision, so both branches would carry identical nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ContainerDirective {
    /// Spawn a new component container and load the nodes into it
    CreateContainer {
        name: String,
        namespace: String,
        package: String,
        executable: ContainerExecutable,
        output: String,
        nodes: Vec<ComposableNode>,
    },
    /// Load the nodes into an already-running container
    LoadIntoExisting {
        target_container: String,
        nodes: Vec<ComposableNode>,
    },
}

impl ContainerDirective {
    /// Resolve the container decision for this launch unit
    pub fn resolve(
        container_arg: &str,
        executable: ContainerExecutable,
        nodes: Vec<ComposableNode>,
    ) -> Self {
        if container_arg.is_empty() {
            ContainerDirective::CreateContainer {
                name: CONTAINER_NAME.to_string(),
                namespace: CONTAINER_NAMESPACE.to_string(),
                package: CONTAINER_PACKAGE.to_string(),
                executable,
                output: CONTAINER_OUTPUT.to_string(),
                nodes,
            }
        } else {
            ContainerDirective::LoadIntoExisting {
                target_container: container_arg.to_string(),
                nodes,
            }
        }
    }

    /// Nodes carried by either variant
    pub fn nodes(&self) -> &[ComposableNode] {
        match self {
            ContainerDirective::CreateContainer { nodes, .. } => nodes,
            ContainerDirective::LoadIntoExisting { nodes, .. } => nodes,
        }
    }
}
