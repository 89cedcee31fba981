//! Composable-node descriptor construction

use crate::config::{ArgumentRegistry, RegistryError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Package providing the occupancy-grid-map component plugin
pub const NODE_PACKAGE: &str = "laserscan_to_occupancy_grid_map";
/// Fully qualified plugin class registered with the component loader
pub const NODE_PLUGIN: &str = "occupancy_grid_map::OccupancyGridMapNode";
/// Node instance name
pub const NODE_NAME: &str = "occupancy_grid_map_node";

/// Topic remapping applied when the node is loaded
///
/// `from` is relative to the node's private namespace (the `~/` prefix);
/// `to` is the externally resolved topic name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remapping {
    pub from: String,
    pub to: String,
}

impl Remapping {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Scalar node parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::String(s) => write!(f, "{}", s),
        }
    }
}

/// Descriptor for one composable node to load into a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposableNode {
    /// Package the plugin is built into
    pub package: String,
    /// Plugin class name
    pub plugin: String,
    /// Instance name the node runs under
    pub name: String,
    /// Topic remappings, applied as a set at load time
    pub remappings: Vec<Remapping>,
    /// Static node parameters
    pub parameters: IndexMap<String, ParamValue>,
    /// Extra arguments for the component loader (transport hints)
    pub extra_arguments: IndexMap<String, String>,
}

/// Build the composable-node descriptors for this launch unit
///
/// Produces exactly one node today; the sequence return keeps the shape
/// shared with launch units that compose several nodes into one container.
pub fn occupancy_grid_map_nodes(
    registry: &ArgumentRegistry,
) -> Result<Vec<ComposableNode>, RegistryError> {
    let remappings = vec![
        Remapping::new("~/input/laserscan", registry.resolve("input/laserscan")?),
        Remapping::new(
            "~/input/obstacle_pointcloud",
            registry.resolve("input/obstacle_pointcloud")?,
        ),
        Remapping::new(
            "~/input/raw_pointcloud",
            registry.resolve("input/raw_pointcloud")?,
        ),
        Remapping::new("~/output/occupancy_grid_map", registry.resolve("output")?),
    ];

    let mut parameters = IndexMap::new();
    parameters.insert("map_resolution".to_string(), ParamValue::Float(0.5));
    parameters.insert("use_height_filter".to_string(), ParamValue::Bool(true));

    // Passed through unevaluated; the component loader interprets the
    // condition at load time, not here.
    let mut extra_arguments = IndexMap::new();
    extra_arguments.insert(
        "use_intra_process_comms".to_string(),
        registry.resolve("use_intra_process")?,
    );

    Ok(vec![ComposableNode {
        package: NODE_PACKAGE.to_string(),
        plugin: NODE_PLUGIN.to_string(),
        name: NODE_NAME.to_string(),
        remappings,
        parameters,
        extra_arguments,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_registry(overrides: HashMap<String, String>) -> ArgumentRegistry {
        let mut registry = ArgumentRegistry::new().with_overrides(overrides);
        registry.declare("use_intra_process", Some("false")).unwrap();
        registry
            .declare("input/laserscan", Some("virtual_scan/laserscan"))
            .unwrap();
        registry
            .declare("input/obstacle_pointcloud", Some("no_ground/pointcloud"))
            .unwrap();
        registry
            .declare("input/raw_pointcloud", Some("concatenated/pointcloud"))
            .unwrap();
        registry.declare("output", Some("occupancy_grid")).unwrap();
        registry
    }

    #[test]
    fn test_builds_one_node_with_fixed_identity() {
        let nodes = occupancy_grid_map_nodes(&test_registry(HashMap::new())).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].package, "laserscan_to_occupancy_grid_map");
        assert_eq!(nodes[0].plugin, "occupancy_grid_map::OccupancyGridMapNode");
        assert_eq!(nodes[0].name, "occupancy_grid_map_node");
    }

    #[test]
    fn test_all_four_remappings_present() {
        let nodes = occupancy_grid_map_nodes(&test_registry(HashMap::new())).unwrap();
        let remaps = &nodes[0].remappings;
        assert_eq!(remaps.len(), 4);
        assert_eq!(
            remaps[0],
            Remapping::new("~/input/laserscan", "virtual_scan/laserscan")
        );
        assert_eq!(
            remaps[1],
            Remapping::new("~/input/obstacle_pointcloud", "no_ground/pointcloud")
        );
        assert_eq!(
            remaps[2],
            Remapping::new("~/input/raw_pointcloud", "concatenated/pointcloud")
        );
        assert_eq!(
            remaps[3],
            Remapping::new("~/output/occupancy_grid_map", "occupancy_grid")
        );
    }

    #[test]
    fn test_remap_overrides_pass_through_verbatim() {
        let overrides = HashMap::from([
            ("input/laserscan".to_string(), "scan/front".to_string()),
            ("output".to_string(), "map/grid".to_string()),
        ]);
        let nodes = occupancy_grid_map_nodes(&test_registry(overrides)).unwrap();
        let remaps = &nodes[0].remappings;
        assert_eq!(remaps[0].to, "scan/front");
        assert_eq!(remaps[3].to, "map/grid");
    }

    #[test]
    fn test_fixed_parameters() {
        let nodes = occupancy_grid_map_nodes(&test_registry(HashMap::new())).unwrap();
        let params = &nodes[0].parameters;
        assert_eq!(params["map_resolution"], ParamValue::Float(0.5));
        assert_eq!(params["use_height_filter"], ParamValue::Bool(true));
    }

    #[test]
    fn test_transport_hint_is_not_interpreted() {
        // Malformed tokens are carried as-is; the loader evaluates them.
        let overrides = HashMap::from([("use_intra_process".to_string(), "maybe".to_string())]);
        let nodes = occupancy_grid_map_nodes(&test_registry(overrides)).unwrap();
        assert_eq!(nodes[0].extra_arguments["use_intra_process_comms"], "maybe");
    }

    #[test]
    fn test_missing_argument_propagates() {
        let mut registry = ArgumentRegistry::new();
        registry.declare("use_intra_process", Some("false")).unwrap();
        let result = occupancy_grid_map_nodes(&registry);
        assert!(matches!(result, Err(RegistryError::UnknownArgument(_))));
    }
}
