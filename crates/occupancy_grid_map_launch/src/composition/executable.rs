//! Container executable selection

use serde::{Deserialize, Serialize};

/// Which component-container flavor hosts the composable nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerExecutable {
    SingleThreaded,
    MultiThreaded,
}

impl ContainerExecutable {
    /// Select the executable flavor from the raw `use_multithread` value.
    ///
    /// Only the tokens the launch runtime's condition evaluator treats as
    /// true ("true" in any case, or "1") select the multi-threaded
    /// container; any other value, malformed tokens included, falls back
    /// to the single-threaded one. Total function, never fails.
    pub fn select(use_multithread: &str) -> Self {
        if use_multithread.eq_ignore_ascii_case("true") || use_multithread == "1" {
            ContainerExecutable::MultiThreaded
        } else {
            ContainerExecutable::SingleThreaded
        }
    }

    /// Process executable name understood by the component loader
    pub fn executable_name(&self) -> &'static str {
        match self {
            ContainerExecutable::SingleThreaded => "component_container",
            ContainerExecutable::MultiThreaded => "component_container_mt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_tokens_select_multithreaded() {
        for token in ["true", "True", "TRUE", "1"] {
            assert_eq!(
                ContainerExecutable::select(token),
                ContainerExecutable::MultiThreaded,
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_everything_else_selects_single_threaded() {
        for token in ["false", "False", "", "0", "yes", "tru", "anything-else"] {
            assert_eq!(
                ContainerExecutable::select(token),
                ContainerExecutable::SingleThreaded,
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_executable_names() {
        assert_eq!(
            ContainerExecutable::SingleThreaded.executable_name(),
            "component_container"
        );
        assert_eq!(
            ContainerExecutable::MultiThreaded.executable_name(),
            "component_container_mt"
        );
    }
}
