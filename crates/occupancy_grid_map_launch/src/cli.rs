//! Command-line interface for occupancy_grid_map_launch

use argh::FromArgs;
use std::collections::HashMap;

/// Resolve the occupancy-grid-map launch description
#[derive(FromArgs, Debug)]
pub struct LaunchArgs {
    /// override launch arguments (format: key:=value)
    #[argh(option, short = 'a', from_str_fn(parse_arg_override))]
    pub arg: Vec<(String, String)>,

    /// output format for the resolved plan (plan, json, yaml)
    #[argh(
        option,
        short = 'f',
        default = "OutputFormat::Plan",
        from_str_fn(parse_format)
    )]
    pub format: OutputFormat,

    /// log level (error, warn, info, debug, trace)
    #[argh(option, short = 'l', default = "String::from(\"info\")")]
    pub log_level: String,
}

/// How to render the resolved plan on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable plan
    Plan,
    /// JSON for the launch runtime
    Json,
    /// YAML for the launch runtime
    Yaml,
}

/// Parse argument override in format "key:=value"
fn parse_arg_override(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.splitn(2, ":=").collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid argument format '{}'. Expected 'key:=value'",
            s
        ));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

/// Parse the output format flag
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "plan" => Ok(OutputFormat::Plan),
        "json" => Ok(OutputFormat::Json),
        "yaml" => Ok(OutputFormat::Yaml),
        other => Err(format!(
            "Unknown format '{}'. Expected 'plan', 'json' or 'yaml'",
            other
        )),
    }
}

impl LaunchArgs {
    /// Convert argument overrides to a HashMap
    pub fn arg_overrides(&self) -> HashMap<String, String> {
        self.arg.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg_override() {
        let result = parse_arg_override("container:=perception_container");
        assert_eq!(
            result,
            Ok((
                "container".to_string(),
                "perception_container".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_arg_override_with_slash_in_key() {
        let result = parse_arg_override("input/laserscan:=scan/front");
        assert_eq!(
            result,
            Ok(("input/laserscan".to_string(), "scan/front".to_string()))
        );
    }

    #[test]
    fn test_parse_arg_override_invalid() {
        let result = parse_arg_override("invalid");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("plan"), Ok(OutputFormat::Plan));
        assert_eq!(parse_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_format("yaml"), Ok(OutputFormat::Yaml));
        assert!(parse_format("toml").is_err());
    }
}
