use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::LogLevel;
use crate::error::LogTreeError;

/// Declarative description of a log topology.
///
/// Nodes are declared children-first: a manager's `outputs` may only name
/// nodes that appear earlier in the list. Declaration order doubles as the
/// proof that the wired graph has no cycles.
#[derive(Debug, Deserialize)]
pub struct TopologySettings {
    pub nodes: Vec<NodeSettings>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeSettings {
    Sink {
        name: String,
    },
    Manager {
        name: String,
        level: LogLevel,
        #[serde(default)]
        outputs: Vec<String>,
    },
}

impl NodeSettings {
    pub fn name(&self) -> &str {
        match self {
            NodeSettings::Sink { name } => name,
            NodeSettings::Manager { name, .. } => name,
        }
    }
}

impl TopologySettings {
    /// Parse a settings document from JSON and validate it.
    pub fn from_json(input: &str) -> Result<Self, LogTreeError> {
        let settings: TopologySettings =
            serde_json::from_str(input).map_err(|e| LogTreeError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), LogTreeError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for node in &self.nodes {
            validate_name(node.name())?;
            if seen.contains(node.name()) {
                return Err(LogTreeError::Config(format!(
                    "Duplicate node name '{}'",
                    node.name()
                )));
            }
            if let NodeSettings::Manager { name, outputs, .. } = node {
                for output in outputs {
                    if !seen.contains(output.as_str()) {
                        return Err(LogTreeError::Config(format!(
                            "Output '{output}' of manager '{name}' must be declared before it"
                        )));
                    }
                }
            }
            seen.insert(node.name());
        }
        Ok(())
    }
}

/// Validates that a node name is not empty or whitespace-only.
fn validate_name(name: &str) -> Result<(), LogTreeError> {
    if name.trim().is_empty() {
        return Err(LogTreeError::Config("Node name cannot be empty".into()));
    }
    Ok(())
}
