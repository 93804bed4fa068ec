use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::config::{NodeSettings, TopologySettings};
use crate::error::LogTreeError;
use crate::manager::LogManager;
use crate::port::SharedTarget;
use crate::sink::MemorySink;

/// A wired log topology built from [`TopologySettings`].
///
/// Nodes are constructed in declaration order, so every manager's outputs
/// already exist by the time the manager is wired. Managers stay addressable
/// by name for emitting; sinks stay addressable for reading back.
pub struct Topology {
    managers: HashMap<String, Rc<LogManager>>,
    sinks: HashMap<String, Rc<MemorySink>>,
}

impl Topology {
    pub fn build(settings: &TopologySettings) -> Result<Self, LogTreeError> {
        settings.validate()?;

        let mut targets: HashMap<String, SharedTarget> = HashMap::new();
        let mut managers = HashMap::new();
        let mut sinks = HashMap::new();

        for node in &settings.nodes {
            match node {
                NodeSettings::Sink { name } => {
                    let sink = MemorySink::shared();
                    sinks.insert(name.clone(), Rc::clone(&sink));
                    let target: SharedTarget = sink;
                    targets.insert(name.clone(), target);
                }
                NodeSettings::Manager {
                    name,
                    level,
                    outputs,
                } => {
                    let mut manager = LogManager::new(name.clone(), *level);
                    for output in outputs {
                        // validate() guarantees the output was declared earlier
                        manager.add_output_to(Rc::clone(&targets[output.as_str()]));
                    }
                    let manager = manager.into_shared();
                    managers.insert(name.clone(), Rc::clone(&manager));
                    let target: SharedTarget = manager;
                    targets.insert(name.clone(), target);
                }
            }
        }

        debug!(
            managers = managers.len(),
            sinks = sinks.len(),
            "topology built"
        );
        Ok(Self { managers, sinks })
    }

    pub fn manager(&self, name: &str) -> Option<&Rc<LogManager>> {
        self.managers.get(name)
    }

    pub fn sink(&self, name: &str) -> Option<&Rc<MemorySink>> {
        self.sinks.get(name)
    }
}
