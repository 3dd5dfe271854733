//! Fluent builder for constructing a [`FleetCoordinator`].

use fm_core::{FleetConfig, FmError, RobotId};
use fm_graph::NavGraph;
use fm_traffic::LaneReservations;

use crate::{FleetCoordinator, FleetResult};

/// Fluent builder for [`FleetCoordinator`].
///
/// # Optional inputs
///
/// | Method      | Default                          |
/// |-------------|----------------------------------|
/// | `.level(n)` | The first level of the nav graph |
///
/// # Example
///
/// ```rust,ignore
/// let mut fleet = FleetBuilder::new(config, graph).level("L1").build()?;
/// ```
pub struct FleetBuilder {
    config: FleetConfig,
    graph:  NavGraph,
    level:  Option<String>,
}

impl FleetBuilder {
    pub fn new(config: FleetConfig, graph: NavGraph) -> Self {
        Self { config, graph, level: None }
    }

    /// Select the level robots route on.
    pub fn level(mut self, name: impl Into<String>) -> Self {
        self.level = Some(name.into());
        self
    }

    /// Validate the config and level, and return an empty fleet.
    pub fn build(self) -> FleetResult<FleetCoordinator> {
        self.config.validate()?;

        let active_level = match self.level {
            Some(name) => {
                self.graph.level(&name)?;
                name
            }
            None => self
                .graph
                .level_names()
                .next()
                .map(str::to_owned)
                .ok_or_else(|| FmError::Config("nav graph has no levels".into()))?,
        };

        Ok(FleetCoordinator {
            clock: self.config.make_clock(),
            config: self.config,
            graph: self.graph,
            active_level,
            robots: Vec::new(),
            traffic: LaneReservations::new(),
            next_id: RobotId::FIRST,
        })
    }
}
