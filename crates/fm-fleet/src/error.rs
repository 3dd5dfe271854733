use fm_core::{FmError, RobotId};
use fm_graph::GraphError;
use fm_robot::{RobotError, RobotStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("robot {0} not found")]
    RobotNotFound(RobotId),

    #[error("status {0} cannot be set manually")]
    InvalidManualStatus(RobotStatus),

    #[error("cannot switch level while {0} robot(s) are moving or waiting")]
    RobotsActive(usize),

    #[error("configuration error: {0}")]
    Config(#[from] FmError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("robot error: {0}")]
    Robot(#[from] RobotError),
}

pub type FleetResult<T> = Result<T, FleetError>;
