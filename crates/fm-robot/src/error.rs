use fm_core::RobotId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RobotError {
    #[error("robot {0} cannot be assigned an empty route")]
    EmptyRoute(RobotId),
}

pub type RobotResult<T> = Result<T, RobotError>;
