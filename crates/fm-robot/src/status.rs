//! Robot status and display colour.

use fm_core::RobotRng;

/// Where a robot is in its motion state machine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RobotStatus {
    /// Stationary, no active route.
    #[default]
    Idle,
    /// Following a route; advanced every tick.
    Moving,
    /// Blocked on a lane held by another robot.
    Waiting,
    /// Parked on a charger.  Only set manually.
    Charging,
    /// Taken out of service.  Only set manually.
    Error,
}

impl RobotStatus {
    /// `true` while the robot is on a route (moving or blocked).
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, RobotStatus::Moving | RobotStatus::Waiting)
    }

    /// Lower-case label, used for output columns.
    pub fn as_str(self) -> &'static str {
        match self {
            RobotStatus::Idle     => "idle",
            RobotStatus::Moving   => "moving",
            RobotStatus::Waiting  => "waiting",
            RobotStatus::Charging => "charging",
            RobotStatus::Error    => "error",
        }
    }
}

impl std::fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Display colour handed to renderers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RobotColor {
    Red,
    Green,
    Blue,
    Orange,
    Purple,
    Cyan,
    Magenta,
}

impl RobotColor {
    pub const ALL: [RobotColor; 7] = [
        RobotColor::Red,
        RobotColor::Green,
        RobotColor::Blue,
        RobotColor::Orange,
        RobotColor::Purple,
        RobotColor::Cyan,
        RobotColor::Magenta,
    ];

    /// Uniform pick from the palette.
    pub fn pick(rng: &mut RobotRng) -> RobotColor {
        RobotColor::ALL[rng.gen_range(0..RobotColor::ALL.len())]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RobotColor::Red     => "red",
            RobotColor::Green   => "green",
            RobotColor::Blue    => "blue",
            RobotColor::Orange  => "orange",
            RobotColor::Purple  => "purple",
            RobotColor::Cyan    => "cyan",
            RobotColor::Magenta => "magenta",
        }
    }
}

impl std::fmt::Display for RobotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
