use serde::{Deserialize, Serialize};

use super::{
    AndroidBuilder, AutonomousCarBuilder, FlyingMonkeyBuilder, RobotBuilder, ANDROID,
    AUTONOMOUS_CAR, FLYING_MONKEY_ROBOT,
};
use crate::error::{Error, Result};

/// The catalogue of concrete builders, for picking one by name.
///
/// - `Android`: two legs, two arms, cameras
/// - `AutonomousCar`: four wheels, infrared
/// - `FlyingMonkey`: wings, two arms, infrared and cameras
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RobotKind {
    Android,
    AutonomousCar,
    FlyingMonkey,
}

impl RobotKind {
    pub const ALL: [RobotKind; 3] = [Self::Android, Self::AutonomousCar, Self::FlyingMonkey];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::AutonomousCar => "autonomous_car",
            Self::FlyingMonkey => "flying_monkey",
        }
    }

    /// Accepts `-` in place of `_` and a few short aliases.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "android" => Some(Self::Android),
            "autonomous_car" | "auto" | "car" => Some(Self::AutonomousCar),
            "flying_monkey" | "monkey" => Some(Self::FlyingMonkey),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| Error::UnknownRobotKind(s.to_string()))
    }

    pub fn robot_type(&self) -> &'static str {
        match self {
            Self::Android => ANDROID,
            Self::AutonomousCar => AUTONOMOUS_CAR,
            Self::FlyingMonkey => FLYING_MONKEY_ROBOT,
        }
    }

    /// A new builder of this kind, holding a freshly started robot.
    pub fn builder(&self) -> Box<dyn RobotBuilder> {
        match self {
            Self::Android => Box::new(AndroidBuilder::new()),
            Self::AutonomousCar => Box::new(AutonomousCarBuilder::new()),
            Self::FlyingMonkey => Box::new(FlyingMonkeyBuilder::new()),
        }
    }
}

impl std::fmt::Display for RobotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
