use serde::{Deserialize, Serialize};

/// An interchangeable robot subcomponent.
///
/// Parts carry no state beyond their identity. Each one contributes a single
/// line to a robot's rendering via [`Part::label`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    BipedalLegs,
    QuadrupedalLegs,
    Arms,
    Wings,
    Blades,
    FourWheels,
    TwoWheels,
    CameraDetectionSystem,
    InfraredDetectionSystem,
}

/// Where a part is normally installed on a robot.
///
/// - `Traversal`: moves the robot around
/// - `Detection`: senses the robot's surroundings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PartCategory {
    Traversal,
    Detection,
}

impl Part {
    pub const ALL: [Part; 9] = [
        Self::BipedalLegs,
        Self::QuadrupedalLegs,
        Self::Arms,
        Self::Wings,
        Self::Blades,
        Self::FourWheels,
        Self::TwoWheels,
        Self::CameraDetectionSystem,
        Self::InfraredDetectionSystem,
    ];

    /// Human-readable label used when rendering a robot.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BipedalLegs => "two legs",
            Self::QuadrupedalLegs => "four legs",
            Self::Arms => "two arms",
            Self::Wings => "wings",
            Self::Blades => "blades",
            Self::FourWheels => "four wheels",
            Self::TwoWheels => "two wheels",
            Self::CameraDetectionSystem => "cameras",
            Self::InfraredDetectionSystem => "infrared",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|part| part.label() == s)
    }

    /// Informational only. Robots accept any part in either sequence.
    pub fn category(&self) -> PartCategory {
        match self {
            Self::CameraDetectionSystem | Self::InfraredDetectionSystem => PartCategory::Detection,
            _ => PartCategory::Traversal,
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl PartCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traversal => "traversal",
            Self::Detection => "detection",
        }
    }
}
