use super::RobotBuilder;
use crate::models::{Part, Robot};

pub const ANDROID: &str = "ANDROID";
pub const AUTONOMOUS_CAR: &str = "AUTONOMOUS CAR";
pub const FLYING_MONKEY_ROBOT: &str = "FLYING MONKEY ROBOT";

// ============================================================
// Android
// ============================================================

/// Walks on two legs, sees with cameras.
#[derive(Debug, Clone)]
pub struct AndroidBuilder {
    product: Robot,
}

impl AndroidBuilder {
    pub fn new() -> Self {
        Self {
            product: Robot::new(ANDROID),
        }
    }
}

impl Default for AndroidBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotBuilder for AndroidBuilder {
    fn robot_type(&self) -> &'static str {
        ANDROID
    }

    fn product(&self) -> &Robot {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Robot {
        &mut self.product
    }

    fn build_traversal(&mut self) {
        tracing::debug!(robot_type = ANDROID, "installing traversal modules");
        self.product.add_traversal(Part::BipedalLegs);
        self.product.add_traversal(Part::Arms);
    }

    fn build_detection_system(&mut self) {
        tracing::debug!(robot_type = ANDROID, "installing detection systems");
        self.product.add_detection_system(Part::CameraDetectionSystem);
    }
}

// ============================================================
// Autonomous car
// ============================================================

/// Four wheels and an infrared sensor.
#[derive(Debug, Clone)]
pub struct AutonomousCarBuilder {
    product: Robot,
}

impl AutonomousCarBuilder {
    pub fn new() -> Self {
        Self {
            product: Robot::new(AUTONOMOUS_CAR),
        }
    }
}

impl Default for AutonomousCarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotBuilder for AutonomousCarBuilder {
    fn robot_type(&self) -> &'static str {
        AUTONOMOUS_CAR
    }

    fn product(&self) -> &Robot {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Robot {
        &mut self.product
    }

    fn build_traversal(&mut self) {
        tracing::debug!(robot_type = AUTONOMOUS_CAR, "installing traversal modules");
        self.product.add_traversal(Part::FourWheels);
    }

    fn build_detection_system(&mut self) {
        tracing::debug!(robot_type = AUTONOMOUS_CAR, "installing detection systems");
        self.product
            .add_detection_system(Part::InfraredDetectionSystem);
    }
}

// ============================================================
// Flying monkey
// ============================================================

#[derive(Debug, Clone)]
pub struct FlyingMonkeyBuilder {
    product: Robot,
}

impl FlyingMonkeyBuilder {
    pub fn new() -> Self {
        Self {
            product: Robot::new(FLYING_MONKEY_ROBOT),
        }
    }
}

impl Default for FlyingMonkeyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotBuilder for FlyingMonkeyBuilder {
    fn robot_type(&self) -> &'static str {
        FLYING_MONKEY_ROBOT
    }

    fn product(&self) -> &Robot {
        &self.product
    }

    fn product_mut(&mut self) -> &mut Robot {
        &mut self.product
    }

    fn build_traversal(&mut self) {
        tracing::debug!(robot_type = FLYING_MONKEY_ROBOT, "installing traversal modules");
        self.product.extend_traversal([Part::Wings, Part::Arms]);
    }

    fn build_detection_system(&mut self) {
        tracing::debug!(robot_type = FLYING_MONKEY_ROBOT, "installing detection systems");
        // Infrared goes in before the cameras; render order follows.
        self.product.extend_detection_systems([
            Part::InfraredDetectionSystem,
            Part::CameraDetectionSystem,
        ]);
    }
}
