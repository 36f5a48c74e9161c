//! The builder contract and its concrete robot recipes.
//!
//! Each concrete builder owns exactly one [`Robot`] under construction. The
//! two recipe steps are the only thing a builder has to supply; resetting and
//! handing out the product are shared default methods.
//!
//! Recipe steps append. Calling [`RobotBuilder::build_traversal`] twice without
//! a [`RobotBuilder::reset`] in between installs the traversal parts twice.

mod kind;
mod variants;

pub use kind::*;
pub use variants::*;

use crate::models::Robot;

pub trait RobotBuilder {
    /// Type label stamped on every robot this builder starts.
    fn robot_type(&self) -> &'static str;

    fn product(&self) -> &Robot;

    fn product_mut(&mut self) -> &mut Robot;

    /// Append this builder's traversal parts to the robot in progress.
    fn build_traversal(&mut self);

    /// Append this builder's detection parts to the robot in progress.
    fn build_detection_system(&mut self);

    /// Discard the robot in progress and start a fresh one.
    fn reset(&mut self) {
        let robot_type = self.robot_type();
        tracing::debug!(robot_type, "resetting builder");
        *self.product_mut() = Robot::new(robot_type);
    }

    /// The robot as it currently stands. The builder keeps its own copy, so
    /// further steps keep modifying the same robot.
    fn get_product(&self) -> Robot {
        self.product().clone()
    }

    /// Move the robot out, leaving a fresh one behind.
    fn take_product(&mut self) -> Robot {
        let fresh = Robot::new(self.robot_type());
        std::mem::replace(self.product_mut(), fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Part;

    #[test]
    fn test_reset_keeps_type_label() {
        let mut builder = AndroidBuilder::new();
        builder.build_traversal();
        builder.reset();

        let robot = builder.get_product();
        assert_eq!(robot.robot_type(), "ANDROID");
        assert!(robot.is_bare());
    }

    #[test]
    fn test_get_product_does_not_reset() {
        let mut builder = AutonomousCarBuilder::new();
        builder.build_traversal();
        let first = builder.get_product();
        builder.build_detection_system();
        let second = builder.get_product();

        assert!(first.detection_systems().is_empty());
        assert_eq!(second.traversal(), &[Part::FourWheels]);
        assert_eq!(second.detection_systems(), &[Part::InfraredDetectionSystem]);
    }

    #[test]
    fn test_take_product_leaves_fresh_robot() {
        let mut builder = FlyingMonkeyBuilder::new();
        builder.build_traversal();

        let taken = builder.take_product();
        assert_eq!(taken.traversal(), &[Part::Wings, Part::Arms]);

        let left = builder.get_product();
        assert_eq!(left.robot_type(), "FLYING MONKEY ROBOT");
        assert!(left.is_bare());
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut builder: Box<dyn RobotBuilder> = Box::new(AndroidBuilder::new());
        builder.build_detection_system();
        assert_eq!(
            builder.get_product().detection_systems(),
            &[Part::CameraDetectionSystem]
        );
    }
}
