//! Runs the fixed construction sequence against any builder.

use crate::builder::{RobotBuilder, RobotKind};
use crate::models::Robot;

/// Stateless orchestrator. Knows the order of the steps, never the parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    /// Build traversal, then detection, then hand back the product.
    ///
    /// Does not reset the builder first. Reusing a builder without calling
    /// [`RobotBuilder::reset`] stacks a second set of parts on the same robot.
    pub fn make_robot(&self, builder: &mut dyn RobotBuilder) -> Robot {
        tracing::debug!(robot_type = builder.robot_type(), "making robot");
        builder.build_traversal();
        builder.build_detection_system();
        builder.get_product()
    }

    /// Reset the builder, then [`Director::make_robot`].
    pub fn make_fresh_robot(&self, builder: &mut dyn RobotBuilder) -> Robot {
        builder.reset();
        self.make_robot(builder)
    }

    /// Put the same builder through the director `runs` times (at least once)
    /// and return the last product. Without `fresh`, every run stacks another
    /// set of parts.
    pub fn make_repeated(
        &self,
        builder: &mut dyn RobotBuilder,
        runs: usize,
        fresh: bool,
    ) -> Robot {
        let mut robot = self.make_robot(builder);
        for _ in 1..runs {
            robot = if fresh {
                self.make_fresh_robot(builder)
            } else {
                self.make_robot(builder)
            };
        }
        robot
    }

    /// One robot per kind, each from its own new builder.
    pub fn make_all(&self, kinds: &[RobotKind]) -> Vec<Robot> {
        kinds
            .iter()
            .map(|kind| self.make_robot(kind.builder().as_mut()))
            .collect()
    }
}
