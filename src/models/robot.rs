use serde::{Deserialize, Serialize};

use super::Part;

pub const TRAVERSAL_HEADER: &str = "Traversal modules installed:";
pub const DETECTION_HEADER: &str = "Detection systems installed:";

/// The product assembled by a [`RobotBuilder`](crate::builder::RobotBuilder).
///
/// Both part sequences are append-only while the robot is being built, and
/// their insertion order is the order in which they render. Nothing stops a
/// caller from mutating a robot after it has been handed over, but builders
/// never touch a robot again once it has been taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    robot_type: String,
    traversal: Vec<Part>,
    detection_systems: Vec<Part>,
}

impl Robot {
    pub fn new(robot_type: impl Into<String>) -> Self {
        Self {
            robot_type: robot_type.into(),
            traversal: Vec::new(),
            detection_systems: Vec::new(),
        }
    }

    pub fn robot_type(&self) -> &str {
        &self.robot_type
    }

    pub fn traversal(&self) -> &[Part] {
        &self.traversal
    }

    pub fn detection_systems(&self) -> &[Part] {
        &self.detection_systems
    }

    /// True when no parts of either kind have been installed.
    pub fn is_bare(&self) -> bool {
        self.traversal.is_empty() && self.detection_systems.is_empty()
    }

    pub fn add_traversal(&mut self, part: Part) {
        self.traversal.push(part);
    }

    pub fn add_detection_system(&mut self, part: Part) {
        self.detection_systems.push(part);
    }

    pub fn extend_traversal(&mut self, parts: impl IntoIterator<Item = Part>) {
        self.traversal.extend(parts);
    }

    pub fn extend_detection_systems(&mut self, parts: impl IntoIterator<Item = Part>) {
        self.detection_systems.extend(parts);
    }

    /// Render the robot as display lines.
    ///
    /// The type line always comes first: the type label plus one trailing
    /// space (`"ANDROID "` below, the space is not visible). Section headers
    /// are omitted for empty sequences.
    ///
    /// ```text
    /// ANDROID
    /// Traversal modules installed:
    /// - two legs
    /// - two arms
    /// Detection systems installed:
    /// - cameras
    /// ```
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{} ", self.robot_type)];

        if !self.traversal.is_empty() {
            lines.push(TRAVERSAL_HEADER.to_string());
            lines.extend(self.traversal.iter().map(|part| format!("- {}", part)));
        }

        if !self.detection_systems.is_empty() {
            lines.push(DETECTION_HEADER.to_string());
            lines.extend(
                self.detection_systems
                    .iter()
                    .map(|part| format!("- {}", part)),
            );
        }

        lines
    }
}

impl std::fmt::Display for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.render_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
