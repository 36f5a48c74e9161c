//! Output formats for finished robots.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Part, Robot, DETECTION_HEADER, TRAVERSAL_HEADER};

/// How robots are written to stdout.
///
/// - `Text`: the robot's own rendering, followed by a blank line
/// - `Tree`: ASCII tree with one branch per section
/// - `Json`: pretty-printed JSON array
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Tree => "tree",
            Self::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "tree" => Some(Self::Tree),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Render a batch of robots in the given format.
pub fn render_robots(robots: &[Robot], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => robots.iter().map(|robot| format!("{}\n", robot)).collect(),
        OutputFormat::Tree => robots.iter().map(render_tree).collect(),
        OutputFormat::Json => render_json(robots),
    }
}

fn render_json(robots: &[Robot]) -> String {
    // Robot holds only strings and unit enum variants, which always serialize.
    match serde_json::to_string_pretty(robots) {
        Ok(mut json) => {
            json.push('\n');
            json
        }
        Err(e) => {
            tracing::error!("Failed to serialize robots: {}", e);
            String::new()
        }
    }
}

/// Render a robot as an ASCII tree.
///
/// Example output:
/// ```text
/// FLYING MONKEY ROBOT
/// ├── Traversal modules installed:
/// │   ├── wings
/// │   └── two arms
/// └── Detection systems installed:
///     ├── infrared
///     └── cameras
/// ```
pub fn render_tree(robot: &Robot) -> String {
    let mut output = String::new();
    output.push_str(robot.robot_type());
    output.push('\n');

    let sections: Vec<(&str, &[Part])> = [
        (TRAVERSAL_HEADER, robot.traversal()),
        (DETECTION_HEADER, robot.detection_systems()),
    ]
    .into_iter()
    .filter(|(_, parts)| !parts.is_empty())
    .collect();

    for (i, (header, parts)) in sections.iter().enumerate() {
        let is_last = i == sections.len() - 1;
        render_section(&mut output, header, parts, is_last);
    }

    output
}

fn render_section(output: &mut String, header: &str, parts: &[Part], is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(branch);
    output.push_str(header);
    output.push('\n');

    let child_prefix = if is_last { "    " } else { "│   " };
    for (i, part) in parts.iter().enumerate() {
        let child_branch = if i == parts.len() - 1 {
            "└── "
        } else {
            "├── "
        };
        output.push_str(child_prefix);
        output.push_str(child_branch);
        output.push_str(part.label());
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_robot(robot_type: &str, traversal: &[Part], detection: &[Part]) -> Robot {
        let mut robot = Robot::new(robot_type);
        robot.extend_traversal(traversal.iter().copied());
        robot.extend_detection_systems(detection.iter().copied());
        robot
    }

    #[test]
    fn test_tree_bare_robot() {
        let robot = make_robot("PROTOTYPE", &[], &[]);
        assert_eq!(render_tree(&robot), "PROTOTYPE\n");
    }

    #[test]
    fn test_tree_both_sections() {
        let robot = make_robot(
            "FLYING MONKEY ROBOT",
            &[Part::Wings, Part::Arms],
            &[Part::InfraredDetectionSystem, Part::CameraDetectionSystem],
        );
        let expected = "FLYING MONKEY ROBOT\n\
            ├── Traversal modules installed:\n\
            │   ├── wings\n\
            │   └── two arms\n\
            └── Detection systems installed:\n    \
            ├── infrared\n    \
            └── cameras\n";
        assert_eq!(render_tree(&robot), expected);
    }

    #[test]
    fn test_tree_detection_only() {
        let robot = make_robot("SENTRY", &[], &[Part::CameraDetectionSystem]);
        assert_eq!(
            render_tree(&robot),
            "SENTRY\n└── Detection systems installed:\n    └── cameras\n"
        );
    }

    #[test]
    fn test_text_separates_robots_with_blank_line() {
        let robots = vec![
            make_robot("A", &[], &[]),
            make_robot("B", &[Part::Blades], &[]),
        ];
        assert_eq!(
            render_robots(&robots, OutputFormat::Text),
            "A \n\nB \nTraversal modules installed:\n- blades\n\n"
        );
    }

    #[test]
    fn test_json_lists_parts() {
        let robots = vec![make_robot(
            "AUTONOMOUS CAR",
            &[Part::FourWheels],
            &[Part::InfraredDetectionSystem],
        )];
        let json = render_robots(&robots, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["robot_type"], "AUTONOMOUS CAR");
        assert_eq!(value[0]["traversal"][0], "four_wheels");
        assert_eq!(value[0]["detection_systems"][0], "infrared_detection_system");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::parse("yaml"),
            Err(Error::UnknownFormat(_))
        ));
    }
}
