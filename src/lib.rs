//! Robots assembled with the Builder pattern.
//!
//! A [`Director`] runs a fixed sequence of steps (traversal, then detection,
//! then hand-over) against any [`RobotBuilder`]. Which robot comes out depends
//! only on the builder supplied.
//!
//! ```
//! use robot_builder::{AndroidBuilder, Director};
//!
//! let mut builder = AndroidBuilder::new();
//! let robot = Director::new().make_robot(&mut builder);
//! assert_eq!(robot.render_lines()[0], "ANDROID ");
//! ```

pub mod builder;
pub mod config;
pub mod director;
pub mod error;
pub mod models;
pub mod render;

pub use builder::{
    AndroidBuilder, AutonomousCarBuilder, FlyingMonkeyBuilder, RobotBuilder, RobotKind,
};
pub use director::Director;
pub use error::{Error, Result};
pub use models::{Part, PartCategory, Robot};
pub use render::OutputFormat;
