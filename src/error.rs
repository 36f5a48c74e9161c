use thiserror::Error;

/// Errors surfaced while choosing what to build or how to show it.
///
/// Assembly itself never fails; these only come from parsing user input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown robot kind '{0}' (expected one of: android, autonomous_car, flying_monkey)")]
    UnknownRobotKind(String),

    #[error("Unknown output format '{0}' (expected one of: text, tree, json)")]
    UnknownFormat(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
