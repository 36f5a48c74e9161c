//! Domain models for robot assembly.
//!
//! - [`Part`]: Immutable subcomponent with a fixed label. Parts are the open-ended
//!   side of the design; new variants slot in without touching the director.
//! - [`Robot`]: The product. A type label plus ordered traversal and detection
//!   part sequences, rendered in insertion order.

mod part;
mod robot;

pub use part::*;
pub use robot::*;
