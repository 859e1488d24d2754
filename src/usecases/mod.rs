//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod compose;
pub mod context;
pub mod contracts;
pub mod messenger;
