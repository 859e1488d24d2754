//! Infrastructure layer: config, logging, persisted state and OS integrations.

pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
pub mod secrets;
pub mod work_list;
