//! Domain layer: forum members, PM content and batch outcomes.

pub mod member;
pub mod private_message;
pub mod report;
