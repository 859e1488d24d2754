use std::time::Duration;

use crate::infra::{config::AppConfig, error::AppError};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError>;
}

/// Durable list of usernames still waiting for a bulk send.
pub trait WorkListStore {
    fn users(&self) -> &[String];
    fn set(&mut self, usernames: Vec<String>) -> Result<(), AppError>;
    fn remove(&mut self, username: &str) -> Result<(), AppError>;
}

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
