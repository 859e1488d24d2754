use crate::{infra::config::AppConfig, usecases::messenger::Pacing};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            request_delay: self.config.pacing.request_delay(),
            page_size: self.config.pacing.page_size,
        }
    }
}
