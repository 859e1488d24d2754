use std::path::Path;

use crate::{
    discourse::{rate_limit::RateLimitPolicy, transport::ReqwestTransport, DiscourseClient},
    infra::{
        self,
        config::FileConfigAdapter,
        contracts::{ConfigAdapter, ThreadSleeper},
        error::AppError,
    },
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path))?;
    infra::logging::init(&context.config.logging)?;

    tracing::debug!(config = ?context.config, "configuration loaded");
    Ok(context)
}

pub fn compose_client(context: &AppContext) -> Result<DiscourseClient, AppError> {
    let transport = ReqwestTransport::new(&context.config.http)?;
    let policy = RateLimitPolicy {
        fallback_wait: context.config.pacing.rate_limit_fallback(),
    };

    Ok(DiscourseClient::new(
        &context.config.forum,
        Box::new(transport),
        Box::new(ThreadSleeper),
        policy,
    ))
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config = config_adapter.load()?;

    Ok(AppContext::new(config))
}
