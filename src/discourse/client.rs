use serde::Serialize;

use crate::{
    discourse::{
        rate_limit::RateLimitPolicy,
        transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError},
    },
    domain::{member::MembersPage, private_message::PmRequest},
    infra::{config::ForumConfig, contracts::Sleeper},
    usecases::contracts::{ForumApi, ForumApiError},
};

const MEMBERS_GROUP: &str = "trust_level_0";
const PRIVATE_MESSAGE_ARCHETYPE: &str = "private_message";

#[derive(Debug, Serialize)]
struct NewPrivateMessage<'a> {
    title: &'a str,
    raw: &'a str,
    archetype: &'static str,
    target_recipients: &'a str,
}

/// Discourse REST client limited to member listing, user lookup and PM
/// creation. Every call goes through the rate limit policy.
pub struct DiscourseClient {
    base_url: String,
    api_username: String,
    api_key: String,
    transport: Box<dyn HttpTransport>,
    sleeper: Box<dyn Sleeper>,
    policy: RateLimitPolicy,
}

impl DiscourseClient {
    pub fn new(
        forum: &ForumConfig,
        transport: Box<dyn HttpTransport>,
        sleeper: Box<dyn Sleeper>,
        policy: RateLimitPolicy,
    ) -> Self {
        Self {
            base_url: base_url(&forum.hostname),
            api_username: forum.username.clone(),
            api_key: forum.api_key.clone(),
            transport,
            sleeper,
            policy,
        }
    }

    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Api-Key", self.api_key.clone()),
            ("Api-Username", self.api_username.clone()),
            ("Accept", "application/json".to_owned()),
        ]
    }

    fn get(&self, operation: &'static str, path: &str) -> Result<HttpResponse, TransportError> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{}", self.base_url, path),
            headers: self.auth_headers(),
            body: None,
        };

        self.policy.execute(operation, self.sleeper.as_ref(), || {
            self.transport.execute(&request)
        })
    }

    fn post_json(
        &self,
        operation: &'static str,
        path: &str,
        body: String,
    ) -> Result<HttpResponse, TransportError> {
        let mut headers = self.auth_headers();
        headers.push(("Content-Type", "application/json".to_owned()));
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{}", self.base_url, path),
            headers,
            body: Some(body),
        };

        self.policy.execute(operation, self.sleeper.as_ref(), || {
            self.transport.execute(&request)
        })
    }
}

impl ForumApi for DiscourseClient {
    fn list_members(&self, limit: usize, offset: usize) -> Result<MembersPage, ForumApiError> {
        let path = format!("/groups/{MEMBERS_GROUP}/members?limit={limit}&offset={offset}");
        let response = self.get("list_members", &path).map_err(transport_error)?;
        ensure_success(&response)?;

        serde_json::from_str(&response.body)
            .map_err(|error| ForumApiError::InvalidData(error.to_string()))
    }

    fn user_exists(&self, username: &str) -> Result<bool, ForumApiError> {
        let path = format!("/u/{}", urlencoding::encode(username));
        let response = self.get("user_exists", &path).map_err(transport_error)?;

        let exists = response.is_success();
        if exists {
            tracing::info!(username, "user exists");
        } else {
            tracing::info!(username, status = response.status, "user does not exist");
        }

        Ok(exists)
    }

    fn send_private_message(
        &self,
        username: &str,
        request: &PmRequest,
    ) -> Result<(), ForumApiError> {
        let payload = NewPrivateMessage {
            title: &request.title,
            raw: &request.body,
            archetype: PRIVATE_MESSAGE_ARCHETYPE,
            target_recipients: username,
        };
        let body = serde_json::to_string(&payload)
            .map_err(|error| ForumApiError::InvalidData(error.to_string()))?;

        let response = self
            .post_json("send_private_message", "/posts", body)
            .map_err(transport_error)?;
        tracing::info!(
            "Sending PM to {username}: {} {}",
            response.status,
            response.reason
        );

        ensure_success(&response)
    }
}

fn base_url(hostname: &str) -> String {
    let hostname = hostname.trim().trim_end_matches('/');
    if hostname.starts_with("http://") || hostname.starts_with("https://") {
        hostname.to_owned()
    } else {
        format!("https://{hostname}")
    }
}

fn ensure_success(response: &HttpResponse) -> Result<(), ForumApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ForumApiError::Status {
            status: response.status,
            reason: response.reason.clone(),
        })
    }
}

fn transport_error(error: TransportError) -> ForumApiError {
    ForumApiError::Transport(error.0)
}
