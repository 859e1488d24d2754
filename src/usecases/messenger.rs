//! Messaging workflows: single user, explicit list, everyone, moderators.
//!
//! Each workflow is a linear walk over usernames with a fixed pause between
//! consecutive recipients. Failures for one recipient are logged and never
//! stop the batch.

use std::{collections::HashSet, time::Duration};

use crate::{
    domain::{member::ForumMember, private_message::PmRequest, report::BatchReport},
    infra::{
        contracts::{Sleeper, WorkListStore},
        error::AppError,
    },
    usecases::contracts::{Confirm, ForumApi},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause between member pages and between recipients.
    pub request_delay: Duration,
    pub page_size: usize,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_secs(1),
            page_size: 50,
        }
    }
}

pub struct Messenger<'a> {
    api: &'a dyn ForumApi,
    sleeper: &'a dyn Sleeper,
    pacing: Pacing,
}

impl<'a> Messenger<'a> {
    pub fn new(api: &'a dyn ForumApi, sleeper: &'a dyn Sleeper, pacing: Pacing) -> Self {
        Self {
            api,
            sleeper,
            pacing,
        }
    }

    pub fn pm_single(&self, username: &str, request: &PmRequest) -> BatchReport {
        let mut report = BatchReport::default();
        self.pm_if_exists(username, request, &mut report);
        report
    }

    pub fn pm_users(&self, usernames: &[String], request: &PmRequest) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, username) in usernames.iter().enumerate() {
            self.pm_if_exists(username, request, &mut report);
            if index + 1 < usernames.len() {
                self.pause();
            }
        }

        report
    }

    /// Sends to every member, resuming an interrupted run when the work list
    /// still holds users and the operator agrees.
    pub fn pm_all(
        &self,
        store: &mut dyn WorkListStore,
        confirm: &mut dyn Confirm,
        request: &PmRequest,
    ) -> Result<BatchReport, AppError> {
        let pending = store.users().len();
        let resume = pending > 0
            && confirm
                .confirm(&format!(
                    "A previous run left {pending} users without a PM. Resume it?"
                ))
                .unwrap_or_else(|error| {
                    tracing::warn!(error = %error, "resume prompt failed, starting over");
                    false
                });

        let usernames = if resume {
            tracing::info!(pending, "resuming previous run");
            store.users().to_vec()
        } else {
            let usernames: Vec<String> = self
                .collect_members()
                .into_iter()
                .map(|member| member.username)
                .collect();
            store.set(usernames.clone())?;
            usernames
        };

        let mut report = BatchReport::default();
        for (index, username) in usernames.iter().enumerate() {
            let delivered = self.deliver(username, request);
            report.record_delivery(username, delivered);
            store.remove(username)?;

            if index + 1 < usernames.len() {
                self.pause();
            }
        }

        Ok(report)
    }

    pub fn pm_moderators(&self, request: &PmRequest) -> BatchReport {
        let moderators: Vec<ForumMember> = self
            .collect_members()
            .into_iter()
            .filter(|member| member.moderator)
            .collect();
        tracing::info!(count = moderators.len(), "moderators found");

        let mut report = BatchReport::default();
        for (index, member) in moderators.iter().enumerate() {
            let delivered = self.deliver(&member.username, request);
            report.record_delivery(&member.username, delivered);

            if index + 1 < moderators.len() {
                self.pause();
            }
        }

        report
    }

    /// Walks the member listing page by page, keeping the first occurrence
    /// of each username. Stops on a page that adds no new usernames, once the
    /// reported total is reached, or at the first failed page, keeping
    /// whatever was gathered so far.
    pub fn collect_members(&self) -> Vec<ForumMember> {
        let limit = self.pacing.page_size.max(1);
        let mut offset = 0;
        let mut members: Vec<ForumMember> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        tracing::info!("gathering all users");
        loop {
            let page = match self.api.list_members(limit, offset) {
                Ok(page) => page,
                Err(error) => {
                    tracing::warn!(offset, error = %error, "member listing stopped early");
                    break;
                }
            };

            let total = page.meta.total;
            let before = members.len();
            members.extend(
                page.members
                    .into_iter()
                    .filter(|member| seen.insert(member.username.clone())),
            );

            let added = members.len() - before;
            if added == 0 {
                break;
            }

            tracing::info!(
                added,
                gathered = members.len(),
                total,
                "added {added} new users, {:.1}% complete",
                percent(members.len(), total)
            );

            if members.len() >= total {
                break;
            }

            offset += limit;
            self.pause();
        }

        members
    }

    fn pm_if_exists(&self, username: &str, request: &PmRequest, report: &mut BatchReport) {
        match self.api.user_exists(username) {
            Ok(true) => {
                let delivered = self.deliver(username, request);
                report.record_delivery(username, delivered);
            }
            Ok(false) => report.record_missing(username),
            Err(error) => {
                tracing::warn!(username, error = %error, "user lookup failed, skipping");
                report.record_delivery(username, false);
            }
        }
    }

    fn deliver(&self, username: &str, request: &PmRequest) -> bool {
        match self.api.send_private_message(username, request) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(username, error = %error, "PM was not delivered");
                false
            }
        }
    }

    fn pause(&self) {
        self.sleeper.sleep(self.pacing.request_delay);
    }
}

fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        100.0 * done as f64 / total as f64
    }
}
