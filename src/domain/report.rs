/// Per-recipient outcome of a batch send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub delivered: Vec<String>,
    pub failed: Vec<String>,
    /// Requested users the forum reported as unknown.
    pub missing: Vec<String>,
}

impl BatchReport {
    pub fn record_delivery(&mut self, username: &str, delivered: bool) {
        if delivered {
            self.delivered.push(username.to_owned());
        } else {
            self.failed.push(username.to_owned());
        }
    }

    pub fn record_missing(&mut self, username: &str) {
        self.missing.push(username.to_owned());
    }

    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempted_counts_failures_but_not_missing_users() {
        let mut report = BatchReport::default();
        report.record_delivery("alice", true);
        report.record_delivery("bob", false);
        report.record_missing("carol");

        assert_eq!(report.attempted(), 2);
        assert_eq!(report.delivered, vec!["alice".to_owned()]);
        assert_eq!(report.failed, vec!["bob".to_owned()]);
        assert_eq!(report.missing, vec!["carol".to_owned()]);
    }
}
