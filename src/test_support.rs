use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::infra::contracts::Sleeper;

/// Sleeper that records requested delays instead of blocking. Clones share
/// the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    recorded: Rc<RefCell<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn recorded(&self) -> Vec<Duration> {
        self.recorded.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.recorded.borrow_mut().push(duration);
    }
}
