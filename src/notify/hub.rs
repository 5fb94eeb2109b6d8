//! Per-question broadcast groups.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::debug;

use super::{group_name, NotifyError, QuestionNotifier};
use crate::models::{QuestionGetSingleResponse, QuestionId};

/// Default number of undelivered messages a slow subscriber may lag behind.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// In-process notification hub with one broadcast channel per question.
///
/// Groups are created on first subscription and dropped once a publish
/// finds nobody listening.
#[derive(Debug)]
pub struct QuestionHub {
    groups: Mutex<HashMap<QuestionId, broadcast::Sender<QuestionGetSingleResponse>>>,
    channel_capacity: usize,
}

impl Default for QuestionHub {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl QuestionHub {
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            groups: Mutex::new(HashMap::new()),
            channel_capacity: channel_capacity.max(1),
        }
    }

    /// Joins the group for `question_id`.
    pub fn subscribe(&self, question_id: QuestionId) -> broadcast::Receiver<QuestionGetSingleResponse> {
        let mut groups = self.groups.lock();
        let sender = groups
            .entry(question_id)
            .or_insert_with(|| broadcast::channel(self.channel_capacity).0);
        debug!(group = %group_name(question_id), "viewer subscribed");
        sender.subscribe()
    }

    /// Leaves the group, dropping it when it becomes empty.
    pub fn unsubscribe(
        &self,
        question_id: QuestionId,
        receiver: broadcast::Receiver<QuestionGetSingleResponse>,
    ) {
        drop(receiver);
        let mut groups = self.groups.lock();
        if groups
            .get(&question_id)
            .is_some_and(|sender| sender.receiver_count() == 0)
        {
            groups.remove(&question_id);
            debug!(group = %group_name(question_id), "group closed");
        }
    }

    pub fn subscriber_count(&self, question_id: QuestionId) -> usize {
        self.groups
            .lock()
            .get(&question_id)
            .map_or(0, |sender| sender.receiver_count())
    }

    pub fn group_count(&self) -> usize {
        self.groups.lock().len()
    }
}

#[async_trait]
impl QuestionNotifier for QuestionHub {
    async fn question_updated(
        &self,
        question: &QuestionGetSingleResponse,
    ) -> std::result::Result<usize, NotifyError> {
        let mut groups = self.groups.lock();
        let Some(sender) = groups.get(&question.question_id) else {
            return Ok(0);
        };

        match sender.send(question.clone()) {
            Ok(delivered) => {
                debug!(group = %group_name(question.question_id), delivered, "question pushed");
                Ok(delivered)
            }
            Err(_) => {
                // every receiver is gone
                groups.remove(&question.question_id);
                Ok(0)
            }
        }
    }
}
