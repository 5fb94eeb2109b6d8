//! Cache Entry Module
//!
//! Defines the structure for individual question cache entries.

use chrono::{DateTime, Duration, Utc};

use crate::models::QuestionGetSingleResponse;

// == Cache Entry ==
/// One cached question payload plus its optional expiry.
///
/// Entries are only ever replaced wholesale, never patched field by field.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The materialized question with its answers
    pub payload: QuestionGetSingleResponse,
    /// Expiration time, None = no expiration
    pub expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// # Arguments
    /// * `payload` - The question to store
    /// * `ttl_seconds` - Optional TTL in seconds
    pub fn new(payload: QuestionGetSingleResponse, ttl_seconds: Option<u64>) -> Self {
        let expires_at = ttl_seconds
            .and_then(|ttl| i64::try_from(ttl).ok())
            .map(|ttl| Utc::now() + Duration::seconds(ttl));

        Self {
            payload,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches the expiration
    /// time. Entries without a TTL never expire.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;

    fn question(id: QuestionId) -> QuestionGetSingleResponse {
        QuestionGetSingleResponse {
            question_id: id,
            title: format!("Question {}", id),
            content: "content".to_string(),
            user_id: "u1".to_string(),
            user_name: "user".to_string(),
            created: Utc::now(),
            answers: Vec::new(),
        }
    }

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new(question(1), None);

        assert_eq!(entry.payload.question_id, 1);
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
        assert!(!entry.is_expired_at(Utc::now() + Duration::days(365)));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = CacheEntry::new(question(2), Some(60));

        let expires = entry.expires_at.unwrap();
        assert!(!entry.is_expired());
        assert!(expires <= Utc::now() + Duration::seconds(60));
        assert!(expires > Utc::now() + Duration::seconds(58));
    }

    #[test]
    fn test_entry_expired_in_the_future() {
        let entry = CacheEntry::new(question(3), Some(10));
        let later = Utc::now() + Duration::seconds(11);

        assert!(entry.is_expired_at(later));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let entry = CacheEntry {
            payload: question(4),
            expires_at: Some(now),
        };

        assert!(entry.is_expired_at(now), "Entry should be expired at boundary");
        assert!(!entry.is_expired_at(now - Duration::milliseconds(1)));
    }
}
