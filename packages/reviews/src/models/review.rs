use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

use super::rating::{from_stored, normalize_rating};

#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub gig_id: i32,
    pub user_id: i32,
    pub rating: Decimal,
    #[serde(default)]
    pub comment: String,
}

impl NewReview {
    /// A review with an empty comment.
    pub fn new(gig_id: i32, user_id: i32, rating: Decimal) -> Self {
        Self {
            gig_id,
            user_id,
            rating,
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Only `rating` and `comment` are mutable after creation.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ReviewUpdate {
    pub rating: Option<Decimal>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReviewRecord {
    pub id: i32,
    pub gig_id: i32,
    pub user_id: i32,
    pub rating: Decimal,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entity::review::Model> for ReviewRecord {
    fn from(m: crate::entity::review::Model) -> Self {
        Self {
            id: m.id,
            gig_id: m.gig_id,
            user_id: m.user_id,
            rating: from_stored(m.rating),
            comment: m.comment,
            created_at: m.created_at,
        }
    }
}

/// `"Review by {username} for {gig_title}"`.
pub fn review_label(username: &str, gig_title: &str) -> String {
    format!("Review by {username} for {gig_title}")
}

/// Returns the normalized rating to store.
pub fn validate_new_review(req: &NewReview) -> Result<Decimal, StoreError> {
    normalize_rating(req.rating)
}

/// Returns the normalized rating to store, if one was supplied.
pub fn validate_review_update(req: &ReviewUpdate) -> Result<Option<Decimal>, StoreError> {
    req.rating.map(normalize_rating).transpose()
}
