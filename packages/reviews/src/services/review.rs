use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument, warn};

use crate::entity::review;
use crate::error::StoreError;
use crate::models::gig::{GigRecord, gig_label};
use crate::models::review::*;
use crate::services::gig::find_gig;
use crate::users::UserDirectory;

/// Look up a review by ID, returning `NotFound` if absent.
pub async fn find_review<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<review::Model, StoreError> {
    review::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Review {id} not found")))
}

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
    users: &'a dyn UserDirectory,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection, users: &'a dyn UserDirectory) -> Self {
        Self { db, users }
    }

    /// Create a review. Both `gig_id` and `user_id` must resolve; otherwise
    /// nothing is written.
    #[instrument(skip(self, payload), fields(gig_id = payload.gig_id, user_id = payload.user_id))]
    pub async fn create(&self, payload: NewReview) -> Result<ReviewRecord, StoreError> {
        let rating = validate_new_review(&payload)?;

        // Resolved before the transaction opens: the directory may share the pool.
        if self.users.resolve(payload.user_id).await?.is_none() {
            warn!("Review references unknown user");
            return Err(StoreError::Reference(format!(
                "User {} does not exist",
                payload.user_id
            )));
        }

        let txn = self.db.begin().await?;

        find_gig(&txn, payload.gig_id).await.map_err(|e| match e {
            StoreError::NotFound(_) => {
                warn!("Review references unknown gig");
                StoreError::Reference(format!("Gig {} does not exist", payload.gig_id))
            }
            other => other,
        })?;

        let new_review = review::ActiveModel {
            gig_id: Set(payload.gig_id),
            user_id: Set(payload.user_id),
            rating: Set(rating),
            comment: Set(payload.comment),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let model = new_review.insert(&txn).await?;
        txn.commit().await?;

        info!(id = model.id, "Review created");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<ReviewRecord, StoreError> {
        Ok(find_review(self.db, id).await?.into())
    }

    /// Reviews of a gig, oldest first.
    pub async fn list_for_gig(&self, gig_id: i32) -> Result<Vec<ReviewRecord>, StoreError> {
        let rows = review::Entity::find()
            .filter(review::Column::GigId.eq(gig_id))
            .order_by_asc(review::Column::CreatedAt)
            .order_by_asc(review::Column::Id)
            .all(self.db)
            .await?;
        Ok(rows.into_iter().map(ReviewRecord::from).collect())
    }

    /// Reviews written by a user, oldest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<ReviewRecord>, StoreError> {
        let rows = review::Entity::find()
            .filter(review::Column::UserId.eq(user_id))
            .order_by_asc(review::Column::CreatedAt)
            .order_by_asc(review::Column::Id)
            .all(self.db)
            .await?;
        Ok(rows.into_iter().map(ReviewRecord::from).collect())
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(review::Entity::find().count(self.db).await?)
    }

    pub async fn count_for_gig(&self, gig_id: i32) -> Result<u64, StoreError> {
        Ok(review::Entity::find()
            .filter(review::Column::GigId.eq(gig_id))
            .count(self.db)
            .await?)
    }

    /// PATCH semantics on `rating` and `comment`. `created_at` is never written.
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: i32,
        payload: ReviewUpdate,
    ) -> Result<ReviewRecord, StoreError> {
        let rating = validate_review_update(&payload)?;

        if payload == ReviewUpdate::default() {
            return self.get(id).await;
        }

        let txn = self.db.begin().await?;

        let existing = find_review(&txn, id).await?;
        let mut active: review::ActiveModel = existing.into();

        if let Some(rating) = rating {
            active.rating = Set(rating);
        }
        if let Some(comment) = payload.comment {
            active.comment = Set(comment);
        }

        let model = active.update(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = review::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!("Review {id} not found")));
        }
        Ok(())
    }

    /// Remove every review authored by `user_id`. Called by the account
    /// subsystem when a user is deleted.
    #[instrument(skip(self))]
    pub async fn delete_for_user(&self, user_id: i32) -> Result<u64, StoreError> {
        let txn = self.db.begin().await?;

        let removed = review::Entity::delete_many()
            .filter(review::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?
            .rows_affected;

        let remaining = review::Entity::find()
            .filter(review::Column::UserId.eq(user_id))
            .count(&txn)
            .await?;
        if remaining > 0 {
            return Err(StoreError::CascadeDelete(format!(
                "{remaining} reviews still reference user {user_id}"
            )));
        }

        txn.commit().await?;

        info!(reviews_removed = removed, "User reviews deleted");
        Ok(removed)
    }

    /// `"Review by {username} for {gig title}"` for a stored review.
    #[instrument(skip(self))]
    pub async fn label(&self, id: i32) -> Result<String, StoreError> {
        let review = find_review(self.db, id).await?;
        let gig: GigRecord = find_gig(self.db, review.gig_id).await?.into();
        let author = self
            .users
            .resolve(review.user_id)
            .await?
            .ok_or_else(|| {
                StoreError::Reference(format!("User {} does not exist", review.user_id))
            })?;

        Ok(review_label(&author.username, gig_label(&gig)))
    }
}
