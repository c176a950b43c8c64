use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};

use crate::entity::{gig, review};
use crate::error::StoreError;
use crate::models::gig::*;

/// Look up a gig by ID, returning `NotFound` if absent.
pub async fn find_gig<C: ConnectionTrait>(db: &C, id: i32) -> Result<gig::Model, StoreError> {
    gig::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("Gig {id} not found")))
}

pub struct GigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create(&self, payload: NewGig) -> Result<GigRecord, StoreError> {
        validate_new_gig(&payload)?;

        let new_gig = gig::ActiveModel {
            title: Set(payload.title),
            description: Set(payload.description),
            ..Default::default()
        };
        let model = new_gig.insert(self.db).await?;

        info!(id = model.id, "Gig created");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<GigRecord, StoreError> {
        Ok(find_gig(self.db, id).await?.into())
    }

    pub async fn list(&self) -> Result<Vec<GigRecord>, StoreError> {
        let gigs = gig::Entity::find()
            .order_by_asc(gig::Column::Id)
            .all(self.db)
            .await?;
        Ok(gigs.into_iter().map(GigRecord::from).collect())
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(gig::Entity::find().count(self.db).await?)
    }

    /// PATCH semantics: only provided fields are modified.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i32, payload: GigUpdate) -> Result<GigRecord, StoreError> {
        validate_gig_update(&payload)?;

        if payload == GigUpdate::default() {
            return self.get(id).await;
        }

        let txn = self.db.begin().await?;

        let existing = find_gig(&txn, id).await?;
        let mut active: gig::ActiveModel = existing.into();

        if let Some(title) = payload.title {
            active.title = Set(title);
        }
        if let Some(description) = payload.description {
            active.description = Set(description);
        }

        let model = active.update(&txn).await?;
        txn.commit().await?;

        Ok(model.into())
    }

    /// Delete a gig together with all of its reviews. Returns the number of
    /// reviews removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let txn = self.db.begin().await?;

        find_gig(&txn, id).await?;

        let removed = review::Entity::delete_many()
            .filter(review::Column::GigId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        gig::Entity::delete_by_id(id).exec(&txn).await?;

        let remaining = review::Entity::find()
            .filter(review::Column::GigId.eq(id))
            .count(&txn)
            .await?;
        if remaining > 0 {
            // dropping txn rolls back
            return Err(StoreError::CascadeDelete(format!(
                "{remaining} reviews still reference gig {id}"
            )));
        }

        txn.commit().await?;

        info!(reviews_removed = removed, "Gig deleted");
        Ok(removed)
    }
}
