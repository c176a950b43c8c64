use serde::{Deserialize, Serialize};

use crate::error::StoreError;

use super::shared::validate_title;

#[derive(Debug, Clone, Deserialize)]
pub struct NewGig {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct GigUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GigRecord {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl From<crate::entity::gig::Model> for GigRecord {
    fn from(m: crate::entity::gig::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
        }
    }
}

/// Display label of a gig: its title, verbatim.
pub fn gig_label(gig: &GigRecord) -> &str {
    &gig.title
}

pub fn validate_new_gig(req: &NewGig) -> Result<(), StoreError> {
    validate_title(&req.title)
}

pub fn validate_gig_update(req: &GigUpdate) -> Result<(), StoreError> {
    if let Some(ref title) = req.title {
        validate_title(title)?;
    }
    Ok(())
}
