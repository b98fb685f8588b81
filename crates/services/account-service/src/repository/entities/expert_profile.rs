//! Expert profile database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use common::{AppError, AppResult};
use domain::ExpertProfile;

use super::{from_json, to_json};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expert_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub name: String,
    pub professional_title: String,
    pub years_of_experience: i32,
    /// JSON array of expertise-area codes
    pub areas_of_expertise: Json,
    /// JSON array of certification codes
    pub certifications: Json,
    pub hourly_rate: f64,
    pub location: String,
    pub remote_only: bool,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(column_type = "Text")]
    pub professional_summary: String,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
    /// JSON array of language names
    pub languages: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_delete = "Cascade"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ExpertProfile {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(ExpertProfile {
            id: model.id,
            account_id: model.account_id,
            name: model.name,
            professional_title: model.professional_title,
            years_of_experience: model.years_of_experience,
            areas_of_expertise: from_json(model.areas_of_expertise)?,
            certifications: from_json(model.certifications)?,
            hourly_rate: model.hourly_rate,
            location: model.location,
            remote_only: model.remote_only,
            bio: model.bio,
            professional_summary: model.professional_summary,
            linkedin_url: model.linkedin_url,
            website_url: model.website_url,
            languages: from_json(model.languages)?,
        })
    }
}

/// Build the row for a new profile.
pub fn active_model(profile: &ExpertProfile) -> AppResult<ActiveModel> {
    Ok(ActiveModel {
        id: Set(profile.id),
        account_id: Set(profile.account_id),
        name: Set(profile.name.clone()),
        professional_title: Set(profile.professional_title.clone()),
        years_of_experience: Set(profile.years_of_experience),
        areas_of_expertise: Set(to_json(&profile.areas_of_expertise)?),
        certifications: Set(to_json(&profile.certifications)?),
        hourly_rate: Set(profile.hourly_rate),
        location: Set(profile.location.clone()),
        remote_only: Set(profile.remote_only),
        bio: Set(profile.bio.clone()),
        professional_summary: Set(profile.professional_summary.clone()),
        linkedin_url: Set(profile.linkedin_url.clone()),
        website_url: Set(profile.website_url.clone()),
        languages: Set(to_json(&profile.languages)?),
    })
}
