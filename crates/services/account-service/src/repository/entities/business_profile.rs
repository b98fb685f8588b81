//! Business profile database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use common::{AppError, AppResult};
use domain::BusinessProfile;

use super::{from_json, to_json};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "business_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub company_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub industry_type: String,
    pub company_size: String,
    pub location: String,
    /// JSON array of expertise-area codes
    pub services_needed: Json,
    pub budget_min: f64,
    pub budget_max: f64,
    pub timeline: String,
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

impl TryFrom<Model> for BusinessProfile {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(BusinessProfile {
            id: model.id,
            account_id: model.account_id,
            company_name: model.company_name,
            description: model.description,
            industry_type: model.industry_type,
            company_size: model
                .company_size
                .parse()
                .map_err(|e| AppError::internal(format!("{}", e)))?,
            location: model.location,
            services_needed: from_json(model.services_needed)?,
            budget_min: model.budget_min,
            budget_max: model.budget_max,
            timeline: model.timeline,
        })
    }
}

/// Build the row for a new profile.
pub fn active_model(profile: &BusinessProfile) -> AppResult<ActiveModel> {
    Ok(ActiveModel {
        id: Set(profile.id),
        account_id: Set(profile.account_id),
        company_name: Set(profile.company_name.clone()),
        description: Set(profile.description.clone()),
        industry_type: Set(profile.industry_type.clone()),
        company_size: Set(profile.company_size.as_str().to_string()),
        location: Set(profile.location.clone()),
        services_needed: Set(to_json(&profile.services_needed)?),
        budget_min: Set(profile.budget_min),
        budget_max: Set(profile.budget_max),
        timeline: Set(profile.timeline.clone()),
    })
}
