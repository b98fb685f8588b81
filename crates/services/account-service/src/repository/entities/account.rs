//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use common::AppError;
use domain::Account;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Normalized (trimmed, lowercased)
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: Option<String>,
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::business_profile::Entity")]
    BusinessProfile,
    #[sea_orm(has_one = "super::expert_profile::Entity")]
    ExpertProfile,
}

impl Related<super::business_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessProfile.def()
    }
}

impl Related<super::expert_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpertProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Account {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Account {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            role: model.role.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        ActiveModel {
            id: Set(account.id),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            role: Set(account.role.to_string()),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        }
    }
}
