//! Migration: Create business_profiles table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_accounts_table::Accounts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BusinessProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BusinessProfiles::AccountId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BusinessProfiles::CompanyName).string().not_null())
                    .col(ColumnDef::new(BusinessProfiles::Description).text().not_null())
                    .col(ColumnDef::new(BusinessProfiles::IndustryType).string().not_null())
                    .col(ColumnDef::new(BusinessProfiles::CompanySize).string_len(16).not_null())
                    .col(ColumnDef::new(BusinessProfiles::Location).string().not_null())
                    .col(ColumnDef::new(BusinessProfiles::ServicesNeeded).json().not_null())
                    .col(ColumnDef::new(BusinessProfiles::BudgetMin).double().not_null())
                    .col(ColumnDef::new(BusinessProfiles::BudgetMax).double().not_null())
                    .col(ColumnDef::new(BusinessProfiles::Timeline).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_profiles_account_id")
                            .from(BusinessProfiles::Table, BusinessProfiles::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BusinessProfiles {
    Table,
    Id,
    AccountId,
    CompanyName,
    Description,
    IndustryType,
    CompanySize,
    Location,
    ServicesNeeded,
    BudgetMin,
    BudgetMax,
    Timeline,
}
