//! Migration: Create expert_profiles table.

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
                    .table(ExpertProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExpertProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExpertProfiles::AccountId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ExpertProfiles::Name).string().not_null())
                    .col(ColumnDef::new(ExpertProfiles::ProfessionalTitle).string().not_null())
                    .col(ColumnDef::new(ExpertProfiles::YearsOfExperience).integer().not_null())
                    .col(ColumnDef::new(ExpertProfiles::AreasOfExpertise).json().not_null())
                    .col(ColumnDef::new(ExpertProfiles::Certifications).json().not_null())
                    .col(ColumnDef::new(ExpertProfiles::HourlyRate).double().not_null())
                    .col(ColumnDef::new(ExpertProfiles::Location).string().not_null())
                    .col(
                        ColumnDef::new(ExpertProfiles::RemoteOnly)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ExpertProfiles::Bio).text().not_null())
                    .col(ColumnDef::new(ExpertProfiles::ProfessionalSummary).text().not_null())
                    .col(ColumnDef::new(ExpertProfiles::LinkedinUrl).string().null())
                    .col(ColumnDef::new(ExpertProfiles::WebsiteUrl).string().null())
                    .col(ColumnDef::new(ExpertProfiles::Languages).json().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expert_profiles_account_id")
                            .from(ExpertProfiles::Table, ExpertProfiles::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExpertProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ExpertProfiles {
    Table,
    Id,
    AccountId,
    Name,
    ProfessionalTitle,
    YearsOfExperience,
    AreasOfExpertise,
    Certifications,
    HourlyRate,
    Location,
    RemoteOnly,
    Bio,
    ProfessionalSummary,
    LinkedinUrl,
    WebsiteUrl,
    Languages,
}
