use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suppliers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Suppliers::Name).string().not_null())
                    .col(ColumnDef::new(Suppliers::TaxId).string().not_null())
                    .col(ColumnDef::new(Suppliers::Phone).string().not_null())
                    .col(ColumnDef::new(Suppliers::Email).string().null())
                    .to_owned(),
            )
            .await?;

        // Duplicate tax ids surface as a unique violation, mapped to 409
        manager
            .create_index(
                Index::create()
                    .name("uq_suppliers_tax_id")
                    .table(Suppliers::Table)
                    .col(Suppliers::TaxId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Suppliers {
    Table,
    Id,
    Name,
    TaxId,
    Phone,
    Email,
}
