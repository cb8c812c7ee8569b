use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601150002_create_grupos"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("grupos"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("cod_ficha")).integer().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("nombre_nivel")).string().not_null())
                    .col(ColumnDef::new(Alias::new("estado_grupo")).string().not_null())
                    .col(ColumnDef::new(Alias::new("modalidad")).string().not_null())
                    .col(ColumnDef::new(Alias::new("cod_centro")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("fecha_inicio")).date().not_null())
                    .col(ColumnDef::new(Alias::new("fecha_fin")).date().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("grupos")).to_owned())
            .await
    }
}
