use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601150001_create_usuarios"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique index on `correo`: email uniqueness is enforced by an
        // explicit pre-check in the create/update handlers.
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("usuarios"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id_usuario")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("nombre_completo")).string().not_null())
                    .col(ColumnDef::new(Alias::new("correo")).string().not_null())
                    .col(ColumnDef::new(Alias::new("id_rol")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("estado")).boolean().not_null().default(true))
                    .col(ColumnDef::new(Alias::new("cod_centro")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("usuarios")).to_owned())
            .await
    }
}
