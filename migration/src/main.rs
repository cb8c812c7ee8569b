use migration::Migrator;
use sea_orm_migration::MigratorTrait;

#[tokio::main]
async fn main() {
    let db = db::connect().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");
    println!("Migrations applied");
}
