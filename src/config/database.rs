use crate::domain::{
    member::entity::member,
    skill::entity::{level, member_skill, skill},
    team::entity::{member_team, team, team_skill_requirement},
};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, EntityName, Schema, Statement,
};
use std::env;
use tracing::info;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    info!("Successfully connected to the database.");

    let should_update_schema = env::var("DB_SCHEMA_UPDATE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid DB_SCHEMA_UPDATE value, defaulting to false. Use 'true' or 'false'."
            );
            false
        });

    if should_update_schema {
        create_tables(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

/// 엔티티 정의로부터 테이블과 유니크 인덱스를 생성합니다.
///
/// 이미 존재하는 테이블/인덱스는 건너뛰므로 여러 번 호출해도 안전합니다.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // 부모 테이블 먼저 (FK 순서)
    create_table_if_not_exists(db, &schema, member::Entity).await?;
    create_table_if_not_exists(db, &schema, skill::Entity).await?;
    create_table_if_not_exists(db, &schema, level::Entity).await?;
    create_table_if_not_exists(db, &schema, team::Entity).await?;

    create_table_if_not_exists(db, &schema, member_team::Entity).await?;
    create_table_if_not_exists(db, &schema, member_skill::Entity).await?;
    create_table_if_not_exists(db, &schema, team_skill_requirement::Entity).await?;

    create_unique_index_if_not_exists(db, "uq_member_email", "member", &["email"]).await?;
    create_unique_index_if_not_exists(db, "uq_skill_name", "skill", &["name"]).await?;
    create_unique_index_if_not_exists(
        db,
        "uq_member_team_member_team",
        "member_team",
        &["member_id", "team_id"],
    )
    .await?;
    create_unique_index_if_not_exists(
        db,
        "uq_member_skill_member_skill",
        "member_skill",
        &["member_id", "skill_id"],
    )
    .await?;
    create_unique_index_if_not_exists(
        db,
        "uq_team_skill_requirement_team_skill_level",
        "team_skill_requirement",
        &["team_id", "skill_id", "desired_level"],
    )
    .await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_unique_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let sql = format!(
        "CREATE UNIQUE INDEX {} ON {} ({})",
        index_name,
        table_name,
        columns.join(", ")
    );
    let stmt = Statement::from_string(backend, sql);
    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate") || err_str.contains("exists") {
                Ok(())
            } else {
                tracing::error!("Failed to create unique index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map(|_| ()).map_err(|e| {
        tracing::error!("Failed to create table {}: {}", entity.table_name(), e);
        e
    })
}
