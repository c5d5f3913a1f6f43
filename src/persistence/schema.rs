use crate::error::Result;
use crate::persistence::entity::category;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

const CREATE_CATEGORIES_TABLE: &str = "CREATE TABLE IF NOT EXISTS categorias (\
     id INTEGER PRIMARY KEY NOT NULL, \
     nome TEXT NOT NULL, \
     descricao TEXT\
     )";

/// Create the tables read by this service when they are missing.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    db.execute_unprepared(CREATE_CATEGORIES_TABLE).await?;
    tracing::debug!("Schema for 'categorias' is in place");
    Ok(())
}

/// Insert the sample categories into an empty table.
///
/// Returns how many rows were inserted; zero when the table already holds
/// data.
pub async fn seed_sample_categories(db: &DatabaseConnection) -> Result<usize> {
    let existing = category::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::info!(existing, "Skipping seed, 'categorias' is not empty");
        return Ok(0);
    }

    let samples = [
        (1, "Bebidas", None),
        (2, "Alimentos", Some("Itens comestíveis")),
    ];

    for (id, name, description) in samples {
        category::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            description: Set(description.map(str::to_string)),
        }
        .insert(db)
        .await?;
    }

    tracing::info!(inserted = samples.len(), "Seeded sample categories");
    Ok(samples.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::persistence::connect;

    async fn memory_db() -> DatabaseConnection {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let db = connect(&config).await.unwrap();
        ensure_schema(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_ensure_schema_is_repeatable() {
        let db = memory_db().await;
        ensure_schema(&db).await.unwrap();
        assert_eq!(category::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_only_fills_empty_table() {
        let db = memory_db().await;
        assert_eq!(seed_sample_categories(&db).await.unwrap(), 2);
        assert_eq!(seed_sample_categories(&db).await.unwrap(), 0);

        let bebidas = category::Entity::find_by_id(1).one(&db).await.unwrap().unwrap();
        assert_eq!(bebidas.name, "Bebidas");
        assert_eq!(bebidas.description, None);

        let alimentos = category::Entity::find_by_id(2).one(&db).await.unwrap().unwrap();
        assert_eq!(alimentos.description.as_deref(), Some("Itens comestíveis"));
    }
}
