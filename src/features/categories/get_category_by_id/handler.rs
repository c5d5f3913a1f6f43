use crate::error::Result;
use crate::persistence::entity::category;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Public shape of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// Reads one category by primary key
pub struct GetCategoryByIdHandler {
    db: Arc<DatabaseConnection>,
}

impl GetCategoryByIdHandler {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Look up the category with `id`.
    ///
    /// A missing row is `Ok(None)`; only store failures are errors.
    #[tracing::instrument(name = "handler::get_category_by_id", skip(self))]
    pub async fn execute(&self, id: i32) -> Result<Option<CategoryResponse>> {
        let found = category::Entity::find_by_id(id).one(self.db.as_ref()).await?;

        match &found {
            Some(_) => tracing::debug!("Category found"),
            None => tracing::debug!("Category not found"),
        }

        Ok(found.map(CategoryResponse::from))
    }
}
