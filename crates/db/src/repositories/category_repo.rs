//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::crud::{begin_snapshot, Changes, Changeset, CrudRepo, Entity, Field, FieldKind};
use crate::models::base_question::BaseQuestion;
use crate::models::category::{Category, CategoryDetail, CreateCategory, UpdateCategory};

/// Provides CRUD operations and the detail view for categories.
pub type CategoryRepo = CrudRepo<Category>;

impl Entity for Category {
    const NAME: &'static str = "Category";
    const TABLE: &'static str = "categories";
    const PRIMARY_KEY: &'static str = "category_cd";
    const COLUMNS: &'static str = "category_cd, category_desc, created_at, updated_at";
    const FIELDS: &'static [Field] = &[
        Field::required("category_cd", FieldKind::Text),
        Field::nullable("category_desc", FieldKind::Text),
    ];

    type Id = String;
    type Create = CreateCategory;

    fn id(&self) -> String {
        self.category_cd.clone()
    }
}

impl Changes for CreateCategory {
    fn changeset(&self) -> Changeset {
        Changeset::new()
            .set("category_cd", self.category_cd.clone())
            .set_opt("category_desc", self.category_desc.clone())
    }
}

impl Changes for UpdateCategory {
    fn changeset(&self) -> Changeset {
        Changeset::new().set_opt("category_desc", self.category_desc.clone())
    }
}

impl CrudRepo<Category> {
    /// Find a category by code with its base questions preloaded.
    pub async fn get_detail(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<CategoryDetail>, sqlx::Error> {
        let mut tx = begin_snapshot(pool).await?;
        let Some(category) = Self::find_on(&mut *tx, code.to_string()).await? else {
            return Ok(None);
        };
        let base_questions = CrudRepo::<BaseQuestion>::load_by(
            &mut *tx,
            "category_cd",
            category.category_cd.clone(),
        )
        .await?;
        tx.commit().await?;
        Ok(Some(CategoryDetail {
            category,
            base_questions,
        }))
    }
}
