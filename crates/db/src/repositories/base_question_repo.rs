//! Repository for the `base_questions` table.

use survey_core::types::DbId;

use crate::crud::{Changes, Changeset, CrudRepo, Entity, Field, FieldKind};
use crate::models::base_question::{BaseQuestion, CreateBaseQuestion, UpdateBaseQuestion};

/// Provides CRUD operations for base questions.
pub type BaseQuestionRepo = CrudRepo<BaseQuestion>;

impl Entity for BaseQuestion {
    const NAME: &'static str = "BaseQuestion";
    const TABLE: &'static str = "base_questions";
    const PRIMARY_KEY: &'static str = "id";
    const COLUMNS: &'static str =
        "id, category_cd, question_text, sort_order, created_at, updated_at";
    const ORDER_BY: &'static str = "sort_order, id";
    const FIELDS: &'static [Field] = &[
        Field::required("category_cd", FieldKind::Text),
        Field::required("question_text", FieldKind::Text),
        Field::required("sort_order", FieldKind::Int),
    ];

    type Id = DbId;
    type Create = CreateBaseQuestion;

    fn id(&self) -> DbId {
        self.id
    }
}

impl Changes for CreateBaseQuestion {
    fn changeset(&self) -> Changeset {
        Changeset::new()
            .set("category_cd", self.category_cd.clone())
            .set("question_text", self.question_text.clone())
            .set_opt("sort_order", self.sort_order)
    }
}

impl Changes for UpdateBaseQuestion {
    fn changeset(&self) -> Changeset {
        Changeset::new()
            .set_opt("category_cd", self.category_cd.clone())
            .set_opt("question_text", self.question_text.clone())
            .set_opt("sort_order", self.sort_order)
    }
}
