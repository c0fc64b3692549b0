//! Repository for the `survey_types` table.

use sqlx::PgPool;

use crate::crud::{begin_snapshot, Changes, Changeset, CrudRepo, Entity, Field, FieldKind};
use crate::models::survey::Survey;
use crate::models::survey_type::{
    CreateSurveyType, SurveyType, SurveyTypeDetail, UpdateSurveyType,
};

/// Provides CRUD operations and the detail view for survey types.
pub type SurveyTypeRepo = CrudRepo<SurveyType>;

impl Entity for SurveyType {
    const NAME: &'static str = "SurveyType";
    const TABLE: &'static str = "survey_types";
    const PRIMARY_KEY: &'static str = "survey_type_cd";
    const COLUMNS: &'static str = "survey_type_cd, survey_type_desc, created_at, updated_at";
    const FIELDS: &'static [Field] = &[
        Field::required("survey_type_cd", FieldKind::Text),
        Field::nullable("survey_type_desc", FieldKind::Text),
    ];

    type Id = String;
    type Create = CreateSurveyType;

    fn id(&self) -> String {
        self.survey_type_cd.clone()
    }
}

impl Changes for CreateSurveyType {
    fn changeset(&self) -> Changeset {
        Changeset::new()
            .set("survey_type_cd", self.survey_type_cd.clone())
            .set_opt("survey_type_desc", self.survey_type_desc.clone())
    }
}

impl Changes for UpdateSurveyType {
    fn changeset(&self) -> Changeset {
        Changeset::new().set_opt("survey_type_desc", self.survey_type_desc.clone())
    }
}

impl CrudRepo<SurveyType> {
    /// Find a survey type by code together with every survey using it.
    pub async fn get_detail(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<SurveyTypeDetail>, sqlx::Error> {
        let mut tx = begin_snapshot(pool).await?;
        let Some(survey_type) = Self::find_on(&mut *tx, code.to_string()).await? else {
            return Ok(None);
        };
        let surveys = CrudRepo::<Survey>::load_by(
            &mut *tx,
            "survey_type_cd",
            survey_type.survey_type_cd.clone(),
        )
        .await?;
        tx.commit().await?;
        Ok(Some(SurveyTypeDetail {
            survey_type,
            surveys,
        }))
    }
}
