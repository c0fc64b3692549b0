//! Repository for the `surveys` table.

use sqlx::PgPool;
use survey_core::types::DbId;

use crate::crud::{begin_snapshot, Changes, Changeset, CrudRepo, Entity, Field, FieldKind};
use crate::models::program::Program;
use crate::models::survey::{CreateSurvey, Survey, SurveyDetail, UpdateSurvey};
use crate::models::survey_type::SurveyType;

/// Provides CRUD operations and the detail view for surveys.
pub type SurveyRepo = CrudRepo<Survey>;

impl Entity for Survey {
    const NAME: &'static str = "Survey";
    const TABLE: &'static str = "surveys";
    const PRIMARY_KEY: &'static str = "id";
    const COLUMNS: &'static str =
        "id, title, survey_type_cd, program_id, cal_year, created_at, updated_at";
    const FIELDS: &'static [Field] = &[
        Field::required("title", FieldKind::Text),
        Field::required("survey_type_cd", FieldKind::Text),
        Field::nullable("program_id", FieldKind::BigInt),
        Field::required("cal_year", FieldKind::Int),
    ];

    type Id = DbId;
    type Create = CreateSurvey;

    fn id(&self) -> DbId {
        self.id
    }
}

impl Changes for CreateSurvey {
    fn changeset(&self) -> Changeset {
        Changeset::new()
            .set("title", self.title.clone())
            .set("survey_type_cd", self.survey_type_cd.clone())
            .set_opt("program_id", self.program_id)
            .set("cal_year", self.cal_year)
    }
}

impl Changes for UpdateSurvey {
    fn changeset(&self) -> Changeset {
        Changeset::new()
            .set_opt("title", self.title.clone())
            .set_opt("survey_type_cd", self.survey_type_cd.clone())
            .set_opt("program_id", self.program_id)
            .set_opt("cal_year", self.cal_year)
    }
}

impl CrudRepo<Survey> {
    /// Find a survey by ID with its survey type and program resolved.
    ///
    /// The survey type is mandatory (foreign key); the program is optional.
    pub async fn get_detail(pool: &PgPool, id: DbId) -> Result<Option<SurveyDetail>, sqlx::Error> {
        let mut tx = begin_snapshot(pool).await?;
        let Some(survey) = Self::find_on(&mut *tx, id).await? else {
            return Ok(None);
        };
        let survey_type = CrudRepo::<SurveyType>::find_on(&mut *tx, survey.survey_type_cd.clone())
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        let program = match survey.program_id {
            Some(program_id) => CrudRepo::<Program>::find_on(&mut *tx, program_id).await?,
            None => None,
        };
        tx.commit().await?;
        Ok(Some(SurveyDetail {
            survey,
            survey_type,
            program,
        }))
    }
}
