//! Repository for the `programs` table.

use sqlx::PgPool;
use survey_core::types::DbId;

use crate::crud::{begin_snapshot, Changes, Changeset, CrudRepo, Entity, Field, FieldKind};
use crate::models::program::{CreateProgram, Program, ProgramDetail, UpdateProgram};
use crate::models::survey::Survey;

/// Provides CRUD operations and the detail view for programs.
pub type ProgramRepo = CrudRepo<Program>;

impl Entity for Program {
    const NAME: &'static str = "Program";
    const TABLE: &'static str = "programs";
    const PRIMARY_KEY: &'static str = "id";
    const COLUMNS: &'static str =
        "id, program_name, program_code, cal_year, created_at, updated_at";
    const FIELDS: &'static [Field] = &[
        Field::required("program_name", FieldKind::Text),
        Field::required("program_code", FieldKind::Text),
        Field::required("cal_year", FieldKind::Int),
    ];

    type Id = DbId;
    type Create = CreateProgram;

    fn id(&self) -> DbId {
        self.id
    }
}

impl Changes for CreateProgram {
    fn changeset(&self) -> Changeset {
        Changeset::new()
            .set("program_name", self.program_name.clone())
            .set("program_code", self.program_code.clone())
            .set("cal_year", self.cal_year)
    }
}

impl Changes for UpdateProgram {
    fn changeset(&self) -> Changeset {
        Changeset::new()
            .set_opt("program_name", self.program_name.clone())
            .set_opt("program_code", self.program_code.clone())
            .set_opt("cal_year", self.cal_year)
    }
}

impl CrudRepo<Program> {
    /// Find a program by ID together with all of its surveys.
    pub async fn get_detail(pool: &PgPool, id: DbId) -> Result<Option<ProgramDetail>, sqlx::Error> {
        let mut tx = begin_snapshot(pool).await?;
        let Some(program) = Self::find_on(&mut *tx, id).await? else {
            return Ok(None);
        };
        let surveys = CrudRepo::<Survey>::load_by(&mut *tx, "program_id", program.id).await?;
        tx.commit().await?;
        Ok(Some(ProgramDetail { program, surveys }))
    }
}
