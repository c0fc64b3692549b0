//! Integration tests for the generic repository against a real database.
//!
//! Covers the five CRUD primitives through the per-entity aliases:
//! - create then get round-trips to an equal value
//! - partial updates touch only supplied fields and never the primary key
//! - delete removes and returns the row
//! - get_all honours skip/limit with a stable order
//! - constraint violations surface as storage errors

use assert_matches::assert_matches;
use serde_json::json;
use sqlx::PgPool;
use survey_core::pagination::MAX_PAGE_LIMIT;
use survey_db::crud::{Changes, Changeset, Entity};
use survey_db::models::base_question::CreateBaseQuestion;
use survey_db::models::category::{CreateCategory, UpdateCategory};
use survey_db::models::program::{CreateProgram, Program, UpdateProgram};
use survey_db::models::survey::{CreateSurvey, UpdateSurvey};
use survey_db::models::survey_type::{CreateSurveyType, SurveyType, UpdateSurveyType};
use survey_db::repositories::{
    BaseQuestionRepo, CategoryRepo, ProgramRepo, SurveyRepo, SurveyTypeRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_program(name: &str, code: &str) -> CreateProgram {
    CreateProgram {
        program_name: name.to_string(),
        program_code: code.to_string(),
        cal_year: 2025,
    }
}

fn new_survey_type(code: &str) -> CreateSurveyType {
    CreateSurveyType {
        survey_type_cd: code.to_string(),
        survey_type_desc: Some(format!("{code} description")),
    }
}

fn new_survey(title: &str, survey_type_cd: &str, program_id: Option<i64>) -> CreateSurvey {
    CreateSurvey {
        title: title.to_string(),
        survey_type_cd: survey_type_cd.to_string(),
        program_id,
        cal_year: 2025,
    }
}

fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_get_returns_equal_entity(pool: PgPool) {
    let created = ProgramRepo::create(&pool, &new_program("New", "N"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.program_name, "New");
    assert_eq!(created.program_code, "N");
    assert_eq!(created.cal_year, 2025);

    let fetched = ProgramRepo::get(&pool, created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_returns_none(pool: PgPool) {
    assert!(ProgramRepo::get(&pool, 999_999).await.unwrap().is_none());
    assert!(SurveyTypeRepo::get(&pool, "NOPE".to_string())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_client_supplied_key(pool: PgPool) {
    let created = SurveyTypeRepo::create(&pool, &new_survey_type("ST1"))
        .await
        .unwrap();
    assert_eq!(created.survey_type_cd, "ST1");
    assert_eq!(created.id(), "ST1");

    let fetched = SurveyTypeRepo::get(&pool, "ST1".to_string()).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_omitted_fields_take_storage_defaults(pool: PgPool) {
    CategoryRepo::create(
        &pool,
        &CreateCategory {
            category_cd: "C1".into(),
            category_desc: None,
        },
    )
    .await
    .unwrap();

    let question = BaseQuestionRepo::create(
        &pool,
        &CreateBaseQuestion {
            category_cd: "C1".into(),
            question_text: "How often?".into(),
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(question.sort_order, 0);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_applies_only_supplied_fields(pool: PgPool) {
    let original = ProgramRepo::create(&pool, &new_program("Old", "O"))
        .await
        .unwrap();

    let patch = UpdateProgram {
        program_name: Some("Updated".into()),
        ..Default::default()
    };
    let updated = ProgramRepo::update(&pool, &original, patch.changeset())
        .await
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.program_name, "Updated");
    assert_eq!(updated.program_code, original.program_code);
    assert_eq!(updated.cal_year, original.cal_year);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_never_changes_primary_key(pool: PgPool) {
    let original = ProgramRepo::create(&pool, &new_program("Keep", "K"))
        .await
        .unwrap();

    let changes = Changeset::new()
        .set("id", original.id + 100)
        .set("cal_year", 2030_i32);
    let updated = ProgramRepo::update(&pool, &original, changes).await.unwrap();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.cal_year, 2030);

    let survey_type = SurveyTypeRepo::create(&pool, &new_survey_type("ST1"))
        .await
        .unwrap();
    let changes = Changeset::new()
        .set("survey_type_cd", "HIJACK")
        .set_opt("survey_type_desc", Some(None::<String>));
    let updated = SurveyTypeRepo::update(&pool, &survey_type, changes)
        .await
        .unwrap();
    assert_eq!(updated.survey_type_cd, "ST1");
    assert_eq!(updated.survey_type_desc, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_from_map_ignores_unknown_keys(pool: PgPool) {
    let original = ProgramRepo::create(&pool, &new_program("Map", "M"))
        .await
        .unwrap();

    let map = object(json!({
        "id": 12345,
        "program_name": "From Map",
        "not_a_column": "ignored",
    }));
    let changes = Changeset::from_json(&map, Program::FIELDS).unwrap();
    let updated = ProgramRepo::update(&pool, &original, changes).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.program_name, "From Map");
    assert_eq!(updated.program_code, "M");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_nothing_to_write_rereads_row(pool: PgPool) {
    let original = SurveyTypeRepo::create(&pool, &new_survey_type("ST1"))
        .await
        .unwrap();

    let unchanged = SurveyTypeRepo::update(&pool, &original, UpdateSurveyType::default().changeset())
        .await
        .unwrap();
    assert_eq!(unchanged, original);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_explicit_null_clears_nullable_column(pool: PgPool) {
    let program = ProgramRepo::create(&pool, &new_program("P", "P"))
        .await
        .unwrap();
    SurveyTypeRepo::create(&pool, &new_survey_type("ST1"))
        .await
        .unwrap();
    let survey = SurveyRepo::create(&pool, &new_survey("S1", "ST1", Some(program.id)))
        .await
        .unwrap();
    assert_eq!(survey.program_id, Some(program.id));

    let patch: UpdateSurvey = serde_json::from_value(json!({"program_id": null})).unwrap();
    let updated = SurveyRepo::update(&pool, &survey, patch.changeset())
        .await
        .unwrap();
    assert_eq!(updated.program_id, None);
    assert_eq!(updated.title, "S1");

    let patch: UpdateCategory = serde_json::from_value(json!({})).unwrap();
    assert!(patch.changeset().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_of_deleted_row_is_row_not_found(pool: PgPool) {
    let program = ProgramRepo::create(&pool, &new_program("Gone", "G"))
        .await
        .unwrap();
    ProgramRepo::delete(&pool, program.id).await.unwrap();

    let changes = Changeset::new().set("program_name", "Ghost");
    let err = ProgramRepo::update(&pool, &program, changes)
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::RowNotFound);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_returns_removed_entity(pool: PgPool) {
    let program = ProgramRepo::create(&pool, &new_program("Bye", "B"))
        .await
        .unwrap();

    let removed = ProgramRepo::delete(&pool, program.id).await.unwrap();
    assert_eq!(removed, Some(program.clone()));
    assert!(ProgramRepo::get(&pool, program.id).await.unwrap().is_none());

    // A second delete finds nothing.
    assert!(ProgramRepo::delete(&pool, program.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_program_detaches_surveys(pool: PgPool) {
    let program = ProgramRepo::create(&pool, &new_program("Parent", "PA"))
        .await
        .unwrap();
    SurveyTypeRepo::create(&pool, &new_survey_type("ST1"))
        .await
        .unwrap();
    let survey = SurveyRepo::create(&pool, &new_survey("Child", "ST1", Some(program.id)))
        .await
        .unwrap();

    ProgramRepo::delete(&pool, program.id).await.unwrap();

    let survey = SurveyRepo::get(&pool, survey.id).await.unwrap().unwrap();
    assert_eq!(survey.program_id, None);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_all_respects_skip_and_limit(pool: PgPool) {
    let mut ids = Vec::new();
    for i in 0..5 {
        let p = ProgramRepo::create(&pool, &new_program(&format!("P{i}"), &format!("C{i}")))
            .await
            .unwrap();
        ids.push(p.id);
    }

    let all = ProgramRepo::get_all(&pool, 0, 100).await.unwrap();
    assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), ids);

    let page = ProgramRepo::get_all(&pool, 1, 2).await.unwrap();
    assert_eq!(page.iter().map(|p| p.id).collect::<Vec<_>>(), ids[1..3]);

    assert!(ProgramRepo::get_all(&pool, 0, 0).await.unwrap().is_empty());
    assert!(ProgramRepo::get_all(&pool, 10, 5).await.unwrap().is_empty());

    // Repeated reads of an unchanged table come back in the same order.
    let again = ProgramRepo::get_all(&pool, 0, 100).await.unwrap();
    assert_eq!(again, all);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_all_caps_page_size(pool: PgPool) {
    sqlx::query(
        "INSERT INTO programs (program_name, program_code, cal_year) \
         SELECT 'Program ' || g, 'C' || g, 2025 FROM generate_series(1, 1005) AS g",
    )
    .execute(&pool)
    .await
    .unwrap();

    let page = ProgramRepo::get_all(&pool, 0, 5000).await.unwrap();
    assert_eq!(page.len() as i64, MAX_PAGE_LIMIT);

    let tail = ProgramRepo::get_all(&pool, 1000, 5000).await.unwrap();
    assert_eq!(tail.len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_all_on_empty_table(pool: PgPool) {
    let types: Vec<SurveyType> = SurveyTypeRepo::get_all(&pool, 0, 100).await.unwrap();
    assert!(types.is_empty());
}

// ---------------------------------------------------------------------------
// Constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_program_code_is_unique_violation(pool: PgPool) {
    ProgramRepo::create(&pool, &new_program("A", "DUP"))
        .await
        .unwrap();
    let err = ProgramRepo::create(&pool, &new_program("B", "DUP"))
        .await
        .unwrap_err();

    assert_matches!(&err, sqlx::Error::Database(db_err) => {
        assert_eq!(db_err.code().as_deref(), Some("23505"));
        assert_eq!(db_err.constraint(), Some("uq_programs_program_code"));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_survey_with_unknown_type_is_fk_violation(pool: PgPool) {
    let err = SurveyRepo::create(&pool, &new_survey("Orphan", "MISSING", None))
        .await
        .unwrap_err();

    assert_matches!(&err, sqlx::Error::Database(db_err) => {
        assert_eq!(db_err.code().as_deref(), Some("23503"));
    });
}
