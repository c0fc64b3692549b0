//! HTTP-level tests for `/api/v1/categories` and `/api/v1/base_questions`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn seed_category(pool: &PgPool, code: &str) {
    common::create(
        pool,
        "/api/v1/categories",
        json!({"category_cd": code, "category_desc": "Demographics"}),
    )
    .await;
}

async fn seed_question(pool: &PgPool, category: &str, text: &str, sort_order: i32) -> i64 {
    let json = common::create(
        pool,
        "/api/v1/base_questions",
        json!({"category_cd": category, "question_text": text, "sort_order": sort_order}),
    )
    .await;
    json["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_detail_lists_questions_in_order(pool: PgPool) {
    seed_category(&pool, "DEMO").await;
    seed_question(&pool, "DEMO", "Second", 2).await;
    seed_question(&pool, "DEMO", "First", 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories/DEMO").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["category_cd"], "DEMO");
    let texts: Vec<_> = json["base_questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["question_text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["First", "Second"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories/NOPE").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Category with key NOPE not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_category_code_returns_409(pool: PgPool) {
    seed_category(&pool, "DEMO").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/categories", json!({"category_cd": "DEMO"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("pk_categories"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn question_defaults_sort_order(pool: PgPool) {
    seed_category(&pool, "DEMO").await;

    let json = common::create(
        &pool,
        "/api/v1/base_questions",
        json!({"category_cd": "DEMO", "question_text": "Age?"}),
    )
    .await;
    assert_eq!(json["sort_order"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn question_patch_and_get(pool: PgPool) {
    seed_category(&pool, "DEMO").await;
    let id = seed_question(&pool, "DEMO", "Age?", 1).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/base_questions/{id}"),
        json!({"question_text": "What is your age?"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/base_questions/{id}")).await).await;
    assert_eq!(json["question_text"], "What is your age?");
    assert_eq!(json["sort_order"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn question_patch_rejects_empty_text(pool: PgPool) {
    seed_category(&pool, "DEMO").await;
    let id = seed_question(&pool, "DEMO", "Age?", 1).await;

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/base_questions/{id}"),
        json!({"question_text": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_category_removes_its_questions(pool: PgPool) {
    seed_category(&pool, "DEMO").await;
    let id = seed_question(&pool, "DEMO", "Age?", 1).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/v1/categories/DEMO").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["category_cd"], "DEMO");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/base_questions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_patch_rejects_overlong_description(pool: PgPool) {
    seed_category(&pool, "DEMO").await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        "/api/v1/categories/DEMO",
        json!({"category_desc": "x".repeat(256)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/categories/DEMO").await).await;
    assert_eq!(json["category_desc"], "Demographics");
}
