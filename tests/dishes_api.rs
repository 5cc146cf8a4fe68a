// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Integration tests for the `/api/dishes` surface.

mod common;

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use potluck::{
    AppError, SqliteStore,
    api::dishes::{
        ListDishesParams, create_dish, delete_dish, get_dish, list_dishes, update_dish,
    },
};
use potluck_core::prelude::*;

use crate::common::{dish, person, setup};

async fn create(
    store: &Arc<SqliteStore>,
    name: &str,
    description: &str,
    person_id: Option<i64>,
) -> DishResponse {
    let (status, Json(body)) =
        create_dish(State(store.clone()), Json(dish(name, description, person_id)))
            .await
            .expect("create dish failed");
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn list(store: &Arc<SqliteStore>, include_people: bool) -> Vec<DishResponse> {
    let Json(dishes) = list_dishes(State(store.clone()), Query(ListDishesParams { include_people }))
        .await
        .expect("list dishes failed");
    dishes
}

#[tokio::test]
async fn create_returns_the_stored_dish() {
    let store = setup().await;
    let mark = PersonRepository::create(store.as_ref(), person("Mark Cohen", true))
        .await
        .expect("create person failed");

    let body = create(&store, "Turkey", "Roasted whole", Some(mark.id)).await;

    assert!(body.id > 0);
    assert_eq!(body.name, "Turkey");
    assert_eq!(body.description, "Roasted whole");
    assert_eq!(body.person_id, Some(mark.id));
    assert!(body.person.is_none());
}

#[tokio::test]
async fn create_accepts_an_unassigned_dish() {
    let store = setup().await;

    let body = create(&store, "Pumpkin pie", "With cream", None).await;

    assert_eq!(body.person_id, None);
}

#[tokio::test]
async fn create_without_description_is_rejected_and_persists_nothing() {
    let store = setup().await;

    let dto: CreateDishRequest = serde_json::from_value(serde_json::json!({"name": "Turkey"}))
        .expect("payload should deserialize");
    let err = create_dish(State(store.clone()), Json(dto))
        .await
        .expect_err("missing description must be rejected");

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(list(&store, false).await.is_empty());
}

#[tokio::test]
async fn duplicate_name_or_description_conflicts() {
    let store = setup().await;
    create(&store, "Turkey", "Roasted whole", None).await;

    let err = create_dish(
        State(store.clone()),
        Json(dish("Turkey", "Deep fried", None)),
    )
    .await
    .expect_err("duplicate name must be rejected");
    assert!(matches!(err, AppError::Conflict(_)));

    let err = create_dish(
        State(store.clone()),
        Json(dish("Tofurkey", "Roasted whole", None)),
    )
    .await
    .expect_err("duplicate description must be rejected");
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.status(), StatusCode::CONFLICT);

    assert_eq!(list(&store, false).await.len(), 1);
}

#[tokio::test]
async fn create_with_unknown_person_fails() {
    let store = setup().await;

    let err = create_dish(
        State(store.clone()),
        Json(dish("Turkey", "Roasted whole", Some(999))),
    )
    .await
    .expect_err("dangling person reference must be rejected");

    assert!(matches!(err, AppError::Database(_)));
    assert!(list(&store, false).await.is_empty());
}

#[tokio::test]
async fn plain_list_leaves_people_out() {
    let store = setup().await;
    let mark = PersonRepository::create(store.as_ref(), person("Mark Cohen", true))
        .await
        .expect("create person failed");
    create(&store, "Turkey", "Roasted whole", Some(mark.id)).await;

    let dishes = list(&store, false).await;

    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].person_id, Some(mark.id));
    assert!(dishes[0].person.is_none());
}

#[tokio::test]
async fn include_people_attaches_the_assigned_person() {
    let store = setup().await;
    let mark = PersonRepository::create(store.as_ref(), person("Mark Cohen", true))
        .await
        .expect("create person failed");
    create(&store, "Turkey", "Roasted whole", Some(mark.id)).await;
    create(&store, "Pumpkin pie", "With cream", None).await;

    let dishes = list(&store, true).await;

    assert_eq!(dishes.len(), 2);
    let turkey = &dishes[0];
    let owner = turkey.person.as_ref().expect("person must be attached");
    assert_eq!(owner.id, mark.id);
    assert_eq!(owner.name, "Mark Cohen");

    // An unassigned dish stays bare even when inclusion is requested.
    assert!(dishes[1].person.is_none());
}

#[tokio::test]
async fn get_returns_the_dish_or_not_found() {
    let store = setup().await;
    let turkey = create(&store, "Turkey", "Roasted whole", None).await;

    let Json(found) = get_dish(State(store.clone()), Path(turkey.id))
        .await
        .expect("get dish failed");
    assert_eq!(found.name, "Turkey");

    let err = get_dish(State(store.clone()), Path(999))
        .await
        .expect_err("unknown id must be rejected");
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_renames_and_reassigns() {
    let store = setup().await;
    let mark = PersonRepository::create(store.as_ref(), person("Mark Cohen", true))
        .await
        .expect("create person failed");
    let ryan = PersonRepository::create(store.as_ref(), person("Ryan Howard", true))
        .await
        .expect("create person failed");
    let turkey = create(&store, "Turkey", "Roasted whole", Some(mark.id)).await;

    let Json(updated) = update_dish(
        State(store.clone()),
        Path(turkey.id),
        Json(UpdateDishRequest {
            name: Some("Tofurkey".into()),
            description: None,
            person_id: Some(ryan.id),
        }),
    )
    .await
    .expect("update dish failed");

    assert_eq!(updated.name, "Tofurkey");
    assert_eq!(updated.description, "Roasted whole");
    assert_eq!(updated.person_id, Some(ryan.id));
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = setup().await;

    let err = update_dish(
        State(store.clone()),
        Path(999),
        Json(UpdateDishRequest {
            name: Some("Nothing".into()),
            ..Default::default()
        }),
    )
    .await
    .expect_err("unknown id must be rejected");

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_exactly_that_dish() {
    let store = setup().await;
    let turkey = create(&store, "Turkey", "Roasted whole", None).await;
    create(&store, "Pumpkin pie", "With cream", None).await;

    let status = delete_dish(State(store.clone()), Path(turkey.id))
        .await
        .expect("delete dish failed");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let dishes = list(&store, false).await;
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].name, "Pumpkin pie");

    let err = delete_dish(State(store.clone()), Path(turkey.id))
        .await
        .expect_err("deleted id must be gone");
    assert!(matches!(err, AppError::NotFound(_)));
}
