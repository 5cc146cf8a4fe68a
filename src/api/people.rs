// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Person CRUD handlers.
//!
//! Handlers are generic over the repository so the same surface serves the
//! SQLite store and any in-memory test double implementing
//! [`PersonRepository`].

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use potluck_core::prelude::*;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Query parameters for `GET /api/people`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListPeopleParams {
    /// Keep only People whose attendance matches. Wins over
    /// `include_dishes` when both are supplied.
    pub attending: Option<bool>,

    /// Attach each Person's Dishes to the response.
    #[serde(default)]
    pub include_dishes: bool,
}

/// Create a new Person.
///
/// # Responses
///
/// - `201 Created` - Person created successfully
/// - `400 Bad Request` - Required field missing or empty
/// - `409 Conflict` - Name already in use
#[utoipa::path(
    post,
    path = "/api/people",
    tag = "People",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person created successfully", body = PersonResponse),
        (status = 400, description = "Required field missing or empty"),
        (status = 409, description = "Name already in use"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_person<R>(
    State(repo): State<Arc<R>>,
    Json(dto): Json<CreatePersonRequest>,
) -> AppResult<(StatusCode, Json<PersonResponse>)>
where
    R: PersonRepository<Error = AppError> + 'static,
{
    dto.validate()?;
    let person = repo.create(dto).await?;
    Ok((StatusCode::CREATED, Json(PersonResponse::from(person))))
}

/// List People.
///
/// Exactly one query mode applies per request; see
/// [`PersonListQuery::from_params`] for the precedence.
///
/// # Responses
///
/// - `200 OK` - List of People
#[utoipa::path(
    get,
    path = "/api/people",
    tag = "People",
    params(ListPeopleParams),
    responses(
        (status = 200, description = "List of People", body = Vec<PersonResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_people<R>(
    State(repo): State<Arc<R>>,
    Query(params): Query<ListPeopleParams>,
) -> AppResult<Json<Vec<PersonResponse>>>
where
    R: PersonRepository<Error = AppError> + 'static,
{
    let people: Vec<PersonResponse> =
        match PersonListQuery::from_params(params.attending, params.include_dishes) {
            PersonListQuery::All => repo
                .list()
                .await?
                .into_iter()
                .map(PersonResponse::from)
                .collect(),
            PersonListQuery::Attending(value) => repo
                .list_by_attending(value)
                .await?
                .into_iter()
                .map(PersonResponse::from)
                .collect(),
            PersonListQuery::WithDishes => repo
                .list_with_dishes()
                .await?
                .into_iter()
                .map(PersonResponse::from)
                .collect(),
        };
    Ok(Json(people))
}

/// Get a Person by id.
///
/// # Responses
///
/// - `200 OK` - The Person
/// - `404 Not Found` - No Person with that id
#[utoipa::path(
    get,
    path = "/api/people/{id}",
    tag = "People",
    params(("id" = i64, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "The Person", body = PersonResponse),
        (status = 404, description = "No Person with that id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_person<R>(
    State(repo): State<Arc<R>>,
    Path(id): Path<i64>,
) -> AppResult<Json<PersonResponse>>
where
    R: PersonRepository<Error = AppError> + 'static,
{
    let person = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("person {id} not found")))?;
    Ok(Json(PersonResponse::from(person)))
}

/// Update a Person.
///
/// Omitted fields keep their stored value.
///
/// # Responses
///
/// - `200 OK` - Updated Person
/// - `400 Bad Request` - Supplied field empty
/// - `404 Not Found` - No Person with that id
/// - `409 Conflict` - New name already in use
#[utoipa::path(
    put,
    path = "/api/people/{id}",
    tag = "People",
    params(("id" = i64, Path, description = "Person identifier")),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Updated Person", body = PersonResponse),
        (status = 400, description = "Supplied field empty"),
        (status = 404, description = "No Person with that id"),
        (status = 409, description = "New name already in use"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_person<R>(
    State(repo): State<Arc<R>>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdatePersonRequest>,
) -> AppResult<Json<PersonResponse>>
where
    R: PersonRepository<Error = AppError> + 'static,
{
    dto.validate()?;
    let person = repo
        .update(id, dto)
        .await?
        .ok_or_else(|| AppError::not_found(format!("person {id} not found")))?;
    Ok(Json(PersonResponse::from(person)))
}

/// Delete a Person.
///
/// Dishes referencing the Person keep existing with a cleared
/// back-reference.
///
/// # Responses
///
/// - `204 No Content` - Person deleted
/// - `404 Not Found` - No Person with that id
#[utoipa::path(
    delete,
    path = "/api/people/{id}",
    tag = "People",
    params(("id" = i64, Path, description = "Person identifier")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "No Person with that id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_person<R>(
    State(repo): State<Arc<R>>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode>
where
    R: PersonRepository<Error = AppError> + 'static,
{
    if repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("person {id} not found")))
    }
}

/// Create an axum router for Person CRUD endpoints.
pub fn person_router<R>() -> Router<Arc<R>>
where
    R: PersonRepository<Error = AppError> + 'static,
{
    Router::new()
        .route("/api/people", post(create_person::<R>).get(list_people::<R>))
        .route(
            "/api/people/{id}",
            get(get_person::<R>)
                .put(update_person::<R>)
                .delete(delete_person::<R>),
        )
}
