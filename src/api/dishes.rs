// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dish CRUD handlers.

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

/// Query parameters for `GET /api/dishes`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListDishesParams {
    /// Attach each Dish's Person to the response.
    #[serde(default)]
    pub include_people: bool,
}

/// Create a new Dish.
///
/// # Responses
///
/// - `201 Created` - Dish created successfully
/// - `400 Bad Request` - Required field missing or empty
/// - `409 Conflict` - Name or description already in use
#[utoipa::path(
    post,
    path = "/api/dishes",
    tag = "Dishes",
    request_body = CreateDishRequest,
    responses(
        (status = 201, description = "Dish created successfully", body = DishResponse),
        (status = 400, description = "Required field missing or empty"),
        (status = 409, description = "Name or description already in use"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_dish<R>(
    State(repo): State<Arc<R>>,
    Json(dto): Json<CreateDishRequest>,
) -> AppResult<(StatusCode, Json<DishResponse>)>
where
    R: DishRepository<Error = AppError> + 'static,
{
    dto.validate()?;
    let dish = repo.create(dto).await?;
    Ok((StatusCode::CREATED, Json(DishResponse::from(dish))))
}

/// List Dishes.
///
/// # Responses
///
/// - `200 OK` - List of Dishes
#[utoipa::path(
    get,
    path = "/api/dishes",
    tag = "Dishes",
    params(ListDishesParams),
    responses(
        (status = 200, description = "List of Dishes", body = Vec<DishResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_dishes<R>(
    State(repo): State<Arc<R>>,
    Query(params): Query<ListDishesParams>,
) -> AppResult<Json<Vec<DishResponse>>>
where
    R: DishRepository<Error = AppError> + 'static,
{
    let dishes: Vec<DishResponse> = match DishListQuery::from_params(params.include_people) {
        DishListQuery::All => repo
            .list()
            .await?
            .into_iter()
            .map(DishResponse::from)
            .collect(),
        DishListQuery::WithPeople => repo
            .list_with_people()
            .await?
            .into_iter()
            .map(DishResponse::from)
            .collect(),
    };
    Ok(Json(dishes))
}

/// Get a Dish by id.
///
/// # Responses
///
/// - `200 OK` - The Dish
/// - `404 Not Found` - No Dish with that id
#[utoipa::path(
    get,
    path = "/api/dishes/{id}",
    tag = "Dishes",
    params(("id" = i64, Path, description = "Dish identifier")),
    responses(
        (status = 200, description = "The Dish", body = DishResponse),
        (status = 404, description = "No Dish with that id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_dish<R>(
    State(repo): State<Arc<R>>,
    Path(id): Path<i64>,
) -> AppResult<Json<DishResponse>>
where
    R: DishRepository<Error = AppError> + 'static,
{
    let dish = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("dish {id} not found")))?;
    Ok(Json(DishResponse::from(dish)))
}

/// Update a Dish.
///
/// Omitted fields keep their stored value; `person_id` reassigns the dish
/// to another Person.
///
/// # Responses
///
/// - `200 OK` - Updated Dish
/// - `400 Bad Request` - Supplied field empty
/// - `404 Not Found` - No Dish with that id
/// - `409 Conflict` - New name or description already in use
#[utoipa::path(
    put,
    path = "/api/dishes/{id}",
    tag = "Dishes",
    params(("id" = i64, Path, description = "Dish identifier")),
    request_body = UpdateDishRequest,
    responses(
        (status = 200, description = "Updated Dish", body = DishResponse),
        (status = 400, description = "Supplied field empty"),
        (status = 404, description = "No Dish with that id"),
        (status = 409, description = "New name or description already in use"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_dish<R>(
    State(repo): State<Arc<R>>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateDishRequest>,
) -> AppResult<Json<DishResponse>>
where
    R: DishRepository<Error = AppError> + 'static,
{
    dto.validate()?;
    let dish = repo
        .update(id, dto)
        .await?
        .ok_or_else(|| AppError::not_found(format!("dish {id} not found")))?;
    Ok(Json(DishResponse::from(dish)))
}

/// Delete a Dish.
///
/// # Responses
///
/// - `204 No Content` - Dish deleted
/// - `404 Not Found` - No Dish with that id
#[utoipa::path(
    delete,
    path = "/api/dishes/{id}",
    tag = "Dishes",
    params(("id" = i64, Path, description = "Dish identifier")),
    responses(
        (status = 204, description = "Dish deleted"),
        (status = 404, description = "No Dish with that id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_dish<R>(State(repo): State<Arc<R>>, Path(id): Path<i64>) -> AppResult<StatusCode>
where
    R: DishRepository<Error = AppError> + 'static,
{
    if repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("dish {id} not found")))
    }
}

/// Create an axum router for Dish CRUD endpoints.
pub fn dish_router<R>() -> Router<Arc<R>>
where
    R: DishRepository<Error = AppError> + 'static,
{
    Router::new()
        .route("/api/dishes", post(create_dish::<R>).get(list_dishes::<R>))
        .route(
            "/api/dishes/{id}",
            get(get_dish::<R>)
                .put(update_dish::<R>)
                .delete(delete_dish::<R>),
        )
}
