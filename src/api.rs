// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP surface: handlers, routers, and the OpenAPI document.

pub mod dishes;
pub mod openapi;
pub mod people;

use std::sync::Arc;

use axum::{Router, routing::get};
use potluck_core::prelude::*;
use tower_http::trace::TraceLayer;

use crate::error::AppError;

/// Assemble the full application router for a repository implementation.
///
/// # Usage
///
/// ```rust,ignore
/// let store = Arc::new(SqliteStore::new(pool));
/// axum::serve(listener, api::app(store)).await?;
/// ```
pub fn app<R>(store: Arc<R>) -> Router
where
    R: PersonRepository<Error = AppError> + DishRepository<Error = AppError> + 'static,
{
    Router::new()
        .merge(people::person_router::<R>())
        .merge(dishes::dish_router::<R>())
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
