// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! OpenAPI description of the HTTP surface.

use axum::Json;
use potluck_core::prelude::*;
use utoipa::OpenApi;

use super::{dishes, people};

/// OpenAPI document for the potluck API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Potluck API",
        description = "People and the Dishes they bring to the dinner party"
    ),
    paths(
        people::create_person,
        people::list_people,
        people::get_person,
        people::update_person,
        people::delete_person,
        dishes::create_dish,
        dishes::list_dishes,
        dishes::get_dish,
        dishes::update_dish,
        dishes::delete_dish,
    ),
    components(schemas(
        CreatePersonRequest,
        UpdatePersonRequest,
        PersonResponse,
        CreateDishRequest,
        UpdateDishRequest,
        DishResponse,
    )),
    tags(
        (name = "People", description = "Invitees and their attendance"),
        (name = "Dishes", description = "Food items and who brings them")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/people"));
        assert!(paths.contains_key("/api/people/{id}"));
        assert!(paths.contains_key("/api/dishes"));
        assert!(paths.contains_key("/api/dishes/{id}"));
    }
}
