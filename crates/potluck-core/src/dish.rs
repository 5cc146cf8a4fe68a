// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dish entity and its request/response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::person::{Person, PersonResponse};

/// A food item, optionally linked to the Person bringing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    /// Unique identifier, assigned by storage on creation. Immutable.
    pub id: i64,

    /// Dish name, unique across all Dishes.
    pub name: String,

    /// Description, unique across all Dishes.
    pub description: String,

    /// Back-reference to the Person bringing this dish, if assigned.
    pub person_id: Option<i64>,
}

/// A Dish together with the Person it references.
///
/// Produced by `include_people` list queries. `person` is `None` for an
/// unassigned Dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishWithPerson {
    /// The dish record.
    pub dish: Dish,

    /// The referenced Person, when `person_id` is set.
    pub person: Option<Person>,
}

/// Request DTO for creating a new Dish.
///
/// As with Person creation, absent required fields deserialize to empty
/// strings and fail length validation before the storage boundary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateDishRequest {
    /// Dish name. Required, non-empty, unique.
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Description. Required, non-empty, unique.
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    /// Person bringing the dish; a Dish may be created unassigned.
    pub person_id: Option<i64>,
}

/// Request DTO for updating an existing Dish. All fields optional;
/// omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateDishRequest {
    /// New dish name.
    #[validate(length(min = 1, message = "name must be non-empty"))]
    pub name: Option<String>,

    /// New description.
    #[validate(length(min = 1, message = "description must be non-empty"))]
    pub description: Option<String>,

    /// Reassign the dish to another Person.
    pub person_id: Option<i64>,
}

/// Response DTO for API output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishResponse {
    /// Unique identifier.
    pub id: i64,

    /// Dish name.
    pub name: String,

    /// Description.
    pub description: String,

    /// Back-reference to the Person bringing this dish.
    pub person_id: Option<i64>,

    /// Eagerly loaded Person; present only for `include_people` queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<PersonResponse>,
}

impl From<Dish> for DishResponse {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
            description: dish.description,
            person_id: dish.person_id,
            person: None,
        }
    }
}

impl From<DishWithPerson> for DishResponse {
    fn from(record: DishWithPerson) -> Self {
        let person = record.person.map(PersonResponse::from);
        Self {
            id: record.dish.id,
            name: record.dish.name,
            description: record.dish.description,
            person_id: record.dish.person_id,
            person,
        }
    }
}
