// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Person entity and its request/response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dish::{Dish, DishResponse};

/// An invitee, with attendance status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique identifier, assigned by storage on creation. Immutable.
    pub id: i64,

    /// Display name, unique across all People.
    pub name: String,

    /// Whether the person is attending.
    pub attending: bool,
}

/// A Person together with the Dishes referencing it.
///
/// Produced by `include_dishes` list queries. `dishes` is empty, not
/// absent, for a Person nobody cooks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonWithDishes {
    /// The person record.
    pub person: Person,

    /// Dishes whose `person_id` references this person, ordered by id.
    pub dishes: Vec<Dish>,
}

/// Request DTO for creating a new Person.
///
/// `name` is declared with `#[serde(default)]`, so an absent field
/// deserializes to an empty string and fails the same length validation as
/// an explicitly empty one. Validation runs before the storage boundary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePersonRequest {
    /// Display name. Required, non-empty, unique.
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Attendance status. Defaults to `false` when omitted.
    #[serde(default)]
    pub attending: bool,
}

/// Request DTO for updating an existing Person. All fields optional;
/// omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePersonRequest {
    /// New display name.
    #[validate(length(min = 1, message = "name must be non-empty"))]
    pub name: Option<String>,

    /// New attendance status.
    pub attending: Option<bool>,
}

/// Response DTO for API output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    /// Unique identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Attendance status.
    pub attending: bool,

    /// Eagerly loaded Dishes; present only for `include_dishes` queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(no_recursion)]
    pub dishes: Option<Vec<DishResponse>>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            attending: person.attending,
            dishes: None,
        }
    }
}

impl From<PersonWithDishes> for PersonResponse {
    fn from(record: PersonWithDishes) -> Self {
        Self {
            id: record.person.id,
            name: record.person.name,
            attending: record.person.attending,
            dishes: Some(record.dishes.into_iter().map(DishResponse::from).collect()),
        }
    }
}
