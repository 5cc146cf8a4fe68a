// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage interface consumed by the HTTP layer.
//!
//! Each operation is an independent unit of work against the storage
//! engine; the engine is the sole arbiter of write ordering and of
//! uniqueness-constraint atomicity. A create that violates a unique
//! constraint must fail without persisting anything.

use async_trait::async_trait;

use crate::{
    dish::{CreateDishRequest, Dish, DishWithPerson, UpdateDishRequest},
    person::{CreatePersonRequest, Person, PersonWithDishes, UpdatePersonRequest},
};

/// Repository trait for Person persistence operations.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Error type for repository operations.
    type Error: std::error::Error + Send + Sync;

    /// Persist a new Person and return it with its assigned id.
    async fn create(&self, dto: CreatePersonRequest) -> Result<Person, Self::Error>;

    /// Find a Person by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, Self::Error>;

    /// Apply the supplied field changes. `None` when no row has that id;
    /// omitted fields keep their stored value.
    async fn update(
        &self,
        id: i64,
        dto: UpdatePersonRequest,
    ) -> Result<Option<Person>, Self::Error>;

    /// Remove a Person by id. `false` when no row had that id. Dishes
    /// referencing the removed Person keep existing with a cleared
    /// back-reference.
    async fn delete(&self, id: i64) -> Result<bool, Self::Error>;

    /// List all People in stored order.
    async fn list(&self) -> Result<Vec<Person>, Self::Error>;

    /// List People whose `attending` field matches exactly.
    async fn list_by_attending(&self, attending: bool) -> Result<Vec<Person>, Self::Error>;

    /// List all People, each with its Dishes eagerly attached.
    async fn list_with_dishes(&self) -> Result<Vec<PersonWithDishes>, Self::Error>;
}

/// Repository trait for Dish persistence operations.
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// Error type for repository operations.
    type Error: std::error::Error + Send + Sync;

    /// Persist a new Dish and return it with its assigned id.
    async fn create(&self, dto: CreateDishRequest) -> Result<Dish, Self::Error>;

    /// Find a Dish by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Dish>, Self::Error>;

    /// Apply the supplied field changes. `None` when no row has that id;
    /// omitted fields keep their stored value.
    async fn update(&self, id: i64, dto: UpdateDishRequest) -> Result<Option<Dish>, Self::Error>;

    /// Remove a Dish by id. `false` when no row had that id.
    async fn delete(&self, id: i64) -> Result<bool, Self::Error>;

    /// List all Dishes in stored order.
    async fn list(&self) -> Result<Vec<Dish>, Self::Error>;

    /// List all Dishes, each with its Person eagerly attached.
    async fn list_with_people(&self) -> Result<Vec<DishWithPerson>, Self::Error>;
}
