// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use potluck_core::prelude::*;
//! ```

pub use crate::{
    dish::{CreateDishRequest, Dish, DishResponse, DishWithPerson, UpdateDishRequest},
    person::{CreatePersonRequest, Person, PersonResponse, PersonWithDishes, UpdatePersonRequest},
    query::{DishListQuery, PersonListQuery},
    repository::{DishRepository, PersonRepository},
};
