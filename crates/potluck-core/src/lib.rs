// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core entities, DTOs, and repository traits for the potluck service.
//!
//! This crate is storage-agnostic: it defines the record shapes, the
//! request/response DTOs with their validation rules, the query-shaping
//! types that turn list parameters into a single query mode, and the
//! repository traits a backend must implement. The `potluck` service crate
//! provides the SQLite implementation; alternative backends only need to
//! implement [`PersonRepository`] and [`DishRepository`].
//!
//! # Overview
//!
//! - [`person`] / [`dish`]: entity structs and DTOs
//! - [`query`]: list-parameter translation ([`PersonListQuery`],
//!   [`DishListQuery`])
//! - [`repository`]: the storage interface
//! - [`prelude`]: convenient re-exports

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dish;
pub mod person;
pub mod prelude;
pub mod query;
pub mod repository;

pub use dish::{CreateDishRequest, Dish, DishResponse, DishWithPerson, UpdateDishRequest};
pub use person::{
    CreatePersonRequest, Person, PersonResponse, PersonWithDishes, UpdatePersonRequest,
};
pub use query::{DishListQuery, PersonListQuery};
pub use repository::{DishRepository, PersonRepository};
