//! Sporta - personal sports challenges, results and points
//!
//! Each user's profile, challenges, results and award log live in one JSON
//! document under the data directory. Every operation loads the whole record,
//! changes it in memory and writes it back.
//!
//! ## Layers
//!
//! 1. **Store** ([`store`]): username -> record, with load / create / save and a
//!    locked read-modify-write `update`.
//!
//! 2. **Gate and mutators** ([`auth`], [`activity`]): registration, login and
//!    entry of challenges and results, each awarding fixed points.
//!
//! 3. **Views** ([`points`], [`views`]): levels, award history and profile,
//!    derived from a loaded record.

pub mod activity;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod persist;
pub mod points;
pub mod session;
pub mod store;
pub mod views;

pub use domain::*;
pub use error::{AppError, Result, StorageError, ValidationError};
