//! Foundation types for the TV series catalog.
//!
//! This crate provides the value and entity types shared by every other
//! `tvdb` crate. It performs no storage and holds no global state.
//!
//! # Key Types
//!
//! - [`ReleaseDate`] — Comparable `yyyymmdd` date parsed from delimited strings
//! - [`Score`] — Review score constrained to `0..=10`
//! - [`ActorId`] — The `"name surname"` natural key of an actor
//! - [`TvSeries`], [`Season`], [`Actor`], [`User`], [`Review`],
//!   [`TransmissionService`] — Catalog entities

pub mod entity;
pub mod error;
pub mod identity;
pub mod score;
pub mod temporal;

pub use entity::{Actor, Review, Season, TransmissionService, TvSeries, User};
pub use error::TypeError;
pub use identity::ActorId;
pub use score::{mean, Score};
pub use temporal::{DateDelimiter, ReleaseDate};
