//! # Menu
//!
//! Core logic for the conFusion restaurant menu service.
//!
//! Everything in this crate is synchronous and in-memory: the [`bank`]
//! holds the seeded menu data, [`navigation`] derives circular prev/next
//! neighbors over the dish id sequence, and [`validation`] drives the
//! comment and feedback forms defined in [`forms`].
//!
//! ## Data flow
//!
//! - The server loads a [`bank::Bank`] once at startup, either from a
//!   `db.json`-shaped file or from the built-in seed.
//! - Read endpoints borrow from the bank through [`bank::MenuSource`].
//! - Form submissions run through [`validation::Form`], which recomputes
//!   the per-field error map on every edit, not only on submit.

pub mod bank;
pub mod forms;
pub mod model;
pub mod navigation;
pub mod validation;
