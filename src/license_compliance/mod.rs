//! License compliance domain
//!
//! Contains the license catalog, the dependency tree model and the visitors
//! analysing it. Nothing in here performs I/O.

pub mod domain;
pub mod policies;
pub mod services;
