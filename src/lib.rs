//! Cocktail Catalog Service Library
//!
//! This library crate defines the core modules behind the binary executable
//! (`main.rs`): a client-side catalog of cocktail recipes aggregated from a
//! public recipe API, with multi-criteria filtering over the in-memory result.
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`source`**: The remote API contract. Wire types for the source's flat
//!   fixed-arity layout and a reqwest-based client with per-request timeout
//!   and bounded retry.
//! - **`catalog`**: The aggregation layer. Parses raw items into immutable
//!   cocktail records and concatenates one "list by letter" result per letter
//!   of the alphabet into a session-scoped catalog, isolating per-letter
//!   failures.
//! - **`search`**: The query layer. Pure, synchronous filters (name substring,
//!   ingredient text, ingredient-set intersection) over a catalog already in
//!   memory, plus the HTTP handlers that expose them.

pub mod catalog;
pub mod search;
pub mod source;
