//! Catalog Module
//!
//! Turns raw remote payloads into an in-memory catalog of cocktail records
//! for one session.
//!
//! ## Workflow
//! 1. **Fetch**: One "list by letter" request per letter, 'a' through 'z'.
//! 2. **Parse**: Each raw item becomes an immutable `Cocktail` record;
//!    malformed items are skipped, not fatal.
//! 3. **Aggregate**: Records are concatenated in letter order, then
//!    within-letter source order, with no id-based deduplication.
//!
//! ## Submodules
//! - **`builder`**: The per-letter aggregation loop with failure isolation.
//! - **`session`**: An explicitly owned catalog snapshot plus its ingredient index.
//! - **`types`**: The `Cocktail` record and its slot-based ingredient derivation.

pub mod builder;
pub mod session;
pub mod types;
