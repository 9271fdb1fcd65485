//! Remote Cocktail Source Module
//!
//! Client-side contract for the public cocktail recipe API. The remote source
//! exposes three read operations (list by first letter, search by name, lookup
//! by id) plus a random pick, all returning the same flat wrapper shape.
//!
//! ## Responsibilities
//! - **Wire types**: Mirror the API's fixed-arity response layout, including the
//!   15 positional ingredient/measure slot pairs and the nullable `drinks` wrapper.
//! - **Transport**: HTTP GET with per-request timeout and bounded retry.
//! - **Errors**: Typed taxonomy separating transport failures from malformed
//!   payloads, so callers can apply per-request failure isolation.
//!
//! ## Submodules
//! - **`client`**: The `CocktailClient` request/response implementation.
//! - **`types`**: Raw wire shapes and the `SourceError` taxonomy.

pub mod client;
pub mod types;

#[cfg(test)]
mod tests;
