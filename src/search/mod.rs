//! Search & Filter Module
//!
//! Answers queries over a catalog already held in memory. No network access
//! happens during filtering; remote-backed lookups (by id, random) go through
//! the source client directly.
//!
//! ## Query Shapes
//! - **Name substring**: Case-insensitive containment on the drink name;
//!   the empty query is the identity filter.
//! - **Ingredient text**: The same predicate over the ingredient index,
//!   used to narrow a long ingredient list as the user types.
//! - **Ingredient intersection**: A record matches only when it contains
//!   every selected ingredient, compared by exact string equality.
//!
//! ## Submodules
//! - **`engine`**: The pure filtering functions and the boundary encoding.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
