//! `tbt-route` — route data, planning seam, and loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`step`]    | `RouteStep` — one manoeuvre with its proximity anchor       |
//! | [`route`]   | `Route`, `RouteBuilder`                                     |
//! | [`planner`] | `RoutePlanner` trait, `Destination`, `StaticPlanner`,       |
//! |             | `DirectPlanner`                                             |
//! | [`loader`]  | `load_route_csv`, `load_route_reader`                       |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod loader;
pub mod planner;
pub mod route;
pub mod step;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use loader::{load_route_csv, load_route_reader};
pub use planner::{Destination, DirectPlanner, RoutePlanner, StaticPlanner};
pub use route::{Route, RouteBuilder};
pub use step::RouteStep;
