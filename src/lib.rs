//! Keel: the project dashboard of the deployment console.
//!
//! The dashboard is served as server-rendered HTML and backed by the
//! deployment backend's REST API. The same operations are reachable from the
//! `keel` command line.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod tasks;
pub mod templates;
pub mod utils;

pub use error::{ApiError, DashboardError};
