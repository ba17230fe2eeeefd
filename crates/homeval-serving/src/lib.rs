//! HTTP serving process for homeval.
//!
//! The server loads the artifact bundle once at startup, holds it as
//! immutable shared state, and exposes:
//!
//! - a prediction endpoint running the same encode -> scale -> predict
//!   sequence the trainer used (see [`predictor`])
//! - CRUD routes over an in-process house record store, gated by
//!   session-based login (see [`store`], [`session`], [`routes`])
//!
//! Inference is a pure function of the loaded bundle and the request, so
//! request handling needs no locking around the model; only the record,
//! user, and session stores are mutable.
//!
//! # Modules
//!
//! - [`config`] - server configuration
//! - [`bundle`] - one-time artifact loading at startup
//! - [`predictor`] - the inference pipeline
//! - [`store`] - house record and user credential stores
//! - [`session`] - login session tracking
//! - [`state`] - shared application state
//! - [`routes`] - axum router and handlers
//! - [`server`] - server lifecycle

pub mod bundle;
pub mod config;
pub mod error;
pub mod predictor;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{ServingError, ServingResult};
pub use predictor::{predict, PredictionRequest};
pub use state::AppState;
