//! Route handlers for the prediction service
//!
//! # Modules
//!
//! - [`health`]: Health check and API information endpoint
//! - [`predict`]: Prediction endpoint

pub mod health;
pub mod predict;
