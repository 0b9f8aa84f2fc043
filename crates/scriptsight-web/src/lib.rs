//! HTTP front end for the scriptsight digit classifier.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
