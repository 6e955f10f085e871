//! mcli: a keyboard-driven terminal browser for upcoming meetups.
//!
//! This library exposes the core modules for use by the binary and by tests.

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetcher;
pub mod layout;
pub mod logging;
pub mod model;
pub mod opener;
pub mod view;
