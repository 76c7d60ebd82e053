//! Darkroom - image filter web service.
//!
//! Upload one image, receive the full filter battery back as data URLs.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
