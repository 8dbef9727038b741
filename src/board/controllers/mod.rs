//! # Controllers
//!
//! The event loop that connects input, state, fetch tasks and rendering.

pub mod app_controller;

pub use app_controller::AppController;
