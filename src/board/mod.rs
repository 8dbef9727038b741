//! # Board Module
//!
//! The posts browser: a list screen with search and pagination, a detail
//! screen with comments, and a session log of user interactions.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐  Message  ┌──────────────┐  Effect   ┌──────────────┐
//! │   Commands   │──────────▶│    state     │──────────▶│  Controller  │
//! │ (key → msg)  │           │  update()    │           │ runs effects │
//! └──────────────┘           └──────────────┘           └──────┬───────┘
//!        ▲                          │                          │
//!        │ KeyEvent                 │ BoardState               │ spawn
//!        │                          ▼                          ▼
//! ┌──────────────┐           ┌──────────────┐           ┌──────────────┐
//! │  EventStream │           │    Views     │           │   Services   │
//! │  (terminal)  │           │ layout+draw  │           │  posts API   │
//! └──────────────┘           └──────────────┘           └──────────────┘
//! ```
//!
//! `engine` holds the pure list-view functions (filter, paginate,
//! page count, remove) the state derives its pages from.

pub mod commands;
pub mod controllers;
pub mod engine;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod state;
pub mod views;

pub use controllers::AppController;
pub use models::{Comment, InteractionLog, Post, PostId};
pub use services::PostsClient;
pub use state::{update, BoardState, Effect};
