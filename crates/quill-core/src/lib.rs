//! Core quill library (session, remote client, post list state).

pub mod auth;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod gate;
pub mod posts;
pub mod session;

pub use client::RemoteContentClient;
pub use controller::{DisplayMode, PostListController};
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use posts::{Post, PostDraft};
pub use session::SessionStore;
