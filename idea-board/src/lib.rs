//! Client core for the idea board.
//!
//! This crate holds everything the browser view needs that is not drawing:
//!
//! - [`model`]: the `Idea` record as served by the ideas API
//! - [`api`]: the [`IdeaApi`] trait and, with the `web` feature, the
//!   gloo-net transport [`HttpIdeaApi`]
//! - [`state`]: the `{ideas, draft, loading, error}` state machine
//! - [`controller`]: glue that runs API calls on a local executor and feeds
//!   their outcomes back into the state
//! - [`config`]: where the API lives
//!
//! # Example
//!
//! ```ignore
//! use futures::executor::LocalPool;
//! use idea_board::{Controller, HttpIdeaApi, ClientConfig};
//!
//! let mut pool = LocalPool::new();
//! let api = HttpIdeaApi::new(&ClientConfig::from_env());
//! let mut controller = Controller::new(api, pool.spawner());
//!
//! controller.mount();
//! pool.run_until_stalled();
//! controller.poll();
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod state;

pub use api::IdeaApi;
#[cfg(feature = "web")]
pub use api::HttpIdeaApi;
pub use config::ClientConfig;
pub use controller::Controller;
pub use error::{ApiError, BoardError, Operation};
pub use model::{CreatedAt, Idea, IdeaId, NewIdea};
pub use state::{Board, Outcome, Request};

/// Prelude module for convenient imports.
pub mod prelude {
    #[cfg(feature = "web")]
    pub use crate::HttpIdeaApi;
    pub use crate::{
        ApiError, Board, BoardError, ClientConfig, Controller, Idea, IdeaApi, IdeaId, Outcome,
        Request,
    };
}
