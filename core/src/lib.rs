//! Client core for the todo list screen.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host plugs in a
//! `Transport` and drives the headless views in [`views`], which share one
//! `TodoStore` holding the list.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each endpoint is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Every mutation is followed by a full refetch. The cached list is never
//!   patched locally.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TodoStore;
pub use transport::Transport;
pub use types::{EditTodo, NewTodo, RemoveTodo, Todo};
pub use views::{DialogState, Frame, RootView};
