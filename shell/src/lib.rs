//! Terminal host for the todo list.
//!
//! # Design
//! The binary in `main.rs` is a thin loop: read a line, parse it into a
//! [`command::Command`], apply it through [`app::Shell`], draw the
//! resulting `Frame` with [`render::render`]. Network I/O goes through
//! [`transport::UreqTransport`].

pub mod app;
pub mod command;
pub mod config;
pub mod render;
pub mod transport;
