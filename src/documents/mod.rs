//! Concrete document kinds for Bedrock resource packs.
//!
//! Each kind module exposes its path patterns, a structural acceptance test
//! and a `build` function that attaches definitions and references through
//! a [`DocumentBuilder`]. Classification and dispatch live in
//! [`crate::project`].

pub mod animation;
pub mod animation_controller;
mod builder;
pub mod client_entity;
pub mod geometry;
pub mod image_texture;
pub mod symbols;

use std::path::PathBuf;

use thiserror::Error;

pub use builder::DocumentBuilder;

/// Why a document kind refused a parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("missing `{0}`")]
    MissingField(&'static str),
    #[error("cannot derive an identifier from {}", .0.display())]
    InvalidPath(PathBuf),
}
