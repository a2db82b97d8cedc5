// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU-accelerated interactive 3D carousel gallery built on wgpu.
//!
//! Orbis arranges a filterable collection of images on a ring, rotates it
//! continuously or under pointer, touch, and keyboard control, and opens a
//! full-size viewer when an item is picked.
//!
//! # Key entry points
//!
//! - [`gallery::Gallery`] - the headless gallery component (state, input,
//!   filtering, picking, slot lifecycle)
//! - [`engine::GalleryEngine`] - the wgpu-backed engine that renders a
//!   gallery into a window surface
//! - [`options::Options`] - runtime configuration (camera, ring geometry,
//!   rotation, lighting, particles, keybindings)
//! - [`input::InputProcessor`] - converts platform input into
//!   [`gallery::GalleryCommand`]s
//!
//! # Architecture
//!
//! All gallery state is mutated through [`gallery::Gallery::execute`] and
//! advanced once per frame by [`gallery::Gallery::update`]. Slot resources
//! (geometry, materials, textures) are allocated through the
//! [`carousel::SlotResources`] trait, so the same gallery logic runs against
//! the GPU backend in [`gpu::slot_resources`] or an in-memory backend in
//! tests.

pub mod camera;
pub mod carousel;
pub mod engine;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod gpu;
pub mod input;
pub mod options;
pub mod picking;
pub mod renderer;
pub mod rotation;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::GalleryEngine;
pub use error::GalleryError;
pub use gallery::{Gallery, GalleryBuilder, GalleryCommand, GalleryItem};
pub use input::{InputEvent, InputProcessor};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
