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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Grid-based spatial presentation engine.
//!
//! Stagegrid lays presentation steps out on a 3D grid, computes the inverse
//! camera transform that brings any step to the center of the viewport, and
//! navigates between neighbouring cells with zoom-aware transition
//! sequencing.
//!
//! # Key entry points
//!
//! - [`deck::Deck`] - the immutable step and decoration registry, built from
//!   a [`deck::DeckManifest`]
//! - [`navigation::Navigator`] - the navigation state machine
//! - [`transform`] - transform composition and camera inversion
//! - [`options::Options`] - runtime configuration (key bindings, deep links)
//!
//! # Architecture
//!
//! The navigator never touches a display or a clock directly. Computed
//! transforms leave through the [`navigation::Renderer`] trait, deferred
//! work (highlight clearing, auto-advance, location publishing) goes to a
//! [`navigation::Scheduler`], and the shareable location is written through
//! [`deep_link::History`]. [`navigation::Timeline`] is a virtual-clock
//! scheduler that drives all timing deterministically.

pub mod deck;
pub mod deep_link;
pub mod error;
pub mod input;
pub mod navigation;
pub mod options;
pub mod transform;
