//! Tag-driven field redaction: reveal different faces of the same structure.
//!
//! A struct is declared once, with each field optionally tagged with the faces it
//! belongs to. Revealing a face walks the value in place and resets every tagged
//! field whose tags do not intersect the face:
//!
//! ```
//! use faces::{Faces, Revealable};
//!
//! #[derive(Faces)]
//! pub struct Account {
//!     pub id: u64,
//!     #[faces("private,admin")]
//!     pub email: String,
//!     #[faces("admin")]
//!     pub notes: Vec<String>,
//! }
//!
//! let mut account = Account {
//!     id: 7,
//!     email: "ada@example.com".into(),
//!     notes: vec!["vip".into()],
//! };
//! account.reveal(["private"]);
//!
//! assert_eq!(account.id, 7);
//! assert_eq!(account.email, "ada@example.com");
//! assert!(account.notes.is_empty());
//! ```
//!
//! Key rules:
//! - Untagged fields are never reset.
//! - A tagged field is kept when any of its tags is in the face, and reset to
//!   `Default::default()` otherwise.
//! - Nested `Faces` types, sequences, and map values are walked whatever the
//!   outcome for the field holding them.
//! - Private fields are never touched.
//! - Revealing an empty face is a no-op.
//!
//! What this crate does:
//! - defines the [`Reveal`] traversal trait and impls for std containers
//! - defines [`Face`] and the [`TagMatcher`] seam
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - serialize your types or pick a face for you
//! - perform I/O

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::return_self_not_must_use
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use faces_derive::Faces;

#[allow(unused_extern_crates)]
extern crate self as faces;

// Module declarations
mod face;
mod reveal;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use face::{Face, TagMatcher};
pub use reveal::{reveal, reveal_face, Reveal, Revealable, Shape};

/// Items used by code generated from `#[derive(Faces)]`. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::reveal::{reset_unless_visible, walk};
}
