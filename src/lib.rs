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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
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

//! Host-side GPU state cache.
//!
//! A [`StateCache`] sits between a renderer and a stateful graphics driver
//! (OpenGL / GLES style). It keeps a mirror of the context state in host
//! memory and only forwards a state-change call when the requested value
//! differs from the mirrored one, or when the caller forces it.
//!
//! # Key entry points
//!
//! - [`StateCache`] - the memoizing layer
//! - [`driver::Driver`] - the driver binding layer the cache forwards to
//! - [`driver::CapabilityProvider`] - hardware limits (texture units)
//! - [`driver::recording::RecordingDriver`] - an in-memory driver for tests
//!   and call-stream audits
//! - [`options::CacheOptions`] - runtime configuration, loadable from TOML
//!
//! # Example
//!
//! ```
//! use state_cache::driver::recording::RecordingDriver;
//! use state_cache::driver::FixedCapabilities;
//! use state_cache::gl::CompareFunc;
//! use state_cache::StateCache;
//!
//! let mut cache =
//!     StateCache::new(RecordingDriver::new(), FixedCapabilities::new(8));
//! cache.driver_mut().clear();
//!
//! cache.set_depth_func(CompareFunc::LessEqual);
//! cache.set_depth_func(CompareFunc::LessEqual);
//! assert_eq!(cache.driver().len(), 1);
//! ```
//!
//! The mirror is only trustworthy while every state change goes through
//! the cache; see [`cache`] for the full contract.

pub mod cache;
pub mod driver;
pub mod error;
pub mod gl;
pub mod options;

pub use cache::{CacheStats, CachedState, StateCache};
pub use error::{StateCacheError, TextureUnitError};
pub use options::CacheOptions;
