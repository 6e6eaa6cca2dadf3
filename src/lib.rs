// glprobe/src/lib.rs
//
//! OpenGL context classification.
//!
//! Given a current OpenGL, OpenGL ES, or WebGL context, this crate works out which API
//! version and profile the context is running under, which extensions it exposes, and a
//! handful of implementation limits whose availability depends on that profile. The
//! result is a [`ContextInfo`] record that is built once, right after the context is made
//! current, and only read afterwards.
//!
//! ```ignore
//! use glprobe::{ContextInfo, ProbeConfig};
//!
//! let info = ContextInfo::detect(&gl, &ProbeConfig::from_env());
//! if info.is_core() && info.has_extension("GL_KHR_debug") {
//!     // ...
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub use crate::config::{ProbeConfig, SystemSupport};

pub mod context_info;
pub use crate::context_info::ContextInfo;

pub mod error;
pub use crate::error::GLError;

mod info;
pub use crate::info::{GLApi, GLVersion, Profile};

pub mod limits;
pub use crate::limits::{ContextLimits, DebugOutput};

pub mod queries;
pub use crate::queries::ContextQueries;

pub mod registry;
pub use crate::registry::{ApiDescriptor, ExtensionCategories, VersionLadder};

/// Raw OpenGL bindings generated by `gl_generator`.
#[allow(missing_docs, clippy::all)]
pub mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}
