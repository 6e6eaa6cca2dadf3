// glprobe/src/limits.rs
//
//! Implementation limits whose availability depends on the context profile.

use crate::gl;
use crate::gl::types::GLenum;
use crate::queries::ContextQueries;

/// The default for [`ContextLimits::max_debug_message_length`] when no debug output
/// extension is present.
pub const DEFAULT_MAX_DEBUG_MESSAGE_LENGTH: u32 = 1024;

/// OpenGL ES 1.x has no `GL_MAX_VERTEX_ATTRIBS`; it has a fixed set of client arrays.
pub const ES1_MAX_VERTEX_ATTRIBS: u32 = 8;

/// The extension `max_debug_message_length` was queried through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugOutput {
    /// `GL_KHR_debug`.
    Khr,
    /// `GL_ARB_debug_output`.
    Arb,
    /// `GL_AMD_debug_output`.
    Amd,
}

impl DebugOutput {
    /// The extension name.
    pub fn extension(self) -> &'static str {
        match self {
            DebugOutput::Khr => "GL_KHR_debug",
            DebugOutput::Arb => "GL_ARB_debug_output",
            DebugOutput::Amd => "GL_AMD_debug_output",
        }
    }

    /// The query token for the maximum message length.
    pub fn max_message_length_token(self) -> GLenum {
        match self {
            DebugOutput::Khr => gl::MAX_DEBUG_MESSAGE_LENGTH,
            DebugOutput::Arb => gl::MAX_DEBUG_MESSAGE_LENGTH_ARB,
            DebugOutput::Amd => gl::MAX_DEBUG_MESSAGE_LENGTH_AMD,
        }
    }

    /// Debug output extensions in order of preference.
    pub const PREFERENCE: [DebugOutput; 3] = [DebugOutput::Khr, DebugOutput::Arb, DebugOutput::Amd];
}

/// What the limit queries are conditioned on.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LimitConditions {
    pub compat: bool,
    pub core: bool,
    pub es1: bool,
    pub es2: bool,
    pub gl_3_2: bool,
    pub gl_4_1: bool,
    pub gl_4_3: bool,
    pub arb_vertex_attrib_binding: bool,
    pub arb_viewport_array: bool,
    pub arb_provoking_vertex: bool,
    pub ext_provoking_vertex: bool,
    pub debug_output: Option<DebugOutput>,
}

/// Driver limits for a context.
///
/// Limits that are undefined or not queryable for the detected profile keep their
/// defaults: zero, [`DEFAULT_MAX_DEBUG_MESSAGE_LENGTH`], or `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextLimits {
    /// `GL_MAX_ATTRIB_STACK_DEPTH`. Compatibility profile only.
    pub max_attrib_stack_depth: u32,
    /// `GL_MAX_CLIENT_ATTRIB_STACK_DEPTH`. Compatibility profile only.
    pub max_client_attrib_stack_depth: u32,
    /// `GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS`. Not available on ES1.
    pub max_combined_texture_image_units: u32,
    /// `GL_MAX_DEBUG_MESSAGE_LENGTH` from the preferred debug output extension.
    pub max_debug_message_length: u32,
    /// The extension `max_debug_message_length` came from, if any.
    pub debug_output: Option<DebugOutput>,
    /// `GL_MAX_DRAW_BUFFERS`. Desktop only.
    pub max_draw_buffers: u32,
    /// `GL_MAX_TEXTURE_COORDS`. Compatibility profile only.
    pub max_texture_coords: u32,
    /// `GL_MAX_TEXTURE_UNITS`. ES1 and compatibility profile only.
    pub max_texture_units: u32,
    /// `GL_MAX_VARYING_VECTORS`. ES2 and core profile.
    pub max_varying_vectors: u32,
    /// `GL_MAX_VARYING_FLOATS`. Compatibility profile only.
    pub max_varying_floats: u32,
    /// `GL_MAX_VERTEX_ATTRIBS`.
    pub max_vertex_attribs: u32,
    /// `GL_MAX_VERTEX_ATTRIB_BINDINGS`. Desktop 4.3 or `GL_ARB_vertex_attrib_binding`.
    pub max_vertex_attrib_bindings: u32,
    /// `GL_MAX_VIEWPORTS`. Desktop 4.1 or `GL_ARB_viewport_array`.
    pub max_viewports: u32,
    /// `GL_QUADS_FOLLOW_PROVOKING_VERTEX_CONVENTION`. Compatibility profile only.
    pub quads_follow_provoking_vertex_convention: bool,
}

impl Default for ContextLimits {
    fn default() -> ContextLimits {
        ContextLimits {
            max_attrib_stack_depth: 0,
            max_client_attrib_stack_depth: 0,
            max_combined_texture_image_units: 0,
            max_debug_message_length: DEFAULT_MAX_DEBUG_MESSAGE_LENGTH,
            debug_output: None,
            max_draw_buffers: 0,
            max_texture_coords: 0,
            max_texture_units: 0,
            max_varying_vectors: 0,
            max_varying_floats: 0,
            max_vertex_attribs: 0,
            max_vertex_attrib_bindings: 0,
            max_viewports: 0,
            quads_follow_provoking_vertex_convention: false,
        }
    }
}

// Negative results only come back from broken drivers; treat them as "none".
fn get_limit(queries: &dyn ContextQueries, name: GLenum) -> u32 {
    queries.get_integer(name).max(0) as u32
}

impl ContextLimits {
    //                                        GL       Core  ES1  ES2  ES3
    // GL_MAX_ATTRIB_STACK_DEPTH              16        rem  n/a  n/a  n/a
    // GL_MAX_CLIENT_ATTRIB_STACK_DEPTH       16        rem  n/a  n/a  n/a
    // GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS    96        96    -    8   32
    // GL_MAX_DRAW_BUFFERS                     8         8    -    -    4
    // GL_MAX_TEXTURE_COORDS                   8        rem   -    -    -
    // GL_MAX_TEXTURE_UNITS                    2        rem   +    -    -
    // GL_MAX_VARYING_VECTORS                 15        15    -    8   15
    // GL_MAX_VARYING_FLOATS                  32 (2.0)  dep   -    -    -
    // GL_MAX_VERTEX_ATTRIBS                  16        16    -    8   16
    // GL_MAX_VERTEX_ATTRIB_BINDINGS          16        16    -    -    -
    // GL_MAX_VIEWPORTS                       16        16    -    -    -
    pub(crate) fn detect(queries: &dyn ContextQueries, when: &LimitConditions) -> ContextLimits {
        let mut limits = ContextLimits::default();

        if when.compat {
            limits.max_attrib_stack_depth = get_limit(queries, gl::MAX_ATTRIB_STACK_DEPTH);
            limits.max_client_attrib_stack_depth =
                get_limit(queries, gl::MAX_CLIENT_ATTRIB_STACK_DEPTH);
        }

        if !when.es1 {
            limits.max_combined_texture_image_units =
                get_limit(queries, gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS);
        }

        if when.core || when.compat {
            limits.max_draw_buffers = get_limit(queries, gl::MAX_DRAW_BUFFERS);
        }

        if when.compat {
            limits.max_texture_coords = get_limit(queries, gl::MAX_TEXTURE_COORDS);
        }

        if when.es1 || when.compat {
            limits.max_texture_units = get_limit(queries, gl::MAX_TEXTURE_UNITS);
        }

        if when.es2 || when.core {
            limits.max_varying_vectors = get_limit(queries, gl::MAX_VARYING_VECTORS);
        } else if when.compat {
            limits.max_varying_floats = get_limit(queries, gl::MAX_VARYING_FLOATS);
        }

        limits.max_vertex_attribs = if when.es1 {
            ES1_MAX_VERTEX_ATTRIBS
        } else {
            get_limit(queries, gl::MAX_VERTEX_ATTRIBS)
        };

        if (when.core || when.compat) && (when.gl_4_3 || when.arb_vertex_attrib_binding) {
            limits.max_vertex_attrib_bindings = get_limit(queries, gl::MAX_VERTEX_ATTRIB_BINDINGS);
        }

        if (when.core || when.compat) && (when.gl_4_1 || when.arb_viewport_array) {
            limits.max_viewports = get_limit(queries, gl::MAX_VIEWPORTS);
        }

        if let Some(debug_output) = when.debug_output {
            limits.max_debug_message_length =
                get_limit(queries, debug_output.max_message_length_token());
            limits.debug_output = Some(debug_output);
        }

        if when.compat && (when.gl_3_2 || when.arb_provoking_vertex || when.ext_provoking_vertex) {
            limits.quads_follow_provoking_vertex_convention =
                queries.get_boolean(gl::QUADS_FOLLOW_PROVOKING_VERTEX_CONVENTION);
        }

        limits
    }

    /// The number of varying components, whichever way the profile reports them.
    pub fn max_varying_components(&self) -> u32 {
        if self.max_varying_vectors > 0 {
            self.max_varying_vectors.saturating_mul(4)
        } else {
            self.max_varying_floats
        }
    }
}
