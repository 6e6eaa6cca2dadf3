// glprobe/src/registry.rs
//
//! The APIs the probe knows about: which versions each one has shipped and which
//! extension categories it defines.

use crate::config::SystemSupport;
use crate::info::{GLApi, GLVersion};

use std::collections::{BTreeMap, HashMap, HashSet};

/// Static description of one API.
#[derive(Clone, Copy, Debug)]
pub struct ApiDescriptor {
    /// The API described.
    pub api: GLApi,
    /// Known versions, newest first. Empty for APIs without a tracked version.
    pub versions: &'static [GLVersion],
    /// Known extension category names.
    pub categories: &'static [&'static str],
}

impl ApiDescriptor {
    /// Whether this API is enabled by `support`. GL and GLES always are.
    pub fn is_supported(&self, support: SystemSupport) -> bool {
        match self.api {
            GLApi::GL | GLApi::GLES => true,
            GLApi::WGL => support.contains(SystemSupport::WGL),
            GLApi::GLX => support.contains(SystemSupport::GLX),
            GLApi::CGL => support.contains(SystemSupport::CGL),
            GLApi::EGL => support.contains(SystemSupport::EGL),
        }
    }
}

/// Whether `name` can be an extension category of `api`.
///
/// Version pseudo-categories and WGL's core functions are not extensions, and EGL
/// never owns GL extension names.
pub fn is_category_name(api: GLApi, name: &str) -> bool {
    if name.is_empty() || name.contains("_VERSION_") || name.contains("WGL_core") {
        return false;
    }
    !(api == GLApi::EGL && name.starts_with("GL_"))
}

/// The built-in descriptors, in the order they are evaluated.
pub fn default_apis() -> &'static [ApiDescriptor] {
    &DEFAULT_APIS
}

/// Descriptors from [`default_apis`] that `support` enables.
pub fn supported_apis(support: SystemSupport) -> Vec<ApiDescriptor> {
    default_apis()
        .iter()
        .filter(|descriptor| descriptor.is_supported(support))
        .copied()
        .collect()
}

static DEFAULT_APIS: [ApiDescriptor; 6] = [
    ApiDescriptor {
        api: GLApi::GL,
        versions: &GL_VERSIONS,
        categories: &GL_CATEGORIES,
    },
    ApiDescriptor {
        api: GLApi::GLES,
        versions: &GLES_VERSIONS,
        categories: &[],
    },
    ApiDescriptor {
        api: GLApi::WGL,
        versions: &[],
        categories: &WGL_CATEGORIES,
    },
    ApiDescriptor {
        api: GLApi::GLX,
        versions: &GLX_VERSIONS,
        categories: &GLX_CATEGORIES,
    },
    ApiDescriptor {
        api: GLApi::CGL,
        versions: &[],
        categories: &[],
    },
    ApiDescriptor {
        api: GLApi::EGL,
        versions: &EGL_VERSIONS,
        categories: &EGL_CATEGORIES,
    },
];

static GL_VERSIONS: [GLVersion; 19] = [
    GLVersion::new(4, 6),
    GLVersion::new(4, 5),
    GLVersion::new(4, 4),
    GLVersion::new(4, 3),
    GLVersion::new(4, 2),
    GLVersion::new(4, 1),
    GLVersion::new(4, 0),
    GLVersion::new(3, 3),
    GLVersion::new(3, 2),
    GLVersion::new(3, 1),
    GLVersion::new(3, 0),
    GLVersion::new(2, 1),
    GLVersion::new(2, 0),
    GLVersion::new(1, 5),
    GLVersion::new(1, 4),
    GLVersion::new(1, 3),
    GLVersion::new(1, 2),
    GLVersion::new(1, 1),
    GLVersion::new(1, 0),
];

static GLES_VERSIONS: [GLVersion; 1] = [GLVersion::new(2, 0)];

static GLX_VERSIONS: [GLVersion; 5] = [
    GLVersion::new(1, 4),
    GLVersion::new(1, 3),
    GLVersion::new(1, 2),
    GLVersion::new(1, 1),
    GLVersion::new(1, 0),
];

static EGL_VERSIONS: [GLVersion; 3] = [
    GLVersion::new(1, 2),
    GLVersion::new(1, 1),
    GLVersion::new(1, 0),
];

static GL_CATEGORIES: [&str; 61] = [
    "GL_AMD_debug_output",
    "GL_APPLE_flush_buffer_range",
    "GL_APPLE_vertex_array_object",
    "GL_ARB_ES2_compatibility",
    "GL_ARB_ES3_compatibility",
    "GL_ARB_base_instance",
    "GL_ARB_buffer_storage",
    "GL_ARB_clear_buffer_object",
    "GL_ARB_compute_shader",
    "GL_ARB_copy_buffer",
    "GL_ARB_debug_output",
    "GL_ARB_direct_state_access",
    "GL_ARB_draw_buffers",
    "GL_ARB_draw_elements_base_vertex",
    "GL_ARB_draw_instanced",
    "GL_ARB_fragment_program",
    "GL_ARB_framebuffer_object",
    "GL_ARB_get_program_binary",
    "GL_ARB_instanced_arrays",
    "GL_ARB_map_buffer_range",
    "GL_ARB_multi_draw_indirect",
    "GL_ARB_multitexture",
    "GL_ARB_program_interface_query",
    "GL_ARB_provoking_vertex",
    "GL_ARB_sampler_objects",
    "GL_ARB_separate_shader_objects",
    "GL_ARB_shader_objects",
    "GL_ARB_shader_storage_buffer_object",
    "GL_ARB_sync",
    "GL_ARB_texture_storage",
    "GL_ARB_timer_query",
    "GL_ARB_uniform_buffer_object",
    "GL_ARB_vertex_array_object",
    "GL_ARB_vertex_attrib_binding",
    "GL_ARB_vertex_buffer_object",
    "GL_ARB_vertex_program",
    "GL_ARB_vertex_shader",
    "GL_ARB_viewport_array",
    "GL_EXT_blend_color",
    "GL_EXT_debug_label",
    "GL_EXT_debug_marker",
    "GL_EXT_direct_state_access",
    "GL_EXT_framebuffer_blit",
    "GL_EXT_framebuffer_multisample",
    "GL_EXT_framebuffer_object",
    "GL_EXT_provoking_vertex",
    "GL_EXT_texture_filter_anisotropic",
    "GL_EXT_texture_sRGB",
    "GL_EXT_timer_query",
    "GL_GREMEDY_frame_terminator",
    "GL_GREMEDY_string_marker",
    "GL_KHR_debug",
    "GL_NV_explicit_multisample",
    "GL_NV_path_rendering",
    "GL_NV_primitive_restart",
    "GL_OES_EGL_image",
    "GL_OES_mapbuffer",
    "GL_OES_packed_depth_stencil",
    "GL_OES_rgb8_rgba8",
    "GL_OES_texture_npot",
    "GL_OES_vertex_array_object",
];

static WGL_CATEGORIES: [&str; 6] = [
    "WGL_ARB_create_context",
    "WGL_ARB_create_context_profile",
    "WGL_ARB_extensions_string",
    "WGL_ARB_pixel_format",
    "WGL_EXT_extensions_string",
    "WGL_EXT_swap_control",
];

static GLX_CATEGORIES: [&str; 6] = [
    "GLX_ARB_create_context",
    "GLX_ARB_create_context_profile",
    "GLX_ARB_get_proc_address",
    "GLX_EXT_create_context_es2_profile",
    "GLX_EXT_swap_control",
    "GLX_MESA_swap_control",
];

static EGL_CATEGORIES: [&str; 6] = [
    "EGL_ANDROID_image_native_buffer",
    "EGL_KHR_create_context",
    "EGL_KHR_fence_sync",
    "EGL_KHR_gl_texture_2D_image",
    "EGL_KHR_image_base",
    "EGL_KHR_surfaceless_context",
];

/// Boolean "supports version >= X.Y" flags for one API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionLadder {
    flags: BTreeMap<GLVersion, bool>,
}

impl VersionLadder {
    /// Builds the ladder for `detected` from `versions` (newest first).
    ///
    /// The newest entry is set when `detected` is at least that version. Each older
    /// entry is set when the entry above it is, or when `detected` is exactly that
    /// version. Entries with a zero minor version match any minor version of their
    /// major, so an unlisted release such as 3.4 still lights up 3.0 and below.
    pub fn build(versions: &[GLVersion], detected: GLVersion) -> VersionLadder {
        let mut flags = BTreeMap::new();
        let mut previous: Option<bool> = None;
        for &version in versions {
            let flag = match previous {
                None if version.minor > 0 => detected >= version,
                None => detected.major >= version.major,
                Some(newer) if version.minor > 0 => newer || detected == version,
                Some(newer) => newer || detected.major == version.major,
            };
            flags.insert(version, flag);
            previous = Some(flag);
        }
        VersionLadder { flags }
    }

    /// Whether the ladder marks `version` as supported. Unlisted versions never are.
    #[inline]
    pub fn supports(&self, version: GLVersion) -> bool {
        self.flags.get(&version).copied().unwrap_or(false)
    }

    /// The newest version marked as supported.
    pub fn newest_supported(&self) -> Option<GLVersion> {
        self.flags
            .iter()
            .rev()
            .find(|&(_, &flag)| flag)
            .map(|(&version, _)| version)
    }

    /// All entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (GLVersion, bool)> + '_ {
        self.flags.iter().map(|(&version, &flag)| (version, flag))
    }
}

/// Presence flags for every known extension category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionCategories {
    flags: HashMap<&'static str, bool>,
}

impl ExtensionCategories {
    /// Tests every category of `apis` against `extensions` by exact name.
    pub fn build(apis: &[ApiDescriptor], extensions: &HashSet<String>) -> ExtensionCategories {
        let mut flags = HashMap::new();
        for descriptor in apis {
            for &category in descriptor.categories {
                if !is_category_name(descriptor.api, category) {
                    continue;
                }
                flags.insert(category, extensions.contains(category));
            }
        }
        ExtensionCategories { flags }
    }

    /// Whether `name` is a known category that the context exposes.
    #[inline]
    pub fn get(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Whether `name` is a known category at all.
    #[inline]
    pub fn is_known(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Names of the categories that are present, in no particular order.
    pub fn present(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.flags
            .iter()
            .filter(|&(_, &flag)| flag)
            .map(|(&name, _)| name)
    }
}
