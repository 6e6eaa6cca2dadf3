// glprobe/src/context_info.rs
//
//! Detection of the version, profile, extensions and limits of a live context.

use crate::config::{ProbeConfig, SystemSupport};
use crate::error::GLError;
use crate::gl;
use crate::info::{GLApi, GLVersion, Profile};
use crate::limits::{ContextLimits, DebugOutput, LimitConditions};
use crate::queries::ContextQueries;
use crate::registry::{self, ApiDescriptor, ExtensionCategories, VersionLadder};

use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};

// `glGetError` keeps returning `GL_CONTEXT_LOST` on a lost context, so draining has to
// give up at some point.
const MAX_DRAINED_ERRORS: usize = 8;

/// Everything the probe learned about a context.
///
/// A record is filled in once, by [`ContextInfo::detect`] (or [`ContextInfo::initialize`]
/// on a default record), on the thread the context is current on. After that it is plain
/// read-only data: it can be moved or shared (e.g. through an `Arc`) with any number of
/// reader threads.
#[derive(Clone, Debug, Default)]
pub struct ContextInfo {
    initialized: bool,

    vendor: String,
    renderer: String,
    version: String,
    extensions: String,
    shading_language_version: String,

    extension_set: HashSet<String>,

    profile: Profile,
    gl_version: GLVersion,
    gles_version: GLVersion,
    glsl_version: GLVersion,
    windowing_versions: HashMap<GLApi, GLVersion>,

    ladders: HashMap<GLApi, VersionLadder>,
    categories: ExtensionCategories,

    limits: ContextLimits,
}

impl ContextInfo {
    /// Probes the current context using the built-in API descriptors enabled by
    /// `config.support`.
    pub fn detect(queries: &dyn ContextQueries, config: &ProbeConfig) -> ContextInfo {
        let apis = registry::supported_apis(config.support);
        ContextInfo::detect_with(queries, config, &apis)
    }

    /// Probes the current context, tracking the versions and extension categories of
    /// `apis` instead of the built-in ones.
    pub fn detect_with(
        queries: &dyn ContextQueries,
        config: &ProbeConfig,
        apis: &[ApiDescriptor],
    ) -> ContextInfo {
        let mut context_info = ContextInfo::default();
        context_info.initialize(queries, config, apis);
        context_info
    }

    /// Fills in a default record. A record is only ever initialized once; later calls
    /// are ignored.
    pub fn initialize(
        &mut self,
        queries: &dyn ContextQueries,
        config: &ProbeConfig,
        apis: &[ApiDescriptor],
    ) {
        if self.initialized {
            warn!("ContextInfo::initialize() called on an initialized record; ignoring");
            return;
        }
        self.initialized = true;

        warn_gl_errors(queries, "before context detection");

        self.vendor = queries.get_string(gl::VENDOR);
        self.renderer = queries.get_string(gl::RENDERER);
        self.version = queries.get_string(gl::VERSION);

        info!("OpenGL vendor    : {}", self.vendor);
        info!("OpenGL renderer  : {}", self.renderer);
        info!("OpenGL version   : {}", self.version);

        self.detect_profile(queries, config);
        self.detect_extensions(queries);

        for descriptor in apis {
            if descriptor.versions.is_empty() {
                continue;
            }
            let detected = match descriptor.api {
                // Desktop version numbers mean nothing on an ES context.
                GLApi::GL if !self.profile.is_desktop() => GLVersion::default(),
                GLApi::GL => self.gl_version,
                GLApi::GLES => self.gles_version,
                api => {
                    let version = queries.windowing_version(api).unwrap_or_default();
                    self.windowing_versions.insert(api, version);
                    version
                }
            };
            let ladder = VersionLadder::build(descriptor.versions, detected);
            debug!(
                "{} version {}: newest supported {:?}",
                descriptor.api.name(),
                detected,
                ladder.newest_supported()
            );
            self.ladders.insert(descriptor.api, ladder);
        }

        self.categories = ExtensionCategories::build(apis, &self.extension_set);

        if !self.is_es1() {
            self.shading_language_version = queries.get_string(gl::SHADING_LANGUAGE_VERSION);
            self.glsl_version = scan_glsl_version(&self.shading_language_version);
            info!("OpenGL GLSL      : {}", self.shading_language_version);
        }

        self.limits = ContextLimits::detect(queries, &self.limit_conditions());

        info!("OpenGL v attribs : {}", self.limits.max_vertex_attribs);
        info!("OpenGL varyings  : {}", self.limits.max_varying_components());

        warn_gl_errors(queries, "querying context information");
    }

    fn detect_profile(&mut self, queries: &dyn ContextQueries, config: &ProbeConfig) {
        let support = config.support;
        self.gl_version = GLVersion::default();
        self.gles_version = GLVersion::default();

        // ES contexts are recognized even without ES support compiled in, so that they
        // at least aren't mistaken for desktop ones.
        let mut profile = if self.version.starts_with("OpenGL ES-CM") {
            self.gles_version = GLVersion::scan(&self.version, "OpenGL ES-CM").unwrap_or_default();
            Some(Profile::ES1)
        } else if self.version.starts_with("OpenGL ES ") {
            self.gles_version = GLVersion::scan(&self.version, "OpenGL ES").unwrap_or_default();
            Some(Profile::ES2)
        } else {
            self.gl_version = GLVersion::scan(&self.version, "").unwrap_or_default();
            None
        };

        // Either form of the ES version string can turn up, so go by the number.
        if support.has_es() {
            if profile != Some(Profile::ES1) && self.gles_version.major == 1 {
                profile = Some(Profile::ES1);
            } else if profile != Some(Profile::ES2) && self.gles_version.major == 2 {
                profile = Some(Profile::ES2);
            }
        }

        if support.contains(SystemSupport::EMSCRIPTEN) && self.version.starts_with("WebGL") {
            let webgl_version = GLVersion::scan(&self.version, "WebGL").unwrap_or_default();
            self.gles_version = if webgl_version.major >= 2 {
                GLVersion::new(3, 0)
            } else {
                GLVersion::new(2, 0)
            };
            profile = Some(Profile::WebGL);
        }

        // Desktop EGL (e.g. Mesa) can hand out ES 2.0 contexts whose version string
        // doesn't start with "OpenGL ES".
        if support.contains(SystemSupport::ES2 | SystemSupport::EGL)
            && !support.intersects(SystemSupport::ANDROID | SystemSupport::EMSCRIPTEN)
            && config.sys_egl
        {
            debug!("EGL back-end: treating the context as ES 2.0");
            self.gles_version = GLVersion::new(2, 0);
            profile = Some(Profile::ES2);
        }

        if support.contains(SystemSupport::ES2 | SystemSupport::EGL | SystemSupport::EMSCRIPTEN) {
            self.gles_version = GLVersion::new(2, 0);
            profile = Some(Profile::WebGL);
        }

        let profile = match profile {
            Some(profile) => profile,
            None if self.gl_version >= GLVersion::new(3, 2) => {
                let mask = queries.get_integer(gl::CONTEXT_PROFILE_MASK) as u32;
                if mask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
                    Profile::Core
                } else {
                    Profile::Compat
                }
            }
            None => Profile::Compat,
        };
        self.profile = apply_forced_profile(profile, config);

        info!(
            "OpenGL profile   : {} (GL {}, GLES {})",
            self.profile, self.gl_version, self.gles_version
        );
    }

    fn detect_extensions(&mut self, queries: &dyn ContextQueries) {
        let driver_extensions: Vec<String> = if self.is_core() {
            let count = queries.get_integer(gl::NUM_EXTENSIONS).max(0) as u32;
            let names: Vec<String> = (0..count)
                .map(|index| queries.get_string_indexed(gl::EXTENSIONS, index))
                .filter(|name| !name.is_empty())
                .collect();
            self.extensions = names.join(" ");
            names
        } else {
            self.extensions = queries.get_string(gl::EXTENSIONS);
            self.extensions
                .split(' ')
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect()
        };

        self.extension_set.extend(driver_extensions);

        info!("OpenGL extensions: {}", self.extensions);
        debug!("{} distinct driver extensions", self.extension_set.len());
    }

    fn limit_conditions(&self) -> LimitConditions {
        let gl_at_least = |major, minor| self.supports_version(GLApi::GL, major, minor);
        LimitConditions {
            compat: self.is_compat(),
            core: self.is_core(),
            es1: self.is_es1(),
            es2: self.is_es2(),
            gl_3_2: gl_at_least(3, 2),
            gl_4_1: gl_at_least(4, 1),
            gl_4_3: gl_at_least(4, 3),
            arb_vertex_attrib_binding: self.has_extension("GL_ARB_vertex_attrib_binding"),
            arb_viewport_array: self.has_extension("GL_ARB_viewport_array"),
            arb_provoking_vertex: self.has_extension("GL_ARB_provoking_vertex"),
            ext_provoking_vertex: self.has_extension("GL_EXT_provoking_vertex"),
            debug_output: DebugOutput::PREFERENCE
                .iter()
                .copied()
                .find(|debug_output| self.has_extension(debug_output.extension())),
        }
    }

    /// Whether [`ContextInfo::initialize`] has run.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// `GL_VENDOR` as reported by the driver.
    #[inline]
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// `GL_RENDERER` as reported by the driver.
    #[inline]
    pub fn renderer(&self) -> &str {
        &self.renderer
    }

    /// `GL_VERSION` as reported by the driver.
    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The driver extensions, space separated.
    #[inline]
    pub fn extensions(&self) -> &str {
        &self.extensions
    }

    /// `GL_SHADING_LANGUAGE_VERSION` as reported by the driver. Empty on ES1.
    #[inline]
    pub fn shading_language_version(&self) -> &str {
        &self.shading_language_version
    }

    /// The distinct driver extension names.
    #[inline]
    pub fn extension_set(&self) -> &HashSet<String> {
        &self.extension_set
    }

    /// Whether the driver reported `name`, known category or not.
    #[inline]
    pub fn has_driver_extension(&self, name: &str) -> bool {
        self.extension_set.contains(name)
    }

    /// Whether `name` is a known extension category that the context exposes.
    ///
    /// Unknown names are never reported as present, even if the driver lists them; use
    /// [`ContextInfo::has_driver_extension`] for a raw lookup.
    #[inline]
    pub fn has_extension(&self, name: &str) -> bool {
        self.categories.get(name)
    }

    /// The extension category flags.
    #[inline]
    pub fn categories(&self) -> &ExtensionCategories {
        &self.categories
    }

    /// The detected profile.
    #[inline]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Desktop compatibility profile (or a pre-3.2 desktop context).
    #[inline]
    pub fn is_compat(&self) -> bool {
        self.profile == Profile::Compat
    }

    /// Desktop core profile.
    #[inline]
    pub fn is_core(&self) -> bool {
        self.profile == Profile::Core
    }

    /// OpenGL ES 1.x.
    #[inline]
    pub fn is_es1(&self) -> bool {
        self.profile == Profile::ES1
    }

    /// OpenGL ES 2.0 or later, including WebGL.
    #[inline]
    pub fn is_es2(&self) -> bool {
        matches!(self.profile, Profile::ES2 | Profile::WebGL)
    }

    /// WebGL.
    #[inline]
    pub fn is_webgl(&self) -> bool {
        self.profile == Profile::WebGL
    }

    /// The desktop GL version, `0.0` on ES contexts.
    #[inline]
    pub fn gl_version(&self) -> GLVersion {
        self.gl_version
    }

    /// The OpenGL ES version, `0.0` on desktop contexts.
    #[inline]
    pub fn gles_version(&self) -> GLVersion {
        self.gles_version
    }

    /// The shading language version, `0.0` if unknown.
    #[inline]
    pub fn glsl_version(&self) -> GLVersion {
        self.glsl_version
    }

    /// The version of a windowing-system API, `0.0` if unknown or not tracked.
    pub fn windowing_version(&self, api: GLApi) -> GLVersion {
        self.windowing_versions
            .get(&api)
            .copied()
            .unwrap_or_default()
    }

    /// The version ladder of `api`, if it is tracked.
    #[inline]
    pub fn ladder(&self, api: GLApi) -> Option<&VersionLadder> {
        self.ladders.get(&api)
    }

    /// Whether the ladder of `api` has `major.minor` set.
    pub fn supports_version(&self, api: GLApi, major: u8, minor: u8) -> bool {
        self.ladders
            .get(&api)
            .map_or(false, |ladder| ladder.supports(GLVersion::new(major, minor)))
    }

    /// Driver limits.
    #[inline]
    pub fn limits(&self) -> &ContextLimits {
        &self.limits
    }
}

fn apply_forced_profile(detected: Profile, config: &ProbeConfig) -> Profile {
    let support = config.support;
    if config.force_es1_profile && !support.contains(SystemSupport::ES1) {
        debug!("ignoring forced ES1 profile: ES1 support is not compiled in");
    }
    if config.force_es2_profile && !support.contains(SystemSupport::ES2) {
        debug!("ignoring forced ES2 profile: ES2 support is not compiled in");
    }
    if config.forced_profile_count() > 1 {
        warn!(
            "conflicting forced profiles (core: {}, ES1: {}, ES2: {}); applying core, then ES1, \
             then ES2, last one wins",
            config.force_core_profile, config.force_es1_profile, config.force_es2_profile
        );
    }

    let mut profile = detected;
    if config.force_core_profile {
        profile = Profile::Core;
    }
    if config.force_es1_profile && support.contains(SystemSupport::ES1) {
        profile = Profile::ES1;
    }
    if config.force_es2_profile && support.contains(SystemSupport::ES2) {
        profile = Profile::ES2;
    }
    if profile != detected {
        debug!("forced profile {} over detected {}", profile, detected);
    }
    profile
}

fn scan_glsl_version(text: &str) -> GLVersion {
    ["OpenGL ES GLSL ES", "WebGL GLSL ES", ""]
        .iter()
        .find_map(|prefix| GLVersion::scan(text, prefix))
        .unwrap_or_default()
}

fn warn_gl_errors(queries: &dyn ContextQueries, message: &str) {
    for _ in 0..MAX_DRAINED_ERRORS {
        match GLError::from_code(queries.get_error()) {
            None => return,
            Some(error) => warn!("glGetError returned {} {}", error, message),
        }
    }
}
