// glprobe/src/config.rs
//
//! Build-time and run-time switches that steer profile detection.

use bitflags::bitflags;
use log::warn;
use std::env;

bitflags! {
    /// Back-ends this build knows how to drive.
    ///
    /// These mirror the Cargo features and target the crate was compiled for; see
    /// [`SystemSupport::compiled`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SystemSupport: u8 {
        /// OpenGL ES 1.x.
        const ES1        = 0x01;
        /// OpenGL ES 2.0 and later.
        const ES2        = 0x02;
        /// EGL.
        const EGL        = 0x04;
        /// Android.
        const ANDROID    = 0x08;
        /// Emscripten, i.e. WebGL in a browser.
        const EMSCRIPTEN = 0x10;
        /// WGL.
        const WGL        = 0x20;
        /// GLX.
        const GLX        = 0x40;
        /// CGL.
        const CGL        = 0x80;
    }
}

impl SystemSupport {
    /// The back-ends enabled for this build.
    pub fn compiled() -> SystemSupport {
        let mut support = SystemSupport::empty();
        support.set(SystemSupport::ES1, cfg!(sys_es1));
        support.set(SystemSupport::ES2, cfg!(sys_es2));
        support.set(SystemSupport::EGL, cfg!(sys_egl));
        support.set(SystemSupport::ANDROID, cfg!(android));
        support.set(SystemSupport::EMSCRIPTEN, cfg!(emscripten));
        support.set(SystemSupport::WGL, cfg!(sys_wgl));
        support.set(SystemSupport::GLX, cfg!(sys_glx));
        support.set(SystemSupport::CGL, cfg!(sys_cgl));
        support
    }

    /// Whether either flavor of OpenGL ES is supported.
    #[inline]
    pub fn has_es(self) -> bool {
        self.intersects(SystemSupport::ES1 | SystemSupport::ES2)
    }
}

impl Default for SystemSupport {
    fn default() -> SystemSupport {
        SystemSupport::compiled()
    }
}

/// Switches passed to [`crate::ContextInfo::detect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Treat the context as a core profile context no matter what the driver says.
    pub force_core_profile: bool,
    /// Treat the context as OpenGL ES 1.x. Ignored without ES1 support.
    pub force_es1_profile: bool,
    /// Treat the context as OpenGL ES 2.0. Ignored without ES2 support.
    pub force_es2_profile: bool,
    /// The context was created through EGL on a desktop system. Some desktop EGL
    /// implementations don't report an "OpenGL ES" version string for ES 2.0 contexts.
    pub sys_egl: bool,
    /// Back-ends this build supports.
    pub support: SystemSupport,
}

/// Environment variable that sets [`ProbeConfig::force_core_profile`].
pub const FORCE_CORE_PROFILE_VAR: &str = "GLPROBE_FORCE_CORE_PROFILE";
/// Environment variable that sets [`ProbeConfig::force_es1_profile`].
pub const FORCE_ES1_PROFILE_VAR: &str = "GLPROBE_FORCE_ES1_PROFILE";
/// Environment variable that sets [`ProbeConfig::force_es2_profile`].
pub const FORCE_ES2_PROFILE_VAR: &str = "GLPROBE_FORCE_ES2_PROFILE";
/// Environment variable that sets [`ProbeConfig::sys_egl`].
pub const SYS_EGL_VAR: &str = "GLPROBE_SYS_EGL";

impl ProbeConfig {
    /// The default configuration with the switches read from the environment.
    ///
    /// A switch is on when its variable is set to `1`, `true`, `yes` or `on`.
    pub fn from_env() -> ProbeConfig {
        let defaults = ProbeConfig::default();
        ProbeConfig {
            force_core_profile: env_flag(FORCE_CORE_PROFILE_VAR)
                .unwrap_or(defaults.force_core_profile),
            force_es1_profile: env_flag(FORCE_ES1_PROFILE_VAR)
                .unwrap_or(defaults.force_es1_profile),
            force_es2_profile: env_flag(FORCE_ES2_PROFILE_VAR)
                .unwrap_or(defaults.force_es2_profile),
            sys_egl: env_flag(SYS_EGL_VAR).unwrap_or(defaults.sys_egl),
            support: defaults.support,
        }
    }

    /// A configuration with no forced profile for a build supporting `support`.
    ///
    /// [`ProbeConfig::sys_egl`] starts out on only when EGL is the sole windowing
    /// back-end; with GLX, WGL or CGL around, a desktop context is no hint of EGL.
    pub fn with_support(support: SystemSupport) -> ProbeConfig {
        let other_windowing = SystemSupport::GLX | SystemSupport::WGL | SystemSupport::CGL;
        ProbeConfig {
            force_core_profile: false,
            force_es1_profile: false,
            force_es2_profile: false,
            sys_egl: support.contains(SystemSupport::EGL) && !support.intersects(other_windowing),
            support,
        }
    }

    // Forces whose ES flavor isn't supported are ignored, so they don't count.
    pub(crate) fn forced_profile_count(&self) -> usize {
        [
            self.force_core_profile,
            self.force_es1_profile && self.support.contains(SystemSupport::ES1),
            self.force_es2_profile && self.support.contains(SystemSupport::ES2),
        ]
        .iter()
        .filter(|&&forced| forced)
        .count()
    }
}

impl Default for ProbeConfig {
    fn default() -> ProbeConfig {
        ProbeConfig::with_support(SystemSupport::compiled())
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => {
            warn!("ignoring {}={:?}: expected a boolean", name, value);
            None
        }
    }
}
