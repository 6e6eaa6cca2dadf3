// glprobe/src/info.rs
//
//! OpenGL information.

use std::fmt::{self, Display, Formatter};

/// An API whose versions or extensions the probe tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GLApi {
    /// OpenGL (full or desktop OpenGL).
    GL,
    /// OpenGL ES (embedded OpenGL).
    GLES,
    /// The Windows windowing-system binding.
    WGL,
    /// The X11 windowing-system binding.
    GLX,
    /// The macOS windowing-system binding.
    CGL,
    /// The Khronos native platform interface.
    EGL,
}

impl GLApi {
    /// The lowercase name used in log messages.
    pub fn name(self) -> &'static str {
        match self {
            GLApi::GL => "gl",
            GLApi::GLES => "gles",
            GLApi::WGL => "wgl",
            GLApi::GLX => "glx",
            GLApi::CGL => "cgl",
            GLApi::EGL => "egl",
        }
    }
}

/// A major/minor version pair.
///
/// `0.0` is used throughout the crate to mean "not detected".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GLVersion {
    /// The major version (e.g. 4 in 4.2).
    pub major: u8,
    /// The minor version (e.g. 2 in 4.2).
    pub minor: u8,
}

impl GLVersion {
    /// Creates a version structure with the given major and minor version numbers.
    #[inline]
    pub const fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Whether this version was detected at all.
    #[inline]
    pub fn is_detected(self) -> bool {
        self != GLVersion::default()
    }

    /// Scans a version out of `text` the way `sscanf(text, "<prefix>%d.%d")` would.
    ///
    /// Returns `None` if `text` doesn't start with `prefix` or no major number follows it.
    /// A major number without a readable minor yields `minor == 0`. Unlike `%d`, a
    /// number too large for a `u8` is not read: an oversized major gives `None` and an
    /// oversized minor gives `minor == 0`.
    pub(crate) fn scan(text: &str, prefix: &str) -> Option<GLVersion> {
        let rest = text.strip_prefix(prefix)?;
        let (major, rest) = scan_number(rest)?;
        let minor = rest
            .strip_prefix('.')
            .and_then(scan_number)
            .map_or(0, |(minor, _)| minor);
        Some(GLVersion::new(major, minor))
    }
}

impl Display for GLVersion {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

// Like `%d`: skips leading whitespace, then reads decimal digits. Values that don't fit
// are treated as unreadable.
fn scan_number(text: &str) -> Option<(u8, &str)> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    let value = text[..end].parse().ok()?;
    Some((value, &text[end..]))
}

/// The flavor of OpenGL a context is running under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Desktop OpenGL, compatibility profile (or any pre-3.2 desktop context).
    #[default]
    Compat,
    /// Desktop OpenGL, core profile.
    Core,
    /// OpenGL ES 1.x, fixed function.
    ES1,
    /// OpenGL ES 2.0 and later, shader based.
    ES2,
    /// WebGL. This is an ES2-class profile.
    WebGL,
}

impl Profile {
    /// Whether this is one of the desktop profiles.
    #[inline]
    pub fn is_desktop(self) -> bool {
        matches!(self, Profile::Compat | Profile::Core)
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match *self {
            Profile::Compat => "compatibility",
            Profile::Core => "core",
            Profile::ES1 => "ES1",
            Profile::ES2 => "ES2",
            Profile::WebGL => "WebGL",
        })
    }
}
