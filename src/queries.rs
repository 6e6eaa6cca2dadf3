// glprobe/src/queries.rs
//
//! The driver queries the probe needs from a context.

use crate::gl;
use crate::gl::types::{GLboolean, GLenum, GLint, GLuint};
use crate::info::{GLApi, GLVersion};

use glow::HasContext;
use log::warn;
use std::ffi::CStr;
use std::os::raw::c_char;

/// The capability queries the probe issues against a context.
///
/// All methods must be called on the thread the context is current on. A query the
/// driver rejects should still return a value (empty string, zero, `false`) and leave
/// the error to be picked up by [`ContextQueries::get_error`].
pub trait ContextQueries {
    /// `glGetString`. Returns an empty string if the driver returns null.
    fn get_string(&self, name: GLenum) -> String;

    /// `glGetStringi`.
    fn get_string_indexed(&self, name: GLenum, index: GLuint) -> String;

    /// `glGetIntegerv` for a single-valued state.
    fn get_integer(&self, name: GLenum) -> GLint;

    /// `glGetBooleanv` for a single-valued state.
    fn get_boolean(&self, name: GLenum) -> bool;

    /// `glGetError`.
    fn get_error(&self) -> GLenum;

    /// The version of a windowing-system API (GLX, EGL) backing the context, if known.
    fn windowing_version(&self, _api: GLApi) -> Option<GLVersion> {
        None
    }
}

impl ContextQueries for glow::Context {
    fn get_string(&self, name: GLenum) -> String {
        unsafe { self.get_parameter_string(name) }
    }

    fn get_string_indexed(&self, name: GLenum, index: GLuint) -> String {
        unsafe { self.get_parameter_indexed_string(name, index) }
    }

    fn get_integer(&self, name: GLenum) -> GLint {
        unsafe { self.get_parameter_i32(name) }
    }

    fn get_boolean(&self, name: GLenum) -> bool {
        unsafe { self.get_parameter_bool(name) }
    }

    fn get_error(&self) -> GLenum {
        unsafe { HasContext::get_error(self) }
    }
}

impl ContextQueries for gl::Gl {
    fn get_string(&self, name: GLenum) -> String {
        unsafe { string_from_gl(self.GetString(name)) }
    }

    fn get_string_indexed(&self, name: GLenum, index: GLuint) -> String {
        if !self.GetStringi.is_loaded() {
            warn!("glGetStringi is not available");
            return String::new();
        }
        unsafe { string_from_gl(self.GetStringi(name, index)) }
    }

    fn get_integer(&self, name: GLenum) -> GLint {
        let mut value = 0;
        unsafe {
            self.GetIntegerv(name, &mut value);
        }
        value
    }

    fn get_boolean(&self, name: GLenum) -> bool {
        let mut value: GLboolean = gl::FALSE;
        unsafe {
            self.GetBooleanv(name, &mut value);
        }
        value != gl::FALSE
    }

    fn get_error(&self) -> GLenum {
        unsafe { self.GetError() }
    }
}

unsafe fn string_from_gl(string: *const gl::types::GLubyte) -> String {
    if string.is_null() {
        return String::new();
    }
    CStr::from_ptr(string as *const c_char)
        .to_string_lossy()
        .into_owned()
}
