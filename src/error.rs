// glprobe/src/error.rs
//
//! Errors reported by the driver while probing.
//!
//! Probing never fails; these are decoded only so they can be logged.

use crate::gl;
use crate::gl::types::GLenum;

use std::fmt::{self, Display, Formatter};

/// A value returned by `glGetError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GLError {
    /// An unacceptable value was specified for an enumerated argument.
    InvalidEnum,
    /// A numeric argument was out of range.
    InvalidValue,
    /// The operation isn't allowed in the current state.
    InvalidOperation,
    /// The operation would have overflowed an internal stack.
    StackOverflow,
    /// The operation would have underflowed an internal stack.
    StackUnderflow,
    /// There isn't enough memory left to execute the command.
    OutOfMemory,
    /// The framebuffer object is not complete.
    InvalidFramebufferOperation,
    /// The context has been lost, e.g. due to a graphics card reset.
    ContextLost,
    /// An error code this crate doesn't know about.
    Unknown(GLenum),
}

impl GLError {
    /// Decodes a `glGetError` result, returning `None` for `GL_NO_ERROR`.
    pub fn from_code(code: GLenum) -> Option<GLError> {
        match code {
            gl::NO_ERROR => None,
            gl::INVALID_ENUM => Some(GLError::InvalidEnum),
            gl::INVALID_VALUE => Some(GLError::InvalidValue),
            gl::INVALID_OPERATION => Some(GLError::InvalidOperation),
            gl::STACK_OVERFLOW => Some(GLError::StackOverflow),
            gl::STACK_UNDERFLOW => Some(GLError::StackUnderflow),
            gl::OUT_OF_MEMORY => Some(GLError::OutOfMemory),
            gl::INVALID_FRAMEBUFFER_OPERATION => Some(GLError::InvalidFramebufferOperation),
            gl::CONTEXT_LOST => Some(GLError::ContextLost),
            other => Some(GLError::Unknown(other)),
        }
    }

    /// The raw error code.
    pub fn code(self) -> GLenum {
        match self {
            GLError::InvalidEnum => gl::INVALID_ENUM,
            GLError::InvalidValue => gl::INVALID_VALUE,
            GLError::InvalidOperation => gl::INVALID_OPERATION,
            GLError::StackOverflow => gl::STACK_OVERFLOW,
            GLError::StackUnderflow => gl::STACK_UNDERFLOW,
            GLError::OutOfMemory => gl::OUT_OF_MEMORY,
            GLError::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            GLError::ContextLost => gl::CONTEXT_LOST,
            GLError::Unknown(code) => code,
        }
    }
}

impl Display for GLError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match *self {
            GLError::InvalidEnum => "GL_INVALID_ENUM",
            GLError::InvalidValue => "GL_INVALID_VALUE",
            GLError::InvalidOperation => "GL_INVALID_OPERATION",
            GLError::StackOverflow => "GL_STACK_OVERFLOW",
            GLError::StackUnderflow => "GL_STACK_UNDERFLOW",
            GLError::OutOfMemory => "GL_OUT_OF_MEMORY",
            GLError::InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            GLError::ContextLost => "GL_CONTEXT_LOST",
            GLError::Unknown(code) => return write!(f, "unknown GL error 0x{:04x}", code),
        };
        f.write_str(name)
    }
}
