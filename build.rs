// glprobe/build.rs
//
//! The `glprobe` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        windows: { target_os = "windows" },
        macos: { target_os = "macos" },
        android: { target_os = "android" },
        emscripten: { target_os = "emscripten" },
        linux: { all(unix, not(any(macos, android, emscripten))) },

        // Back-ends the probe knows how to classify. ES2 and EGL are implied on
        // Android and Emscripten.
        sys_es1: { feature = "gles1" },
        sys_es2: { any(feature = "gles2", android, emscripten) },
        sys_egl: { any(feature = "egl", android, emscripten) },
        sys_wgl: { windows },
        sys_glx: { linux },
        sys_cgl: { macos },
    }

    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Generate GL bindings. The compatibility profile is needed for the legacy limits
    // (attrib stacks, texture coords, varying floats).
    let mut file = File::create(dest.join("gl_bindings.rs")).unwrap();
    let registry = Registry::new(
        Api::Gl,
        (4, 6),
        Profile::Compatibility,
        Fallbacks::All,
        [
            "GL_AMD_debug_output",
            "GL_ARB_debug_output",
            "GL_ARB_provoking_vertex",
            "GL_ARB_vertex_attrib_binding",
            "GL_ARB_viewport_array",
            "GL_EXT_provoking_vertex",
            "GL_KHR_debug",
        ],
    );
    registry.write_bindings(StructGenerator, &mut file).unwrap();
}
