//! Process exit codes for the mdpress CLI.

/// All inputs rendered successfully.
pub const SUCCESS: i32 = 0;
/// One or more inputs could not be read or written.
pub const RENDER_ERROR: i32 = 1;
/// Invalid invocation or configuration.
pub const TOOL_ERROR: i32 = 2;

/// Helpers that terminate the process with a named code.
pub mod exit {
    /// Exit after a tool-level failure (bad config, usage error).
    pub fn tool_error() -> ! {
        std::process::exit(super::TOOL_ERROR);
    }

    /// Exit after one or more inputs failed to render.
    pub fn render_error() -> ! {
        std::process::exit(super::RENDER_ERROR);
    }

    /// Exit cleanly.
    pub fn success() -> ! {
        std::process::exit(super::SUCCESS);
    }
}
