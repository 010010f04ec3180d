//! Drill launcher menu. Expects the drill binaries in the same directory.

use std::process::ExitCode;

use disaster_drills::app;

fn main() -> ExitCode {
    app::init_logging();
    app::exit_code(app::run_launcher())
}
