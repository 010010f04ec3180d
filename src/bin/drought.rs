//! Drought drill.

use std::process::ExitCode;

use disaster_drills::{app, DrillKind};

fn main() -> ExitCode {
    app::init_logging();
    app::exit_code(app::run_drill(DrillKind::Drought))
}
