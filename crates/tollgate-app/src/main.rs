use std::process::ExitCode;

use clap::Parser;
use tollgate_app::cmd::App;
use tollgate_app::logging;

fn main() -> ExitCode {
    let filter_handle = logging::init();
    let app = App::parse();

    match app.run(&filter_handle) {
        Ok(outcome) => {
            println!("{outcome}");
            outcome.exit_code()
        }
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
