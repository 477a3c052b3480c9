//! Lucky Draw - random winners and groups from the terminal

use std::process::ExitCode;

fn main() -> ExitCode {
    // Errors are already reported by `run` in the selected output format
    if lucky_draw::cli::run().is_err() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
