use std::process::ExitCode;

fn main() -> ExitCode {
    match tempcast::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tempcast: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
