use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    cyclo::cli::run()
}
