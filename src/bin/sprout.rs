use std::process::ExitCode;

use clap::Parser;
use sprout::{
    app,
    args::Args,
    error,
    fetch::GitFetcher,
    prompt::{InquirePrompter, PromptError},
};

fn main() -> ExitCode {
    let args = Args::parse();

    match app::run(&args, &InquirePrompter, &GitFetcher) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(PromptError::Cancelled) = err.downcast_ref::<PromptError>() {
                // A cancelled prompt is a deliberate abort, not a crash.
                println!("{err}");
            } else {
                error!("{err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
