use std::{
    env,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::{args::Args, banner, fetch::Fetcher, manifest, prompt::Prompter, trace};

/// Result of a completed scaffold run.
#[derive(Debug)]
pub struct Scaffolded {
    pub dest: PathBuf,
    pub elapsed_secs: f64,
}

/// Runs the whole sequence: banner, prompts, timed template fetch, manifest
/// patch. Strictly linear; every step waits on the previous one and any
/// failure ends the run.
pub fn run(args: &Args, prompter: &dyn Prompter, fetcher: &dyn Fetcher) -> Result<Scaffolded> {
    let cwd = env::current_dir().context("failed to get current dir")?;
    run_in(&cwd, args, prompter, fetcher)
}

pub fn run_in(
    cwd: &Path,
    args: &Args,
    prompter: &dyn Prompter,
    fetcher: &dyn Fetcher,
) -> Result<Scaffolded> {
    println!();
    println!("{}", banner::banner());
    println!();

    trace!("parsed invocation: {args:?}");

    // A positional target dir preempts the name prompt.
    let meta = prompter.collect(args.target_dir.as_deref())?;

    let dest = cwd.join(&meta.name);
    let started = Instant::now();
    let spinner = download_spinner();

    match fetcher.fetch(&dest) {
        Ok(()) => spinner.finish_and_clear(),
        Err(err) => {
            spinner.finish_and_clear();
            return Err(err);
        }
    }

    let elapsed_secs = started.elapsed().as_secs_f64();
    println!(
        "{}",
        format!("create project finish in {elapsed_secs:.2}s")
            .if_supports_color(owo_colors::Stream::Stdout, |s| s.green())
    );

    manifest::patch(&dest, &meta)?;

    Ok(Scaffolded { dest, elapsed_secs })
}

fn download_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message("template downloading...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
