// src/commands/run.rs

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{
        config::DiscoverConfig,
        discovery::{self, ArtifactFilter},
        models::ArtifactRun,
    },
    infra::t,
    reporting::print_run_summary,
};

/// Runs the test discovery runner.
///
/// With `explicit` set, only that path is considered; otherwise `root` (or the
/// configured root) is walked recursively. Matching artifacts are invoked one
/// by one and their exit codes are ignored.
pub async fn execute(
    explicit: Option<PathBuf>,
    root: Option<PathBuf>,
    extensions: Vec<String>,
    config: &DiscoverConfig,
    locale: &str,
) -> Result<Vec<ArtifactRun>> {
    println!(
        "{}",
        t!("run.started", locale = locale, time = super::started_at()).bold()
    );

    let extensions = if extensions.is_empty() {
        config.extensions.clone()
    } else {
        extensions
    };
    let filter = ArtifactFilter::from_extensions(&extensions);
    match &filter {
        ArtifactFilter::Extensions(allowed) => println!(
            "{}",
            t!("run.filter_extensions", locale = locale, list = allowed.join(", ")).cyan()
        ),
        ArtifactFilter::Executable => {
            println!("{}", t!("run.filter_executable", locale = locale).cyan())
        }
    }

    let candidates = match &explicit {
        Some(path) => vec![path.clone()],
        None => {
            let root = root.unwrap_or_else(|| config.root.clone());
            println!("{}", t!("run.root", locale = locale, path = root.display()).cyan());
            if !root.exists() {
                println!(
                    "{}",
                    t!("run.root_missing", locale = locale, path = root.display()).yellow()
                );
            }
            discovery::collect_candidates(&root, locale)
        }
    };

    let artifacts = discovery::select_artifacts(candidates, &filter);

    if artifacts.is_empty() {
        match &explicit {
            Some(path) => println!(
                "{}",
                t!("run.not_artifact", locale = locale, path = path.display()).yellow()
            ),
            None => println!("{}", t!("run.no_artifacts", locale = locale).yellow()),
        }
        return Ok(Vec::new());
    }

    let stop_token = super::setup_signal_handler(locale);
    let runs = discovery::run_artifacts(&artifacts, &stop_token, locale).await;

    print_run_summary(&runs, locale);
    Ok(runs)
}
