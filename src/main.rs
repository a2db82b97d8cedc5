//! `orbis <manifest.toml> [options.toml]`
//!
//! Opens a window showing the gallery described by the manifest.

use std::{path::Path, process::ExitCode};

use orbis::{options::Options, GalleryError, Viewer};

fn run(manifest: &str, options: Option<&str>) -> Result<(), GalleryError> {
    let options = match options {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    Viewer::builder()
        .with_manifest(manifest)
        .with_options(options)
        .build()
        .run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(manifest) = args.get(1) else {
        log::error!("usage: orbis <manifest.toml> [options.toml]");
        return ExitCode::FAILURE;
    };

    match run(manifest, args.get(2).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
