//! Render subcommand handler

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use logtint::cli::RenderArgs;
use logtint::render::render_to_writer;
use logtint::source::STDIN_LOCATOR;
use logtint::{source_for, ColorizeOptions, Config, Format};

/// Render every requested log.
///
/// Without `--out-dir` all logs go, one after another, to `--output` or
/// stdout. With `--out-dir` each log gets its own file and the logs are
/// rendered in parallel.
pub fn handle(args: &RenderArgs) -> Result<()> {
    let config = Config::load()?;

    let to_terminal =
        args.output.is_none() && args.out_dir.is_none() && atty::is(atty::Stream::Stdout);
    let format = args
        .format
        .unwrap_or(config.render.format)
        .resolve(to_terminal);

    let mut options = config.colorize;
    if let Some(palette) = args.bg_palette {
        options.background_palette = palette;
    }
    debug!(?format, ?options, files = args.files.len(), "rendering");

    match &args.out_dir {
        Some(dir) => render_to_dir(&args.files, dir, format, options),
        None => render_to_output(&args.files, args.output.as_deref(), format, options),
    }
}

fn render_to_output(
    locators: &[String],
    output: Option<&Path>,
    format: Format,
    options: ColorizeOptions,
) -> Result<()> {
    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for locator in locators {
        let text = source_for(locator).read_log()?;
        render_to_writer(&text, format, options, out.as_mut())
            .with_context(|| format!("Failed to write output for {}", locator))?;
    }
    out.flush()?;
    Ok(())
}

fn render_to_dir(
    locators: &[String],
    dir: &Path,
    format: Format,
    options: ColorizeOptions,
) -> Result<()> {
    let jobs = output_paths(dir, locators, format)?;
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let written = jobs
        .into_par_iter()
        .map(|(locator, target)| -> Result<PathBuf> {
            let text = source_for(locator).read_log()?;
            let file = File::create(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
            let mut out = BufWriter::new(file);
            render_to_writer(&text, format, options, &mut out)
                .and_then(|()| out.flush())
                .with_context(|| format!("Failed to write {}", target.display()))?;
            debug!(locator = %locator, target = %target.display(), "rendered");
            Ok(target)
        })
        .collect::<Result<Vec<PathBuf>>>()?;

    info!(count = written.len(), dir = %dir.display(), "rendered logs");
    Ok(())
}

/// Pair every log with its output file, refusing logs that would land on
/// the same file.
fn output_paths<'a>(
    dir: &Path,
    locators: &'a [String],
    format: Format,
) -> Result<Vec<(&'a str, PathBuf)>> {
    let mut claimed: HashMap<PathBuf, &str> = HashMap::new();
    let mut jobs = Vec::with_capacity(locators.len());
    for locator in locators {
        let target = output_path(dir, locator, format);
        if let Some(previous) = claimed.insert(target.clone(), locator) {
            bail!(
                "{} and {} would both be written to {}",
                previous,
                locator,
                target.display()
            );
        }
        jobs.push((locator.as_str(), target));
    }
    Ok(jobs)
}

/// `<dir>/<file stem>.<ext>`; stdin renders as `stdin.<ext>`.
fn output_path(dir: &Path, locator: &str, format: Format) -> PathBuf {
    let stem = if locator == STDIN_LOCATOR {
        "stdin".into()
    } else {
        Path::new(locator)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "log".into())
    };
    dir.join(format!("{}.{}", stem, format.extension()))
}
