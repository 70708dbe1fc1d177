//! Multi-file processing shared by the commands

use std::path::Path;
use clap::ArgMatches;
use log::{error, info};

use crate::exif::errors::{ExifError, ExifResult};
use crate::utils::progress::ProgressTracker;

/// Input paths from the positional arguments
pub fn input_files(args: &ArgMatches) -> ExifResult<Vec<String>> {
    let inputs: Vec<String> = args.get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if inputs.is_empty() {
        return Err(ExifError::GenericError("Missing input file".to_string()));
    }
    Ok(inputs)
}

/// Where a command writes the file produced for each input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One explicit output path; only valid for a single input
    File(String),
    /// Same file name inside another directory
    Directory(String),
    /// Next to the input, with the extension replaced by a suffix
    Suffix(&'static str),
}

impl OutputTarget {
    /// Reads `--output` / `--output-dir`, falling back to `default_suffix`
    pub fn from_args(args: &ArgMatches, input_count: usize, default_suffix: &'static str) -> ExifResult<Self> {
        let output = args.get_one::<String>("output");
        let output_dir = args.get_one::<String>("output-dir");

        match (output, output_dir) {
            (Some(_), Some(_)) => Err(ExifError::GenericError(
                "--output and --output-dir cannot be combined".to_string())),
            (Some(_), None) if input_count > 1 => Err(ExifError::GenericError(
                "--output needs a single input; use --output-dir for several".to_string())),
            (Some(file), None) => Ok(OutputTarget::File(file.clone())),
            (None, Some(dir)) => Ok(OutputTarget::Directory(dir.clone())),
            (None, None) => Ok(OutputTarget::Suffix(default_suffix)),
        }
    }

    pub fn path_for(&self, input: &str) -> String {
        let input = Path::new(input);
        match self {
            OutputTarget::File(file) => file.clone(),
            OutputTarget::Directory(dir) => {
                let name = input.file_name().map(|n| n.to_os_string()).unwrap_or_default();
                Path::new(dir).join(name).to_string_lossy().into_owned()
            }
            OutputTarget::Suffix(suffix) => {
                let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
                input.with_file_name(format!("{}{}", stem, suffix)).to_string_lossy().into_owned()
            }
        }
    }
}

/// Runs `process` on every input
///
/// A failing file is reported and skipped. The batch fails at the end if
/// any file failed.
pub fn run_batch<F>(inputs: &[String], description: &str, mut process: F) -> ExifResult<()>
where
    F: FnMut(&str) -> ExifResult<()>,
{
    let mut progress = (inputs.len() > 1).then(|| ProgressTracker::new(inputs.len() as u64, description));
    let mut failed = 0;

    for input in inputs {
        if let Some(progress) = &progress {
            progress.start_file(input);
        }

        let result = process(input);
        if let Err(e) = &result {
            error!("{}: {}", input, e);
            failed += 1;
        }

        if let Some(progress) = progress.as_mut() {
            progress.finish_file(result.is_ok());
        }
    }

    if let Some(progress) = &progress {
        progress.finish();
    }

    if failed > 0 {
        return Err(ExifError::GenericError(format!("{} of {} files failed", failed, inputs.len())));
    }

    info!("{}: {} file(s) done", description, inputs.len());
    Ok(())
}
