use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

mod color;
mod hdr;
mod state;

use hdr::loader::FileLoader;
use state::{ConversionOutcome, SkipReason};

/// Turn command-line arguments into the list of files to convert
///
/// Files are kept as given, in order. Directories are walked recursively
/// (sorted by file name) and contribute only files a decoder is routed for.
fn expand_inputs<I>(args: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut inputs = Vec::new();

    for arg in args {
        if !arg.is_dir() {
            inputs.push(arg);
            continue;
        }

        println!("🔍 Scanning folder: {}", arg.display());
        for entry in WalkDir::new(&arg)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && hdr::dispatch::route(path).is_some() {
                inputs.push(path.to_path_buf());
            }
        }
    }

    inputs
}

/// Print the console line(s) for one finished file
fn report(path: &Path, outcome: &ConversionOutcome) {
    println!("🖼️  {}", path.display());

    match outcome {
        ConversionOutcome::Success(dest) => {
            println!("   → {}", dest.display());
        }
        ConversionOutcome::Skipped(SkipReason::UnsupportedExtension) => {
            println!("   ⏭️  this file is NOT .hdr or .exr file, skipped");
        }
        ConversionOutcome::DecodeFailed(message) => {
            eprintln!("❌ ERR : {}", message);
        }
        ConversionOutcome::AllocationFailed => {
            eprintln!("❌ this file is too big...");
        }
        ConversionOutcome::EncodeFailed(message) => {
            eprintln!("❌ JPEG write failed: {}", message);
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if args.is_empty() {
        eprintln!("usage: hdr-thumb <file.hdr|file.exr|folder>...");
        return ExitCode::from(2);
    }

    let inputs = expand_inputs(args);
    let summary = hdr::run_batch(&inputs, &FileLoader, report);

    println!(
        "✅ Done: {} files, {} converted, {} skipped, {} failed",
        summary.total(),
        summary.converted, summary.skipped, summary.failed
    );
    println!("elapsed time: {} ms", summary.elapsed_ms);

    if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
