//! Input collection and rendering for the CLI.

use anyhow::{Context, Result};
use colored::*;
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use memmap2::Mmap;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use mdpress_lib::RenderOptions;
use mdpress_lib::config::Config;
use mdpress_lib::exit_codes;
use mdpress_lib::render;

use crate::RenderArgs;

/// Threshold for using memory-mapped I/O (1MB)
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// File extensions treated as Markdown when scanning directories.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Render the inputs selected by `args` and return the process exit
/// code. Explicitly named files always render; directories are walked
/// subject to the configured include/exclude patterns and gitignore
/// handling.
pub fn process(args: &RenderArgs, config: &Config, options: &RenderOptions) -> i32 {
    if args.stdin || args.paths.iter().any(|p| p == "-") {
        return process_stdin(options);
    }

    // No paths means "render the current directory tree".
    let paths = if args.paths.is_empty() {
        vec![".".to_string()]
    } else {
        args.paths.clone()
    };

    let mut failures = 0usize;
    let mut rendered = 0usize;
    let mut files = Vec::new();

    for path in &paths {
        let path = Path::new(path);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            files.extend(walk_directory(path, config));
        } else {
            eprintln!(
                "{}: No such file or directory: {}",
                "Error".red().bold(),
                path.display()
            );
            failures += 1;
        }
    }
    files.sort();
    files.dedup();

    if files.is_empty() && failures == 0 {
        log::warn!("No Markdown files found to render");
    }

    let mut stdout = io::stdout().lock();
    for file in &files {
        match render_file(file, args.output.as_deref(), options, args.quiet, &mut stdout) {
            Ok(()) => rendered += 1,
            Err(e) => {
                eprintln!("{}: {:#}", "Error".red().bold(), e);
                failures += 1;
            }
        }
    }

    if !args.quiet && args.output.is_some() {
        println!("Rendered {rendered} of {} file(s)", files.len());
    }

    if failures > 0 {
        exit_codes::RENDER_ERROR
    } else {
        exit_codes::SUCCESS
    }
}

/// Render stdin to stdout.
fn process_stdin(options: &RenderOptions) -> i32 {
    let mut content = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut content) {
        eprintln!("{}: Failed to read stdin: {}", "Error".red().bold(), e);
        return exit_codes::RENDER_ERROR;
    }

    println!("{}", render(&content, options));
    exit_codes::SUCCESS
}

/// Render one file to stdout or into the output directory.
fn render_file(
    path: &Path,
    output_dir: Option<&Path>,
    options: &RenderOptions,
    quiet: bool,
    stdout: &mut impl Write,
) -> Result<()> {
    let content = read_file_efficiently(path)?;
    let html = render(&content, options);

    match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
            let target = output_path(path, dir);
            fs::write(&target, format!("{html}\n"))
                .with_context(|| format!("Failed to write {}", target.display()))?;
            if !quiet {
                println!(
                    "{} {} -> {}",
                    "Rendered".green(),
                    path.display(),
                    target.display()
                );
            }
        }
        None => {
            writeln!(stdout, "{html}").context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Efficiently read file content using memory mapping for large files.
fn read_file_efficiently(path: &Path) -> Result<String> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat {}", path.display()))?;

    if metadata.len() > MMAP_THRESHOLD {
        // Memory-map large files; the copy into a String is still
        // cheaper than buffered reads at this size.
        let file =
            fs::File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to mmap {}", path.display()))?;
        String::from_utf8(mmap.to_vec())
            .with_context(|| format!("Invalid UTF-8 in file {}", path.display()))
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// The output file for `input` inside `output_dir`: same stem, `.html`
/// extension, flat layout.
fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("output"));
    output_dir.join(stem).with_extension("html")
}

/// Walk a directory for Markdown files, honoring gitignore settings and
/// the configured include/exclude globs.
fn walk_directory(dir: &Path, config: &Config) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(dir);
    builder
        .git_ignore(config.global.respect_gitignore)
        .git_global(config.global.respect_gitignore)
        .git_exclude(config.global.respect_gitignore)
        .hidden(true);

    if !config.global.include.is_empty() || !config.global.exclude.is_empty() {
        let mut overrides = OverrideBuilder::new(dir);
        for pattern in &config.global.include {
            for expanded in expand_directory_pattern(pattern) {
                if overrides.add(&expanded).is_err() {
                    log::warn!("Invalid include pattern: {pattern}");
                }
            }
        }
        for pattern in &config.global.exclude {
            for expanded in expand_directory_pattern(pattern) {
                if overrides.add(&format!("!{expanded}")).is_err() {
                    log::warn!("Invalid exclude pattern: {pattern}");
                }
            }
        }
        match overrides.build() {
            Ok(overrides) => {
                builder.overrides(overrides);
            }
            Err(e) => log::error!("Failed to build override matcher: {e}"),
        }
    }

    builder
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| is_markdown_file(path))
        .collect()
}

/// Whether `path` has a Markdown file extension.
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Expands directory-style patterns to also match files within them:
/// `docs/guide` becomes `docs/guide` plus `docs/guide/**`. Patterns
/// that already contain glob characters are used as-is.
fn expand_directory_pattern(pattern: &str) -> Vec<String> {
    if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
        return vec![pattern.to_string()];
    }

    let base = pattern.trim_end_matches('/');
    vec![base.to_string(), format!("{base}/**")]
}
