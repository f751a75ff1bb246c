//! adoc-prep — prepare AsciiDoc modules and assemblies for publishing.
//!
//! Walks the current directory and checks every `.adoc` file (except
//! `master.adoc`, and anything inside hidden directories):
//!
//! 1. **Title** — reports files without a `= Title` heading
//! 2. **Abstract** — tags the first paragraph with the abstract role, or
//!    reports the file when no paragraph can safely be picked
//! 3. **Additional resources** — tags untagged resources sections
//! 4. **Attributes** — renames `:system-module-type:` to `:_module-type:`
//!
//! Files are rewritten in place unless `--no-op` is given.

mod abstracts;
mod attributes;
mod config;
mod document;
mod report;
mod resources;
mod title;
mod walk;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use config::{Config, MarkerStyle};
use report::Report;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "adoc-prep",
    version,
    about = "Check AsciiDoc modules and assemblies for titles and abstracts",
    args_override_self = true
)]
struct Cli {
    /// Scan and report without modifying any file
    #[arg(long = "no-op")]
    no_op: bool,

    /// Use the system__ naming convention for role tags
    #[arg(long)]
    alternate: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let style = if self.alternate {
            MarkerStyle::Alternate
        } else {
            MarkerStyle::Standard
        };
        Config::new(style, self.no_op)
    }
}

/// Drop every argument clap does not know about, keeping the program name.
///
/// Unknown flags are ignored rather than rejected. `--help`/`-h` and
/// `--version`/`-V` are declared by clap and pass through, so they print and
/// exit before the prompt.
fn recognized_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut cmd = Cli::command();
    cmd.build();
    let known: Vec<String> = cmd
        .get_arguments()
        .flat_map(|arg| {
            let long = arg.get_long().map(|l| format!("--{l}"));
            let short = arg.get_short().map(|s| format!("-{s}"));
            long.into_iter().chain(short)
        })
        .collect();

    let mut args = args.into_iter();
    args.next()
        .into_iter()
        .chain(args.filter(|arg| {
            let keep = arg.to_str().is_some_and(|a| known.iter().any(|k| k == a));
            if !keep {
                tracing::debug!(arg = ?arg, "ignoring unrecognized argument");
            }
            keep
        }))
        .collect()
}

fn print_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "==================================================")?;
    writeln!(out, "MS3 Prep")?;
    writeln!(out, "==================================================")?;
    writeln!(out)?;
    writeln!(
        out,
        "This script will check all modules and assemblies under the current directory \
         and perform the following actions:\n"
    )?;
    writeln!(out, "  1. Add the system abstract tag if missing")?;
    writeln!(out, "  2. Add the additional resources tag if missing")?;
    writeln!(out, "  3. Report all files missing a title")?;
    writeln!(out, "  4. Report all files missing a suitable abstract\n")
}

/// Ask for confirmation. Only `Y` (any case) proceeds; EOF declines.
fn confirm(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    write!(out, "Proceed? (Y/N): ")?;
    out.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Check every document under `root`, printing one line per directory.
fn process(root: &Path, config: &Config, out: &mut impl Write) -> Result<Report> {
    let mut report = Report::default();

    for entry in walk::entries(root) {
        match entry? {
            walk::Entry::Directory(dir) => {
                writeln!(out, "Processing {}...", walk::display_dir(root, &dir))?;
            }
            walk::Entry::Document(path) => {
                let findings = document::process_file(&path, config)?;
                report.record(&path, &findings);
            }
        }
    }

    tracing::info!(
        checked = report.checked,
        changed = report.changed,
        resource_tags = report.resource_tags,
        renamed_attributes = report.renamed_attributes,
        dry_run = config.dry_run,
        "run finished"
    );
    Ok(report)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse_from(recognized_args(std::env::args_os()));
    let config = cli.config();
    tracing::debug!(?config, "starting");

    ctrlc::set_handler(|| {
        println!("\n\nOperation cancelled...\n");
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")?;

    // Unlocked: the interrupt handler prints too.
    let mut stdout = io::stdout();
    print_header(&mut stdout)?;
    if !confirm(&mut io::stdin().lock(), &mut stdout)? {
        return Ok(());
    }

    let root = std::env::current_dir().context("Failed to resolve current directory")?;
    let report = process(&root, &config, &mut stdout)?;
    report.render(&mut stdout)?;

    Ok(())
}
