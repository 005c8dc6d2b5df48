//! shiplog - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use git2::Repository;
use tracing_subscriber::EnvFilter;

use shiplog::changelog::{generate_summary, render_changelog, write_changelog};
use shiplog::classify::{classify, ClassifyOptions};
use shiplog::git::{commits::fetch_commits, range::resolve_range};

/// Generate release notes from conventional commits.
#[derive(Parser, Debug)]
#[command(name = "shiplog")]
#[command(about = "Generate release notes from conventional commits")]
#[command(version)]
struct Cli {
    /// Version title for the changelog heading (e.g. v1.2.0)
    version_title: String,

    /// Reference to compare from (tag, commit hash, or branch).
    /// Defaults to the repository's first commit.
    previous: Option<String>,

    /// Path to changelog file
    #[arg(short = 'o', long, default_value = "CHANGELOG.md")]
    output: PathBuf,

    /// Omit (@author) attribution from bullets
    #[arg(long)]
    no_authors: bool,

    /// Dry run - print changelog without writing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Argument errors exit 1, not clap's default 2; help/version stay 0
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Step 1: Open git repository
    let repo = Repository::open(".")
        .context("Not a git repository. Run shiplog from within a git repository.")?;

    // Step 2: Resolve comparison range
    let Some(range) = resolve_range(&repo, cli.previous.as_deref()) else {
        println!("Repository has no commits. Nothing to add.");
        return Ok(());
    };

    println!(
        "Generating release notes for '{}' from range [{}..HEAD]...",
        cli.version_title, range.from_ref
    );

    // Step 3: Fetch commits
    let commits = fetch_commits(&repo, &range);

    if commits.is_empty() {
        println!("No changes found since {}. Nothing to add.", range.from_ref);
        return Ok(());
    }

    println!("Found {} commits", commits.len());

    // Step 4: Classify
    let options = ClassifyOptions {
        attribute_authors: !cli.no_authors,
    };
    let sections = classify(&commits, &options);

    // Step 5: Render
    let Some(document) = render_changelog(&cli.version_title, &sections) else {
        println!("No changelog-worthy commits in range. Nothing written.");
        return Ok(());
    };

    // Step 6: Write or display
    if cli.dry_run {
        println!("\n--- Dry Run Output ---\n");
        print!("{}", document);
    } else {
        write_changelog(&cli.output, &document).context("Failed to write changelog")?;
        println!("✓ {}", generate_summary(&sections, &cli.output));
    }

    Ok(())
}
