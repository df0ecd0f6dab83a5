//! commitinfo - show the rendered header/body of a git commit
//!
//! Binary entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commitinfo::git::{CommitSource, GitExecutor};
use commitinfo::lookup;

/// Show a commit's header and body as rendered for commit detail views
#[derive(Debug, Parser)]
#[command(name = "commitinfo", version, about)]
struct Cli {
    /// Revision to show
    #[arg(default_value = "HEAD")]
    rev: String,

    /// Repository to run in (defaults to the current directory)
    #[arg(short = 'C', long = "repo", env = "COMMITINFO_REPO")]
    repo: Option<PathBuf>,

    /// git binary to invoke
    #[arg(long, env = "COMMITINFO_GIT", default_value = "git")]
    git: PathBuf,

    /// Also list local branches containing the revision
    #[arg(long)]
    branches: bool,

    /// Include remote-tracking branches in the branch list
    #[arg(long)]
    remote: bool,

    /// Print the raw commit block instead of rendering it
    #[arg(long)]
    raw: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let executor = match cli.repo {
        Some(ref path) => GitExecutor::with_repo_path(path.clone()),
        None => GitExecutor::new(),
    }
    .with_program(cli.git.clone());

    run(&cli, &executor)
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, executor: &GitExecutor) -> color_eyre::Result<()> {
    if cli.raw {
        match executor.commit_data(&cli.rev)? {
            Some(raw) => println!("{}", raw),
            None => eprintln!("Cannot find commit {}", cli.rev),
        }
        return Ok(());
    }

    let info = lookup::get_commit_info(executor, &cli.rev);
    println!("{}", info.header);
    print!("{}", info.body);

    if cli.branches || cli.remote {
        let branches = lookup::get_all_branches_which_contain_given_commit(
            executor,
            &cli.rev,
            cli.branches,
            cli.remote,
        );
        println!("Contained in branches:");
        for branch in branches {
            println!("\t{}", branch);
        }
    }

    Ok(())
}
