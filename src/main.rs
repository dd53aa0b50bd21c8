use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use scs::areas::repository::Repository;
use scs::artifacts::core::{NO_PAGER_VAR, PagerWriter};
use scs::commands::plumbing::ls_tree::LsTreeOptions;
use scs::errors::find_repository_error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_FILTER_VAR: &str = "SCS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "scs",
    version = "0.1.0",
    about = "A minimal content-addressed version control system",
    long_about = "A small version control system: a content-addressed object store, \
    a staging index, flat tree snapshots, a commit graph, branches and a naive three-way merge.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .repo directory in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(name = "cat-file", about = "Print the content of an object")]
    CatFile {
        #[arg(short = 'p', long, help = "The object id to print, possibly abbreviated")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file as a blob and optionally write it to the object store"
    )]
    HashObject {
        #[arg(short, long, help = "Write the blob to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "add", about = "Stage files and directories for the next commit")]
    Add {
        #[arg(required = true, help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(name = "ls-tree", about = "List the entries of a tree or of a commit's tree")]
    LsTree {
        #[arg(long, help = "Only print entry names")]
        name_only: bool,
        #[arg(short, help = "Recurse into nested trees")]
        recursive: bool,
        #[arg(index = 1, help = "Tree or commit id")]
        sha: String,
    },
    #[command(name = "write-tree", about = "Write the staged entries as a tree object")]
    WriteTree,
    #[command(name = "commit", about = "Record the staged snapshot on the current branch")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the first-parent history of the current branch")]
    Log,
    #[command(
        name = "branch",
        about = "List, create or delete branches",
        long_about = "Without arguments this command lists branches. With a name it creates a \
        branch at the current commit, and with -d it deletes the named branch."
    )]
    Branch {
        #[arg(short = 'd', long = "delete", help = "Delete the branch")]
        delete: bool,
        #[arg(index = 1, required_if_eq("delete", "true"))]
        name: Option<String>,
    },
    #[command(name = "checkout", about = "Switch the current branch")]
    Checkout {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(name = "clone", about = "Copy a repository and check out its current commit")]
    Clone {
        #[arg(index = 1)]
        source: PathBuf,
        #[arg(index = 2)]
        destination: PathBuf,
    },
}

fn main() -> ExitCode {
    init_logging();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match find_repository_error(&error) {
            Some(repository_error) if repository_error.is_expected() => {
                tracing::debug!(error = ?error, "command stopped");
                eprintln!("{repository_error}");
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("error: {error:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn open_repository(path: &Path) -> Result<Repository> {
    Repository::new(path, Box::new(std::io::stdout()))
}

fn current_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

fn should_page() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os(NO_PAGER_VAR).is_none()
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => path,
                None => current_dir()?,
            };
            open_repository(&path)?.init()
        }
        Commands::CatFile { sha } => open_repository(&current_dir()?)?.cat_file(&sha),
        Commands::HashObject { write, file } => {
            open_repository(&current_dir()?)?.hash_object(&file, write)
        }
        Commands::Add { paths } => open_repository(&current_dir()?)?.add(&paths),
        Commands::LsTree {
            name_only,
            recursive,
            sha,
        } => open_repository(&current_dir()?)?.ls_tree(
            &sha,
            LsTreeOptions {
                name_only,
                recursive,
            },
        ),
        Commands::WriteTree => open_repository(&current_dir()?)?.write_tree(),
        Commands::Commit { message } => open_repository(&current_dir()?)?.commit(&message),
        Commands::Log => {
            if should_page() {
                let pager = Pager::new();
                let writer = PagerWriter::new(pager.clone());
                let repository = Repository::new(&current_dir()?, Box::new(writer))?;

                repository.log()?;
                minus::page_all(pager)?;
                Ok(())
            } else {
                open_repository(&current_dir()?)?.log()
            }
        }
        Commands::Branch { delete, name } => {
            let repository = open_repository(&current_dir()?)?;
            match (delete, name) {
                (true, Some(name)) => repository.delete_branch(&name),
                (false, Some(name)) => repository.create_branch(&name),
                (_, None) => repository.list_branches(),
            }
        }
        Commands::Checkout { branch } => open_repository(&current_dir()?)?.checkout(&branch),
        Commands::Merge { branch } => open_repository(&current_dir()?)?.merge(&branch).map(|_| ()),
        Commands::Clone {
            source,
            destination,
        } => open_repository(&destination)?.clone_from(&source),
    }
}
