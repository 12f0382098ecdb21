use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use neo::areas::repository::{DEFAULT_REPOSITORY_DIR, Repository};
use neo::artifacts::core::PagerWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "neo",
    version = "0.1.0",
    about = "A minimal version control system",
    long_about = "neo stores file snapshots in a content-addressed object store, \
    stages changes in an index and links commits into a single linear history.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "NEO_DIR",
        default_value = DEFAULT_REPOSITORY_DIR,
        help = "Repository directory, relative to the working tree"
    )]
    repo_dir: PathBuf,

    #[arg(
        short = 'C',
        global = true,
        env = "NEO_WORK_TREE",
        help = "Working tree root (defaults to the current directory)"
    )]
    work_tree: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Create an empty repository",
        long_about = "This command creates the objects directory, an empty HEAD and an empty index \
        in the working tree, keeping any of them that already exist."
    )]
    Init {
        #[arg(index = 1, help = "The working tree to initialize")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Add file contents to the index",
        long_about = "This command stores the content of each file and stages it for the next commit. \
        Use `.` to stage every file of the working tree."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "Files or directories to add")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes",
        long_about = "This command creates a new commit from the staged files on top of HEAD."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the commit history")]
    Log,
    #[command(
        name = "diff",
        about = "Show the changes introduced by a commit",
        long_about = "This command compares each file of a commit with the same file in its parent commit. \
        The commit may be given as a full or abbreviated id."
    )]
    Diff {
        #[arg(index = 1, help = "The commit id")]
        commit: String,
    },
    #[command(name = "cat-file", about = "Print the content of an object")]
    CatFile {
        #[arg(index = 1, help = "The object id to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object store"
    )]
    HashObject {
        #[arg(short, long, help = "Write the object to the object store")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout_is_terminal = std::io::stdout().is_terminal();
    if !stdout_is_terminal {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    let work_tree = match &cli.work_tree {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let open = |path: &Path| Repository::new(path, &cli.repo_dir, Box::new(std::io::stdout()));

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = open(path.as_deref().unwrap_or(work_tree.as_path()))?;
            repository.init()?
        }
        Commands::Add { paths } => {
            let mut repository = open(&work_tree)?;
            repository.add(paths)?
        }
        Commands::Commit { message } => {
            let mut repository = open(&work_tree)?;
            repository.commit(message)?;
        }
        Commands::Log => {
            if stdout_is_terminal && std::env::var_os("NO_PAGER").is_none() {
                let pager = Pager::new();
                let writer = PagerWriter::new(pager.clone());
                let repository = Repository::new(&work_tree, &cli.repo_dir, Box::new(writer))?;
                repository.log()?;
                minus::page_all(pager)?;
            } else {
                let repository = open(&work_tree)?;
                repository.log()?
            }
        }
        Commands::Diff { commit } => {
            let repository = open(&work_tree)?;
            repository.show_commit_diff(commit)?
        }
        Commands::CatFile { sha } => {
            let mut repository = open(&work_tree)?;
            repository.cat_file(sha)?
        }
        Commands::HashObject { write, file } => {
            let mut repository = open(&work_tree)?;
            repository.hash_object(file, *write)?
        }
    }

    Ok(())
}
