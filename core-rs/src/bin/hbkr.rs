//! hbkr - role checks from the command line
//!
//! Loads a user record (JSON or YAML) and answers one membership question.

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, Level};

use hbk_roles::{RecordFormat, RoleChecker, RolePolicy, UserRecord};

#[derive(Parser)]
#[command(name = "hbkr")]
#[command(version)]
#[command(about = "Role and group checks over a user record", long_about = None)]
struct Cli {
    /// User record file (.json, .yaml or .yml)
    #[arg(long, short = 'r')]
    record: PathBuf,

    /// Role policy file (YAML); built-in defaults when omitted
    #[arg(long, short = 'p')]
    policy: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Is the user an administrator?
    Admin {
        /// Answer through the role query instead of the group predicate
        #[arg(long)]
        query: bool,
    },
    /// Is the user a super user?
    Super {
        /// Answer through the role query instead of the group predicate
        #[arg(long)]
        query: bool,
    },
    /// Is the user in the given role(s)? No roles answers true
    InRole { roles: Vec<String> },
    /// Is the user in any of the given roles? No roles answers false
    InAnyRole { roles: Vec<String> },
    /// Is the user in every given group? No groups answers true
    HasGroup { groups: Vec<String> },
    /// Is the user in at least one given group? No groups answers false
    HasAnyGroup { groups: Vec<String> },
    /// Print the record's full role list as JSON
    Roles,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_record(path: &Path) -> Result<UserRecord> {
    let format = RecordFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read user record {}", path.display()))?;

    let record = UserRecord::parse(&content, format)
        .with_context(|| format!("Invalid user record {}", path.display()))?;

    debug!(path = %path.display(), groups = record.groups.len(), "loaded user record");
    Ok(record)
}

fn print_answer(answer: bool) {
    if answer {
        println!("{}", "true".green());
    } else {
        println!("{}", "false".red());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let record = load_record(&cli.record)?;
    let policy = match &cli.policy {
        Some(path) => RolePolicy::load(path)
            .with_context(|| format!("Failed to load role policy {}", path.display()))?,
        None => RolePolicy::default(),
    };

    let checker = RoleChecker::with_policy(&record, policy);

    match cli.command {
        Commands::Admin { query } => {
            let answer = if query { checker.query_admin()? } else { checker.is_admin() };
            print_answer(answer);
        }
        Commands::Super { query } => {
            let answer = if query { checker.query_super()? } else { checker.is_super() };
            print_answer(answer);
        }
        Commands::InRole { roles } => print_answer(checker.is_in_role(&roles)?),
        Commands::InAnyRole { roles } => print_answer(checker.is_in_any_role(&roles)?),
        Commands::HasGroup { groups } => print_answer(checker.has_group(&groups)),
        Commands::HasAnyGroup { groups } => print_answer(checker.has_any_group(&groups)),
        Commands::Roles => {
            let roles = checker.get_roles()?;
            println!("{}", serde_json::to_string(&roles)?);
        }
    }

    Ok(())
}
