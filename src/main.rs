use clap::{Parser, Subcommand};
use pr_stack::{commands, logging};

#[derive(Parser)]
#[command(name = "pr-stack")]
#[command(about = "Work with stacks of GitHub pull requests", long_about = None)]
struct Cli {
    /// Show debug output (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stack of the current branch and the status of each PR (default)
    View,
    /// Rebase every PR of the stack onto its base and force-push it
    Rebase,
    /// Merge the bottom PR of the stack and retarget the PRs based on it
    Pop {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Open a PR for the current branch on top of another open PR
    Push {
        /// Number of the PR to stack onto (prompted when omitted)
        pr_number: Option<u64>,
        /// Open the created PR in the browser
        #[arg(long)]
        web: bool,
    },
    /// Split the current PR in two at a commit
    Split {
        /// Last commit of the lower PR (prompted when omitted)
        #[arg(long)]
        commit: Option<String>,
        /// Name of the new branch (prompted when omitted)
        #[arg(long)]
        branch: Option<String>,
        /// Open the created PR in the browser
        #[arg(long)]
        web: bool,
    },
    /// Post the stack overview as a comment on each PR
    Comment,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::View) {
        Commands::View => commands::view(),
        Commands::Rebase => commands::rebase(),
        Commands::Pop { yes } => commands::pop(yes),
        Commands::Push { pr_number, web } => commands::push(pr_number, web),
        Commands::Split { commit, branch, web } => commands::split(commit, branch, web),
        Commands::Comment => commands::comment(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
