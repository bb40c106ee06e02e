use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_budget_command, handle_chart_command, handle_config, handle_delete,
    handle_edit, handle_export, handle_history, handle_list, handle_summary, AddArgs,
    BudgetCommands, ChartCommands, DeleteArgs, EditArgs, ExportArgs, ListArgs,
};
use expense_tracker::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::error::ExpenseError;
use expense_tracker::logging::init_tracing;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Track daily expenses by category, set a spending budget for each \
                  month, and review monthly summaries, charts and CSV exports."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding settings, data files and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// Replace an expense in full
    Edit(EditArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List a month's expenses with search and sort
    #[command(alias = "ls")]
    List(ListArgs),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Totals and budgets for every month
    Summary,

    /// Text charts
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Export expenses to CSV
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(hint) = err.downcast_ref::<ExpenseError>().and_then(hint_for) {
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

/// Follow-up advice printed under an error
fn hint_for(err: &ExpenseError) -> Option<&'static str> {
    if err.is_index_error() {
        Some("Run 'expense list' to see expense numbers.")
    } else if err.is_corrupt() {
        Some("Fix or move the file aside, then run the command again.")
    } else if err.is_validation() {
        Some("Run the command with --help for accepted input formats.")
    } else {
        None
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths)?;
    storage.set_audit_enabled(settings.audit_enabled);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut storage, &settings, args)?,
        Some(Commands::Edit(args)) => handle_edit(&mut storage, &settings, args)?,
        Some(Commands::Delete(args)) => handle_delete(&mut storage, &settings, args)?,
        Some(Commands::List(args)) => handle_list(&storage, &settings, args)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut storage, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary(&storage, &settings)?,
        Some(Commands::Chart(cmd)) => handle_chart_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export(&mut storage, args)?,
        Some(Commands::History { count }) => handle_history(&storage, count)?,
        Some(Commands::Config { init }) => handle_config(&storage, &settings, init)?,
        None => {
            println!("Expense Tracker - personal expenses and monthly budgets");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add 120 -c food -d \"lunch\"' to record your first expense.");
        }
    }

    Ok(())
}
