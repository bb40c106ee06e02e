//! CLI command for CSV export

use std::path::PathBuf;

use clap::Args;

use crate::commands::{execute, Intent, Outcome};
use crate::error::ExpenseResult;
use crate::services::ExpenseFilter;
use crate::storage::Storage;

use super::{MonthArgs, ViewArgs};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    // Every month is exported when neither --month nor --year is given
    #[command(flatten)]
    pub month: MonthArgs,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Handle `export`
pub fn handle_export(storage: &mut Storage, args: ExportArgs) -> ExpenseResult<()> {
    let mut filter = ExpenseFilter::new();
    if args.month.is_set() {
        filter = filter.month(args.month.resolve()?);
    }
    let filter = args.view.apply(filter);

    let intent = Intent::Export {
        path: args.output,
        filter,
    };
    if let Outcome::Exported { path, count } = execute(storage, intent)? {
        println!("Exported {} expenses to: {}", count, path.display());
    }

    Ok(())
}
