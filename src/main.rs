use clap::{Parser, Subcommand};
use rowsieve::cli;
use rowsieve::error::SieveResult;
use rowsieve::filter::DEFAULT_ID_COLUMN;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rowsieve")]
#[command(about = "Remove spreadsheet rows whose identifier is on an exclusion list.")]
#[command(long_about = "Rowsieve - Spreadsheet row exclusion

Reads the FIRST sheet of an .xlsx workbook, drops every row whose identifier
column matches a line of the exclusion list, and writes the remaining rows to
a new single-sheet workbook.

COMMANDS:
  filter   - Filter a workbook against an identifier list
  inspect  - Show the first sheet's columns and row count

EXAMPLES:
  rowsieve filter students.xlsx --ids drop_list.txt
  rowsieve filter students.xlsx --ids - < drop_list.txt
  rowsieve inspect students.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Filter a workbook against an identifier list.

Reads the FIRST sheet only. A row is removed when the string form of its
identifier cell exactly matches a line of the identifier list. The comparison
is case-sensitive and cell values are not trimmed. Numeric cells match their
plain decimal form, so a numeric 12345 matches the line '12345'. Rows without
the identifier column are always kept.

IDENTIFIER LIST:
  One identifier per line. Lines are trimmed; blank lines are ignored.
  Pass '--ids -' to read the list from stdin.

OUTPUT:
  A new workbook with one sheet named 'Filtered' holding the kept rows,
  written with the columns the kept rows actually carry.

EXAMPLES:
  rowsieve filter students.xlsx --ids drop_list.txt
  rowsieve filter students.xlsx --ids drop_list.txt --column ID -o clean.xlsx
  rowsieve filter students.xlsx --ids - --dry-run < drop_list.txt")]
    /// Filter a workbook against an identifier list
    Filter {
        /// Path to the input workbook (.xlsx)
        input: PathBuf,

        /// File holding the identifier list, one per line ('-' for stdin)
        #[arg(short, long)]
        ids: PathBuf,

        /// Header of the identifier column
        #[arg(short, long, default_value = DEFAULT_ID_COLUMN)]
        column: String,

        /// Output workbook path
        #[arg(short, long, default_value = "processed_data.xlsx")]
        output: PathBuf,

        /// Compute and report counts without writing the output file
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Print the summary as JSON instead of the console report
        #[arg(long)]
        json: bool,

        /// Show verbose processing steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Show the first sheet of a workbook.

Prints the sheet name, its column headers and the number of data rows.
Useful to confirm the identifier column exists before filtering.

EXAMPLE:
  rowsieve inspect students.xlsx")]
    /// Show the first sheet's name, columns and row count
    Inspect {
        /// Path to the workbook (.xlsx)
        input: PathBuf,
    },
}

fn main() -> SieveResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            input,
            ids,
            column,
            output,
            dry_run,
            json,
            verbose,
        } => cli::filter(input, ids, column, output, dry_run, json, verbose),

        Commands::Inspect { input } => cli::inspect(input),
    }
}
