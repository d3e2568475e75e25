use crate::error::{SieveError, SieveResult};
use crate::excel::{WorkbookReader, WorkbookWriter};
use crate::filter::{exclude_rows, parse_id_list};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the identifier list text from a file, or stdin when the path is `-`.
fn read_id_text(ids: &Path) -> SieveResult<String> {
    if ids == Path::new("-") {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else {
        Ok(fs::read_to_string(ids)?)
    }
}

/// Execute the filter command
pub fn filter(
    input: PathBuf,
    ids: PathBuf,
    column: String,
    output: PathBuf,
    dry_run: bool,
    json: bool,
    verbose: bool,
) -> SieveResult<()> {
    if !json {
        println!("{}", "🧹 Rowsieve - Filtering rows".bold().green());
        println!("   Input:  {}", input.display());
        println!("   Output: {}\n", output.display());

        if dry_run {
            println!("{}", "📋 DRY RUN MODE - No file will be written\n".yellow());
        }
    }

    // Validation happens before any decoding starts
    if !input.exists() {
        return Err(SieveError::Validation(format!(
            "File not found: {}",
            input.display()
        )));
    }

    let id_text = read_id_text(&ids)?;
    let exclude_ids = parse_id_list(&id_text);
    if exclude_ids.is_empty() {
        return Err(SieveError::Validation(
            "Identifier list is empty - provide one identifier per line".to_string(),
        ));
    }

    if verbose && !json {
        println!("{}", "📖 Reading Excel file...".cyan());
    }

    let sheet = WorkbookReader::new(&input).read_first_sheet()?;

    if verbose && !json {
        println!("   Sheet: {}", sheet.sheet_name.bright_blue());
        println!(
            "   Found {} columns, {} rows",
            sheet.headers.len(),
            sheet.rows.len()
        );
        println!(
            "   Excluding {} identifiers from column '{}'\n",
            exclude_ids.len(),
            column.cyan()
        );
    }

    let outcome = exclude_rows(sheet.rows, &column, &exclude_ids);

    if !dry_run {
        if verbose && !json {
            println!("{}", "💾 Writing Excel file...".cyan());
        }
        WorkbookWriter::new(outcome.kept).write(&output)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
        return Ok(());
    }

    println!("{}", "✅ File processed successfully!".bold().green());
    println!("   Total rows:     {}", outcome.summary.total_rows);
    println!(
        "   Removed rows:   {}",
        outcome.summary.removed_rows.to_string().red()
    );
    println!(
        "   Remaining rows: {}",
        outcome.summary.remaining_rows.to_string().green()
    );

    if dry_run {
        println!("\n{}", "📋 Dry run complete - no file written".yellow());
    } else {
        println!("\n   Excel file: {}", output.display());
    }

    Ok(())
}

/// Execute the inspect command
pub fn inspect(input: PathBuf) -> SieveResult<()> {
    println!("{}", "🔍 Rowsieve - Inspecting workbook".bold().green());
    println!("   File: {}\n", input.display());

    if !input.exists() {
        return Err(SieveError::Validation(format!(
            "File not found: {}",
            input.display()
        )));
    }

    let sheet = WorkbookReader::new(&input).read_first_sheet()?;

    println!("   Sheet: {}", sheet.sheet_name.bright_blue().bold());
    println!(
        "   {} columns, {} data rows\n",
        sheet.headers.len(),
        sheet.rows.len()
    );

    println!("   Columns:");
    for header in &sheet.headers {
        println!("      {}", header.cyan());
    }

    Ok(())
}
