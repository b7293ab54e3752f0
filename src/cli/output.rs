//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ShinglerArgs};
use crate::error::Result;
use crate::query::QueryDocument;

/// Result structure for a query rewrite.
#[derive(Debug, Serialize, Deserialize)]
pub struct RewriteResult {
    pub original: String,
    pub rewritten: String,
    pub terms_added: usize,
    pub query: QueryDocument,
}

/// Output a rewrite result in the specified format.
///
/// JSON output is the rewritten query document only, so it can be fed back
/// into `shingler rewrite --input`.
pub fn output_result(message: &str, result: &RewriteResult, args: &ShinglerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(&result.query, args),
    }
}

/// Output in human-readable format.
fn output_human(message: &str, result: &RewriteResult, args: &ShinglerArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    if args.verbosity() > 1 {
        println!("Original:    {}", result.original);
    }
    println!("Rewritten:   {}", result.rewritten);
    if args.verbosity() > 0 {
        println!("Terms added: {}", result.terms_added);
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ShinglerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
