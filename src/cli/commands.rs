//! Command implementations for Shingler CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, ShinglerError};
use crate::query::{ExpandedQuery, Query};
use crate::rewrite::{QueryRewriter, ShingleRewriter, ShingleRewriterConfig};

/// Execute a CLI command.
pub fn execute_command(args: ShinglerArgs) -> Result<()> {
    match &args.command {
        Command::Rewrite(rewrite_args) => rewrite_query(rewrite_args.clone(), &args),
    }
}

/// Run the shingle rewriter on a query.
fn rewrite_query(args: RewriteArgs, cli_args: &ShinglerArgs) -> Result<()> {
    let query = load_query(&args)?;
    let config = load_config(&args)?;
    debug!("Rewriting with {config:?}");

    let original = query.to_string();
    let node_count = query.node_count();

    let rewriter = ShingleRewriter::from_config(&config);
    let expanded = rewriter.rewrite(ExpandedQuery::new(query));
    let rewritten = expanded.user_query();

    let result = RewriteResult {
        original,
        rewritten: rewritten.to_string(),
        terms_added: rewritten.node_count() - node_count,
        query: rewritten.to_document(),
    };
    info!("{} added {} terms", rewriter.name(), result.terms_added);

    output_result("Shingled query", &result, cli_args)
}

/// Build the query to rewrite from either the tokens or the input document.
fn load_query(args: &RewriteArgs) -> Result<Query> {
    match (&args.input, args.tokens.is_empty()) {
        (Some(path), true) => read_query_document(path),
        (None, false) => build_query_from_tokens(&args.tokens),
        (Some(_), false) => Err(ShinglerError::invalid_argument(
            "Pass either query tokens or --input, not both",
        )),
        (None, true) => Err(ShinglerError::invalid_argument(
            "No query given. Pass query tokens or --input",
        )),
    }
}

fn read_query_document(path: &Path) -> Result<Query> {
    let content = if path == Path::new("-") {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        content
    } else {
        debug!("Reading query from: {}", path.display());
        fs::read_to_string(path)?
    };
    Query::from_json(&content)
}

fn load_config(args: &RewriteArgs) -> Result<ShingleRewriterConfig> {
    let config = match &args.config {
        Some(path) => {
            debug!("Loading config from: {}", path.display());
            ShingleRewriterConfig::from_file(path)?
        }
        None => ShingleRewriterConfig::default(),
    };

    if args.accept_generated_terms {
        Ok(config.accept_generated_terms(true))
    } else {
        Ok(config)
    }
}

/// Build a query with one position per token.
///
/// A token is `value` or `field:value`. A trailing `*` marks the term as
/// generated.
pub fn build_query_from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Query> {
    let mut query = Query::new();
    for token in tokens {
        let (field, value, generated) = parse_token(token.as_ref())?;
        query.add_token(field, value, generated);
    }
    Ok(query)
}

fn parse_token(token: &str) -> Result<(Option<&str>, &str, bool)> {
    let (token, generated) = match token.strip_suffix('*') {
        Some(stripped) => (stripped, true),
        None => (token, false),
    };

    let (field, value) = match token.split_once(':') {
        Some((field, value)) => {
            if field.is_empty() {
                return Err(ShinglerError::invalid_argument(format!(
                    "Empty field name in token '{token}'"
                )));
            }
            (Some(field), value)
        }
        None => (None, token),
    };

    if value.is_empty() {
        return Err(ShinglerError::invalid_argument(format!(
            "Empty value in token '{token}'"
        )));
    }

    Ok((field, value, generated))
}
