//! Raw request command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use videocloud::{Client, Method};

use super::{ParamArgs, print};

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(value_parser = parse_method)]
    pub method: Method,

    /// Path below /v1/accounts/{account_id}/, e.g. videos/123/sources
    pub path: String,

    /// Send to the Dynamic Ingest host instead of the CMS host
    #[arg(long)]
    pub ingest: bool,

    /// Extra header line, e.g. "X-Request-Tag: nightly"; repeatable.
    /// Replaces the default Authorization or Content-type line of the same name.
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    #[command(flatten)]
    pub params: ParamArgs,
}

fn parse_method(s: &str) -> Result<Method, String> {
    s.to_ascii_uppercase()
        .parse()
        .map_err(|_| format!("invalid HTTP method '{}'", s))
}

fn header_name(line: &str) -> &str {
    line.split_once(':').map_or(line, |(name, _)| name).trim()
}

/// Default lines whose name also appears in `extra` are dropped.
fn merge_headers(defaults: Vec<String>, extra: Vec<String>) -> Vec<String> {
    let mut headers: Vec<String> = defaults
        .into_iter()
        .filter(|line| {
            !extra
                .iter()
                .any(|e| header_name(e).eq_ignore_ascii_case(header_name(line)))
        })
        .collect();
    headers.extend(extra);
    headers
}

pub async fn run(client: &Client, args: RequestArgs) -> Result<()> {
    let url = if args.ingest {
        client.ingest_endpoint(&args.path)
    } else {
        client.cms_endpoint(&args.path)
    };

    let headers = merge_headers(client.bearer_headers()?, args.headers);

    info!(method = %args.method, %url, "Sending request");

    let response = client
        .execute(args.method, url, headers, args.params.into_params()?)
        .await
        .context("Request failed")?;

    print(&response)
}
