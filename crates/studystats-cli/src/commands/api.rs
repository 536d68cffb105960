//! HTTP playground: send requests with the configured API client and
//! optionally show JSON records as a table.

use std::time::Duration;

use clap::{Args, Subcommand};
use studystats_core::{ApiClient, ApiResponse, Config, RequestOptions, Table};

#[derive(Subcommand)]
pub enum ApiAction {
    /// Perform a GET request
    Get {
        /// Path appended to the base URL
        path: String,
        /// Query parameter (repeatable)
        #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        query: Vec<(String, String)>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Perform a POST request
    Post {
        /// Path appended to the base URL
        path: String,
        /// JSON body
        #[arg(long)]
        json: Option<String>,
        /// Form field (repeatable)
        #[arg(short, long = "form", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        form: Vec<(String, String)>,
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Override the configured base URL
    #[arg(long)]
    pub base_url: Option<String>,
    /// Extra header (repeatable)
    #[arg(short = 'H', long = "header", value_name = "NAME=VALUE", value_parser = parse_key_val)]
    pub headers: Vec<(String, String)>,
    /// Timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Show JSON records as a table
    #[arg(long)]
    pub table: bool,
    /// Columns to keep in table mode, e.g. "id,title"
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
    /// Number of rows to show in table mode
    #[arg(long)]
    pub head: Option<usize>,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn client(config: &Config, common: &CommonArgs) -> Result<ApiClient, Box<dyn std::error::Error>> {
    let mut api = config.api.clone();
    if let Some(base_url) = &common.base_url {
        api.base_url = base_url.clone();
    }
    Ok(ApiClient::from_config(&api)?)
}

fn options(common: &CommonArgs) -> RequestOptions {
    let mut opts = RequestOptions::new();
    for (name, value) in &common.headers {
        opts = opts.header(name, value);
    }
    if let Some(secs) = common.timeout {
        opts = opts.timeout(Duration::from_secs(secs));
    }
    opts
}

fn print_response(
    resp: ApiResponse,
    common: &CommonArgs,
    default_head: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    if !common.table {
        println!("{}", resp.to_pretty_string());
        return Ok(());
    }

    let mut table = Table::from_records(&resp.into_json());
    if !common.columns.is_empty() {
        let columns: Vec<&str> = common.columns.iter().map(String::as_str).collect();
        table = table.select_columns(&columns)?;
    }
    let head = common.head.unwrap_or(default_head);
    print!("{}", table.head(head).render());
    if table.len() > head {
        println!("({} of {} rows)", head, table.len());
    }
    Ok(())
}

pub fn run(action: ApiAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let runtime = tokio::runtime::Runtime::new()?;

    match action {
        ApiAction::Get { path, query, common } => {
            let api = client(&config, &common)?;
            let mut opts = options(&common);
            for (key, value) in query {
                opts = opts.query(key, value);
            }
            let resp = runtime.block_on(api.get(&path, &opts))?;
            print_response(resp, &common, config.table.head_rows)?;
        }
        ApiAction::Post { path, json, form, common } => {
            let api = client(&config, &common)?;
            let mut opts = options(&common);
            if let Some(body) = json {
                opts = opts.json(serde_json::from_str(&body)?);
            }
            for (key, value) in form {
                opts = opts.form(key, value);
            }
            let resp = runtime.block_on(api.post(&path, &opts))?;
            print_response(resp, &common, config.table.head_rows)?;
        }
    }
    Ok(())
}
