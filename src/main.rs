use std::env;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use surveypages::render::DirSink;
use surveypages::sheets::SheetsClient;
use surveypages::SurveyPipeline;

const DEFAULT_OUT_DIR: &str = "profiles";

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (url, range, image_column) = match args.as_slice() {
        [url, range, image_column, ..] => (url, range, image_column),
        _ => bail!("usage: surveypages <spreadsheet-url> <range> <image-column> [out-dir]"),
    };
    let out_dir = args.get(3).map(String::as_str).unwrap_or(DEFAULT_OUT_DIR);

    let api_key =
        env::var("SHEETS_API_KEY").context("SHEETS_API_KEY must be set to a Sheets API key")?;

    info!(%range, %image_column, out_dir, "startup");
    let pipeline = SurveyPipeline::new(SheetsClient::new(api_key), DirSink::new(out_dir));
    pipeline.run(url, range, image_column)?;

    info!(out_dir, "finished generating files");
    Ok(())
}
