mod app;
mod color;
mod config;
mod data;
mod error;
mod pipeline;
mod preview;
mod select;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::{Config, DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
use data::client::ApiClient;
use pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "fritz-spectra")]
#[command(about = "Pick and download source spectra from a SkyPortal instance (fritz.science)")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    fritz-spectra ZTF21abc                 # list spectra, choose one, save it
    fritz-spectra -p ZTF21abc ZTF20xyz     # preview each choice before saving

At the prompt, enter the index of a spectrum or -q to skip the object.
Files are written as {id}_{instrument}_{date}.ascii into the output directory,
which must already exist."#)]
struct Cli {
    /// Source ids to fetch spectra for
    #[arg(required = true)]
    object_ids: Vec<String>,

    /// Plot the chosen spectrum before saving it
    #[arg(short, long)]
    plot: bool,

    /// API token
    #[arg(long, env = "FRITZ_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Base URL of the SkyPortal instance
    #[arg(long, env = "FRITZ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory the .ascii files are written to
    #[arg(short, long, env = "FRITZ_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::new(
        cli.base_url,
        cli.token,
        cli.output_dir,
        cli.plot,
        cli.timeout,
    )?;

    let client = ApiClient::new(&config)?;
    let preview = preview::preview_sink(config.preview);
    let pipeline = Pipeline {
        source: &client,
        preview: &*preview,
        output_dir: &config.output_dir,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    pipeline.run(&cli.object_ids, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
