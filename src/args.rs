use clap::Parser;
use pageprowl::output::SinkConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pageprowl")]
#[command(about = "Extract script files, words, and URLs from a rendered webpage")]
#[command(version)]
pub struct Args {
    /// URL of the webpage to extract
    pub url: String,

    /// Output file for scripts, words, URLs and diagnostics together
    /// (supersedes the per-kind output options)
    #[arg(short = 'o', long = "output-all", value_name = "FILE")]
    pub output_all: Option<PathBuf>,

    /// Output file for script URLs only
    #[arg(long, value_name = "FILE")]
    pub js_output: Option<PathBuf>,

    /// Output file for unique words only
    #[arg(long, value_name = "FILE")]
    pub words_output: Option<PathBuf>,

    /// Output file for in-scope URLs only
    #[arg(long, value_name = "FILE")]
    pub urls_output: Option<PathBuf>,

    /// Skip TLS certificate validation
    #[arg(short = 'k', long)]
    pub insecure: bool,
}

impl Args {
    /// Convert the output options into the router's sink configuration.
    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            aggregate: self.output_all.clone(),
            scripts: self.js_output.clone(),
            words: self.words_output.clone(),
            urls: self.urls_output.clone(),
        }
    }
}
