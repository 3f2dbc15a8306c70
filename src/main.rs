use clap::Parser;
use pageprowl::Extractor;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting extraction for URL: {}", args.url);

    // Keep stdout clean for the aggregate file mode
    if args.output_all.is_none() {
        println!("Note: Page rendering requires a WebDriver server (e.g., ChromeDriver).");
        println!(
            "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
        );
    }

    let outcome = Extractor::new(&args.url)
        .with_insecure(args.insecure)
        .with_sinks(args.sink_config())
        .run()
        .await;

    match outcome {
        Ok(state) if state.is_success() => {
            ::log::info!("Run finished in state {:?}", state);
            ExitCode::SUCCESS
        }
        Ok(state) => {
            ::log::error!("Run finished in state {:?}", state);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
