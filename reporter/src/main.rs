use clap::Parser;
use tracing_subscriber::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let args = reporter::config::Args::parse();

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(args.level_filter())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().starts_with("reporter") || meta.target().starts_with("analysis")
        }));
    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Could not install logger: {}", e);
    }

    match reporter::run(&args).await {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", reporter::error_chain(&e));
            std::process::ExitCode::FAILURE
        }
    }
}
