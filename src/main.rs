#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(
    name = "avpr2rest",
    version,
    about = "Convert Avro protocol (AVPR) files to reStructuredText"
)]
struct Cli {
    /// Input AVPR file(s)
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT_DIR")]
    output: PathBuf,
}

#[cfg(feature = "cli")]
fn main() {
    #[cfg(feature = "trace")]
    {
        use tracing_subscriber::filter::LevelFilter;
        use tracing_subscriber::prelude::*;

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(LevelFilter::INFO),
            )
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = avpr2rest::converter::convert_avpr_files(&cli.inputs, &cli.output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
