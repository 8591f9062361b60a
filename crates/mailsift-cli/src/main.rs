mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mailsift",
    version,
    about = "Extract unique email addresses from office documents and PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan files (.xls/.xlsx/.xlsm, .docx, .doc, .pdf) for email addresses
    Extract {
        /// Files to scan, processed in the order given
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Summary format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the extracted addresses to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Export format: xlsx, csv or txt (default: inferred from --out)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Suppress the progress bar and live log
        #[arg(short, long)]
        quiet: bool,
    },
    /// List supported input/output formats and external tool availability
    Formats,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            files,
            output,
            out,
            format,
            quiet,
        } => commands::extract::run(files, &output, out, format, quiet),
        Commands::Formats => commands::formats::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
