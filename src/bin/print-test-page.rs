//! Printer test page CLI tool
//!
//! Generates a single-page PDF test sheet and hands it to the configured
//! print-dispatch script.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use print_test_page::config::Config;
use print_test_page::run::run;

/// Generate a printer test page and send it to the print script
#[derive(Parser)]
#[command(name = "print-test-page")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Generate the test page and print it
    print-test-page

    # Generate the PDF only
    print-test-page --no-print

    # Use a config file from somewhere else and view the result
    print-test-page --config /etc/test-page/config.ini --no-print --open")]
struct Cli {
    /// Generate the test page but skip the print dispatch
    #[arg(long)]
    no_print: bool,

    /// Path to the INI configuration file
    #[arg(short, long, default_value = "config.ini")]
    config: PathBuf,

    /// Open the generated PDF with the system default viewer
    #[arg(long)]
    open: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    eprintln!("Generating test page...");
    let output = run(&config, cli.no_print)?;
    eprintln!("Output: {}", output.display());

    if cli.no_print {
        eprintln!("Print dispatch skipped");
    } else {
        match &config.printer {
            Some(printer) => eprintln!("Print job dispatched to {}", printer),
            None => eprintln!("Print job dispatched"),
        }
    }

    if cli.open {
        open_file(&output)?;
    }

    Ok(())
}

/// Open a file with the system default application
fn open_file(path: &PathBuf) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}
