use clap::{Parser, Subcommand};
use sitescan::{config, locate::Locator, output, write::Writer};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sitescan")]
#[command(about = "Content discovery and output mapping for static sites")]
#[command(long_about = "\
Content discovery and output mapping for static sites

Classifies every file under the source tree into posts, pages, layouts, and
passthrough assets, and mirrors assets into the destination. Rendering is a
separate concern — this tool covers discovery and the destination lifecycle.

Source structure:

  site/
  ├── site.toml                 # Configuration (optional, defaults shown below)
  ├── index.html                # Page (processable extension)
  ├── img/logo.png              # Asset → copied verbatim to _site/img/logo.png
  ├── _posts/                   # Posts (markdown extensions)
  │   └── 2020-01-01-hi.md
  ├── _layouts/                 # Layouts (every file)
  │   └── default.html
  ├── _includes/                # Special: skipped by generic scanning
  ├── _plugins/                 # Special: skipped by generic scanning
  └── _site/                    # Destination (never scanned as content)

Special directories that do not exist are silently treated as unused.
'include' entries in site.toml force files into discovery (file entries even
beat 'exclude' patterns); 'exclude' glob patterns drop walked files.")]
#[command(version)]
struct Cli {
    /// Source directory (where site.toml lives)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Explicit config file path (default: <source>/site.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover and classify all content, printing the inventory
    Scan {
        /// Emit the inventory as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Copy passthrough assets into the destination
    Copy,
    /// Remove everything inside the destination directory
    Clean,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => config::load_config_path(path)?,
        None => config::load_config(&cli.source)?,
    };
    let locator = Locator::new(&cli.source, config)?;

    match cli.command {
        Command::Scan { json } => {
            let inventory = locator.inventory();
            if json {
                println!("{}", serde_json::to_string_pretty(&inventory)?);
            } else {
                output::print_inventory(&inventory, locator.source_root());
            }
        }
        Command::Copy => {
            let writer = Writer::new(&locator.destination_dir())?;
            let assets = locator.find_assets();
            let copied = writer.copy_assets(&assets)?;
            output::print_copy_report(&copied, writer.destination());
        }
        Command::Clean => {
            let writer = Writer::new(&locator.destination_dir())?;
            writer.cleanup_destination()?;
            output::print_clean_report(writer.destination());
        }
    }

    Ok(())
}
