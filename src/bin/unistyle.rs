use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use unistyle::util::{pad_to_width, tabs_to_em_spaces, truncate_to_width};
use unistyle::{clean_format, toggle_decoration, Catalog, Category, DecorationMark};

#[derive(Debug, Parser)]
#[command(
    name = "unistyle",
    about = "Style text with Unicode look-alike fonts, and clean it back",
    version
)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List available styles.
    List {
        /// Only show one category.
        #[arg(short, long)]
        category: Option<Category>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Apply a style.
    Apply {
        /// Style id, as printed by `list`.
        id: String,
        #[command(flatten)]
        input: Input,
        /// Apply on top of existing styling instead of cleaning first.
        #[arg(long)]
        keep: bool,
    },

    /// Strip every known style and decoration.
    Clean {
        #[command(flatten)]
        input: Input,
    },

    /// Add a decoration, or remove it if the text already has it.
    Toggle {
        /// underline, double_underline, strikethrough or wave.
        mark: DecorationMark,
        #[command(flatten)]
        input: Input,
    },

    /// Show the text in every style.
    Preview {
        #[command(flatten)]
        input: Input,
        /// Only show one category.
        #[arg(short, long)]
        category: Option<Category>,
    },
}

#[derive(Debug, Args)]
struct Input {
    /// Text to transform. Read from stdin when omitted.
    text: Option<String>,

    /// Replace tabs with em spaces in the output.
    #[arg(long)]
    expand_tabs: bool,
}

impl Input {
    fn read(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read text from stdin")?;
                Ok(buf.strip_suffix('\n').unwrap_or(&buf).to_string())
            }
        }
    }

    fn finish(&self, out: String) -> String {
        if self.expand_tabs {
            tabs_to_em_spaces(&out)
        } else {
            out
        }
    }
}

const PREVIEW_WIDTH: usize = 60;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn id_column(catalog: &Catalog) -> usize {
    catalog.list(None).map(|s| s.id().len()).max().unwrap_or(0) + 2
}

fn run(cli: Cli) -> Result<()> {
    let catalog = Catalog::builtin();
    match cli.command {
        Commands::List { category, json } => {
            if json {
                let infos = catalog.infos(category);
                println!("{}", serde_json::to_string_pretty(&infos)?);
                return Ok(());
            }
            let width = id_column(catalog);
            for s in catalog.list(category) {
                println!(
                    "{}{}  {}",
                    pad_to_width(s.id(), width),
                    pad_to_width(s.label(), 22),
                    style(s.category()).dim()
                );
            }
        }
        Commands::Apply { id, input, keep } => {
            let text = input.read()?;
            let out = if keep {
                catalog.apply(&id, &text)?
            } else {
                catalog.restyle(&id, &text)?
            };
            println!("{}", input.finish(out));
        }
        Commands::Clean { input } => {
            let text = input.read()?;
            println!("{}", input.finish(clean_format(&text)));
        }
        Commands::Toggle { mark, input } => {
            let text = input.read()?;
            println!("{}", input.finish(toggle_decoration(mark, &text)));
        }
        Commands::Preview { input, category } => {
            let text = input.read()?;
            let width = id_column(catalog);
            let mut current = None;
            for s in catalog.list(category) {
                if current != Some(s.category()) {
                    current = Some(s.category());
                    println!("{}", style(s.category()).bold().underlined());
                }
                let out = input.finish(s.apply(&text)).replace('\n', " ");
                println!(
                    "  {}{}",
                    style(pad_to_width(s.id(), width)).cyan(),
                    truncate_to_width(&out, PREVIEW_WIDTH)
                );
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(error) = run(cli) {
        eprintln!("{} {:#}", style("error:").red().bold(), error);
        std::process::exit(1);
    }
}
