mod generate;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "store-seed")]
#[command(version)]
#[command(about = "Generate synthetic SQL seed data for the store schema", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate INSERT statements for customers, products, orders and order lines
    Generate {
        /// YAML file with volumes, seed and sampler strategy (flags override it)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of customers
        #[arg(long)]
        customers: Option<usize>,

        /// Number of products
        #[arg(long)]
        products: Option<usize>,

        /// Number of orders
        #[arg(long)]
        orders: Option<usize>,

        /// Maximum order lines per order (each order gets 1..=N)
        #[arg(long)]
        max_lines: Option<usize>,

        /// Random seed for reproducibility (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Sampler for per-order product ids: rejection, shuffle
        #[arg(long)]
        strategy: Option<String>,

        /// Output SQL file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append setval() calls so identity sequences continue after the seeded ids
        #[arg(long)]
        reset_sequences: bool,

        /// Write a comment header with the seed and volumes
        #[arg(long)]
        header: bool,

        /// Skip the integrity check before writing
        #[arg(long)]
        skip_validate: bool,

        /// Show progress while writing
        #[arg(short, long)]
        progress: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            config,
            customers,
            products,
            orders,
            max_lines,
            seed,
            strategy,
            output,
            reset_sequences,
            header,
            skip_validate,
            progress,
        } => generate::run(generate::GenerateArgs {
            config,
            customers,
            products,
            orders,
            max_lines,
            seed,
            strategy,
            output,
            reset_sequences,
            header,
            skip_validate,
            progress,
        }),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "store-seed", &mut io::stdout());
            Ok(())
        }
    }
}
