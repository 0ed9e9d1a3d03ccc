//! Generate command CLI handler.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use store_seed::{
    validate, Generator, HeaderInfo, Phase, RenderOptions, RenderStats, SamplerStrategy,
    SqlWriter, VolumeConfig,
};

pub struct GenerateArgs {
    pub config: Option<PathBuf>,
    pub customers: Option<usize>,
    pub products: Option<usize>,
    pub orders: Option<usize>,
    pub max_lines: Option<usize>,
    pub seed: Option<u64>,
    pub strategy: Option<String>,
    pub output: Option<PathBuf>,
    pub reset_sequences: bool,
    pub header: bool,
    pub skip_validate: bool,
    pub progress: bool,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let seed_was_given = config.seed.is_some();

    let start_time = Instant::now();
    let mut gen = Generator::new(config)?;
    let seed = gen.seed();
    if !seed_was_given {
        eprintln!("Using random seed {} (pass --seed {} to reproduce)", seed, seed);
    }

    let dataset = gen.generate()?;
    let config = gen.config().clone();

    if !args.skip_validate {
        validate(&dataset, &config).into_result()?;
    }

    let options = RenderOptions {
        header: args.header.then(|| HeaderInfo {
            seed,
            config: config.clone(),
        }),
        reset_sequences: args.reset_sequences,
    };

    let mut total = dataset.total_rows() as u64;
    if args.reset_sequences {
        total += Phase::ALL
            .iter()
            .filter(|&&phase| dataset.row_count(phase) > 0)
            .count() as u64;
    }
    let progress_bar = if args.progress {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} statements ({percent}%) {msg}",
            )?
            .progress_chars("█▓▒░  ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message("Writing inserts...");
        Some(pb)
    } else {
        None
    };

    let stats = match args.output {
        Some(ref path) => {
            let file = File::create(path)?;
            write_with_progress(file, options, &dataset, progress_bar.as_ref())?
        }
        None => {
            let stdout = io::stdout();
            write_with_progress(stdout.lock(), options, &dataset, progress_bar.as_ref())?
        }
    };

    if let Some(pb) = progress_bar {
        pb.finish_with_message("done");
    }

    if let Some(ref path) = args.output {
        eprintln!(
            "Generated {} statements to {} in {:.2}s",
            stats.statements,
            path.display(),
            start_time.elapsed().as_secs_f64()
        );
    }

    if args.progress {
        print_summary(&stats, seed, &config);
    }

    Ok(())
}

fn write_with_progress<W: Write>(
    output: W,
    options: RenderOptions,
    dataset: &store_seed::Dataset,
    progress_bar: Option<&ProgressBar>,
) -> anyhow::Result<RenderStats> {
    let mut writer = SqlWriter::new(output, options);
    if let Some(pb) = progress_bar {
        let pb = pb.clone();
        writer = writer.with_progress(move |statements| pb.set_position(statements));
    }
    Ok(writer.write_dataset(dataset)?)
}

/// Defaults, then the YAML file, then explicit flags
fn resolve_config(args: &GenerateArgs) -> anyhow::Result<VolumeConfig> {
    let mut config = match args.config {
        Some(ref path) => VolumeConfig::load(path)?,
        None => VolumeConfig::default(),
    };

    if let Some(customers) = args.customers {
        config.customers = customers;
    }
    if let Some(products) = args.products {
        config.products = products;
    }
    if let Some(orders) = args.orders {
        config.orders = orders;
    }
    if let Some(max_lines) = args.max_lines {
        config.max_lines_per_order = max_lines;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(ref strategy) = args.strategy {
        config.strategy = strategy
            .parse::<SamplerStrategy>()
            .map_err(|e| anyhow::anyhow!("{}", e))?;
    }

    Ok(config)
}

fn print_summary(stats: &RenderStats, seed: u64, config: &VolumeConfig) {
    eprintln!();
    eprintln!("Seed Statistics:");
    eprintln!("  Seed: {}", seed);
    eprintln!("  Sampler: {}", config.strategy);
    for phase in Phase::ALL {
        eprintln!("  {:<14} {:>8} rows", phase.to_string(), stats.rows_for(phase));
    }
    eprintln!("  Statements written: {}", stats.statements);
}
