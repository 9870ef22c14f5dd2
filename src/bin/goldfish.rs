use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

const BANNER: &str = r#"
                ░░░░░░  ░░░░░░░░
            ░░░░░░░░░░░░░░░░░░
          ░░░░░░░░░░░░░░░░░░░░      ░░░░░░
        ░░░░░░░░░░░░░░░░░░░░░░░░  ░░░░░░
      ░░░░    ░░░░    ░░░░░░░░░░░░░░░░
      ░░  ██  ░░  ██  ░░░░░░░░░░░░░░░░
      ░░  ████    ████  ░░░░░░░░░░░░░░
      ░░░░    ░░░░      ░░░░░░░░░░░░░░
      ░░▓▓░░░░░░░░░░░░░░▓▓░░░░░░░░░░░░
      ░░░░▓▓▓▓░░░░░░▓▓▓▓░░░░░░░░  ░░░░
        ░░░░░░▓▓▓▓▓▓░░░░░░░░░░    ░░░░░░
            ░░░░░░░░░░░░░░░░        ░░░░░░
                        ░░░░░░
    ░▒█▀▀█░▒█▀▀▀█░▒█░░░░▒█▀▀▄░▒█▀▀▀░▀█▀░▒█▀▀▀█░▒█░▒█░░░░▒█▀▀█░▒█░░▒█
    ░▒█░▄▄░▒█░░▒█░▒█░░░░▒█░▒█░▒█▀▀░░▒█░░░▀▀▀▄▄░▒█▀▀█░▄▄░▒█▄▄█░▒▀▄▄▄▀
    ░▒█▄▄▀░▒█▄▄▄█░▒█▄▄█░▒█▄▄█░▒█░░░░▄█▄░▒█▄▄▄█░▒█░▒█░▀▀░▒█░░░░░░▒█░░
"#;

#[derive(Parser, Debug)]
#[command(name = "goldfish", version, about = "Generate a batch of layered avatar images")]
struct Cli {
    /// Number of items to generate.
    #[arg(long, default_value_t = goldfish::dispatch::DEFAULT_COUNT)]
    count: u32,

    /// Color pools JSON (`background_color`, `body_color`, `accent_color`).
    #[arg(long, default_value = "parameters.json")]
    params: PathBuf,

    /// Asset root directory.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Root under which `generation/`, `25ks/` and `metadata/` are managed.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Worker pool size.
    #[arg(long, default_value_t = goldfish::dispatch::DEFAULT_WORKERS)]
    workers: usize,

    /// Seed for reproducible trait draws. Omit for an entropy seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the startup banner.
    #[arg(long)]
    no_banner: bool,

    /// Suppress per-item progress lines.
    #[arg(long)]
    quiet: bool,

    /// Log filter (overrides `RUST_LOG`).
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    goldfish::logging::init_logging(cli.log.as_deref());

    if !cli.no_banner {
        println!("{BANNER}");
    }

    let pools = goldfish::TraitPools::from_path(&cli.params)
        .with_context(|| format!("load parameters '{}'", cli.params.display()))?;

    let assets = goldfish::AssetRegistry::new(&cli.assets);
    assets
        .validate()
        .with_context(|| format!("validate assets under '{}'", cli.assets.display()))?;

    let mut rng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let cfg = goldfish::BatchConfig {
        count: cli.count,
        workers: cli.workers,
        progress: !cli.quiet,
    };
    let dirs = goldfish::OutputDirs::under(&cli.out);

    let report = goldfish::run_batch(&cfg, &assets, &pools, &dirs, &mut rng)?;

    println!("Generation complete.");

    if !report.is_success() {
        for failure in &report.failed {
            eprintln!("item {} failed: {}", failure.n, failure.error);
        }
        anyhow::bail!(
            "{} of {} items failed",
            report.failed.len(),
            report.total()
        );
    }
    Ok(())
}
