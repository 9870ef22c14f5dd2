use std::path::Path;

use rand::Rng;
use rayon::prelude::*;

use crate::assets::registry::AssetRegistry;
use crate::compose::pipeline::compose;
use crate::config::TraitPools;
use crate::export::{Artifact, OutputDirs, export_item};
use crate::foundation::error::{GoldfishError, GoldfishResult};
use crate::selector::{TraitSet, select_traits};

/// Batch size used when none is given.
pub const DEFAULT_COUNT: u32 = 2100;
/// Worker pool size used when none is given.
pub const DEFAULT_WORKERS: usize = 10;

/// Batch-level knobs for [`run_batch`].
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Items to generate, numbered `1..=count`.
    pub count: u32,
    /// Fixed worker pool size, must be >= 1.
    pub workers: usize,
    /// Print per-item progress lines to stdout.
    pub progress: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            workers: DEFAULT_WORKERS,
            progress: true,
        }
    }
}

/// One item that did not produce all of its artifacts.
#[derive(Debug)]
pub struct ItemFailure {
    pub n: u32,
    pub error: GoldfishError,
}

/// Outcome of a batch after the pool has drained.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful items in ascending order.
    pub succeeded: Vec<(u32, Artifact)>,
    /// Failed items in ascending order.
    pub failed: Vec<ItemFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Create each output directory, or remove the regular files already in it.
///
/// Subdirectories and their contents are left alone.
#[tracing::instrument(skip(dirs))]
pub fn prepare_output_dirs(dirs: &OutputDirs) -> GoldfishResult<()> {
    for dir in dirs.all() {
        if dir.exists() {
            clear_files(dir)?;
        } else {
            std::fs::create_dir_all(dir).map_err(|e| GoldfishError::io(dir, e))?;
        }
    }
    Ok(())
}

fn clear_files(dir: &Path) -> GoldfishResult<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| GoldfishError::io(dir, e))?;
    let mut removed = 0usize;
    for entry in entries {
        let entry = entry.map_err(|e| GoldfishError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            std::fs::remove_file(&path).map_err(|e| GoldfishError::io(&path, e))?;
            removed += 1;
        }
    }
    tracing::debug!(dir = %dir.display(), removed, "cleared output dir");
    Ok(())
}

/// Compose and export a single item.
pub fn generate_item(
    assets: &AssetRegistry,
    dirs: &OutputDirs,
    n: u32,
    traits: &TraitSet,
    progress: bool,
) -> GoldfishResult<Artifact> {
    if progress {
        println!("Order: {n}");
    }
    let composite = compose(assets, traits)?;
    export_item(dirs, n, &composite, traits, progress)
}

/// Draw `count` trait sets in sequence order.
///
/// Drawing happens up front on the caller's thread, so a seeded `rng` fixes the whole batch no
/// matter how the pool schedules items.
pub fn plan_batch<R: Rng + ?Sized>(
    count: u32,
    pools: &TraitPools,
    rng: &mut R,
) -> GoldfishResult<Vec<(u32, TraitSet)>> {
    let mut plan = Vec::with_capacity(count as usize);
    for n in 1..=count {
        plan.push((n, select_traits(pools, rng)?));
    }
    Ok(plan)
}

/// Clear the output directories, then generate items `1..=count` on a fixed-size pool.
///
/// Every item runs to completion or failure; failures are collected in the report instead of
/// stopping sibling items. Errors returned directly are batch-level (bad config, pool setup,
/// output directories).
#[tracing::instrument(skip(cfg, assets, pools, dirs, rng), fields(count = cfg.count, workers = cfg.workers))]
pub fn run_batch<R: Rng + ?Sized>(
    cfg: &BatchConfig,
    assets: &AssetRegistry,
    pools: &TraitPools,
    dirs: &OutputDirs,
    rng: &mut R,
) -> GoldfishResult<BatchReport> {
    pools.validate()?;
    let plan = plan_batch(cfg.count, pools, rng)?;
    let pool = build_thread_pool(cfg.workers)?;

    // Must finish before any item writes.
    prepare_output_dirs(dirs)?;

    let results = pool.install(|| {
        plan.par_iter()
            .map(|(n, traits)| (*n, generate_item(assets, dirs, *n, traits, cfg.progress)))
            .collect::<Vec<_>>()
    });

    let mut report = BatchReport::default();
    for (n, result) in results {
        match result {
            Ok(artifact) => report.succeeded.push((n, artifact)),
            Err(error) => {
                tracing::error!(item = n, %error, "item failed");
                report.failed.push(ItemFailure { n, error });
            }
        }
    }

    tracing::info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}

fn build_thread_pool(workers: usize) -> GoldfishResult<rayon::ThreadPool> {
    if workers == 0 {
        return Err(GoldfishError::config("worker count must be >= 1"));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("goldfish-worker-{i}"))
        .build()
        .map_err(|e| GoldfishError::config(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "goldfish_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    fn pools() -> TraitPools {
        TraitPools {
            background_color: vec!["#112233".into()],
            body_color: vec!["#445566".into(), "#778899".into()],
            accent_color: vec!["#181818".into(), "#ffffff".into()],
        }
    }

    #[test]
    fn default_config_matches_cli_defaults() {
        let cfg = BatchConfig::default();
        assert_eq!(cfg.count, 2100);
        assert_eq!(cfg.workers, 10);
        assert!(cfg.progress);
    }

    #[test]
    fn prepare_creates_missing_dirs() {
        let root = temp_dir("prepare_creates");
        let dirs = OutputDirs::under(&root);
        prepare_output_dirs(&dirs).unwrap();
        for d in dirs.all() {
            assert!(d.is_dir());
        }
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn prepare_removes_files_but_keeps_subdirs() {
        let root = temp_dir("prepare_clears");
        let dirs = OutputDirs::under(&root);
        std::fs::create_dir_all(dirs.generation.join("keep")).unwrap();
        std::fs::write(dirs.generation.join("keep").join("inner.txt"), b"x").unwrap();
        std::fs::write(dirs.generation.join("1.webp"), b"old").unwrap();

        prepare_output_dirs(&dirs).unwrap();

        assert!(!dirs.generation.join("1.webp").exists());
        assert!(dirs.generation.join("keep").join("inner.txt").is_file());
        assert!(dirs.metadata.is_dir());
        assert!(dirs.thumbnails.is_dir());
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn plan_is_numbered_and_seed_deterministic() {
        let a = plan_batch(5, &pools(), &mut StdRng::seed_from_u64(9)).unwrap();
        let b = plan_batch(5, &pools(), &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
        let numbers: Vec<u32> = a.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_workers_is_config_error() {
        let root = temp_dir("zero_workers");
        let cfg = BatchConfig {
            count: 1,
            workers: 0,
            progress: false,
        };
        let err = run_batch(
            &cfg,
            &AssetRegistry::new(root.join("assets")),
            &pools(),
            &OutputDirs::under(&root),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();
        assert!(matches!(err, GoldfishError::Config(_)));
        // Nothing was touched on disk.
        assert!(!root.exists());
    }

    #[test]
    fn missing_assets_fail_per_item_not_per_batch() {
        let root = temp_dir("missing_assets");
        let cfg = BatchConfig {
            count: 3,
            workers: 2,
            progress: false,
        };
        let report = run_batch(
            &cfg,
            &AssetRegistry::new(root.join("no-assets-here")),
            &pools(),
            &OutputDirs::under(&root),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();
        assert!(!report.is_success());
        assert_eq!(report.total(), 3);
        let failed: Vec<u32> = report.failed.iter().map(|f| f.n).collect();
        assert_eq!(failed, vec![1, 2, 3]);
        assert!(
            report
                .failed
                .iter()
                .all(|f| matches!(f.error, GoldfishError::AssetNotFound(_)))
        );
        let _ = std::fs::remove_dir_all(&root);
    }
}
