use anyhow::Result;
use kbo_nace::{pipeline, RunConfig};
use std::{env, process};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) parse arguments ──────────────────────────────────────────
    let cfg = match RunConfig::from_args(env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(e) if e.is_usage() => {
            eprintln!("{}", e);
            process::exit(-1);
        }
        Err(e) => return Err(e.into()),
    };
    info!(
        input = %cfg.input.display(),
        kbo_dir = %cfg.kbo_dir.display(),
        output = %cfg.output_path().display(),
        "startup"
    );

    // ─── 3) run ──────────────────────────────────────────────────────
    match pipeline::run(&cfg) {
        Ok(summary) => {
            info!(
                rows = summary.rows,
                identifiers = summary.identifiers,
                enriched = summary.enriched_rows,
                "all done"
            );
            Ok(())
        }
        Err(e) => {
            error!("run failed: {}", e);
            Err(anyhow::Error::new(e).context("enrichment run failed"))
        }
    }
}
