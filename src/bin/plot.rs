use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use suffix_figures::Family;
use tracing_subscriber::EnvFilter;

const OUT_DIR: &str = "figures";

/// Render every benchmark figure of the blog posts and slides into
/// `figures/<family>/`. Log verbosity follows `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    for family in Family::ALL {
        let written = family
            .render(Path::new(OUT_DIR))
            .with_context(|| format!("failed to render {family} figures"))?;
        for path in written {
            println!("Saved: {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_without_arguments() {
        assert!(Args::try_parse_from(["plot"]).is_ok());
    }

    #[test]
    fn rejects_run_time_options() {
        assert!(Args::try_parse_from(["plot", "--out-dir", "elsewhere"]).is_err());
        assert!(Args::try_parse_from(["plot", "--family", "ablation"]).is_err());
    }
}
