//! Every figure of the blog posts and the poster, as literal tables plus
//! chart settings. Each family writes into its own directory.
//!
//! Numbers are copied per figure from the runs they were published with;
//! overlapping datasets are intentionally not merged.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::figure::{render_figure, Figure};

mod ablation;
mod neurips;
mod speedups;
mod tpot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// TPOT of suffix decoding against N-gram and vanilla decoding.
    SuffixVsNgram,
    /// Unoptimized suffix decoding and the two N-gram window settings.
    NgramComparison,
    VanillaComparison,
    /// Speedup and mean accepted tokens over eight methods.
    Speedups,
    /// Per-token time and memory of the suffix tree optimizations.
    Ablation,
    /// Slide frames revealing one method group at a time.
    NeuripsProgressive,
    NeuripsTokens,
}

impl Family {
    pub const ALL: [Family; 7] = [
        Family::SuffixVsNgram,
        Family::NgramComparison,
        Family::VanillaComparison,
        Family::Speedups,
        Family::Ablation,
        Family::NeuripsProgressive,
        Family::NeuripsTokens,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::SuffixVsNgram => "suffix-vs-ngram",
            Family::NgramComparison => "ngram-comparison",
            Family::VanillaComparison => "vanilla-comparison",
            Family::Speedups => "speedups",
            Family::Ablation => "ablation",
            Family::NeuripsProgressive => "neurips-progressive",
            Family::NeuripsTokens => "neurips-tokens",
        }
    }

    /// The figures of this family, keyed by file name.
    pub fn figures(self) -> Result<Vec<(String, Figure)>> {
        match self {
            Family::SuffixVsNgram => tpot::suffix_vs_ngram(),
            Family::NgramComparison => tpot::ngram_comparison(),
            Family::VanillaComparison => tpot::vanilla_comparison(),
            Family::Speedups => speedups::figures(),
            Family::Ablation => ablation::figures(),
            Family::NeuripsProgressive => neurips::progressive(),
            Family::NeuripsTokens => neurips::tokens(),
        }
    }

    /// Renders every figure into `<out_dir>/<family>/` and returns the paths.
    pub fn render(self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let dir = out_dir.join(self.name());
        let figures = self.figures()?;
        info!(family = self.name(), count = figures.len(), "rendering family");

        figures
            .iter()
            .map(|(file, figure)| render_figure(figure, dir.join(file)))
            .collect()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    #[test]
    fn every_family_builds_valid_figures() {
        for family in Family::ALL {
            let figures = family.figures().unwrap();
            assert!(!figures.is_empty(), "{family} has no figures");
            for (file, figure) in &figures {
                assert!(file.ends_with(".png"));
                for panel in &figure.panels {
                    layout::plan(&panel.table, &panel.styles, &panel.spec, panel.reveal_count)
                        .unwrap_or_else(|e| panic!("{family}/{file}: {e}"));
                }
            }
        }
    }

    #[test]
    fn file_names_are_unique_within_a_family() {
        for family in Family::ALL {
            let mut names: Vec<String> =
                family.figures().unwrap().into_iter().map(|(f, _)| f).collect();
            let before = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), before, "{family} repeats a file name");
        }
    }
}
