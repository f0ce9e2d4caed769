use crate::error::Result;
use crate::figure::{Figure, Panel};
use crate::spec::{Annotation, ChartSpec, LegendPosition, ValueFormat};
use crate::style::{series, SeriesStyle, SNOWFLAKE_BLUE, SNOWFLAKE_MIDNIGHT, SNOWFLAKE_PURPLE};
use crate::table::BenchmarkTable;

const TITLE: &str = "Impact of Optimizations on Suffix Decoding Operation Performance";

// Microseconds per token.
const SPEC_TIME: [f64; 3] = [27.5, 8.10, 3.72];
const UPDATE_TIME: [f64; 3] = [3.17, 2.06, 2.60];
// Megabytes.
const MEMORY: [f64; 3] = [671.0, 292.0, 433.0];

fn methods() -> Vec<SeriesStyle> {
    series(&[
        ("Baseline", SNOWFLAKE_MIDNIGHT),
        ("+Custom Hashmap", SNOWFLAKE_PURPLE),
        ("+Custom Hashmap +Double Linked List", SNOWFLAKE_BLUE),
    ])
}

/// Each bar is labeled with its improvement factor over the baseline.
fn improvement() -> Annotation {
    Annotation::RelativeTo {
        baseline: 0,
        inverse: true,
        format: ValueFormat::times(1),
    }
}

fn figure(reveal_count: usize) -> Figure {
    let timing = Panel::new(
        BenchmarkTable::new()
            .row("Spec\ntime/token", SPEC_TIME)
            .row("Update\ntime/token", UPDATE_TIME),
        methods(),
        ChartSpec::new("", "Time (μs)")
            .with_y_limit(32.0)
            .with_bars(0.25, 0.25)
            .with_legend(LegendPosition::UpperRight)
            .with_annotation(improvement()),
    )
    .revealing(reveal_count);

    // A single group: the x-range comes out as -0.4..0.4.
    let memory = Panel::new(
        BenchmarkTable::new().row("Memory Consumption", MEMORY),
        methods(),
        ChartSpec::new("", "Memory (MB)")
            .with_y_limit(750.0)
            .with_bars(0.2, 0.2)
            .with_legend(LegendPosition::UpperRight)
            .with_annotation(improvement()),
    )
    .revealing(reveal_count);

    Figure::columns((2100, 900), vec![2, 1], vec![timing, memory]).with_title(TITLE, 38)
}

pub(super) fn figures() -> Result<Vec<(String, Figure)>> {
    Ok(vec![
        ("ablation_comparison.png".into(), figure(3)),
        // First two methods only, for the slide build; the third keeps its slot.
        ("ablation_comparison_partial.png".into(), figure(2)),
    ])
}
