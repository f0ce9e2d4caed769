use std::fs;

use suffix_figures::style::{series, SNOWFLAKE_BLUE, SNOWFLAKE_MIDNIGHT, SNOWFLAKE_ORANGE};
use suffix_figures::{
    render, render_figure, BenchmarkTable, ChartSpec, Family, Figure, Panel, RenderError,
    SeriesStyle,
};

fn methods() -> Vec<SeriesStyle> {
    series(&[
        ("Vanilla", SNOWFLAKE_ORANGE),
        ("N-gram", SNOWFLAKE_MIDNIGHT),
        ("Suffix", SNOWFLAKE_BLUE),
    ])
}

fn tpot_table() -> BenchmarkTable {
    BenchmarkTable::new()
        .row("A", [5.56, 5.18, 4.39])
        .row("SWE-Bench", [2.1, f64::NAN, 2.452])
}

#[test]
fn render_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tpot.png");
    let spec = ChartSpec::new("TPOT", "TPOT (ms)").with_size(900, 450);

    let written = render(&tpot_table(), &methods(), &spec, 3, &path).unwrap();
    assert_eq!(written, path);

    let bytes = fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn repeated_renders_have_identical_size() {
    let dir = tempfile::tempdir().unwrap();
    let spec = ChartSpec::new("TPOT", "TPOT (ms)").with_size(900, 450);
    let first = render(&tpot_table(), &methods(), &spec, 2, dir.path().join("a.png")).unwrap();
    let second = render(&tpot_table(), &methods(), &spec, 2, dir.path().join("b.png")).unwrap();
    assert_eq!(
        fs::metadata(first).unwrap().len(),
        fs::metadata(second).unwrap().len()
    );
}

#[test]
fn reveal_zero_renders_empty_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.png");
    let spec = ChartSpec::new("TPOT", "TPOT (ms)").with_size(600, 300);
    render(&tpot_table(), &methods(), &spec, 0, &path).unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn shape_mismatch_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.png");
    let table = BenchmarkTable::new().row("A", [5.56, 5.18]);
    let spec = ChartSpec::new("TPOT", "TPOT (ms)");
    match render(&table, &methods(), &spec, 3, &path) {
        Err(RenderError::ShapeMismatch {
            benchmark,
            expected: 3,
            found: 2,
        }) => assert_eq!(benchmark, "A"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn directory_as_output_is_a_backend_failure() {
    let dir = tempfile::tempdir().unwrap();
    let spec = ChartSpec::new("TPOT", "TPOT (ms)").with_size(600, 300);
    let err = render(&tpot_table(), &methods(), &spec, 3, dir.path()).unwrap_err();
    assert!(matches!(err, RenderError::Backend(_)), "got {err:?}");
    assert!(dir.path().is_dir());
}

#[test]
fn infinite_value_renders_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inf.png");
    let table = BenchmarkTable::new().row("A", [1.0, f64::INFINITY, 2.0]);
    let spec = ChartSpec::new("TPOT", "TPOT (ms)").with_size(600, 300);
    render(&table, &methods(), &spec, 3, &path).unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn stacked_figure_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stacked.png");
    let panel = |title: &str| {
        Panel::new(
            tpot_table(),
            methods(),
            ChartSpec::new(title, "TPOT (ms)").with_y_limit(8.0),
        )
    };
    let figure = Figure::rows((900, 900), vec![panel("top"), panel("bottom").revealing(1)])
        .with_title("Stacked", 30);
    render_figure(&figure, &path).unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn ablation_family_writes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let written = Family::Ablation.render(dir.path()).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["ablation_comparison.png", "ablation_comparison_partial.png"]
    );
    for path in &written {
        assert!(path.starts_with(dir.path().join("ablation")));
        assert!(fs::metadata(path).unwrap().len() > 0);
    }
}
