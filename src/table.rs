//! Benchmark-by-series tables.
//!
//! A table is a list of rows in display order. Each row holds one [`Cell`]
//! per series, and an absent measurement is an explicit [`Cell::Missing`].

use crate::error::{RenderError, Result};

/// One measurement slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Present(f64),
    Missing,
}

impl Cell {
    /// The measurement, if it is present and finite.
    pub fn value(self) -> Option<f64> {
        match self {
            Cell::Present(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    pub fn is_missing(self) -> bool {
        self.value().is_none()
    }
}

/// NaN and infinite literals become `Missing` so a stray sentinel can never
/// be drawn.
impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        if !v.is_finite() {
            Cell::Missing
        } else {
            Cell::Present(v)
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Cell::Missing, Cell::from)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub benchmark: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkTable {
    rows: Vec<Row>,
}

impl BenchmarkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Width is checked against the series at render time.
    pub fn row<I, C>(mut self, benchmark: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(Row {
            benchmark: benchmark.into(),
            cells: cells.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Builds a table from series-major literals: `series[i][g]` is the value
    /// of series `i` for benchmark `g`.
    pub fn from_series<S, V>(benchmarks: &[S], series: &[V]) -> Result<Self>
    where
        S: AsRef<str>,
        V: AsRef<[f64]>,
    {
        for values in series {
            let values = values.as_ref();
            if values.len() != benchmarks.len() {
                return Err(RenderError::ShapeMismatch {
                    benchmark: "<series>".to_string(),
                    expected: benchmarks.len(),
                    found: values.len(),
                });
            }
        }

        let rows = benchmarks
            .iter()
            .enumerate()
            .map(|(g, name)| Row {
                benchmark: name.as_ref().to_string(),
                cells: series.iter().map(|s| Cell::from(s.as_ref()[g])).collect(),
            })
            .collect();
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, benchmark: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.benchmark == benchmark)
    }

    /// Largest finite value over every cell, if any.
    pub fn max_finite(&self) -> Option<f64> {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter_map(|c| c.value())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }

    /// Checks that every row carries exactly `series` cells.
    pub fn check_width(&self, series: usize) -> Result<()> {
        if self.rows.is_empty() {
            return Err(RenderError::EmptyTable);
        }
        match self.rows.iter().find(|r| r.cells.len() != series) {
            Some(row) => Err(RenderError::ShapeMismatch {
                benchmark: row.benchmark.clone(),
                expected: series,
                found: row.cells.len(),
            }),
            None => Ok(()),
        }
    }

    /// Picks rows by key in the given order and renames them for display.
    pub fn select(&self, order: &[(&str, &str)]) -> Result<Self> {
        let rows = order
            .iter()
            .map(|(key, label)| {
                self.get(key)
                    .map(|row| Row {
                        benchmark: (*label).to_string(),
                        cells: row.cells.clone(),
                    })
                    .ok_or_else(|| RenderError::UnknownBenchmark((*key).to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Collapses series into groups, keeping the best present value of each.
    ///
    /// A group whose cells are all missing stays missing.
    pub fn reduce_groups(&self, groups: &[&[usize]]) -> Result<Self> {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let cells = groups
                    .iter()
                    .map(|indices| {
                        let mut best: Option<f64> = None;
                        for &i in indices.iter() {
                            let cell = row.cells.get(i).ok_or_else(|| {
                                RenderError::ShapeMismatch {
                                    benchmark: row.benchmark.clone(),
                                    expected: i + 1,
                                    found: row.cells.len(),
                                }
                            })?;
                            if let Some(v) = cell.value() {
                                best = Some(best.map_or(v, |b| b.max(v)));
                            }
                        }
                        Ok(Cell::from(best))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Row {
                    benchmark: row.benchmark.clone(),
                    cells,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: f64 = f64::NAN;

    #[test]
    fn nan_literal_is_missing() {
        assert_eq!(Cell::from(NAN), Cell::Missing);
        assert_eq!(Cell::from(Some(2.5)), Cell::Present(2.5));
        assert_eq!(Cell::from(None::<f64>), Cell::Missing);
        assert_eq!(Cell::from(f64::INFINITY), Cell::Missing);
        assert_eq!(Cell::from(f64::NEG_INFINITY), Cell::Missing);
        assert!(Cell::Present(f64::INFINITY).is_missing());
    }

    #[test]
    fn from_series_transposes() {
        let table =
            BenchmarkTable::from_series(&["1", "4"], &[[5.37, 5.73], [4.28, 4.73]]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("4").unwrap().cells,
            vec![Cell::Present(5.73), Cell::Present(4.73)]
        );
    }

    #[test]
    fn from_series_rejects_ragged_input() {
        let series: [&[f64]; 2] = [&[1.0, 2.0], &[1.0]];
        let err = BenchmarkTable::from_series(&["a", "b"], &series).unwrap_err();
        assert!(matches!(
            err,
            RenderError::ShapeMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn max_finite_ignores_missing() {
        let table = BenchmarkTable::new()
            .row("AgenticSQL", [1.0, 5.345, NAN])
            .row("SWE-Bench", [NAN, NAN, NAN]);
        assert_eq!(table.max_finite(), Some(5.345));
        assert_eq!(BenchmarkTable::new().max_finite(), None);
    }

    #[test]
    fn max_finite_skips_infinite_values() {
        let table = BenchmarkTable {
            rows: vec![Row {
                benchmark: "A".to_string(),
                cells: vec![Cell::Present(1.0), Cell::Present(f64::INFINITY)],
            }],
        };
        assert_eq!(table.max_finite(), Some(1.0));

        let literal = BenchmarkTable::new().row("A", [1.0, f64::INFINITY]);
        assert_eq!(literal.get("A").unwrap().cells[1], Cell::Missing);
        assert_eq!(literal.max_finite(), Some(1.0));
    }

    #[test]
    fn check_width_finds_short_row() {
        let table = BenchmarkTable::new()
            .row("A", [5.56, 5.18, 4.39])
            .row("B", [1.0, 2.0]);
        match table.check_width(3) {
            Err(RenderError::ShapeMismatch {
                benchmark,
                expected,
                found,
            }) => {
                assert_eq!(benchmark, "B");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            BenchmarkTable::new().check_width(3),
            Err(RenderError::EmptyTable)
        ));
    }

    #[test]
    fn select_reorders_and_relabels() {
        let table = BenchmarkTable::new()
            .row("Spec-Bench", [1.0])
            .row("AgenticSQL", [2.0]);
        let picked = table
            .select(&[("AgenticSQL", "AgenticSQL"), ("Spec-Bench", "SpecBench")])
            .unwrap();
        let names: Vec<_> = picked.rows().iter().map(|r| r.benchmark.as_str()).collect();
        assert_eq!(names, ["AgenticSQL", "SpecBench"]);

        assert!(matches!(
            table.select(&[("HumanEval", "HumanEval")]),
            Err(RenderError::UnknownBenchmark(_))
        ));
    }

    #[test]
    fn reduce_groups_takes_best_present_value() {
        let table = BenchmarkTable::new()
            .row("AgenticSQL", [1.0, 1.6, 1.9, 1.6, 3.8, 4.1])
            .row("SWE-Bench", [1.0, NAN, NAN, NAN, NAN, NAN]);
        let reduced = table
            .reduce_groups(&[&[0], &[1, 2, 3], &[4, 5]])
            .unwrap();

        assert_eq!(
            reduced.get("AgenticSQL").unwrap().cells,
            vec![Cell::Present(1.0), Cell::Present(1.9), Cell::Present(4.1)]
        );
        assert_eq!(
            reduced.get("SWE-Bench").unwrap().cells,
            vec![Cell::Present(1.0), Cell::Missing, Cell::Missing]
        );
    }

    #[test]
    fn reduce_groups_rejects_out_of_range_index() {
        let table = BenchmarkTable::new().row("A", [1.0, 2.0]);
        assert!(table.reduce_groups(&[&[0, 2]]).is_err());
    }
}
