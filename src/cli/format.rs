use std::cmp;
use std::fmt::{Display, Write as _};

use anyhow::Result;

use crate::dataset::Dataset;
use crate::models::{
    DatasetOverview, ExtremumComparison, ExtremumResult, SearchComparison, SearchResult,
    TraceStep,
};

/// Number of leading values shown in the dataset preview.
const PREVIEW_LEN: usize = 10;

/// Widest histogram bar in text output.
const MAX_BAR_WIDTH: usize = 40;

/// Render a `SearchComparison` in human-readable text form.
pub fn print_search_text(
    result: &SearchComparison<f64>,
    dataset: &Dataset,
    source: &str,
    show_steps: bool,
) -> Result<()> {
    print!("{}", search_text(result, dataset, source, show_steps));
    Ok(())
}

/// Render a `SearchComparison` as a simple table.
///
/// Columns: STRATEGY, INDEX, PROBES, TIME_MS.
pub fn print_search_table(result: &SearchComparison<f64>) -> Result<()> {
    let rows: Vec<[String; 4]> = [&result.linear, &result.binary]
        .into_iter()
        .map(|r| {
            [
                r.strategy.label().to_string(),
                r.index_or_sentinel().to_string(),
                probe_count(r).map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
                format!("{:.4}", r.elapsed.as_millis_f64()),
            ]
        })
        .collect();

    print!(
        "{}",
        table(&["STRATEGY", "INDEX", "PROBES", "TIME_MS"], &rows)
    );
    Ok(())
}

/// Render an `ExtremumComparison` in human-readable text form.
pub fn print_extremum_text(
    result: &ExtremumComparison<f64>,
    dataset: &Dataset,
    source: &str,
) -> Result<()> {
    print!("{}", extremum_text(result, dataset, source));
    Ok(())
}

/// Render an `ExtremumComparison` as a simple table.
///
/// Columns: STRATEGY, MAXIMUM, MINIMUM, COMPARISONS, TIME_MS.
pub fn print_extremum_table(result: &ExtremumComparison<f64>) -> Result<()> {
    let rows: Vec<[String; 5]> = [&result.iterative, &result.divide_and_conquer]
        .into_iter()
        .map(|r| {
            [
                r.strategy.label().to_string(),
                optional(r.maximum),
                optional(r.minimum),
                r.comparisons.to_string(),
                format!("{:.4}", r.elapsed.as_millis_f64()),
            ]
        })
        .collect();

    print!(
        "{}",
        table(
            &["STRATEGY", "MAXIMUM", "MINIMUM", "COMPARISONS", "TIME_MS"],
            &rows
        )
    );
    Ok(())
}

/// Render a `DatasetOverview` with a horizontal bar histogram.
pub fn print_overview_text(overview: &DatasetOverview, source: &str) -> Result<()> {
    print!("{}", overview_text(overview, source));
    Ok(())
}

/// Render the histogram of a `DatasetOverview` as a table.
///
/// Columns: LOWER, UPPER, COUNT.
pub fn print_overview_table(overview: &DatasetOverview) -> Result<()> {
    let rows: Vec<[String; 3]> = overview
        .histogram
        .iter()
        .map(|bin| {
            [
                format!("{:.2}", bin.lower),
                format!("{:.2}", bin.upper),
                bin.count.to_string(),
            ]
        })
        .collect();

    if rows.is_empty() {
        return Ok(());
    }

    print!("{}", table(&["LOWER", "UPPER", "COUNT"], &rows));
    Ok(())
}

fn search_text(
    result: &SearchComparison<f64>,
    dataset: &Dataset,
    source: &str,
    show_steps: bool,
) -> String {
    let mut out = dataset_header(dataset, source);
    let _ = writeln!(out, "Search key: {}", result.key);

    let _ = writeln!(out);
    let _ = writeln!(out, "Linear search (O(n))");
    write_search_outcome(&mut out, &result.linear, result.key, "");

    let _ = writeln!(out);
    let _ = writeln!(out, "Binary search (O(log n))");
    write_search_outcome(&mut out, &result.binary, result.key, " in the sorted list");

    if show_steps {
        let _ = writeln!(out, "  Steps:");
        for step in &result.binary.trace {
            let _ = writeln!(out, "    {step}");
        }
    }

    out
}

fn write_search_outcome(out: &mut String, result: &SearchResult<f64>, key: f64, suffix: &str) {
    match result.index {
        Some(index) => {
            let _ = writeln!(out, "  Found {key} at index {index}{suffix}.");
        }
        None => {
            let _ = writeln!(out, "  {key} not found.");
        }
    }
    let _ = writeln!(out, "  Execution time: {}", result.elapsed);
}

fn extremum_text(result: &ExtremumComparison<f64>, dataset: &Dataset, source: &str) -> String {
    let mut out = dataset_header(dataset, source);

    let _ = writeln!(out);
    let _ = writeln!(out, "Iterative method (O(n))");
    write_extremum_outcome(&mut out, &result.iterative);

    let _ = writeln!(out);
    let _ = writeln!(out, "Divide & conquer method");
    write_extremum_outcome(&mut out, &result.divide_and_conquer);

    out
}

fn write_extremum_outcome(out: &mut String, result: &ExtremumResult<f64>) {
    let _ = writeln!(out, "  Maximum: {}", optional(result.maximum));
    let _ = writeln!(out, "  Minimum: {}", optional(result.minimum));
    let _ = writeln!(out, "  Comparisons: {}", result.comparisons);
    let _ = writeln!(out, "  Execution time: {}", result.elapsed);
}

fn overview_text(overview: &DatasetOverview, source: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dataset: {} values ({source})", overview.count);
    let _ = writeln!(out, "Maximum: {}", optional(overview.maximum));
    let _ = writeln!(out, "Minimum: {}", optional(overview.minimum));
    let _ = writeln!(
        out,
        "Average: {}",
        overview
            .average
            .map(|avg| format!("{avg:.2}"))
            .unwrap_or_else(|| "none".to_string())
    );

    if overview.histogram.is_empty() {
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Distribution:");

    let labels: Vec<String> = overview
        .histogram
        .iter()
        .map(|bin| format!("{:.2} - {:.2}", bin.lower, bin.upper))
        .collect();
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let peak = overview
        .histogram
        .iter()
        .map(|bin| bin.count)
        .max()
        .unwrap_or(0);

    for (label, bin) in labels.iter().zip(&overview.histogram) {
        let bar_len = if peak == 0 {
            0
        } else {
            (bin.count * MAX_BAR_WIDTH).div_ceil(peak)
        };
        let _ = writeln!(
            out,
            "  {:<label_width$} | {:<MAX_BAR_WIDTH$} {}",
            label,
            "#".repeat(bar_len),
            bin.count
        );
    }

    out
}

fn dataset_header(dataset: &Dataset, source: &str) -> String {
    let preview = dataset
        .preview(PREVIEW_LEN)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    let _ = writeln!(out, "Dataset: {} values ({source})", dataset.len());
    if dataset.len() > PREVIEW_LEN {
        let _ = writeln!(out, "Preview: [{preview}, ...]");
    } else {
        let _ = writeln!(out, "Preview: [{preview}]");
    }
    out
}

fn probe_count<T>(result: &SearchResult<T>) -> Option<usize> {
    if result.trace.is_empty() {
        return None;
    }
    Some(
        result
            .trace
            .iter()
            .filter(|step| matches!(step, TraceStep::Probe { .. }))
            .count(),
    )
}

fn optional<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "none".to_string())
}

/// Left-align the first column and right-align the rest.
fn table<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    let widths: Vec<usize> = (0..N)
        .map(|col| {
            rows.iter()
                .map(|row| row[col].len())
                .fold(headers[col].len(), cmp::max)
        })
        .collect();

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for cells in std::iter::once(header_cells.as_slice()).chain(rows.iter().map(|r| r.as_slice())) {
        let line = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let width = widths[col];
                if col == 0 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{compare_extremum, compare_search, overview};

    fn sample() -> Dataset {
        Dataset::new(vec![5.0, 3.0, 8.0, 1.0, 9.0, 2.0]).expect("dataset")
    }

    #[test]
    fn search_text_reports_both_strategies() {
        let dataset = sample();
        let result = compare_search(dataset.values(), 8.0);
        let text = search_text(&result, &dataset, "test", true);

        assert!(text.contains("Dataset: 6 values (test)"));
        assert!(text.contains("Preview: [5, 3, 8, 1, 9, 2]"));
        assert!(text.contains("Found 8 at index 2."));
        assert!(text.contains("Found 8 at index 4 in the sorted list."));
        assert!(text.contains("    Low: 0, High: 5, Mid: 2 (Value: 3)"));
    }

    #[test]
    fn search_text_hides_steps_unless_requested() {
        let dataset = sample();
        let result = compare_search(dataset.values(), 100.0);
        let text = search_text(&result, &dataset, "test", false);

        assert!(text.contains("100 not found."));
        assert!(!text.contains("Steps:"));
    }

    #[test]
    fn extremum_text_reports_absent_values_for_empty_dataset() {
        let dataset = Dataset::default();
        let result = compare_extremum(dataset.values());
        let text = extremum_text(&result, &dataset, "empty");

        assert!(text.contains("Maximum: none"));
        assert!(text.contains("Minimum: none"));
    }

    #[test]
    fn overview_text_draws_scaled_bars() {
        let dataset = Dataset::new(vec![0.0, 0.0, 10.0]).expect("dataset");
        let text = overview_text(&overview(&dataset, 2), "test");

        assert!(text.contains("Average: 3.33"));
        assert!(text.contains(&format!("| {} 2", "#".repeat(MAX_BAR_WIDTH))));
        assert!(text.contains(&format!("| {:<MAX_BAR_WIDTH$} 1", "#".repeat(20))));
    }

    #[test]
    fn table_aligns_columns() {
        let rows = vec![
            ["linear".to_string(), "2".to_string()],
            ["binary".to_string(), "-1".to_string()],
        ];
        let rendered = table(&["STRATEGY", "INDEX"], &rows);
        assert_eq!(
            rendered,
            "STRATEGY INDEX\nlinear       2\nbinary      -1\n"
        );
    }

    #[test]
    fn long_datasets_show_ellipsis_in_preview() {
        let dataset = Dataset::new((0..20).map(f64::from).collect()).expect("dataset");
        let header = dataset_header(&dataset, "range");
        assert!(header.contains("Preview: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, ...]"));
    }
}
