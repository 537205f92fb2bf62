//! Box-drawn text tables for reports.

use crate::report::{Report, SpendAggregate};

/// Renders `rows` under `headers` as a bordered grid.
///
/// The first column is left-aligned, every other column right-aligned.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = |left: &str, fill: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
    };
    let line = |cells: &[&str]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let cell = cells.get(i).copied().unwrap_or("");
                let pad = " ".repeat(w - cell.chars().count());
                if i == 0 {
                    format!(" {cell}{pad} ")
                } else {
                    format!(" {pad}{cell} ")
                }
            })
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let mut out = vec![border("╒", "═", "╤", "╕"), line(headers)];
    if rows.is_empty() {
        out.push(border("╘", "═", "╧", "╛"));
        return out.join("\n");
    }

    out.push(border("╞", "═", "╪", "╡"));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(border("├", "─", "┼", "┤"));
        }
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(line(&cells));
    }
    out.push(border("╘", "═", "╧", "╛"));

    out.join("\n")
}

fn aggregate_rows(aggregates: &[SpendAggregate]) -> Vec<Vec<String>> {
    aggregates
        .iter()
        .map(|a| vec![a.label.clone(), a.total.to_string(), a.count.to_string()])
        .collect()
}

/// One table, or for the monthly-categorical report one titled table per
/// month separated by blank lines.
pub fn render_report(report: &Report) -> String {
    let headers = report.headers();
    match report {
        Report::Categorical(rows) | Report::Monthly(rows) => {
            render_table(&headers, &aggregate_rows(rows))
        }
        Report::MonthlyCategorical(months) => months
            .iter()
            .map(|m| {
                let table = render_table(&headers, &aggregate_rows(&m.categories));
                format!("{}\n{table}", m.month)
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}
