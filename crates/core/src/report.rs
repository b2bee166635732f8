use crate::model::RunSummary;

const HEADERS: [&str; 5] = ["scope", "name", "before", "after", "how"];

/// Render the combined detail table across every root, `console.table`
/// style: one header row, fixed-width columns sized to content.
pub fn render_table(summary: &RunSummary) -> String {
    let rows: Vec<[String; 5]> = summary
        .details
        .iter()
        .map(|d| {
            [
                d.scope.clone(),
                d.name.clone(),
                d.before.to_string(),
                d.after.to_string(),
                d.how.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (i, h) in HEADERS.iter().enumerate() {
        widths[i] = h.chars().count();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    push_divider(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// The one-line wrap-up printed after the table.
pub fn totals_line(summary: &RunSummary) -> String {
    format!(
        "Done. Targets found: {}. Changed: {}.",
        summary.total_found(),
        summary.total_changed()
    )
}

/// Print table plus totals to stdout. Output is the whole point of a run;
/// nothing consumes the return value of the report.
pub fn print_summary(summary: &RunSummary) {
    if summary.details.is_empty() {
        println!("No matching checkboxes found.");
    } else {
        print!("{}", render_table(summary));
    }
    println!("{}", totals_line(summary));
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut first = true;
    for (cell, width) in cells.iter().zip(widths) {
        if !first {
            out.push_str("  ");
        }
        first = false;
        out.push_str(cell);
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
    }
    // No trailing spaces: pad-then-trim keeps the loop simple.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn push_divider(out: &mut String, widths: &[usize; 5]) {
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    for _ in 0..total {
        out.push('-');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CheckState, DetailRow, RootReport, SetMethod};

    fn sample() -> RunSummary {
        RunSummary {
            roots: vec![
                RootReport { scope: "top".into(), found: 2, changed: 1 },
                RootReport { scope: "iframe#0".into(), found: 1, changed: 1 },
            ],
            details: vec![
                DetailRow {
                    scope: "top".into(),
                    name: "France".into(),
                    before: CheckState { checked: false, aria: None },
                    after: CheckState { checked: true, aria: None },
                    how: SetMethod::InputClick,
                },
                DetailRow {
                    scope: "top".into(),
                    name: "Belgium".into(),
                    before: CheckState { checked: true, aria: Some("true".into()) },
                    after: CheckState { checked: true, aria: Some("true".into()) },
                    how: SetMethod::Already,
                },
                DetailRow {
                    scope: "iframe#0".into(),
                    name: "Norway".into(),
                    before: CheckState { checked: false, aria: Some("false".into()) },
                    after: CheckState { checked: true, aria: Some("true".into()) },
                    how: SetMethod::Forced,
                },
            ],
        }
    }

    #[test]
    fn table_has_header_and_all_rows() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5); // header, divider, 3 rows
        assert!(lines[0].starts_with("scope"));
        assert!(table.contains("France"));
        assert!(table.contains("input-click"));
        assert!(table.contains("false/false"));
        assert!(table.contains("iframe#0"));
    }

    #[test]
    fn columns_line_up() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        // "name" column starts at the same offset in header and data rows.
        let name_at = lines[0].find("name").unwrap();
        assert_eq!(lines[2].find("France"), Some(name_at));
        assert_eq!(lines[3].find("Belgium"), Some(name_at));
    }

    #[test]
    fn totals_add_up_across_roots() {
        assert_eq!(totals_line(&sample()), "Done. Targets found: 3. Changed: 2.");
    }
}
