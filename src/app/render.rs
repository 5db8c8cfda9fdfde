//! Plain-text presentation of the session: table, bar chart, part list.

use crate::core::wear::CHART_MAX_PERCENT;
use crate::core::{ChartBar, Distance, PartSpec, TableRow, WearStatus};
use std::fmt::Write;

pub const CHART_TITLE: &str = "Part Condition Monitor";
pub const CHART_AXIS_LABEL: &str = "Wear Percentage (%)";
const TABLE_HEADERS: [&str; 5] = ["Part", "Lifespan (km)", "Status", "Wear %", "Action"];

pub const APPLICATION_LOGIC: &str = "\
START PROCEDURE CheckPartStatus
   INPUT: SelectedPart, LastServiceKm, CurrentKm
   LOOKUP: PartLifespan FROM Database WHERE Part = SelectedPart

   CALCULATE KmDriven = CurrentKm - LastServiceKm
   CALCULATE WearPercent = (KmDriven / PartLifespan) * 100

   IF WearPercent >= 100 THEN
       DISPLAY 'Status: REPLACE' (Color: RED)
   ELSE
       DISPLAY 'Status: OK' (Color: GREEN)
   END IF

   PLOT Graph (Max Y-Axis = 100%)
END PROCEDURE";

pub fn render_table(rows: &[TableRow]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.part_name.clone(),
                format!("{} km", row.lifespan_distance),
                status_cell(row.status),
                format!("{}%", row.wear_percent),
                row.action.clone(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &TABLE_HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    if cells.is_empty() {
        out.push_str("(no parts entered yet)\n");
    }
    out
}

/// Text stand-in for the red/green status colouring.
fn status_cell(status: WearStatus) -> String {
    match status {
        WearStatus::Replace => format!("[!] {}", status.label()),
        WearStatus::Ok => status.label().to_string(),
    }
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Horizontal bars, `width` characters at 100%.
pub fn render_chart(bars: &[ChartBar], width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", CHART_TITLE);
    if bars.is_empty() {
        out.push_str("(nothing to plot)\n");
        return out;
    }

    let label_width = bars
        .iter()
        .map(|bar| bar.category.chars().count())
        .max()
        .unwrap_or(0);

    for bar in bars {
        let filled = bar_length(bar.wear_percent, width);
        let _ = writeln!(
            out,
            "{:<label$} |{}{}| {:>5.1}%",
            bar.category,
            "#".repeat(filled),
            " ".repeat(width - filled),
            bar.wear_percent,
            label = label_width
        );
    }
    let _ = writeln!(
        out,
        "{:<label$}  0{:>axis$}  {}",
        "",
        "100",
        CHART_AXIS_LABEL,
        label = label_width,
        axis = width.saturating_sub(1)
    );
    out
}

fn bar_length(percent: f64, width: usize) -> usize {
    let fraction = percent.clamp(0.0, CHART_MAX_PERCENT) / CHART_MAX_PERCENT;
    // fraction is within 0..=1, so the product fits in width
    ((fraction * width as f64).round() as usize).min(width)
}

pub fn render_parts<I>(parts: I) -> String
where
    I: IntoIterator<Item = PartSpec>,
{
    let mut out = String::new();
    for (position, part) in parts.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} ({})",
            position + 1,
            part.name,
            format_km(part.lifespan_distance)
        );
    }
    out
}

fn format_km(distance: Distance) -> String {
    let digits = distance.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{} km", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, wear: u32, status: WearStatus) -> TableRow {
        TableRow {
            part_name: name.to_string(),
            lifespan_distance: 10_000,
            status,
            wear_percent: wear,
            action: status.action().to_string(),
        }
    }

    #[test]
    fn test_table_lists_rows_in_order() {
        let table = render_table(&[
            row("Engine Oil (Synthetic)", 50, WearStatus::Ok),
            row("Brake Fluid", 120, WearStatus::Replace),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Part"));
        assert!(lines[0].contains("Lifespan (km)"));
        assert!(lines[2].contains("Engine Oil (Synthetic)") && lines[2].contains("50%"));
        assert!(lines[3].contains("REPLACE") && lines[3].contains("Service Required"));
        assert!(lines[3].contains("120%"));
    }

    #[test]
    fn test_replace_status_is_flagged() {
        let table = render_table(&[
            row("Cabin Air Filter", 99, WearStatus::Ok),
            row("Brake Pads (Rear)", 100, WearStatus::Replace),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert!(!lines[2].contains("[!]"));
        assert!(lines[3].contains("[!] REPLACE"));
    }

    #[test]
    fn test_empty_table_says_so() {
        assert!(render_table(&[]).contains("no parts entered yet"));
    }

    #[test]
    fn test_chart_bar_lengths() {
        let bars = vec![
            ChartBar {
                category: "Timing Belt".to_string(),
                wear_percent: 50.0,
            },
            ChartBar {
                category: "Fuel Filter".to_string(),
                wear_percent: 100.0,
            },
        ];
        let chart = render_chart(&bars, 20);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], CHART_TITLE);
        assert_eq!(lines[1].matches('#').count(), 10);
        assert_eq!(lines[2].matches('#').count(), 20);
        assert!(lines[2].ends_with("100.0%"));
        assert!(lines[3].contains(CHART_AXIS_LABEL));
    }

    #[test]
    fn test_bar_length_never_exceeds_width() {
        assert_eq!(bar_length(250.0, 40), 40);
        assert_eq!(bar_length(-10.0, 40), 0);
        assert_eq!(bar_length(99.9, 40), 40);
    }

    #[test]
    fn test_parts_are_numbered_from_one() {
        let listing = render_parts(vec![
            PartSpec::new("Brake Fluid", 40_000),
            PartSpec::new("Timing Belt", 100_000),
        ]);
        assert!(listing.contains("  1. Brake Fluid (40,000 km)"));
        assert!(listing.contains("  2. Timing Belt (100,000 km)"));
    }

    #[test]
    fn test_logic_text_mentions_threshold() {
        assert!(APPLICATION_LOGIC.contains("IF WearPercent >= 100 THEN"));
    }
}
