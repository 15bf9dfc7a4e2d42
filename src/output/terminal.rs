//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{ActivityTable, KinaseActivity};

/// Format an activity table for human-readable terminal output.
///
/// Kinases are listed by ascending adjusted p-value. Significant rows are
/// marked and the score direction is colored: green for increased
/// activity, red for decreased.
pub fn format_table(table: &ActivityTable) -> String {
    let mut output = String::new();

    if table.is_empty() {
        output.push_str("No kinase passed the substrate-set filter.\n");
        return output;
    }

    output.push_str(&format!(
        "{}\n",
        format!("Kinase activity ({} kinases)", table.len()).bold()
    ));
    output.push_str(&format!(
        "{:<16} {:>10} {:>7} {:>10} {:>10}\n",
        "KINASE".dimmed(),
        "SCORE".dimmed(),
        "SITES".dimmed(),
        "P".dimmed(),
        "FDR".dimmed()
    ));

    for record in table.ranked() {
        output.push_str(&format_row(record));
    }

    let significant = table.iter().filter(|r| r.significant).count();
    output.push_str(&format!(
        "\n{}\n",
        format!("{significant} significant at the configured FDR level (*)").dimmed()
    ));

    output
}

fn format_row(record: &KinaseActivity) -> String {
    let direction = if record.is_activated() {
        format!("{:>10.3}", record.score).green()
    } else {
        format!("{:>10.3}", record.score).red()
    };

    let marker = if record.significant { " *" } else { "" };
    // pad before coloring: escape codes would throw off the column width
    let kinase = format!("{:<16}", record.kinase);
    let kinase = if record.significant {
        kinase.bold().to_string()
    } else {
        kinase
    };

    format!(
        "{} {} {:>7} {:>10} {:>10}{}\n",
        kinase,
        direction,
        record.substrate_count,
        format_p(record.p_value),
        format_p(record.p_adjusted),
        marker
    )
}

/// Compact p-value rendering: scientific below 0.001, fixed otherwise.
fn format_p(p: f64) -> String {
    if p < 1e-3 {
        format!("{p:.1e}")
    } else {
        format!("{p:.3}")
    }
}
