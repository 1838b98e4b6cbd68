//! Plain-text rendering of rows.

use crate::diff::model::Level;
use crate::model::ComparisonRow;

fn status(same: bool) -> &'static str {
    if same {
        "Same"
    } else {
        "Different"
    }
}

/// One-line overview: id followed by the four level statuses.
pub fn render_row_line(row: &ComparisonRow) -> String {
    let statuses: Vec<String> = Level::ALL
        .iter()
        .map(|level| format!("{}={}", level.label(), u8::from(row.same(*level))))
        .collect();
    format!("{}  {}", row.architecture_id, statuses.join(" "))
}

/// Detail view of one architecture: status per level, the difference text
/// of every differing level, then the reasoning description.
pub fn render_detail(row: &ComparisonRow) -> String {
    let mut out = String::new();

    out.push_str(&format!("## Architecture {}\n\n", row.architecture_id));

    for level in Level::ALL {
        out.push_str(&format!("- **{}**: {}\n", level.label(), status(row.same(level))));
    }
    out.push('\n');

    for level in Level::ALL.into_iter().filter(|l| !row.same(*l)) {
        out.push_str(&format!("### {} Differences\n\n", level.label()));
        out.push_str(row.differences(level));
        out.push_str("\n\n");
    }

    out.push_str("### Reasoning Description\n\n");
    out.push_str(&row.reasoning_description);
    out.push('\n');

    out
}
