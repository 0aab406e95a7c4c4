use crate::report::fill_report::{FillReport, FillStatus};

// ============================================================================
// Console reporter — formatted terminal output for a fill report
// ============================================================================

/// Format a fill report for terminal output.
///
/// Produces output like:
/// ```text
/// === Autofill: 3 filled (5 controls: 3 hit, 1 miss, 1 skip) ===
///
/// ✓ HIT   [0] f_firstName ← "Jane"
/// ✗ MISS  [2] f_state — no option matched
/// · SKIP  [4] — no matching rule
/// ```
/// With `verbose`, each line also carries the control's hint text.
pub fn format_fill_report(report: &FillReport, verbose: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Autofill: {} filled ({} controls: {} hit, {} miss, {} skip) ===\n\n",
        report.filled_count,
        report.entries.len(),
        report.count_of(FillStatus::Hit),
        report.count_of(FillStatus::Miss),
        report.count_of(FillStatus::Skip),
    ));

    for entry in &report.entries {
        let line = match entry.status {
            FillStatus::Hit => format!(
                "\u{2713} HIT   [{}] {} \u{2190} \"{}\"",
                entry.index,
                entry.field_key.as_deref().unwrap_or("?"),
                entry.value.as_deref().unwrap_or(""),
            ),
            FillStatus::Miss => format!(
                "\u{2717} MISS  [{}] {} \u{2014} {}",
                entry.index,
                entry.field_key.as_deref().unwrap_or("?"),
                entry.reason.as_deref().unwrap_or("not filled"),
            ),
            FillStatus::Skip => format!(
                "\u{00b7} SKIP  [{}] \u{2014} {}",
                entry.index,
                entry.reason.as_deref().unwrap_or("no resolution"),
            ),
        };

        out.push_str(&line);
        if verbose && !entry.hint.is_empty() {
            out.push_str(&format!("\n        hint: {}", entry.hint));
        }
        out.push('\n');
    }

    out
}
