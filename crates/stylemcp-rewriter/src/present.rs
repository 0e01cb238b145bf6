//! Human-readable renderings of a [`RewriteResult`].

use stylemcp_core::RewriteResult;

/// A score line followed by one entry per change.
pub fn format_changes(result: &RewriteResult) -> String {
    if result.changes.is_empty() {
        return "No changes made.".to_string();
    }

    let mut lines = vec![
        format!("Score: {} → {}", result.score.before, result.score.after),
        String::new(),
        "Changes:".to_string(),
    ];
    for change in &result.changes {
        lines.push(format!(
            "  - \"{}\" → \"{}\"",
            change.original, change.replacement
        ));
        lines.push(format!("    Reason: {}", change.reason));
    }
    lines.join("\n")
}

/// Line-by-line comparison of the original and rewritten text.
///
/// Lines are paired by index. Unequal pairs print as `- ` / `+ ` lines,
/// equal non-empty lines as two-space context.
pub fn generate_diff(result: &RewriteResult) -> String {
    let original: Vec<&str> = result.original.split('\n').collect();
    let rewritten: Vec<&str> = result.rewritten.split('\n').collect();

    let mut lines = vec!["--- original".to_string(), "+++ rewritten".to_string()];
    for i in 0..original.len().max(rewritten.len()) {
        let before = original.get(i).copied().unwrap_or_default();
        let after = rewritten.get(i).copied().unwrap_or_default();
        if before != after {
            if !before.is_empty() {
                lines.push(format!("- {before}"));
            }
            if !after.is_empty() {
                lines.push(format!("+ {after}"));
            }
        } else if !before.is_empty() {
            lines.push(format!("  {before}"));
        }
    }
    lines.join("\n")
}
