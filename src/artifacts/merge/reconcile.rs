use std::collections::HashSet;

pub const CONFLICT_START: &str = "<<<<<<< Current Branch";
pub const CONFLICT_SEPARATOR: &str = "=======";
pub const CONFLICT_END: &str = ">>>>>>> Target Branch";

/// Marker whose presence flags unresolved content
const CONFLICT_MARKER: &str = ">>>>>>>";

/// Render a conflict block with the current side on top
pub fn conflict_block(current: &str, target: &str) -> String {
    format!("{CONFLICT_START}\n{current}\n{CONFLICT_SEPARATOR}\n{target}\n{CONFLICT_END}")
}

pub fn has_conflicts(content: &str) -> bool {
    content.contains(CONFLICT_MARKER)
}

/// Reconcile the lines of `base`, `current` and `target`
///
/// Every distinct line of the three inputs is visited once, in order of first
/// appearance in `current`, then `target`, then `base`:
///
/// - a line in both `current` and `target` is kept, unless it is also in
///   `base` while the three line sets all differ from one another
/// - a line in `base` and exactly one of the sides is kept
/// - a line only in `base` was dropped by both sides and becomes a conflict
/// - a line only in `current` or only in `target` is kept
///
/// Kept lines and conflict blocks are joined with newlines.
pub fn reconcile(base: &str, current: &str, target: &str) -> String {
    let base_lines = base.lines().collect::<HashSet<_>>();
    let current_lines = current.lines().collect::<HashSet<_>>();
    let target_lines = target.lines().collect::<HashSet<_>>();

    let all_differ = base_lines != current_lines
        && base_lines != target_lines
        && current_lines != target_lines;

    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for line in current.lines().chain(target.lines()).chain(base.lines()) {
        if !seen.insert(line) {
            continue;
        }

        let in_base = base_lines.contains(line);
        let in_current = current_lines.contains(line);
        let in_target = target_lines.contains(line);

        let conflicted = match (in_base, in_current, in_target) {
            (true, true, true) => all_differ,
            (true, false, false) => true,
            _ => false,
        };

        if conflicted {
            merged.push(conflict_block(line, line));
        } else {
            merged.push(line.to_string());
        }
    }

    merged.join("\n")
}
