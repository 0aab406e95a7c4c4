use crate::page::control::{Candidate, SelectOption};
use crate::page::host::{EventKind, PageHost};

// ============================================================================
// Value applier — per-kind write strategies over the page host
// ============================================================================
// Contract: write the control's underlying storage first, then emit the
// notification sequence the control kind requires. Framework-managed forms
// only recompute their state from the notifications.

/// Fill a text input or textarea. Empty values are a no-op. After the write,
/// dispatches input, change, blur, then the richer text notification whose
/// failure (unsupported host) is swallowed.
pub fn apply_text(host: &mut dyn PageHost, control: usize, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }

    host.write_text(control, value)?;
    host.dispatch(control, EventKind::Input)?;
    host.dispatch(control, EventKind::Change)?;
    host.dispatch(control, EventKind::Blur)?;
    let _ = host.dispatch(control, EventKind::TextInput);
    Ok(())
}

/// Fill a select by resolving the target against its options. Returns false
/// when no resolution tier matches (the caller records a miss).
pub fn apply_select(
    host: &mut dyn PageHost,
    candidate: &Candidate,
    target: &str,
) -> Result<bool, String> {
    if target.is_empty() {
        return Ok(false);
    }

    let chosen = match resolve_select_option(&candidate.options, target) {
        Some(i) => i,
        None => return Ok(false),
    };

    host.choose_option(candidate.raw_index, chosen)?;
    host.dispatch(candidate.raw_index, EventKind::Change)?;
    host.dispatch(candidate.raw_index, EventKind::Input)?;
    Ok(true)
}

/// Resolve a target string to an option position, in three tiers:
/// 1. exact — trimmed visible text or underlying value equals the target;
/// 2. containment — text or value contains the target, case-insensitive;
/// 3. reverse containment — the target contains the option's visible text
///    (verbose targets like "Victoria, Australia" matching option "Victoria").
/// The first option in declared order wins within each tier.
pub fn resolve_select_option(options: &[SelectOption], target: &str) -> Option<usize> {
    let lowered = target.to_lowercase();

    if let Some(i) = options
        .iter()
        .position(|o| o.text.trim() == target || o.value == target)
    {
        return Some(i);
    }

    if let Some(i) = options.iter().position(|o| {
        o.text.to_lowercase().contains(&lowered) || o.value.to_lowercase().contains(&lowered)
    }) {
        return Some(i);
    }

    options.iter().position(|o| {
        let text = o.text.trim();
        !text.is_empty() && lowered.contains(&text.to_lowercase())
    })
}

/// Fill a radio group: check every member whose comparison text (value +
/// associated label + enclosing text) contains the target. Returns how many
/// members were checked; ambiguous targets may check more than one.
pub fn apply_radio_group(
    host: &mut dyn PageHost,
    candidate: &Candidate,
    target: &str,
) -> Result<usize, String> {
    if target.is_empty() {
        return Ok(0);
    }

    let lowered = target.to_lowercase();
    let mut checked = 0;

    for member in &candidate.members {
        let comparison = format!(
            "{} {} {}",
            member.value, member.label_text, member.enclosing_text
        )
        .to_lowercase();

        if comparison.contains(&lowered) {
            host.set_checked(member.raw_index, true)?;
            host.dispatch(member.raw_index, EventKind::Change)?;
            checked += 1;
        }
    }

    Ok(checked)
}

/// Set a yes/no checkbox. A small fixed token set reads as checked;
/// everything else unchecks. Change is dispatched either way.
pub fn apply_checkbox(host: &mut dyn PageHost, control: usize, value: &str) -> Result<(), String> {
    let truthy = matches!(
        value.to_lowercase().as_str(),
        "yes" | "true" | "1" | "checked"
    );

    host.set_checked(control, truthy)?;
    host.dispatch(control, EventKind::Change)?;
    Ok(())
}
