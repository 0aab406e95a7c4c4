use std::collections::HashSet;

use crate::engine::ai_matcher::{build_descriptors, match_fields, CompletionBackend};
use crate::engine::apply::{apply_checkbox, apply_radio_group, apply_select, apply_text};
use crate::engine::error::AutofillError;
use crate::engine::keyword::match_hint;
use crate::page::control::{Candidate, ControlKind, RawControl};
use crate::page::hint::hint_fingerprint;
use crate::page::host::PageHost;
use crate::page::scan::scan_candidates;
use crate::profile::model::Profile;
use crate::registry::model::FieldRegistry;
use crate::report::fill_report::{FillEntry, FillReport};
use crate::trace::{logger::TraceLogger, trace::FillTraceEvent};

// ============================================================================
// Autofill orchestrator — one pass over the page's fillable candidates
// ============================================================================
// Per-control failures never abort the pass; they become report entries and
// the pass continues. Only whole-invocation failures (service, parse) are
// surfaced as errors, and those happen before any control is mutated.

/// Keyword-mode pass: text inputs and textareas, then selects, then radio
/// groups, then checkboxes, each candidate resolved through the registry
/// rules against its hint.
pub fn run_keyword(
    registry: &FieldRegistry,
    profile: &Profile,
    controls: &[RawControl],
    host: &mut dyn PageHost,
    tracer: &TraceLogger,
) -> FillReport {
    let candidates = scan_candidates(controls);
    let mut resolved: HashSet<usize> = HashSet::new();
    let mut report = FillReport::default();

    let sweeps: [&[ControlKind]; 4] = [
        &[ControlKind::Text, ControlKind::Textarea],
        &[ControlKind::Select],
        &[ControlKind::RadioGroup],
        &[ControlKind::Checkbox],
    ];

    for kinds in sweeps {
        for candidate in candidates.iter().filter(|c| kinds.contains(&c.kind)) {
            if resolved.contains(&candidate.raw_index) {
                continue;
            }

            let entry = match match_hint(registry, &candidate.hint) {
                None => FillEntry::skip(candidate.index, &candidate.hint, "no matching rule"),
                Some(spec) => match profile.populated_value(&spec.key) {
                    None => FillEntry::miss(
                        candidate.index,
                        &candidate.hint,
                        Some(&spec.key),
                        &format!("no profile value for {}", spec.key),
                    ),
                    Some(value) => {
                        let entry = fill_candidate(host, candidate, &spec.key, value, &mut report);
                        if entry.is_hit() {
                            mark_resolved(&mut resolved, candidate);
                        }
                        entry
                    }
                },
            };

            trace_entry(tracer, "keyword", controls, candidate, &entry);
            report.entries.push(entry);
        }
    }

    report.entries.sort_by_key(|e| e.index);
    report
}

/// AI-mode pass: snapshot the candidates into descriptors, make one
/// completion call, then apply the returned index→key mapping through the
/// same fill primitives. Nothing is mutated if the call or parse fails.
pub fn run_ai(
    registry: &FieldRegistry,
    profile: &Profile,
    controls: &[RawControl],
    host: &mut dyn PageHost,
    backend: &dyn CompletionBackend,
    tracer: &TraceLogger,
) -> Result<FillReport, AutofillError> {
    let candidates = scan_candidates(controls);
    let descriptors = build_descriptors(&candidates);
    let mut report = FillReport::default();

    // Nothing to offer the model: skip the round trip entirely.
    if profile.is_empty() || descriptors.is_empty() {
        for candidate in &candidates {
            let reason = if candidate.hint.is_empty() {
                "no labelling cues"
            } else {
                "no populated profile values"
            };
            let entry = FillEntry::skip(candidate.index, &candidate.hint, reason);
            trace_entry(tracer, "ai", controls, candidate, &entry);
            report.entries.push(entry);
        }
        return Ok(report);
    }

    let matches = match_fields(backend, registry, profile, &descriptors)?;

    let known: HashSet<usize> = candidates.iter().map(|c| c.index).collect();

    for candidate in &candidates {
        let entry = match matches.matches.get(&candidate.index.to_string()) {
            None => {
                let reason = if candidate.hint.is_empty() {
                    "no labelling cues"
                } else {
                    "not matched by AI"
                };
                FillEntry::skip(candidate.index, &candidate.hint, reason)
            }
            Some(matched) => {
                let key = matched.key();
                // Explicit option text wins for choice controls; everything
                // else fills from the profile value.
                let target = if candidate.kind.is_choice() {
                    matched.option().or_else(|| profile.populated_value(key))
                } else {
                    profile.populated_value(key)
                };

                match target {
                    None => FillEntry::miss(
                        candidate.index,
                        &candidate.hint,
                        Some(key),
                        &format!("no profile value for {}", key),
                    ),
                    Some(value) => fill_candidate(host, candidate, key, value, &mut report),
                }
            }
        };

        trace_entry(tracer, "ai", controls, candidate, &entry);
        report.entries.push(entry);
    }

    // Indices in the reply that reference no scanned control: the page may
    // have mutated between snapshot and response.
    for index_key in matches.matches.keys() {
        if let Ok(index) = index_key.parse::<usize>() {
            if !known.contains(&index) {
                report
                    .entries
                    .push(FillEntry::miss(index, "", None, "element not found"));
            }
        }
    }

    report.entries.sort_by_key(|e| e.index);
    Ok(report)
}

/// Apply one resolved key/value to a candidate, updating the filled count.
fn fill_candidate(
    host: &mut dyn PageHost,
    candidate: &Candidate,
    key: &str,
    value: &str,
    report: &mut FillReport,
) -> FillEntry {
    let outcome = match candidate.kind {
        ControlKind::Text | ControlKind::Textarea => {
            apply_text(host, candidate.raw_index, value).map(|_| 1)
        }
        ControlKind::Select => apply_select(host, candidate, value)
            .map(|applied| if applied { 1 } else { 0 }),
        ControlKind::RadioGroup => apply_radio_group(host, candidate, value),
        ControlKind::Checkbox => apply_checkbox(host, candidate.raw_index, value).map(|_| 1),
    };

    match outcome {
        Ok(0) => FillEntry::miss(
            candidate.index,
            &candidate.hint,
            Some(key),
            "no option matched",
        ),
        Ok(n) => {
            report.filled_count += n;
            FillEntry::hit(candidate.index, &candidate.hint, key, value)
        }
        Err(e) => FillEntry::miss(
            candidate.index,
            &candidate.hint,
            Some(key),
            &format!("host error: {}", e),
        ),
    }
}

fn mark_resolved(resolved: &mut HashSet<usize>, candidate: &Candidate) {
    resolved.insert(candidate.raw_index);
    for member in &candidate.members {
        resolved.insert(member.raw_index);
    }
}

fn trace_entry(
    tracer: &TraceLogger,
    mode: &str,
    controls: &[RawControl],
    candidate: &Candidate,
    entry: &FillEntry,
) {
    let fp = hint_fingerprint(&controls[candidate.raw_index], &candidate.hint);
    tracer.log(&FillTraceEvent::for_entry(mode, &fp, entry));
}
