use std::fs;
use std::path::PathBuf;

use crate::engine::ai_matcher::HttpCompletionBackend;
use crate::engine::error::AutofillError;
use crate::engine::keyword::match_hint;
use crate::host::memory::InMemoryPage;
use crate::host::protocol::{handle_fill, FillRequest, ProbeResponse};
use crate::page::control::RawControl;
use crate::page::scan::scan_candidates;
use crate::profile::store::ProfileStore;
use crate::registry::model::FieldRegistry;
use crate::report::console::format_fill_report;
use crate::trace::logger::TraceLogger;

/// Resolved AI settings after merging CLI, config file and environment.
pub struct AiSettings {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

fn load_page(path: &str) -> Result<Vec<RawControl>, AutofillError> {
    let content = fs::read_to_string(path).map_err(|e| AutofillError::SnapshotIo {
        path: PathBuf::from(path),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| AutofillError::SnapshotFormat {
        path: PathBuf::from(path),
        source: e,
    })
}

// ============================================================================
// fill subcommand
// ============================================================================

/// Fill a page snapshot from a stored profile. Returns whether the
/// invocation succeeded.
pub fn cmd_fill(
    page_path: &str,
    profile_name: &str,
    use_ai: bool,
    out: Option<&str>,
    verbose: u8,
    profiles_dir: &str,
    trace_path: Option<&str>,
    ai: &AiSettings,
) -> Result<bool, Box<dyn std::error::Error>> {
    let controls = load_page(page_path)?;
    let profile = ProfileStore::new(profiles_dir).load(profile_name)?;

    if verbose > 0 {
        eprintln!(
            "Filling {} ({} controls) from profile '{}'...",
            page_path,
            controls.len(),
            profile_name
        );
    }

    let registry = FieldRegistry::standard();
    let tracer = match trace_path {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let mut page = InMemoryPage::new(controls.clone());
    let request = FillRequest {
        profile,
        use_ai,
        api_key: ai.api_key.clone(),
    };

    let backend;
    let injected = if use_ai {
        backend = HttpCompletionBackend::new(
            ai.endpoint
                .as_deref()
                .unwrap_or(crate::engine::ai_matcher::DEFAULT_AI_ENDPOINT),
            ai.model
                .as_deref()
                .unwrap_or(crate::engine::ai_matcher::DEFAULT_AI_MODEL),
            ai.api_key.as_deref(),
        );
        Some(&backend as &dyn crate::engine::ai_matcher::CompletionBackend)
    } else {
        None
    };

    let response = handle_fill(&registry, &request, &controls, &mut page, injected, &tracer);

    if !response.success {
        eprintln!(
            "Autofill failed: {}",
            response.error.as_deref().unwrap_or("unknown error")
        );
        return Ok(false);
    }

    if let Some(report) = &response.diagnostics {
        print!("{}", format_fill_report(report, verbose > 0));
    }

    if let Some(out_path) = out {
        let doc = serde_json::to_string_pretty(page.controls())?;
        fs::write(out_path, doc)?;
        if verbose > 0 {
            eprintln!("Filled snapshot written to {}", out_path);
        }
    }

    Ok(true)
}

// ============================================================================
// inspect subcommand
// ============================================================================

/// Dry run: list the candidates a fill pass would consider, with their
/// hints and keyword resolutions. Mutates nothing.
pub fn cmd_inspect(page_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let controls = load_page(page_path)?;
    let registry = FieldRegistry::standard();
    let candidates = scan_candidates(&controls);

    println!("{} fillable candidates:", candidates.len());
    for candidate in &candidates {
        let resolution = match match_hint(&registry, &candidate.hint) {
            Some(spec) => spec.key.clone(),
            None => "-".to_string(),
        };
        println!(
            "  [{}] {:8} {} \u{2192} {}",
            candidate.index,
            candidate.kind.as_str(),
            candidate.name.as_deref().unwrap_or("(unnamed)"),
            resolution
        );
        if !candidate.hint.is_empty() {
            println!("        hint: {}", candidate.hint);
        }
    }

    Ok(())
}

// ============================================================================
// probe subcommand
// ============================================================================

/// Answer the presence probe the orchestration layer uses to decide whether
/// the engine needs (re-)injection.
pub fn cmd_probe() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(&ProbeResponse::alive())?);
    Ok(())
}

// ============================================================================
// profile subcommands
// ============================================================================

pub fn cmd_profile_list(profiles_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let names = ProfileStore::new(profiles_dir).list();
    if names.is_empty() {
        println!("No stored profiles in {}", profiles_dir);
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}

pub fn cmd_profile_show(
    profiles_dir: &str,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let profile = ProfileStore::new(profiles_dir).load(name)?;
    println!("{}", profile.to_json());
    Ok(())
}

pub fn cmd_profile_import(
    profiles_dir: &str,
    name: &str,
    file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = fs::read_to_string(file)?;
    let profile = ProfileStore::new(profiles_dir).import(name, &doc)?;
    println!(
        "Imported profile '{}' ({} populated fields)",
        name,
        profile.populated().count()
    );
    Ok(())
}

pub fn cmd_profile_export(
    profiles_dir: &str,
    name: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = ProfileStore::new(profiles_dir).export(name)?;
    match output {
        Some(path) => {
            fs::write(path, &doc)?;
            println!("Profile '{}' exported to {}", name, path);
        }
        None => println!("{}", doc),
    }
    Ok(())
}
