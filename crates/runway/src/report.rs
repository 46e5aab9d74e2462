use std::cmp::Ordering;
use std::fmt::Write as _;
use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;

use runway_provider::{DetectedVersion, Provider};

/// Outcome of running one provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderReport {
    pub name: &'static str,
    pub display_name: &'static str,
    pub runtime: &'static str,
    pub present: bool,
    pub versions: Vec<DetectedVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn semver_key(version: &str) -> Option<semver::Version> {
    semver::Version::parse(version)
        .ok()
        .or_else(|| semver::Version::parse(&format!("{version}.0")).ok())
}

/// Newest first. Versions semver cannot read sort after the rest.
fn compare_newest_first(a: &DetectedVersion, b: &DetectedVersion) -> Ordering {
    match (semver_key(&a.version), semver_key(&b.version)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.version.cmp(&a.version),
    }
}

/// Run one provider synchronously. Skips the scan when the version manager
/// is not present.
pub fn detect_one(provider: &dyn Provider) -> ProviderReport {
    let mut report = ProviderReport {
        name: provider.name(),
        display_name: provider.display_name(),
        runtime: provider.runtime(),
        present: provider.is_present(),
        versions: Vec::new(),
        error: None,
    };

    if !report.present {
        return report;
    }

    match provider.detect_versions() {
        Ok(mut versions) => {
            versions.sort_by(compare_newest_first);
            report.versions = versions;
        }
        Err(error) => {
            log::warn!("{} detection failed: {error}", provider.name());
            report.error = Some(error.to_string());
        }
    }

    report
}

/// Run every provider on the blocking pool and collect the reports, ordered
/// by runtime and then provider name.
pub async fn detect_all(providers: Vec<Arc<dyn Provider>>) -> Vec<ProviderReport> {
    let mut tasks = JoinSet::new();
    for provider in providers {
        tasks.spawn_blocking(move || detect_one(provider.as_ref()));
    }

    let mut reports = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(report) => reports.push(report),
            Err(error) => log::error!("Provider detection task failed: {error}"),
        }
    }

    reports.sort_by(|a, b| a.runtime.cmp(b.runtime).then(a.name.cmp(b.name)));
    reports
}

#[must_use]
pub fn render_text(reports: &[ProviderReport]) -> String {
    let mut out = String::new();
    let mut current_runtime = None;

    for report in reports {
        if current_runtime != Some(report.runtime) {
            if current_runtime.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", report.runtime);
            current_runtime = Some(report.runtime);
        }

        if !report.present {
            let _ = writeln!(out, "  {}: not found", report.display_name);
            continue;
        }
        if let Some(error) = &report.error {
            let _ = writeln!(out, "  {}: {error}", report.display_name);
            continue;
        }
        if report.versions.is_empty() {
            let _ = writeln!(out, "  {}: no versions installed", report.display_name);
            continue;
        }

        let _ = writeln!(out, "  {}", report.display_name);
        for version in &report.versions {
            let _ = writeln!(out, "    {version}");
        }
    }

    out
}
