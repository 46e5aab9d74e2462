use std::fmt::Write as _;
use std::sync::Arc;

use runway_platform::looks_like_version;
use runway_provider::{Provider, Registry};

use crate::error::AppError;
use crate::report::{detect_all, render_text};

fn select(registry: &Registry, runtime: Option<&str>) -> Vec<Arc<dyn Provider>> {
    let mut providers = match runtime {
        Some(runtime) => registry.get_by_runtime(runtime),
        None => registry.get_all(),
    };
    providers.sort_by(|a, b| a.runtime().cmp(b.runtime()).then(a.name().cmp(b.name())));
    providers
}

#[must_use]
pub fn providers_table(registry: &Registry, runtime: Option<&str>) -> String {
    let providers = select(registry, runtime);
    if providers.is_empty() {
        return "No providers registered\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:<8} {:<6} DESCRIPTION", "NAME", "RUNTIME", "AUTO");
    for provider in providers {
        let auto = if provider.can_auto_uninstall() { "yes" } else { "no" };
        let _ = writeln!(
            out,
            "{:<14} {:<8} {:<6} {}",
            provider.name(),
            provider.runtime(),
            auto,
            provider.display_name()
        );
    }
    out
}

/// # Errors
/// Fails only when the JSON report cannot be encoded.
pub async fn detect(
    registry: &Registry,
    runtime: Option<&str>,
    json: bool,
) -> Result<String, AppError> {
    let reports = detect_all(select(registry, runtime)).await;

    if json {
        let mut out = serde_json::to_string_pretty(&reports)?;
        out.push('\n');
        Ok(out)
    } else if reports.is_empty() {
        Ok("No providers registered\n".to_string())
    } else {
        Ok(render_text(&reports))
    }
}

/// The uninstall command when the provider supports one, otherwise its
/// manual instructions. Nothing is executed.
///
/// # Errors
/// Returns [`AppError::Registry`] for an unknown provider and
/// [`AppError::InvalidVersion`] when `version` is not version-like.
pub fn uninstall_hint(
    registry: &Registry,
    provider: &str,
    version: &str,
) -> Result<String, AppError> {
    let provider = registry.get(provider)?;
    let plain = version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+' | '_'));
    if !plain || !looks_like_version(version) {
        return Err(AppError::InvalidVersion {
            version: version.to_string(),
        });
    }

    if provider.can_auto_uninstall()
        && let Some(command) = provider.uninstall_command(version)
    {
        return Ok(format!("{command}\n"));
    }

    Ok(format!("{}\n", provider.manual_instructions()))
}

#[cfg(test)]
mod tests {
    use runway_provider::{Registry, RegistryError};

    use super::{detect, providers_table, uninstall_hint};
    use crate::assembly::register_builtin;
    use crate::error::AppError;
    use crate::settings::Settings;

    fn builtin_registry() -> Registry {
        let registry = Registry::new();
        register_builtin(&registry, &Settings::default(), None).expect("register built-ins");
        registry
    }

    #[test]
    fn providers_table_lists_sorted_rows() {
        let registry = builtin_registry();

        let table = providers_table(&registry, Some("node"));

        let names: Vec<_> = table
            .lines()
            .skip(1)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(names, vec!["fnm", "nvm", "system-node"]);
        assert!(table.starts_with("NAME"));
    }

    #[test]
    fn providers_table_handles_unknown_runtime() {
        let registry = builtin_registry();

        assert_eq!(
            providers_table(&registry, Some("elixir")),
            "No providers registered\n"
        );
    }

    #[test]
    fn uninstall_hint_prefers_command() {
        let registry = builtin_registry();

        let hint = uninstall_hint(&registry, "pyenv", "3.12.1").expect("pyenv is registered");

        assert_eq!(hint, "pyenv uninstall -f 3.12.1\n");
    }

    #[test]
    fn uninstall_hint_falls_back_to_manual_instructions() {
        let registry = builtin_registry();

        let hint = uninstall_hint(&registry, "uru", "3.2.2").expect("uru is registered");

        assert!(hint.contains("uru admin rm"));
    }

    #[test]
    fn uninstall_hint_rejects_unknown_provider_and_bad_version() {
        let registry = builtin_registry();

        assert!(matches!(
            uninstall_hint(&registry, "volta", "20.0.0"),
            Err(AppError::Registry(RegistryError::NotFound { ref name })) if name == "volta"
        ));
        assert!(matches!(
            uninstall_hint(&registry, "nvm", "latest"),
            Err(AppError::InvalidVersion { .. })
        ));
        assert!(matches!(
            uninstall_hint(&registry, "nvm", "20.0.0; rm -rf ~"),
            Err(AppError::InvalidVersion { .. })
        ));
    }

    #[tokio::test]
    async fn detect_on_empty_registry_reports_nothing() {
        let registry = Registry::new();

        let text = detect(&registry, None, false).await.expect("detect succeeds");
        let json = detect(&registry, None, true).await.expect("detect succeeds");

        assert_eq!(text, "No providers registered\n");
        assert_eq!(json, "[]\n");
    }
}
