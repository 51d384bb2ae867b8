//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "culturemate";
const PROJECT_FILES: [&str; 2] = ["culturemate.toml", ".culturemate.toml"];
const ENV_PREFIX: &str = "CULTUREMATE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CULTUREMATE_*` environment variables (`__` separates sections,
    ///    e.g. `CULTUREMATE_BACKEND__BASE_URL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./culturemate.toml` or `./.culturemate.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/culturemate/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Self::files(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        );
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Defaults overlaid with whichever of the given files exist, later
    /// files taking precedence.
    fn files(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                debug!("Loading config from {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        // A missing explicit file is an error, not a silent fallback.
        if let Some(path) = explicit {
            debug!("Loading explicit config from {}", path.display());
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/culturemate/config.toml` if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:^5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./culturemate.toml or ./.culturemate.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileOutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("culturemate"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let file = toml_file(
            r#"
[backend]
base_url = "http://backend:8080"

[output]
format = "json"
"#,
        );

        let config: FileConfig = ConfigLoader::files(None, None, Some(file.path()))
            .extract()
            .unwrap();
        assert_eq!(config.backend.base_url, "http://backend:8080");
        assert_eq!(config.backend.chat_timeout_secs, 30);
        assert_eq!(config.output.format, FileOutputFormat::Json);
    }

    #[test]
    fn test_later_files_take_precedence() {
        let global = toml_file(
            r#"
[backend]
base_url = "http://global:8000"
chat_timeout_secs = 90
"#,
        );
        let project = toml_file(
            r#"
[backend]
base_url = "http://project:8000"
"#,
        );

        let config: FileConfig =
            ConfigLoader::files(Some(global.path()), Some(project.path()), None)
                .extract()
                .unwrap();
        assert_eq!(config.backend.base_url, "http://project:8000");
        assert_eq!(config.backend.chat_timeout_secs, 90);
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let missing = Path::new("/nonexistent/culturemate/config.toml");
        let config: FileConfig = ConfigLoader::files(Some(missing), Some(missing), None)
            .extract()
            .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = Path::new("/nonexistent/culturemate.toml");
        let result: Result<FileConfig, _> =
            ConfigLoader::files(None, None, Some(missing)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let file = toml_file(
            r#"
[backend]
chat_timeout_secs = "soon"
"#,
        );
        let result: Result<FileConfig, _> =
            ConfigLoader::files(None, None, Some(file.path())).extract();
        assert!(result.is_err());
    }
}
