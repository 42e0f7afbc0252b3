//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "ogiri-dice";
const PROJECT_FILES: [&str; 2] = ["ogiri.toml", ".ogiri.toml"];
const ENV_PREFIX: &str = "OGIRI_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `OGIRI_` environment variables, `__` separating sections
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./ogiri.toml` or `./.ogiri.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/ogiri-dice/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Self::base();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load defaults overlaid with a single file and nothing else
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        Self::base()
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/ogiri-dice/config.toml if set,
    /// otherwise falls back to the platform config directory
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

    /// Describe the config file locations being used (for `--show-config`)
    pub fn describe_sources(explicit: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {}* variables", ENV_PREFIX));

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./ogiri.toml or ./.ogiri.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.game.countdown_seconds, 15);
        assert!(config.assets.topics.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("ogiri-dice"));
    }

    #[test]
    fn test_load_file_overlays_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[game]\ncountdown_seconds = 42\n\n[judge]\nfallback_model = \"gemini-lite\""
        )
        .unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.game.countdown_seconds, 42);
        assert_eq!(config.game.move_interval_ms, 100);
        assert_eq!(config.judge.primary_model, "gemini-1.5-pro");
        assert_eq!(config.judge.fallback_model, "gemini-lite");
    }

    #[test]
    fn test_load_file_rejects_wrong_types() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[game]\ncountdown_seconds = \"soon\"").unwrap();

        assert!(ConfigLoader::load_file(file.path()).is_err());
    }

    #[test]
    fn test_describe_sources_mentions_explicit_path() {
        let path = PathBuf::from("/nonexistent/ogiri.toml");
        let lines = ConfigLoader::describe_sources(Some(&path));
        assert!(lines.iter().any(|l| l.contains("/nonexistent/ogiri.toml")));
    }
}
