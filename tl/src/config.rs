//! Configuration for the tl binary

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Task, TaskList};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Title of the list
    #[serde(default = "default_title")]
    pub title: String,

    /// Tasks loaded into the list at startup
    #[serde(default)]
    pub tasks: Vec<SeedTask>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default)]
    pub log_level: Option<String>,

    /// Directory the log file is written to
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

/// A task listed in the config file.
///
/// Either a bare title (`- Buy milk`) or a map (`- { title: Buy milk, done: true }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedTask {
    Title(String),
    Detailed {
        title: String,
        #[serde(default)]
        done: bool,
    },
}

impl SeedTask {
    pub fn title(&self) -> &str {
        match self {
            Self::Title(title) | Self::Detailed { title, .. } => title,
        }
    }

    pub fn done(&self) -> bool {
        matches!(self, Self::Detailed { done: true, .. })
    }
}

fn default_title() -> String {
    crate::DEFAULT_TITLE.to_string()
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tasklist")
        .join("logs")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            tasks: Vec::new(),
            log_level: None,
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path)
                .context(format!("Failed to load config from {}", config_path.display()));
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("tasklist").join("config.yml")),
            Some(PathBuf::from("tasklist.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
            }
        }

        debug!("Config::load: no config file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        debug!(path = %path.display(), tasks = config.tasks.len(), "Config::load_from_file: loaded");
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).context(format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Build a list titled and seeded from this config
    pub fn build_list(&self) -> TaskList {
        let mut list = TaskList::new(self.title.clone());
        for seed in &self.tasks {
            let task = Task::new(seed.title());
            if seed.done() {
                task.mark_done();
            }
            list.add(task);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.title, "Today's Todos");
        assert!(config.tasks.is_empty());
        assert!(config.log_level.is_none());
        assert!(config.build_list().is_empty());
    }

    #[test]
    fn test_load_seed_forms() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasklist.yml");
        std::fs::write(
            &path,
            "title: Chores\ntasks:\n  - Buy milk\n  - { title: Clean room, done: true }\n  - title: Go to the gym\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.title, "Chores");
        assert_eq!(config.tasks[0], SeedTask::Title("Buy milk".to_string()));
        assert!(config.tasks[1].done());
        assert!(!config.tasks[2].done());

        let list = config.build_list();
        assert_eq!(list.title(), "Chores");
        assert_eq!(
            list.render(),
            "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to the gym"
        );
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.yml"));
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.yml");

        let config = Config {
            title: "Weekend".to_string(),
            tasks: vec![SeedTask::Detailed {
                title: "Wash car".to_string(),
                done: true,
            }],
            log_level: Some("debug".to_string()),
            log_dir: temp.path().to_path_buf(),
        };
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.title, "Weekend");
        assert_eq!(loaded.tasks, config.tasks);
        assert_eq!(loaded.log_level.as_deref(), Some("debug"));
    }
}
