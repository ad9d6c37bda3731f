use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub menu_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_file: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Read `.env` and the environment, then apply a command-line menu file.
    pub fn from_env(menu_override: Option<PathBuf>) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let defaults = Config::default();
        let config = Config {
            menu_file: env::var("MENU_FILE")
                .ok()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
        .with_menu_file(menu_override);

        config.validate()?;
        Ok(config)
    }

    /// Command-line values win over the environment.
    pub fn with_menu_file(mut self, menu_file: Option<PathBuf>) -> Self {
        if menu_file.is_some() {
            self.menu_file = menu_file;
        }
        self
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow::anyhow!("LOG_LEVEL must not be empty"));
        }

        if let Some(path) = &self.menu_file {
            if !path.is_file() {
                return Err(anyhow::anyhow!(
                    "Menu file {} does not exist",
                    path.display()
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_menu_file_is_rejected() {
        let config = Config::default().with_menu_file(Some(PathBuf::from("/no/such/menu.json")));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_existing_menu_file_is_accepted() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::default().with_menu_file(Some(file.path().to_path_buf()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_menu_file_overrides_only_when_given() {
        let config = Config {
            menu_file: Some(PathBuf::from("env.json")),
            ..Config::default()
        };

        assert_eq!(
            config.clone().with_menu_file(None).menu_file,
            Some(PathBuf::from("env.json"))
        );
        assert_eq!(
            config.with_menu_file(Some(PathBuf::from("cli.json"))).menu_file,
            Some(PathBuf::from("cli.json"))
        );
    }

    #[test]
    fn test_from_env_applies_menu_override() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::from_env(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.menu_file, Some(file.path().to_path_buf()));
    }

    #[test]
    fn test_blank_log_level_is_rejected() {
        let config = Config {
            log_level: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
