use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use crate::themes::CLASSIC_THEME_ID;

use super::GameConfig;

pub const MIN_FPS: u32 = 30;
pub const MAX_FPS: u32 = 240;
pub const FPS_STEP: u32 = 10;
pub const DEFAULT_FPS: u32 = 60;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

pub fn config_manager_at(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub fps: u32,
    pub theme_id: String,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.fps < MIN_FPS || self.fps > MAX_FPS {
            return Err(format!("FPS must be between {} and {}", MIN_FPS, MAX_FPS));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            fps: DEFAULT_FPS,
            theme_id: CLASSIC_THEME_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_serializer() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_round_trips_through_file_provider() {
        let config = Config {
            game: GameConfig {
                board_size: 7,
                win_length: 5,
            },
            fps: 120,
            theme_id: "fruit".to_string(),
        };
        let serializer = YamlConfigSerializer::new();
        let provider = FileContentConfigProvider::new(get_temp_file_path());

        let serialized = serializer.serialize(&config).unwrap();
        provider.write(&serialized).unwrap();

        let read_back = provider.read().unwrap().unwrap();
        let deserialized: Config = serializer.deserialize(&read_back).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_manager_stores_and_reloads_config() {
        let config = Config {
            fps: 90,
            ..Config::default()
        };
        let manager = ConfigManager::from_yaml_file(&get_temp_file_path());

        manager.store(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        // Cached read returns the same value.
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_content_is_rejected() {
        let invalid_config_content = r#"
            game:
              board_size: 50
              win_length: 3
            fps: 60
            theme_id: classic
        "#;

        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.write(invalid_config_content).unwrap();

        let manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(&path);
        assert!(manager.load().is_err());
    }

    #[test]
    fn test_out_of_range_fps_is_rejected() {
        let config = Config {
            fps: 10,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        let manager = ConfigManager::from_yaml_file(&get_temp_file_path());
        assert!(manager.store(&config).is_err());
    }
}
