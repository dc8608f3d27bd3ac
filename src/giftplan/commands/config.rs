use crate::commands::{CmdMessage, CmdResult};
use crate::config::ViewerConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ViewerConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewMode;

    #[test]
    fn set_persists_and_returns_config() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(
            dir.path(),
            ConfigAction::Set("view-mode".into(), "name".into()),
        )
        .unwrap();
        assert_eq!(result.config.unwrap().view_mode, ViewMode::Name);

        let result = run(dir.path(), ConfigAction::ShowKey("view-mode".into())).unwrap();
        assert_eq!(result.messages[0].content, "view-mode = name");
    }

    #[test]
    fn show_all_returns_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), ViewerConfig::default());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::Set("opacity".into(), "0.5".into())).is_err());
    }
}
