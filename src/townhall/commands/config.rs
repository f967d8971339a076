use crate::commands::{CmdMessage, CmdResult, TownhallPaths};
use crate::config::TownhallConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &TownhallPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data;
    match action {
        ConfigAction::ShowAll => {
            let config = TownhallConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = TownhallConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = TownhallConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> TownhallPaths {
        TownhallPaths {
            data: temp.path().to_path_buf(),
        }
    }

    #[test]
    fn show_all_defaults() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths(&temp), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(TownhallConfig::default()));
    }

    #[test]
    fn set_persists() {
        let temp = TempDir::new().unwrap();
        let result = run(
            &paths(&temp),
            ConfigAction::Set("page-size".into(), "4".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "page-size set to 4");

        let shown = run(&paths(&temp), ConfigAction::ShowKey("page-size".into())).unwrap();
        assert_eq!(shown.messages[0].content, "4");
    }

    #[test]
    fn set_invalid_reports_error_and_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let result = run(
            &paths(&temp),
            ConfigAction::Set("page-size".into(), "0".into()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths(&temp), ConfigAction::ShowKey("theme".into())).unwrap();
        assert!(result.has_errors());
    }
}
