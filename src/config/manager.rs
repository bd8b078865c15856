//! 設定の読み込みと保持

use std::path::Path;

use super::{
    ConfigError,
    LocaleSettings,
};

/// 設定ファイル名
const CONFIG_FILE_NAME: &str = ".page-i18n.json";

/// 検証済みの設定を保持する
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: LocaleSettings,
}

impl ConfigManager {
    /// デフォルト設定で作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `config_dir` の `.page-i18n.json` を読み込み、検証してから適用する
    ///
    /// `config_dir` が `None`、またはファイルが無い場合はデフォルト設定になる。
    /// 失敗した場合は以前の設定が残る。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, config_dir: Option<&Path>) -> Result<(), ConfigError> {
        let settings = match config_dir {
            Some(dir) => read_settings(dir)?.unwrap_or_default(),
            None => LocaleSettings::default(),
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!("Settings loaded successfully: {:?}", settings);
        self.current_settings = settings;
        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &LocaleSettings {
        &self.current_settings
    }
}

/// 設定ファイルを読み込む（存在しなければ `Ok(None)`）
fn read_settings(config_dir: &Path) -> Result<Option<LocaleSettings>, ConfigError> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);
    let content = std::fs::read_to_string(&config_path)?;
    Ok(Some(serde_json::from_str(&content)?))
}
