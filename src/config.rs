use crate::error::{Result, TlbReportError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

const DEFAULT_RESULTS_DIR: &str = "../ref/results";
const DEFAULT_OUTPUT_FILE: &str = "parsed_results.csv";

/// 実行時設定（起動時に一度だけ構築し、以後は参照のみ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// シミュレーター結果ファイルのフォルダ
    pub results_dir: PathBuf,
    /// 出力CSVファイル
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let results_dir = PathBuf::from(DEFAULT_RESULTS_DIR);
        let output = results_dir.join(DEFAULT_OUTPUT_FILE);
        Self { results_dir, output }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 設定の読み込みに失敗した場合は警告してデフォルト設定を使う
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                warn!("{}、デフォルト設定を使用します", e);
                Self::default()
            }
        }
    }

    pub fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            warn!(
                "設定ファイルを読み込めません ({}): {}、デフォルト設定を使用します",
                config_path.display(),
                e
            );
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TlbReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("tlb-report").join("config.json"))
    }

    /// CLI引数で上書き
    pub fn with_overrides(mut self, results_dir: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(dir) = results_dir {
            self.results_dir = dir;
        }
        if let Some(path) = output {
            self.output = path;
        }
        self
    }
}
