//! 설정 파일 (TOML)
//!
//! 기본 위치: `<config_dir>/image-comparer/config.toml`.
//! 파일이 없으면 모든 값이 기본값이며, 명령행 옵션이 파일 값을 덮어씁니다.

use crate::cli::Args;
use crate::system::hasher::DEFAULT_HASH_SIZE;
use crate::utils::error::{ComparerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 앱 디렉토리 이름
pub const APP_DIR_NAME: &str = "image-comparer";
/// 기본 유사도 임계값
pub const DEFAULT_THRESHOLD: u32 = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub hash_size: u32,
    pub threshold: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            hash_size: DEFAULT_HASH_SIZE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// dark | light | high_contrast | 사용자 테마 파일 이름
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 리포트/스크립트 출력 디렉토리
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// off | error | warn | info | debug | trace
    pub level: String,
    /// 로그 파일 경로 (미지정 시 데이터 디렉토리)
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// 전체 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub ui: UiConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

impl Config {
    /// 기본 설정 파일 경로
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
    }

    /// 사용자 테마 디렉토리
    pub fn themes_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("themes"))
    }

    /// 기본 로그 파일 경로
    pub fn default_log_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join("image-comparer.log"))
    }

    /// TOML 문자열 파싱 + 검증
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 파일에서 로드. 파일이 없으면 기본값
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 명시적 경로 또는 기본 경로에서 로드
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ComparerError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// 명령행 옵션 적용
    pub fn apply_args(&mut self, args: &Args) -> Result<()> {
        if let Some(threshold) = args.threshold {
            self.scan.threshold = threshold;
        }
        if let Some(hash_size) = args.hash_size {
            self.scan.hash_size = hash_size;
        }
        if let Some(ref dir) = args.output_dir {
            self.output.dir = dir.clone();
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.scan.hash_size == 0 {
            return Err(ComparerError::Config(
                "scan.hash_size must be greater than 0".to_string(),
            ));
        }
        if self.log_level().is_none() {
            return Err(ComparerError::Config(format!(
                "unknown log level: {}",
                self.log.level
            )));
        }
        Ok(())
    }

    /// 로그 레벨 파싱
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        self.log.level.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.hash_size, 48);
        assert_eq!(config.scan.threshold, 25);
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert_eq!(config.log_level(), Some(log::LevelFilter::Info));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str("[scan]\nthreshold = 5\n").unwrap();
        assert_eq!(config.scan.threshold, 5);
        assert_eq!(config.scan.hash_size, 48);
        assert_eq!(config.ui.theme, "dark");
    }

    #[test]
    fn test_zero_hash_size_rejected() {
        let result = Config::from_toml_str("[scan]\nhash_size = 0\n");
        assert!(matches!(result, Err(ComparerError::Config(_))));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let result = Config::from_toml_str("[log]\nlevel = \"loud\"\n");
        assert!(matches!(result, Err(ComparerError::Config(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("custom.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[ui]\ntheme = \"light\"\n[output]\ndir = \"/tmp/out\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.output.dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_args_override_file() {
        let mut config = Config::from_toml_str("[scan]\nthreshold = 5\n").unwrap();
        let args = Args::parse_from(["image-comparer", "-t", "12", "-o", "/reports", "/photos"]);

        config.apply_args(&args).unwrap();
        assert_eq!(config.scan.threshold, 12);
        assert_eq!(config.scan.hash_size, 48);
        assert_eq!(config.output.dir, PathBuf::from("/reports"));
    }
}
