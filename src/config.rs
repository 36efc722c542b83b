use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 仮想ラインの設定（config.json）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// ステーション数
    pub num_stations: u32,
    /// ステーションあたりの画像枚数
    pub images_per_station: u32,
    /// OK サンプル画像のディレクトリ
    pub ok_images_path: PathBuf,
    /// NG サンプル画像のディレクトリ
    pub ng_images_path: PathBuf,
    /// 生成先ディレクトリ
    pub output_path: PathBuf,
    /// 本日の投入数（生成する製品数）
    pub daily_production: u32,
    /// OK 率（省略時は NG 率から補完）
    #[serde(default)]
    pub ok_rate: Option<f64>,
    /// NG 率（省略時は OK 率から補完）
    #[serde(default)]
    pub ng_rate: Option<f64>,
    /// 投入間隔（秒）
    #[serde(default = "default_wait_time")]
    pub wait_time: u64,
    /// ステーション処理間隔（秒）
    #[serde(default = "default_station_interval")]
    pub station_interval: u64,
}

fn default_wait_time() -> u64 {
    10
}

fn default_station_interval() -> u64 {
    1
}

impl Config {
    /// 設定ファイルを読み込む。存在しなければデフォルト設定を書き出して返す
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            println!("設定ファイルを読み込み: {}", path.display());
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            println!("設定ファイルが存在しないため、デフォルト設定を作成: {}", path.display());
            let config = Self::default_config();
            config.save(path)?;
            Ok(config)
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_config() -> Self {
        Self {
            num_stations: 3,
            images_per_station: 4,
            ok_images_path: PathBuf::from("ok"),
            ng_images_path: PathBuf::from("ng"),
            output_path: PathBuf::from("lines"),
            daily_production: 3,
            ok_rate: Some(0.5),
            ng_rate: Some(0.5),
            wait_time: 10,
            station_interval: 5,
        }
    }
}
