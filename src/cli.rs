use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "line-sim")]
#[command(about = "仮想検査ライン・テスト画像生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 設定ファイルのパス
    #[arg(short, long, default_value = "config.json", global = true)]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 設定に従って製品画像を一括生成
    Run,

    /// OK/NG 画像ディレクトリを検査して枚数を表示
    Check,

    /// 設定を表示/初期化
    Config {
        /// 現在の設定を表示
        #[arg(long)]
        show: bool,

        /// デフォルト設定ファイルを作成
        #[arg(long)]
        init: bool,
    },
}
