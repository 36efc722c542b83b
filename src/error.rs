use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineSimError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("OK・NG どちらのディレクトリにも使用できる画像がありません (OK: {ok}, NG: {ng})")]
    NoUsableImages { ok: String, ng: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LineSimError>;
