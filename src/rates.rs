//! OK/NG 比率の補完・正規化と判定

/// どちらの比率も指定されなかった場合のデフォルト
pub const DEFAULT_OK_RATE: f64 = 0.9;
pub const DEFAULT_NG_RATE: f64 = 0.1;

/// 正規化済みの OK/NG 比率（常に ok + ng == 1.0）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub ok: f64,
    pub ng: f64,
}

impl Rates {
    /// 省略された側を補完し、合計が 1 になるよう正規化する
    ///
    /// - 片方のみ指定 → もう片方は 1 との差
    /// - 両方未指定 → 0.9 / 0.1
    /// - 合計が 0 以下 → 0.9 / 0.1 にリセット
    pub fn normalize(ok_rate: Option<f64>, ng_rate: Option<f64>) -> Self {
        let (ok, ng) = match (ok_rate, ng_rate) {
            (None, Some(ng)) => (1.0 - ng, ng),
            (Some(ok), None) => (ok, 1.0 - ok),
            (None, None) => (DEFAULT_OK_RATE, DEFAULT_NG_RATE),
            (Some(ok), Some(ng)) => (ok, ng),
        };

        let total = ok + ng;
        if total > 0.0 {
            Rates {
                ok: ok / total,
                ng: ng / total,
            }
        } else {
            Rates {
                ok: DEFAULT_OK_RATE,
                ng: DEFAULT_NG_RATE,
            }
        }
    }
}

/// 判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Ng,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Ok => "OK",
            Verdict::Ng => "NG",
        }
    }
}

/// 一様乱数値から OK/NG を判定する
pub fn classify(rand_value: f64, ng_rate: f64) -> Verdict {
    if rand_value < ng_rate {
        Verdict::Ng
    } else {
        Verdict::Ok
    }
}
