//! 製品画像の生成ループ
//!
//! 材料番号 × ステーション × 画像番号の三重ループで、OK/NG プールから
//! 抽選した画像を出力ツリーへコピーする。乱数源はテストから差し替え
//! られるようジェネリックに受け取る。

use crate::config::Config;
use crate::error::{LineSimError, Result};
use crate::rates::{classify, Rates, Verdict};
use crate::scanner;
use chrono::Local;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// 製品コードを生成する
///
/// 形式: YYYYMMDD + 材料番号(4桁) + "S" + ステーション番号 + 画像番号
/// 例: "202512290001S11" は 2025-12-29、材料番号0001、ステーション1の1枚目。
/// ステーション番号と画像番号は区切りなしで連結するため、10以上の番号では
/// コードが一意にならない
pub fn product_code(date_str: &str, material_num: u32, station_num: u32, image_num: u32) -> String {
    format!("{date_str}{material_num:04}S{station_num}{image_num}")
}

/// 判定結果に対応するプールを選ぶ。空なら残っている側にフォールバックする
fn select_pool<'a>(
    verdict: Verdict,
    ok_images: &'a [PathBuf],
    ng_images: &'a [PathBuf],
    config: &Config,
) -> Result<(&'a [PathBuf], Verdict)> {
    match verdict {
        Verdict::Ng if !ng_images.is_empty() => Ok((ng_images, Verdict::Ng)),
        _ if !ok_images.is_empty() => Ok((ok_images, Verdict::Ok)),
        _ if !ng_images.is_empty() => Ok((ng_images, Verdict::Ng)),
        _ => Err(LineSimError::NoUsableImages {
            ok: config.ok_images_path.display().to_string(),
            ng: config.ng_images_path.display().to_string(),
        }),
    }
}

/// 本日の日付で一括生成する
pub fn run<R: Rng>(config: &Config, rng: &mut R) -> Result<()> {
    let date_str = Local::now().format("%Y%m%d").to_string();
    run_for_date(config, &date_str, rng)
}

/// 指定日付で一括生成する
pub fn run_for_date<R: Rng>(config: &Config, date_str: &str, rng: &mut R) -> Result<()> {
    let ok_images = scanner::scan_pool(&config.ok_images_path);
    let ng_images = scanner::scan_pool(&config.ng_images_path);

    if ok_images.is_empty() && ng_images.is_empty() {
        return Err(LineSimError::NoUsableImages {
            ok: config.ok_images_path.display().to_string(),
            ng: config.ng_images_path.display().to_string(),
        });
    }

    std::fs::create_dir_all(&config.output_path)?;

    let rates = Rates::normalize(config.ok_rate, config.ng_rate);

    println!("\n製品画像の生成を開始します...");
    println!("日付: {date_str}");
    println!("ステーション数: {}", config.num_stations);
    println!("ステーションあたり画像数: {}", config.images_per_station);
    println!("本日の投入数: {}", config.daily_production);
    println!("OK率: {:.1}%", rates.ok * 100.0);
    println!("NG率: {:.1}%", rates.ng * 100.0);
    println!("投入間隔: {}秒", config.wait_time);
    println!("ステーション処理間隔: {}秒", config.station_interval);

    for material_num in 1..=config.daily_production {
        let product_dir = config.output_path.join(format!("{date_str}{material_num:04}"));
        std::fs::create_dir_all(&product_dir)?;

        println!("\n材料番号 {material_num:04} を生成中...");

        for station_num in 1..=config.num_stations {
            let station_dir = product_dir.join(format!("S{station_num}"));
            std::fs::create_dir_all(&station_dir)?;

            for image_num in 1..=config.images_per_station {
                // 画像ごとに独立して OK/NG を抽選（混在させる）
                let drawn = classify(rng.gen::<f64>(), rates.ng);
                let (pool, verdict) = select_pool(drawn, &ok_images, &ng_images, config)?;

                if let Some(source) = pool.choose(rng) {
                    let target = station_dir.join(format!("{image_num}.png"));
                    std::fs::copy(source, &target)?;

                    let code = product_code(date_str, material_num, station_num, image_num);
                    println!("  {} [{}] -> {}", code, verdict.label(), target.display());
                }
            }

            // 最後のステーションの後は待たない
            if station_num < config.num_stations {
                thread::sleep(Duration::from_secs(config.station_interval));
            }
        }

        // 最後の投入の後は待たない
        if material_num < config.daily_production {
            println!("\n{}秒待機して次の投入を処理します...", config.wait_time);
            thread::sleep(Duration::from_secs(config.wait_time));
        }
    }

    println!("\n✓ 完了！{}個の製品を製造しました", config.daily_production);
    println!("出力ディレクトリ: {}", config.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_code_format() {
        assert_eq!(product_code("20251229", 1, 1, 1), "202512290001S11");
        assert_eq!(product_code("20251229", 42, 3, 2), "202512290042S32");
    }

    #[test]
    fn test_product_code_collision_above_nine() {
        // ステーション1の11枚目とステーション11の1枚目は同じコードになる
        assert_eq!(
            product_code("20251229", 1, 1, 11),
            product_code("20251229", 1, 11, 1)
        );
    }

    #[test]
    fn test_select_pool_prefers_drawn_verdict() {
        let config = Config::default_config();
        let ok = vec![PathBuf::from("ok/1.png")];
        let ng = vec![PathBuf::from("ng/1.png")];

        let (pool, verdict) = select_pool(Verdict::Ng, &ok, &ng, &config).unwrap();
        assert_eq!(verdict, Verdict::Ng);
        assert_eq!(pool, ng.as_slice());

        let (pool, verdict) = select_pool(Verdict::Ok, &ok, &ng, &config).unwrap();
        assert_eq!(verdict, Verdict::Ok);
        assert_eq!(pool, ok.as_slice());
    }

    #[test]
    fn test_select_pool_falls_back_to_other_side() {
        let config = Config::default_config();
        let ok = vec![PathBuf::from("ok/1.png")];
        let ng: Vec<PathBuf> = Vec::new();

        // NG を引いたが NG プールが空 → OK にフォールバック
        let (pool, verdict) = select_pool(Verdict::Ng, &ok, &ng, &config).unwrap();
        assert_eq!(verdict, Verdict::Ok);
        assert_eq!(pool, ok.as_slice());

        // OK を引いたが OK プールが空 → NG にフォールバック
        let ng = vec![PathBuf::from("ng/1.png")];
        let ok: Vec<PathBuf> = Vec::new();
        let (_, verdict) = select_pool(Verdict::Ok, &ok, &ng, &config).unwrap();
        assert_eq!(verdict, Verdict::Ng);
    }

    #[test]
    fn test_select_pool_both_empty_is_error() {
        let config = Config::default_config();
        let empty: Vec<PathBuf> = Vec::new();
        assert!(select_pool(Verdict::Ok, &empty, &empty, &config).is_err());
    }
}
