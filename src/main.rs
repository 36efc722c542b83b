use clap::Parser;
use line_sim_rust::{cli, config, error, generator, rates, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            println!("{}", "=".repeat(50));
            println!("仮想検査ラインシミュレータ");
            println!("{}", "=".repeat(50));

            let config = Config::load_or_create(&cli.config)?;
            scanner::validate_pools(&config);

            let mut rng = rand::thread_rng();
            generator::run(&config, &mut rng)?;

            println!("\n{}", "=".repeat(50));
        }

        Commands::Check => {
            println!("🔍 line-sim - 画像プール検査\n");

            let config = Config::load_or_create(&cli.config)?;
            let ok_count = scanner::validate_pool("OK", &config.ok_images_path);
            let ng_count = scanner::validate_pool("NG", &config.ng_images_path);

            if ok_count == 0 && ng_count == 0 {
                println!("\n❌ 使用できる画像がありません。生成は実行できません");
            } else {
                println!("\n✅ 検査完了（OK: {}枚 / NG: {}枚）", ok_count, ng_count);
            }
        }

        Commands::Config { show, init } => {
            if init {
                let config = Config::default_config();
                config.save(&cli.config)?;
                println!("✔ デフォルト設定を作成しました: {}", cli.config.display());
            }

            if show || !init {
                let config = Config::load_or_create(&cli.config)?;
                let rates = rates::Rates::normalize(config.ok_rate, config.ng_rate);

                println!("設定:");
                println!("  ステーション数: {}", config.num_stations);
                println!("  ステーションあたり画像数: {}", config.images_per_station);
                println!("  OK画像: {}", config.ok_images_path.display());
                println!("  NG画像: {}", config.ng_images_path.display());
                println!("  出力先: {}", config.output_path.display());
                println!("  本日の投入数: {}", config.daily_production);
                println!("  OK率: {:.1}%", rates.ok * 100.0);
                println!("  NG率: {:.1}%", rates.ng * 100.0);
                println!("  投入間隔: {}秒", config.wait_time);
                println!("  ステーション処理間隔: {}秒", config.station_interval);
            }
        }
    }

    Ok(())
}
