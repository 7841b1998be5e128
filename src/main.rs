use clap::Parser;
use trademark_search::{analytics, cli, config, cropper, dashboard, error, export, render};
use analytics::DatasetCache;
use cli::{Cli, Commands, CooccurrenceCommand, SearchCommand};
use config::Config;
use error::Result;
use trademark_search_common::{
    filter_by_class, ImageUrlTemplate, ProbabilityMatrix, QueryForm, SearchMode, SearchOutcome,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = Config::load()?;

    match cli.command {
        Commands::Search { query } => {
            println!("🔎 tm-search - 類似商標検索\n");

            let (form, output) = match query {
                SearchCommand::Image { file, crop, gs_desc, output } => {
                    println!("- 画像を切り抜き中...");
                    let png = cropper::load_cropped_png(&file, crop)?;
                    println!("✔ 切り抜き完了 ({} bytes)\n", png.len());
                    let form = QueryForm {
                        mode: SearchMode::Image,
                        cropped_png: Some(png),
                        goods_services: gs_desc,
                        ..Default::default()
                    };
                    (form, output)
                }
                SearchCommand::Describe { description, gs_desc, output } => {
                    let form = QueryForm {
                        mode: SearchMode::Description,
                        description,
                        goods_services: gs_desc,
                        ..Default::default()
                    };
                    (form, output)
                }
            };

            let outcome = dashboard::submit_query(&config, form).await?;

            if let (Some(SearchOutcome::Found(result)), Some(output)) = (&outcome, output) {
                let path = export::write_result_json(result, &output)?;
                println!("\n✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Dashboard => {
            dashboard::Dashboard::new(config).run().await?;
        }

        Commands::Cooccurrence { view } => {
            let cache = DatasetCache::new(&config);
            let bar = dashboard::spinner("Loading co-occurrence data...");
            let state = cache.state().await;
            bar.finish_and_clear();

            let Some(table) = state.table() else {
                if let Some(warning) = state.warning() {
                    println!("⚠ {}", warning);
                }
                return Ok(());
            };

            match view {
                CooccurrenceCommand::Heatmap { output } => {
                    print!("{}", render::heatmap_text(&ProbabilityMatrix::from_table(table)));
                    if let Some(output) = output {
                        let path = export::write_heatmap_excel(table, &output)?;
                        println!("\n✔ Excel出力: {}", path.display());
                    }
                }
                CooccurrenceCommand::Filter { class, threshold } => {
                    let rows = filter_by_class(table, &class, threshold);
                    print!("{}", render::filter_text(&class, threshold, &rows));
                }
                CooccurrenceCommand::Table => {
                    print!("{}", render::table_text(table));
                }
            }
        }

        Commands::Config {
            set_api_key,
            set_service_url,
            set_image_url,
            set_image_template,
            set_cooccurrence_path,
            show,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(key) = set_api_key {
                config.api_key = Some(key);
                changed = true;
                println!("✔ APIキーを設定しました");
            }
            if let Some(url) = set_service_url {
                config.similarity_service_url = Some(url);
                changed = true;
                println!("✔ 類似検索サービスのURLを設定しました");
            }
            if let Some(url) = set_image_url {
                config.image_service_url = Some(url);
                changed = true;
                println!("✔ 画像サービスのURLを設定しました");
            }
            if let Some(template) = set_image_template {
                config.image_url_template = ImageUrlTemplate::parse(&template);
                changed = true;
                println!("✔ 画像URLテンプレートを設定しました: {}", config.image_url_template.as_str());
            }
            if let Some(path) = set_cooccurrence_path {
                config.cooccurrence_path = Some(path);
                changed = true;
                println!("✔ 共起確率データの場所を設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                let unset = "未設定".to_string();
                println!("設定:");
                println!("  類似検索サービス: {}", config.similarity_service_url.as_ref().unwrap_or(&unset));
                println!("  画像サービス: {}", config.image_service_url.as_ref().unwrap_or(&unset));
                println!("  画像URLテンプレート: {}", config.image_url_template.as_str());
                println!("  共起確率データ: {}", config.cooccurrence_path.as_ref().unwrap_or(&unset));
                println!("  AWSリージョン: {}", config.aws_region);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: {}", config.masked_api_key());
            }
        }
    }

    Ok(())
}
