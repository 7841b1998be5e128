//! 対話式ダッシュボード
//!
//! 検索ページと共起分析ページを切り替えて使う。
//! 入力内容と直近の結果はセッション中保持し、共起データは初回のみ取得する。

use crate::analytics::DatasetCache;
use crate::client::SimilarityClient;
use crate::config::Config;
use crate::cropper;
use crate::error::Result;
use crate::render;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use trademark_search_common::outcome::SEARCHING_MESSAGE;
use trademark_search_common::{
    filter_by_class, CropRect, ProbabilityMatrix, DISCLAIMER, QueryForm, SearchMode, SearchOutcome, Threshold,
};

const PAGES: [&str; 3] = ["Trademark Search", "Class Co-occurrence", "Quit"];

/// 検索中スピナー
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// 入力を検証して検索する
///
/// 入力不足・接続先未設定のときは警告を出してリクエストを送らない（None）
pub async fn submit_query(config: &Config, form: QueryForm) -> Result<Option<SearchOutcome>> {
    let query = match form.into_query() {
        Ok(query) => query,
        Err(e) => {
            println!("⚠ {}", e);
            return Ok(None);
        }
    };
    let endpoints = match config.endpoints() {
        Ok(endpoints) => endpoints,
        Err(e) => {
            println!("⚠ {}", e);
            return Ok(None);
        }
    };

    let client = SimilarityClient::new(endpoints, config.timeout_seconds)?;

    let bar = spinner(SEARCHING_MESSAGE);
    let outcome = client.search(&query).await;
    bar.finish_and_clear();

    print!("{}", render::outcome_text(&outcome, client.endpoints()));
    Ok(Some(outcome))
}

/// セッション状態
pub struct Dashboard {
    config: Config,
    cache: DatasetCache,
    form: QueryForm,
    image_path: Option<PathBuf>,
    crop: Option<CropRect>,
    last_outcome: Option<SearchOutcome>,
}

impl Dashboard {
    pub fn new(config: Config) -> Self {
        let cache = DatasetCache::new(&config);
        Self {
            config,
            cache,
            form: QueryForm::default(),
            image_path: None,
            crop: None,
            last_outcome: None,
        }
    }

    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("🔎 Trademark / Logo Similarity Search\n");
        println!("{}\n", DISCLAIMER);

        loop {
            let page = Select::new()
                .with_prompt("Page")
                .items(&PAGES)
                .default(0)
                .interact()?;

            match page {
                0 => self.search_page().await?,
                1 => self.analytics_page().await?,
                _ => break,
            }
            println!();
        }

        Ok(())
    }

    async fn search_page(&mut self) -> Result<()> {
        let labels: Vec<&str> = SearchMode::ALL.iter().map(|m| m.label()).collect();
        let current = SearchMode::ALL
            .iter()
            .position(|m| *m == self.form.mode)
            .unwrap_or(0);
        let selected = Select::new()
            .with_prompt("Search mode")
            .items(&labels)
            .default(current)
            .interact()?;
        self.form.mode = SearchMode::ALL[selected];

        match self.form.mode {
            SearchMode::Image => self.prompt_image()?,
            SearchMode::Description => {
                self.form.description = Input::<String>::new()
                    .with_prompt("Describe the trademark image")
                    .with_initial_text(self.form.description.clone())
                    .allow_empty(true)
                    .interact_text()?;
            }
        }

        self.form.goods_services = Input::<String>::new()
            .with_prompt("Goods and services (optional)")
            .with_initial_text(self.form.goods_services.clone())
            .allow_empty(true)
            .interact_text()?;

        if let Some(outcome) = submit_query(&self.config, self.form.clone()).await? {
            self.last_outcome = Some(outcome);
        }
        Ok(())
    }

    /// 画像の選択と切り抜き（失敗しても検索時の警告に任せる）
    fn prompt_image(&mut self) -> Result<()> {
        let initial = self
            .image_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let path: String = Input::new()
            .with_prompt("Image file (jpg, jpeg, png, gif, bmp)")
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;

        let path = path.trim();
        if path.is_empty() {
            self.image_path = None;
            self.form.cropped_png = None;
            return Ok(());
        }

        let initial_crop = self.crop.map(|c| c.to_string()).unwrap_or_default();
        let crop_text: String = Input::new()
            .with_prompt("Crop x,y,width,height (empty = whole image)")
            .with_initial_text(initial_crop)
            .allow_empty(true)
            .interact_text()?;

        self.crop = match crop_text.trim() {
            "" => None,
            text => match text.parse::<CropRect>() {
                Ok(rect) => Some(rect),
                Err(e) => {
                    println!("⚠ {}", e);
                    None
                }
            },
        };

        let path = PathBuf::from(path);
        self.form.cropped_png = match cropper::load_cropped_png(&path, self.crop) {
            Ok(png) => {
                println!("✔ Cropped image ready ({} bytes)", png.len());
                Some(png)
            }
            Err(e) => {
                println!("⚠ {}", e);
                None
            }
        };
        self.image_path = Some(path);
        Ok(())
    }

    async fn analytics_page(&mut self) -> Result<()> {
        if !self.cache.is_loaded() {
            let bar = spinner("Loading co-occurrence data...");
            self.cache.state().await;
            bar.finish_and_clear();
        }

        let state = self.cache.state().await;
        let Some(table) = state.table() else {
            if let Some(warning) = state.warning() {
                println!("⚠ {}", warning);
            }
            return Ok(());
        };

        println!("Class Co-occurrence Heatmap\n");
        print!("{}", render::heatmap_text(&ProbabilityMatrix::from_table(table)));
        println!();

        let classes = table.classes_a();
        if classes.is_empty() {
            return Ok(());
        }
        let selected = Select::new()
            .with_prompt("Class A")
            .items(&classes)
            .default(0)
            .interact()?;
        let threshold: Threshold = Input::new()
            .with_prompt("Probability threshold (%)")
            .default(Threshold::default())
            .interact_text()?;

        let class_a = &classes[selected];
        print!("{}", render::filter_text(class_a, threshold, &filter_by_class(table, class_a, threshold)));

        let show_table = Confirm::new()
            .with_prompt("Show full data table?")
            .default(false)
            .interact()?;
        if show_table {
            print!("{}", render::table_text(table));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_empty_description_sends_nothing() {
        // URL未設定でも検証で止まるのでエラーにならない
        let form = QueryForm::new(SearchMode::Description);
        let outcome = submit_query(&Config::default(), form).await.unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn test_submit_image_without_crop_sends_nothing() {
        let outcome = submit_query(&Config::default(), QueryForm::new(SearchMode::Image))
            .await
            .unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn test_submit_without_service_url_keeps_session() {
        // 接続先未設定は警告のみで、ダッシュボードは終了しない
        let form = QueryForm {
            mode: SearchMode::Description,
            description: "A chef in an apron".into(),
            ..Default::default()
        };
        let outcome = submit_query(&Config::default(), form).await.unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_new_dashboard_has_no_outcome() {
        let dashboard = Dashboard::new(Config::default());
        assert!(dashboard.last_outcome().is_none());
        assert_eq!(dashboard.form.mode, SearchMode::Image);
    }
}
