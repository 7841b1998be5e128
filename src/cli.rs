use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trademark_search_common::{CropRect, Threshold};

#[derive(Parser)]
#[command(name = "tm-search")]
#[command(about = "商標・ロゴ類似検索ダッシュボード（USPTO商標）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 類似商標を検索
    Search {
        #[command(subcommand)]
        query: SearchCommand,
    },

    /// 対話式ダッシュボード（検索・共起分析）
    Dashboard,

    /// クラス共起確率の分析
    Cooccurrence {
        #[command(subcommand)]
        view: CooccurrenceCommand,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 類似検索サービスのURLを設定
        #[arg(long)]
        set_service_url: Option<String>,

        /// 画像ダウンロードサービスのURLを設定
        #[arg(long)]
        set_image_url: Option<String>,

        /// 画像URLテンプレート (large/legacy/任意のテンプレート)
        #[arg(long)]
        set_image_template: Option<String>,

        /// 共起確率データの場所 (s3://bucket/key または https URL)
        #[arg(long)]
        set_cooccurrence_path: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum SearchCommand {
    /// 画像で検索
    Image {
        /// 画像ファイル (jpg/jpeg/png/gif/bmp)
        #[arg(required = true)]
        file: PathBuf,

        /// 切り抜き範囲 x,y,幅,高さ（省略時は画像全体）
        #[arg(long)]
        crop: Option<CropRect>,

        /// 商品・役務の説明（任意）
        #[arg(long, default_value = "")]
        gs_desc: String,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 図柄の説明文で検索
    Describe {
        /// 商標画像の説明（例: "A chef in an apron"）
        #[arg(required = true)]
        description: String,

        /// 商品・役務の説明（任意）
        #[arg(long, default_value = "")]
        gs_desc: String,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CooccurrenceCommand {
    /// 確率行列のヒートマップ
    Heatmap {
        /// Excel出力先（省略時は端末表示のみ）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 指定クラスで閾値を超える共起クラス
    Filter {
        /// クラスA（例: "1 (Chemicals)"）
        #[arg(short, long)]
        class: String,

        /// 確率の閾値 0-100
        #[arg(short, long, default_value = "20")]
        threshold: Threshold,
    },

    /// 全データを表示
    Table,
}
