//! 切り抜き矩形
//!
//! CLI（imageクレート）とブラウザ（canvas）で共通の矩形計算

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// アップロード可能な画像の拡張子
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// ファイル名の拡張子で判定（大文字小文字を区別しない）
pub fn is_supported_image_name(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// 切り抜き矩形（ピクセル単位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// 画像全体
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// 画像サイズに対する割合（0〜100）から矩形を作る
    ///
    /// ブラウザのスライダー用。結果は clamp_to 済み。
    pub fn from_percent(
        image_width: u32,
        image_height: u32,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        let scale = |pct: f64, size: u32| ((pct.clamp(0.0, 100.0) / 100.0) * size as f64).round() as u32;
        Self::new(
            scale(left, image_width),
            scale(top, image_height),
            scale(width, image_width),
            scale(height, image_height),
        )
        .clamp_to(image_width, image_height)
    }

    /// 画像の範囲内に収める
    ///
    /// はみ出した分は切り詰める。面積が0になる場合はエラー。
    pub fn clamp_to(&self, image_width: u32, image_height: u32) -> Result<Self> {
        if self.x >= image_width || self.y >= image_height {
            return Err(Error::InvalidCrop(format!(
                "origin ({}, {}) is outside the {}x{} image",
                self.x, self.y, image_width, image_height
            )));
        }

        let width = self.width.min(image_width - self.x);
        let height = self.height.min(image_height - self.y);
        if width == 0 || height == 0 {
            return Err(Error::InvalidCrop("crop area is empty".into()));
        }

        Ok(Self::new(self.x, self.y, width, height))
    }
}

impl std::str::FromStr for CropRect {
    type Err = String;

    /// "x,y,w,h" 形式
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!("Invalid crop: {}. Use x,y,width,height", s));
        }

        let mut values = [0u32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| format!("Invalid crop value: {}", part))?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}
