//! ヒートマップの離散色分け
//!
//! 実データは0〜25%に偏るため、等間隔ではない固定の区間で色を分ける。

/// 区間の境界（%）
pub const BIN_EDGES: [f64; 8] = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 50.0, 100.0];
pub const BUCKET_COUNT: usize = BIN_EDGES.len() - 1;

/// 区間ごとの色（低→高）
pub const BUCKET_COLORS: [&str; BUCKET_COUNT] = [
    "#f7fbff", "#c6dbef", "#9ecae1", "#6baed6", "#fdae6b", "#f16913", "#a63603",
];

/// 値の属する区間
///
/// 区間は [下限, 上限)。100は最後の区間に含める。
/// 負値・NaN・100超は None。
pub fn bucket_for(value: f64) -> Option<usize> {
    if !(BIN_EDGES[0]..=BIN_EDGES[BUCKET_COUNT]).contains(&value) {
        return None;
    }
    let bucket = BIN_EDGES[1..]
        .iter()
        .position(|&upper| value < upper)
        .unwrap_or(BUCKET_COUNT - 1);
    Some(bucket)
}

pub fn color_for(value: f64) -> Option<&'static str> {
    bucket_for(value).map(|b| BUCKET_COLORS[b])
}

/// 凡例（ラベル, 色）
pub fn legend() -> Vec<(String, &'static str)> {
    BIN_EDGES
        .windows(2)
        .zip(BUCKET_COLORS)
        .map(|(edge, color)| (format!("{}–{}%", edge[0], edge[1]), color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_for(0.0), Some(0));
        assert_eq!(bucket_for(4.99), Some(0));
        assert_eq!(bucket_for(5.0), Some(1));
        assert_eq!(bucket_for(19.999), Some(3));
        assert_eq!(bucket_for(20.0), Some(4));
        assert_eq!(bucket_for(25.0), Some(5));
        assert_eq!(bucket_for(49.9), Some(5));
        assert_eq!(bucket_for(50.0), Some(6));
        assert_eq!(bucket_for(100.0), Some(6));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(bucket_for(-1.0), None);
        assert_eq!(bucket_for(100.5), None);
        assert_eq!(bucket_for(f64::NAN), None);
    }

    #[test]
    fn test_colors_distinct() {
        let mut colors = BUCKET_COLORS.to_vec();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), BUCKET_COUNT);
        assert_eq!(color_for(12.0), Some(BUCKET_COLORS[2]));
    }

    #[test]
    fn test_legend() {
        let legend = legend();
        assert_eq!(legend.len(), 7);
        assert_eq!(legend[0].0, "0–5%");
        assert_eq!(legend[6].0, "50–100%");
    }
}
