//! Trademark Search Common Library
//!
//! CLIとWeb(WASM)で共有される型とビューロジック

pub mod types;
pub mod error;
pub mod query;
pub mod crop;
pub mod endpoints;
pub mod request;
pub mod outcome;
pub mod view;
pub mod cooccurrence;
pub mod location;
#[cfg(feature = "excel")]
pub mod export;

/// 画面上部に常に出す免責文
pub const DISCLAIMER: &str = "This tool is for informational purposes only and does not constitute legal advice. \
For trademark matters, please consult with a qualified intellectual property attorney.";

pub use types::{SimilarMark, SearchResult};
pub use error::{Error, Result, ValidationError};
pub use query::{SearchMode, QueryForm, Query, ImageQuery, DescriptionQuery};
pub use crop::{CropRect, is_supported_image_name, IMAGE_EXTENSIONS};
pub use endpoints::{ServiceEndpoints, ImageUrlTemplate};
pub use request::{RequestPlan, RequestBody, FilePart, API_KEY_HEADER};
pub use outcome::SearchOutcome;
pub use location::{ObjectLocation, ResolvedLocation};
pub use view::{ResultsView, MarkCard, format_score, CARDS_PER_ROW, NOT_AVAILABLE};
pub use cooccurrence::{
    CoOccurrenceRow, CoOccurrenceTable, ProbabilityMatrix, Threshold, FilteredRow,
    AnalyticsState, class_sort_key, filter_by_class, bucket_for, PROBABILITY_COLUMN,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclaimer_wording() {
        assert!(DISCLAIMER.starts_with("This tool is for informational purposes only"));
        assert!(DISCLAIMER.contains("does not constitute legal advice. For trademark matters"));
        assert!(DISCLAIMER.ends_with("qualified intellectual property attorney."));
    }
}
