//! PageSpeed API response model and metric extraction.
//!
//! The API returns a large, deeply nested document; we decode only the slice
//! we report on. Every field is optional so that absent or null keys degrade
//! to empty values instead of failing the whole probe.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::{
    AUDIT_CUMULATIVE_LAYOUT_SHIFT, AUDIT_FIRST_CONTENTFUL_PAINT, AUDIT_LARGEST_CONTENTFUL_PAINT,
    AUDIT_TOTAL_BLOCKING_TIME,
};

/// Top-level response document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageSpeedResponse {
    #[serde(default)]
    pub lighthouse_result: Option<LighthouseResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LighthouseResult {
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: HashMap<String, Audit>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Categories {
    #[serde(default)]
    pub performance: Option<CategoryScore>,
}

/// The API reports category scores as fractions in [0, 1]; `score` is null
/// when the category could not be computed.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CategoryScore {
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Audit {
    #[serde(default)]
    pub display_value: Option<String>,
}

/// The normalized metrics extracted from one successful probe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSpeedMetrics {
    /// Performance score scaled to 0-100, absent when the API reported none
    pub performance_score: Option<u8>,
    /// First Contentful Paint display string, empty when not reported
    pub first_contentful_paint: String,
    /// Largest Contentful Paint display string, empty when not reported
    pub largest_contentful_paint: String,
    /// Total Blocking Time display string, empty when not reported
    pub total_blocking_time: String,
    /// Cumulative Layout Shift display string, empty when not reported
    pub cumulative_layout_shift: String,
}

impl PageSpeedMetrics {
    /// Extracts the reported metrics from a decoded response.
    ///
    /// The score fraction is scaled to 0-100 and rounded to the nearest
    /// integer. Missing keys at any nesting level yield absent/empty values.
    pub(crate) fn from_response(response: PageSpeedResponse) -> Self {
        let LighthouseResult { categories, audits } =
            response.lighthouse_result.unwrap_or_default();

        let performance_score = categories
            .performance
            .and_then(|category| category.score)
            .map(|fraction| (fraction * 100.0).round() as u8);

        let display_value = |id: &str| {
            audits
                .get(id)
                .and_then(|audit| audit.display_value.clone())
                .unwrap_or_default()
        };

        PageSpeedMetrics {
            performance_score,
            first_contentful_paint: display_value(AUDIT_FIRST_CONTENTFUL_PAINT),
            largest_contentful_paint: display_value(AUDIT_LARGEST_CONTENTFUL_PAINT),
            total_blocking_time: display_value(AUDIT_TOTAL_BLOCKING_TIME),
            cumulative_layout_shift: display_value(AUDIT_CUMULATIVE_LAYOUT_SHIFT),
        }
    }
}
