//! Precedent ("emsal") search across court decision sources.

use crate::shared::text::{truncate_chars, turkish_lowercase};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RESULT_LIMIT: u32 = 30;
/// Bodies longer than this are collapsed behind a toggle.
pub const EXCERPT_CHARS: usize = 400;
const DEFAULT_BADGE_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecedentSource {
    Yargitay,
    Danistay,
    Anayasa,
    Rekabet,
}

impl PrecedentSource {
    pub fn all() -> [PrecedentSource; 4] {
        [
            PrecedentSource::Yargitay,
            PrecedentSource::Danistay,
            PrecedentSource::Anayasa,
            PrecedentSource::Rekabet,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrecedentSource::Yargitay => "yargitay",
            PrecedentSource::Danistay => "danistay",
            PrecedentSource::Anayasa => "anayasa",
            PrecedentSource::Rekabet => "rekabet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrecedentSource::Yargitay => "Yargıtay",
            PrecedentSource::Danistay => "Danıştay",
            PrecedentSource::Anayasa => "Anayasa Mahkemesi",
            PrecedentSource::Rekabet => "Rekabet Kurumu",
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            PrecedentSource::Yargitay => "#6366f1",
            PrecedentSource::Danistay => "#22c55e",
            PrecedentSource::Anayasa => "#f59e0b",
            PrecedentSource::Rekabet => "#ef4444",
        }
    }
}

/// Badge color for the free-form `source` string the service returns.
pub fn badge_color_for(source: Option<&str>) -> &'static str {
    let Some(source) = source else {
        return DEFAULT_BADGE_COLOR;
    };
    match turkish_lowercase(source.trim()).as_str() {
        "yargitay" | "yargıtay" => PrecedentSource::Yargitay.badge_color(),
        "danistay" | "danıştay" => PrecedentSource::Danistay.badge_color(),
        "anayasa" | "aym" => PrecedentSource::Anayasa.badge_color(),
        "rekabet" => PrecedentSource::Rekabet.badge_color(),
        _ => DEFAULT_BADGE_COLOR,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    EmptyQuery,
    NoSources,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyQuery => write!(f, "Lütfen bir arama terimi girin"),
            SearchError::NoSources => write!(f, "En az bir kaynak seçin"),
        }
    }
}

impl std::error::Error for SearchError {}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    query: String,
    sources: Vec<PrecedentSource>,
}

impl SearchQuery {
    /// Sources keep the canonical order regardless of selection order.
    pub fn new(query: &str, selected: &[PrecedentSource]) -> Result<Self, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        let sources: Vec<_> = PrecedentSource::all()
            .into_iter()
            .filter(|s| selected.contains(s))
            .collect();
        if sources.is_empty() {
            return Err(SearchError::NoSources);
        }
        Ok(Self {
            query: query.to_string(),
            sources,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sources(&self) -> &[PrecedentSource] {
        &self.sources
    }

    pub fn to_query_string(&self) -> String {
        let sources: Vec<_> = self.sources.iter().map(|s| s.as_str()).collect();
        format!(
            "query={}&sources={}&limit={}",
            urlencoding::encode(&self.query),
            sources.join(","),
            RESULT_LIMIT
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedentResult {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub daire: Option<String>,
    #[serde(default)]
    pub tarih: Option<String>,
    #[serde(default)]
    pub esas_no: Option<String>,
    #[serde(default)]
    pub karar_no: Option<String>,
    #[serde(default)]
    pub ozet: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl PrecedentResult {
    pub fn body(&self) -> &str {
        non_empty(&self.ozet)
            .or_else(|| non_empty(&self.content))
            .unwrap_or("Karar özeti mevcut değil")
    }

    /// Collapsed body and whether a "show more" toggle is needed.
    pub fn excerpt(&self) -> (String, bool) {
        let (head, cut) = truncate_chars(self.body(), EXCERPT_CHARS);
        if cut {
            (format!("{}...", head), true)
        } else {
            (head, false)
        }
    }

    pub fn court(&self) -> &str {
        non_empty(&self.daire).unwrap_or("Mahkeme Kararı")
    }

    pub fn source_label(&self) -> &str {
        non_empty(&self.source)
            .or_else(|| non_empty(&self.daire))
            .unwrap_or("Kaynak")
    }

    pub fn badge_color(&self) -> &'static str {
        badge_color_for(self.source.as_deref())
    }

    /// `E. <esas> K. <karar>`, omitting missing parts.
    pub fn case_numbers(&self) -> String {
        let mut parts = Vec::new();
        if let Some(e) = non_empty(&self.esas_no) {
            parts.push(format!("E. {}", e));
        }
        if let Some(k) = non_empty(&self.karar_no) {
            parts.push(format!("K. {}", k));
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PrecedentResult>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sources_is_rejected() {
        assert_eq!(
            SearchQuery::new("kıdem tazminatı", &[]),
            Err(SearchError::NoSources)
        );
    }

    #[test]
    fn test_empty_query_is_rejected() {
        assert_eq!(
            SearchQuery::new("   ", &PrecedentSource::all()),
            Err(SearchError::EmptyQuery)
        );
    }

    #[test]
    fn test_query_string() {
        let q = SearchQuery::new(
            " işe iade ",
            &[PrecedentSource::Rekabet, PrecedentSource::Yargitay],
        )
        .unwrap();
        assert_eq!(
            q.to_query_string(),
            "query=i%C5%9Fe%20iade&sources=yargitay,rekabet&limit=30"
        );
    }

    #[test]
    fn test_result_fallbacks() {
        let r = PrecedentResult::default();
        assert_eq!(r.body(), "Karar özeti mevcut değil");
        assert_eq!(r.court(), "Mahkeme Kararı");
        assert_eq!(r.source_label(), "Kaynak");
        assert_eq!(r.case_numbers(), "");
    }

    #[test]
    fn test_excerpt_and_case_numbers() {
        let r = PrecedentResult {
            content: Some("ş".repeat(450)),
            esas_no: Some("2023/1".into()),
            karar_no: Some("2024/7".into()),
            ..Default::default()
        };
        let (short, long) = r.excerpt();
        assert!(long);
        assert_eq!(short.chars().count(), EXCERPT_CHARS + 3);
        assert_eq!(r.case_numbers(), "E. 2023/1 K. 2024/7");
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(badge_color_for(Some("Danıştay")), "#22c55e");
        assert_eq!(badge_color_for(Some("AYM")), "#f59e0b");
        assert_eq!(badge_color_for(Some("bilinmeyen")), DEFAULT_BADGE_COLOR);
        assert_eq!(badge_color_for(None), DEFAULT_BADGE_COLOR);
    }
}
