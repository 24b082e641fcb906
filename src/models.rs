//! Data model shared by the extractors, scorer and orchestrator.
//!
//! Everything here is created during a single analysis and is immutable once
//! the orchestrator has assembled an [`AnalysisResult`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::EnumIter as EnumIterMacro;

use crate::error_handling::InputError;

/// Structured-data embedding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaFormat {
    /// `<script type="application/ld+json">` blocks
    JsonLd,
    /// `itemscope` / `itemtype` attributes
    Microdata,
    /// `typeof` attributes
    Rdfa,
}

impl SchemaFormat {
    /// Display name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaFormat::JsonLd => "JSON-LD",
            SchemaFormat::Microdata => "Microdata",
            SchemaFormat::Rdfa => "RDFa",
        }
    }
}

impl std::fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered structured-data annotation.
///
/// Each format carries its own payload shape: JSON-LD keeps the parsed
/// document, Microdata keeps the raw `itemtype`, RDFa keeps only the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExtractedItem {
    /// A parsed JSON-LD block.
    #[serde(rename = "JSON-LD")]
    JsonLd {
        /// Declared `@type`, or `"Unknown"`
        schema_type: String,
        /// The parsed JSON value
        data: Value,
        /// Well-formedness flag
        valid: bool,
    },
    /// An `itemscope` element with an `itemtype`.
    #[serde(rename = "Microdata")]
    Microdata {
        /// Last path segment of `itemtype`
        schema_type: String,
        /// Raw `itemtype` attribute value
        item_type: String,
        /// Always true for this format
        valid: bool,
    },
    /// An element carrying `typeof`.
    #[serde(rename = "RDFa")]
    Rdfa {
        /// Raw `typeof` attribute value
        schema_type: String,
        /// Always true for this format
        valid: bool,
    },
}

impl ExtractedItem {
    /// Embedding format this item was found in.
    pub fn format(&self) -> SchemaFormat {
        match self {
            ExtractedItem::JsonLd { .. } => SchemaFormat::JsonLd,
            ExtractedItem::Microdata { .. } => SchemaFormat::Microdata,
            ExtractedItem::Rdfa { .. } => SchemaFormat::Rdfa,
        }
    }

    /// Semantic type of the item (e.g. `Product`).
    pub fn schema_type(&self) -> &str {
        match self {
            ExtractedItem::JsonLd { schema_type, .. }
            | ExtractedItem::Microdata { schema_type, .. }
            | ExtractedItem::Rdfa { schema_type, .. } => schema_type,
        }
    }

    /// Parsed payload; only JSON-LD items carry one.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ExtractedItem::JsonLd { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Whether the item passed its format's well-formedness check.
    pub fn is_valid(&self) -> bool {
        match self {
            ExtractedItem::JsonLd { valid, .. }
            | ExtractedItem::Microdata { valid, .. }
            | ExtractedItem::Rdfa { valid, .. } => *valid,
        }
    }
}

/// Issue severity. Ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic
    Low,
    /// Worth fixing
    Medium,
    /// Prevents the markup (or page) from being read
    High,
}

/// Category of a defect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIterMacro,
)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// A JSON-LD block could not be parsed
    MalformedJson,
    /// The page behind a URL could not be fetched
    FetchFailure,
}

impl IssueKind {
    /// Stable kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MalformedJson => "malformed-json",
            IssueKind::FetchFailure => "fetch-failure",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A defect found during extraction, validation or fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Category tag
    pub kind: IssueKind,
    /// Human-readable description
    pub message: String,
    /// Informational severity (does not affect the score)
    pub severity: Severity,
}

impl Issue {
    /// Issue for a JSON-LD block that failed to parse.
    pub fn malformed_json(detail: impl std::fmt::Display) -> Self {
        Issue {
            kind: IssueKind::MalformedJson,
            message: format!("Invalid JSON-LD syntax found: {detail}"),
            severity: Severity::High,
        }
    }

    /// Issue for a page that could not be fetched.
    pub fn fetch_failure(detail: impl std::fmt::Display) -> Self {
        Issue {
            kind: IssueKind::FetchFailure,
            message: format!("Failed to fetch URL: {detail}"),
            severity: Severity::High,
        }
    }
}

/// The engine's output for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Items in discovery order (JSON-LD, then Microdata, then RDFa)
    #[serde(rename = "schemas_found")]
    pub items: Vec<ExtractedItem>,
    /// Issues in discovery order
    pub issues: Vec<Issue>,
    /// Score in `[0, 100]`
    pub score: u8,
    /// Deduplicated guidance, in rule evaluation order
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Condensed view used for history listings.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            score: self.score,
            schemas_count: self.items.len(),
            issues_count: self.issues.len(),
        }
    }

    /// Whether any issue of the given kind was recorded.
    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }
}

/// Score and counts of one analysis, without the item payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Score of the analysis
    pub score: u8,
    /// Number of extracted items
    pub schemas_count: usize,
    /// Number of issues
    pub issues_count: usize,
}

/// What to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    /// Raw, already decoded HTML text
    Html(String),
    /// A URL whose body is fetched first
    Url(String),
}

/// Wire form of an analysis request (`{"input_type": "html"|"url", "input_data": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Either `html` or `url`
    pub input_type: String,
    /// The HTML text or the URL
    pub input_data: String,
}

impl AnalysisRequest {
    /// Validates the request and converts it into an [`AnalysisInput`].
    ///
    /// # Errors
    ///
    /// Returns `InputError::UnknownInputType` for any `input_type` other than
    /// `html` or `url`. The URL itself is not checked here; a bad URL ends in
    /// a `fetch-failure` result.
    pub fn into_input(self) -> Result<AnalysisInput, InputError> {
        match self.input_type.as_str() {
            "html" => Ok(AnalysisInput::Html(self.input_data)),
            "url" => Ok(AnalysisInput::Url(self.input_data)),
            _ => Err(InputError::UnknownInputType(self.input_type)),
        }
    }
}
