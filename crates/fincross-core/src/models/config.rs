//! Configuration structures for the cross-check pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the fincross pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FincrossConfig {
    /// Figure extraction configuration.
    pub extraction: ExtractionConfig,

    /// Upload validation limits.
    pub limits: LimitsConfig,
}

/// Pattern profile selecting the recognition vocabulary and its fixed
/// confidence constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternProfile {
    /// Lean alias set.
    Simple,
    /// Richer alias set covering more label spellings.
    #[default]
    Enhanced,
}

impl PatternProfile {
    /// Fixed heuristic confidence assigned to every figure extracted under
    /// this profile.
    pub fn confidence(&self) -> f32 {
        match self {
            PatternProfile::Simple => 0.85,
            PatternProfile::Enhanced => 0.9,
        }
    }
}

/// Figure extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Pattern profile to extract with.
    pub profile: PatternProfile,

    /// Maximum character distance at which a year occurrence may still be
    /// attributed to a numeric match.
    pub year_max_distance: usize,

    /// Characters per estimated PDF page when reporting match locations.
    pub pdf_page_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            profile: PatternProfile::default(),
            year_max_distance: 300,
            pdf_page_chars: 2000,
        }
    }
}

/// Upload validation limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,

    /// Accepted file extensions (lowercase, without the dot).
    pub allowed_extensions: Vec<String>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024,
            allowed_extensions: vec!["pdf".to_string(), "docx".to_string(), "xlsx".to_string()],
        }
    }
}

impl FincrossConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
