use serde::{Deserialize, Serialize};

use crate::models::role::Role;

/// Metadata of an uploaded resume plus whatever text the caller managed to extract from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeInput {
    pub file_name: String,
    pub file_size_bytes: u64,
    #[serde(default)]
    pub file_extension: String,
    #[serde(default)]
    pub extracted_text: Option<String>,
    pub selected_role: Role,
}

impl ResumeInput {
    /// Lower-cased extension without the leading dot. Falls back to the file name's suffix
    /// when the caller left the extension blank.
    pub fn normalized_extension(&self) -> String {
        let ext = self.file_extension.trim().trim_start_matches('.');
        if !ext.is_empty() {
            return ext.to_lowercase();
        }
        self.file_name
            .rsplit_once('.')
            .map(|(_, suffix)| suffix.trim().to_lowercase())
            .unwrap_or_default()
    }

    /// Extracted text, or `None` when absent or blank.
    pub fn usable_text(&self) -> Option<&str> {
        self.extracted_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub ats_score: u32, // 0 – 100
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, ext: &str, text: Option<&str>) -> ResumeInput {
        ResumeInput {
            file_name: name.to_string(),
            file_size_bytes: 1,
            file_extension: ext.to_string(),
            extracted_text: text.map(String::from),
            selected_role: Role::SoftwareEngineer,
        }
    }

    #[test]
    fn test_extension_strips_dot_and_lowercases() {
        assert_eq!(input("a.pdf", ".PDF", None).normalized_extension(), "pdf");
    }

    #[test]
    fn test_blank_extension_falls_back_to_file_name() {
        assert_eq!(input("My_Resume.Docx", "", None).normalized_extension(), "docx");
        assert_eq!(input("resume", "", None).normalized_extension(), "");
    }

    #[test]
    fn test_blank_text_is_unusable() {
        assert!(input("a.pdf", "pdf", Some("  \n\t")).usable_text().is_none());
        assert_eq!(input("a.pdf", "pdf", Some("hi")).usable_text(), Some("hi"));
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let json = r#"{"file_name":"cv.pdf","file_size_bytes":1024,"selected_role":"Data Scientist"}"#;
        let parsed: ResumeInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.selected_role, Role::DataScientist);
        assert!(parsed.extracted_text.is_none());
        assert_eq!(parsed.normalized_extension(), "pdf");
    }
}
