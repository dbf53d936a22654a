use std::fmt;

use serde::{Deserialize, Serialize};

/// Job role a candidate is preparing for. Any label the scorers do not know about is kept
/// verbatim as `Unsupported` so feedback can still name it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    UxDesigner,
    MarketingManager,
    BusinessAnalyst,
    Unsupported(String),
}

impl Role {
    /// Lenient parse: case, spaces, hyphens and underscores are ignored. Never fails.
    pub fn parse(label: &str) -> Role {
        let key: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "softwareengineer" | "softwaredeveloper" | "swe" => Role::SoftwareEngineer,
            "datascientist" => Role::DataScientist,
            "productmanager" | "pm" => Role::ProductManager,
            "uxdesigner" | "uiuxdesigner" | "uxuidesigner" => Role::UxDesigner,
            "marketingmanager" => Role::MarketingManager,
            "businessanalyst" => Role::BusinessAnalyst,
            _ => Role::Unsupported(label.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Role::SoftwareEngineer => "Software Engineer",
            Role::DataScientist => "Data Scientist",
            Role::ProductManager => "Product Manager",
            Role::UxDesigner => "UX Designer",
            Role::MarketingManager => "Marketing Manager",
            Role::BusinessAnalyst => "Business Analyst",
            Role::Unsupported(label) => label,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label().is_empty() {
            f.write_str("unspecified role")
        } else {
            f.write_str(self.label())
        }
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        Role::parse(&label)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.label().to_string()
    }
}

/// Static keyword expectations for one role. Shared by resume keyword matching and
/// interview response skills-relevance.
#[derive(Debug, Serialize)]
pub struct RoleProfile {
    pub role: &'static str,
    pub required_keywords: &'static [&'static str],
    pub preferred_keywords: &'static [&'static str],
    pub exclusion_keywords: &'static [&'static str],
    pub min_expected_size_bytes: u64,
}

impl RoleProfile {
    pub fn for_role(role: &Role) -> Option<&'static RoleProfile> {
        let idx = match role {
            Role::SoftwareEngineer => 0,
            Role::DataScientist => 1,
            Role::ProductManager => 2,
            Role::UxDesigner => 3,
            Role::MarketingManager => 4,
            Role::BusinessAnalyst => 5,
            Role::Unsupported(_) => return None,
        };
        Some(&ROLE_PROFILES[idx])
    }

    /// Required and preferred keywords together, in table order.
    pub fn all_keywords(&self) -> impl Iterator<Item = &'static str> {
        self.required_keywords
            .iter()
            .chain(self.preferred_keywords.iter())
            .copied()
    }
}

pub static ROLE_PROFILES: [RoleProfile; 6] = [
    RoleProfile {
        role: "Software Engineer",
        required_keywords: &[
            "programming",
            "javascript",
            "python",
            "java",
            "react",
            "sql",
            "git",
        ],
        preferred_keywords: &[
            "typescript",
            "node",
            "aws",
            "docker",
            "kubernetes",
            "agile",
            "testing",
            "algorithms",
            "ci/cd",
            "microservices",
        ],
        exclusion_keywords: &[
            "references available upon request",
            "hard worker",
            "team player",
            "ms paint",
        ],
        min_expected_size_bytes: 40_000,
    },
    RoleProfile {
        role: "Data Scientist",
        required_keywords: &[
            "python",
            "sql",
            "machine learning",
            "statistics",
            "data analysis",
            "pandas",
        ],
        preferred_keywords: &[
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "deep learning",
            "visualization",
            "tableau",
            "spark",
            "a/b testing",
        ],
        exclusion_keywords: &[
            "references available upon request",
            "hard worker",
            "team player",
        ],
        min_expected_size_bytes: 40_000,
    },
    RoleProfile {
        role: "Product Manager",
        required_keywords: &[
            "product",
            "roadmap",
            "stakeholder",
            "strategy",
            "user research",
            "metrics",
        ],
        preferred_keywords: &[
            "agile",
            "scrum",
            "jira",
            "a/b testing",
            "go-to-market",
            "analytics",
            "okr",
            "prioritization",
        ],
        exclusion_keywords: &[
            "references available upon request",
            "hard worker",
            "team player",
        ],
        min_expected_size_bytes: 35_000,
    },
    RoleProfile {
        role: "UX Designer",
        required_keywords: &[
            "user experience",
            "wireframe",
            "prototype",
            "figma",
            "usability",
            "user research",
        ],
        preferred_keywords: &[
            "sketch",
            "adobe xd",
            "design system",
            "accessibility",
            "interaction design",
            "personas",
            "information architecture",
        ],
        exclusion_keywords: &[
            "references available upon request",
            "hard worker",
            "ms paint",
        ],
        min_expected_size_bytes: 60_000,
    },
    RoleProfile {
        role: "Marketing Manager",
        required_keywords: &[
            "marketing",
            "campaign",
            "brand",
            "seo",
            "content",
            "social media",
        ],
        preferred_keywords: &[
            "google analytics",
            "roi",
            "email marketing",
            "crm",
            "hubspot",
            "conversion",
            "ppc",
            "market research",
        ],
        exclusion_keywords: &[
            "references available upon request",
            "hard worker",
            "team player",
        ],
        min_expected_size_bytes: 35_000,
    },
    RoleProfile {
        role: "Business Analyst",
        required_keywords: &[
            "analysis",
            "requirements",
            "stakeholder",
            "sql",
            "excel",
            "process",
        ],
        preferred_keywords: &[
            "tableau",
            "power bi",
            "uml",
            "jira",
            "documentation",
            "kpi",
            "data modeling",
            "agile",
        ],
        exclusion_keywords: &[
            "references available upon request",
            "hard worker",
            "team player",
        ],
        min_expected_size_bytes: 35_000,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!(Role::parse("Software Engineer"), Role::SoftwareEngineer);
        assert_eq!(Role::parse("software_engineer"), Role::SoftwareEngineer);
        assert_eq!(Role::parse("UX-Designer"), Role::UxDesigner);
        assert_eq!(Role::parse("data scientist"), Role::DataScientist);
    }

    #[test]
    fn test_unknown_role_keeps_label() {
        let role = Role::parse("  Astronaut ");
        assert_eq!(role, Role::Unsupported("Astronaut".to_string()));
        assert_eq!(role.label(), "Astronaut");
    }

    #[test]
    fn test_every_supported_role_has_matching_profile() {
        for role in [
            Role::SoftwareEngineer,
            Role::DataScientist,
            Role::ProductManager,
            Role::UxDesigner,
            Role::MarketingManager,
            Role::BusinessAnalyst,
        ] {
            let profile = RoleProfile::for_role(&role).unwrap();
            assert_eq!(profile.role, role.label());
            assert!(!profile.required_keywords.is_empty());
            assert!(!profile.preferred_keywords.is_empty());
        }
    }

    #[test]
    fn test_unsupported_role_has_no_profile() {
        assert!(RoleProfile::for_role(&Role::parse("Chef")).is_none());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for profile in ROLE_PROFILES.iter() {
            for kw in profile.all_keywords().chain(profile.exclusion_keywords.iter().copied()) {
                assert_eq!(kw, kw.to_lowercase(), "keyword {kw} must be lowercase");
            }
        }
    }

    #[test]
    fn test_role_serde_uses_label() {
        let json = serde_json::to_string(&Role::ProductManager).unwrap();
        assert_eq!(json, r#""Product Manager""#);
        let role: Role = serde_json::from_str(r#""business_analyst""#).unwrap();
        assert_eq!(role, Role::BusinessAnalyst);
    }
}
