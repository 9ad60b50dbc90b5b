//! Organization profile captured by the onboarding wizard.

use serde::{Deserialize, Serialize};

/// Industries offered on the first wizard step.
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare & Life Sciences",
    "Financial Services",
    "Manufacturing",
    "Retail & E-commerce",
    "Education",
    "Government & Public Sector",
    "Non-profit",
    "Energy & Utilities",
    "Real Estate",
    "Transportation & Logistics",
    "Media & Entertainment",
    "Professional Services",
    "Other",
];

/// Sub-industry options per industry.
pub const SUB_INDUSTRIES: &[(&str, &[&str])] = &[
    (
        "Technology",
        &[
            "SaaS",
            "Hardware",
            "AI/ML",
            "Cybersecurity",
            "Fintech",
            "Edtech",
            "Healthtech",
        ],
    ),
    (
        "Healthcare & Life Sciences",
        &[
            "Hospitals",
            "Pharmaceuticals",
            "Medical Devices",
            "Biotechnology",
            "Telemedicine",
        ],
    ),
    (
        "Financial Services",
        &[
            "Banking",
            "Insurance",
            "Investment Management",
            "Credit Unions",
            "Payments",
        ],
    ),
    (
        "Manufacturing",
        &[
            "Automotive",
            "Aerospace",
            "Electronics",
            "Food & Beverage",
            "Chemicals",
        ],
    ),
    (
        "Retail & E-commerce",
        &[
            "Fashion",
            "Electronics",
            "Home & Garden",
            "Grocery",
            "Marketplace",
        ],
    ),
    (
        "Education",
        &[
            "K-12",
            "Higher Education",
            "Online Learning",
            "Corporate Training",
        ],
    ),
    (
        "Government & Public Sector",
        &["Federal", "State", "Local", "Military", "Agencies"],
    ),
    (
        "Non-profit",
        &[
            "Healthcare",
            "Education",
            "Environmental",
            "Social Services",
            "Arts & Culture",
        ],
    ),
    (
        "Energy & Utilities",
        &["Oil & Gas", "Renewable Energy", "Electric Utilities", "Water"],
    ),
    (
        "Real Estate",
        &["Commercial", "Residential", "Property Management", "REITs"],
    ),
    (
        "Transportation & Logistics",
        &["Airlines", "Shipping", "Trucking", "Railways", "Warehousing"],
    ),
    (
        "Media & Entertainment",
        &["Broadcasting", "Publishing", "Gaming", "Streaming", "Sports"],
    ),
    (
        "Professional Services",
        &["Consulting", "Legal", "Accounting", "Marketing", "Architecture"],
    ),
    ("Other", &["Custom"]),
];

/// Look up the sub-industry options for an industry.
pub fn sub_industries_for(industry: &str) -> &'static [&'static str] {
    SUB_INDUSTRIES
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, subs)| *subs)
        .unwrap_or(&[])
}

/// Leadership titles offered on the second wizard step.
pub const LEADERSHIP_TITLES: &[&str] = &[
    "CEO / Chief Executive Officer",
    "COO / Chief Operating Officer",
    "CFO / Chief Financial Officer",
    "CTO / Chief Technology Officer",
    "CMO / Chief Marketing Officer",
    "CHRO / Chief Human Resources Officer",
    "President",
    "Vice President",
    "Director",
    "Senior Manager",
    "Manager",
    "Team Lead",
    "Other",
];

/// Organization size buckets.
pub const ORG_SIZES: &[&str] = &[
    "1-10 employees",
    "11-50 employees",
    "51-200 employees",
    "201-1,000 employees",
    "1,001-5,000 employees",
    "5,000+ employees",
];

/// Primary operating regions.
pub const REGIONS: &[&str] = &[
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
    "Middle East & Africa",
    "Global",
];

/// A co-administrator invited during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoAdmin {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub title: String,
}

/// Organization profile assembled across the four onboarding steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrgProfile {
    pub industry: String,
    pub sub_industry: String,
    pub leadership_title: String,
    pub org_size: String,
    pub region: String,
    /// Path to a logo image, optional.
    #[serde(default)]
    pub logo_path: String,
    #[serde(default)]
    pub co_admins: Vec<CoAdmin>,
}

impl OrgProfile {
    /// Step 1 requires both industry and sub-industry.
    pub fn industry_complete(&self) -> bool {
        !self.industry.is_empty() && !self.sub_industry.is_empty()
    }

    /// Step 2 requires title, organization size, and region.
    pub fn leadership_complete(&self) -> bool {
        !self.leadership_title.is_empty() && !self.org_size.is_empty() && !self.region.is_empty()
    }

    /// Select an industry; a change invalidates the previous sub-industry.
    pub fn set_industry(&mut self, industry: &str) {
        if self.industry != industry {
            self.sub_industry.clear();
        }
        self.industry = industry.to_string();
    }
}
