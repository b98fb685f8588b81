//! Enumerations shared by the registration forms, the HTTP surface and the
//! store. This is the only definition; every other crate imports it.

use serde::{Deserialize, Serialize};

use crate::constants::SUGGESTED_LANGUAGES;

/// Unrecognised enumeration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a wire enumeration with its SCREAMING_SNAKE_CASE code and label.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire code, e.g. `TAX_PLANNING`
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Human-readable label for forms
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

catalog_enum! {
    /// Size bracket of a business.
    CompanySize as "company size" {
        Small => ("SMALL", "Small (1-50 employees)"),
        Medium => ("MEDIUM", "Medium (51-250 employees)"),
        Large => ("LARGE", "Large (250+ employees)"),
    }
}

catalog_enum! {
    /// Area of financial expertise, offered by experts and needed by businesses.
    FinancialExpertiseArea as "expertise area" {
        InvestmentManagement => ("INVESTMENT_MANAGEMENT", "Investment Management"),
        FinancialPlanning => ("FINANCIAL_PLANNING", "Financial Planning"),
        WealthManagement => ("WEALTH_MANAGEMENT", "Wealth Management"),
        RiskManagement => ("RISK_MANAGEMENT", "Risk Management"),
        TaxPlanning => ("TAX_PLANNING", "Tax Planning"),
        EstatePlanning => ("ESTATE_PLANNING", "Estate Planning"),
        RetirementPlanning => ("RETIREMENT_PLANNING", "Retirement Planning"),
        CorporateFinance => ("CORPORATE_FINANCE", "Corporate Finance"),
        MergersAndAcquisitions => ("MERGERS_AND_ACQUISITIONS", "Mergers & Acquisitions"),
        PrivateEquity => ("PRIVATE_EQUITY", "Private Equity"),
        VentureCapital => ("VENTURE_CAPITAL", "Venture Capital"),
        RealEstateInvestment => ("REAL_ESTATE_INVESTMENT", "Real Estate Investment"),
        PortfolioManagement => ("PORTFOLIO_MANAGEMENT", "Portfolio Management"),
        AssetAllocation => ("ASSET_ALLOCATION", "Asset Allocation"),
        EsgInvesting => ("ESG_INVESTING", "ESG Investing"),
        Cryptocurrency => ("CRYPTOCURRENCY", "Cryptocurrency"),
    }
}

catalog_enum! {
    /// Professional credential held by an expert.
    FinancialCertification as "certification" {
        Cfa => ("CFA", "CFA (Chartered Financial Analyst)"),
        Cfp => ("CFP", "CFP (Certified Financial Planner)"),
        Cpa => ("CPA", "CPA (Certified Public Accountant)"),
        Chfc => ("CHFC", "ChFC (Chartered Financial Consultant)"),
        Caia => ("CAIA", "CAIA (Chartered Alternative Investment Analyst)"),
        Frm => ("FRM", "FRM (Financial Risk Manager)"),
        Series7 => ("SERIES_7", "Series 7"),
        Series63 => ("SERIES_63", "Series 63"),
        Series65 => ("SERIES_65", "Series 65"),
    }
}

/// One selectable option of an enumeration.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CatalogOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Every enumeration offered by the registration forms.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Catalog {
    pub company_sizes: Vec<CatalogOption>,
    pub expertise_areas: Vec<CatalogOption>,
    pub certifications: Vec<CatalogOption>,
    pub languages: Vec<&'static str>,
}

impl Catalog {
    /// Build the catalog from the enumeration definitions.
    pub fn new() -> Self {
        Self {
            company_sizes: CompanySize::ALL
                .iter()
                .map(|v| CatalogOption { value: v.as_str(), label: v.label() })
                .collect(),
            expertise_areas: FinancialExpertiseArea::ALL
                .iter()
                .map(|v| CatalogOption { value: v.as_str(), label: v.label() })
                .collect(),
            certifications: FinancialCertification::ALL
                .iter()
                .map(|v| CatalogOption { value: v.as_str(), label: v.label() })
                .collect(),
            languages: SUGGESTED_LANGUAGES.to_vec(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
