//! Role-specific portfolio documents.
//!
//! `StartupDetails` and `InvestorDetails` are free-form nested documents owned
//! by a user. The client always sends the whole document back on save; list
//! entries have no server identity beyond their position.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::CompanyId;
use crate::user::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub description: Option<String>,
    pub founded_year: Option<i32>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialProfile {
    pub revenue: Option<f64>,
    pub burn_rate: Option<f64>,
    pub runway_months: Option<u32>,
    pub valuation: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundingRound {
    pub round_type: String,
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub investors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub linkedin: Option<String>,
}

/// Kind of verification document a startup can attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PitchDeck,
    IncorporationCertificate,
    FinancialStatement,
    CapTable,
    Other,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::PitchDeck => "pitch_deck",
            DocumentKind::IncorporationCertificate => "incorporation_certificate",
            DocumentKind::FinancialStatement => "financial_statement",
            DocumentKind::CapTable => "cap_table",
            DocumentKind::Other => "other",
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pitch_deck" => Ok(DocumentKind::PitchDeck),
            "incorporation_certificate" => Ok(DocumentKind::IncorporationCertificate),
            "financial_statement" => Ok(DocumentKind::FinancialStatement),
            "cap_table" => Ok(DocumentKind::CapTable),
            "other" => Ok(DocumentKind::Other),
            _ => Err(ValidationError::Required {
                field: "document kind",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    pub kind: DocumentKind,
    pub url: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

/// A file picked locally and waiting for the "send for verification" upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl StagedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Self { path, file_name }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartupDetails {
    pub company_profile: CompanyProfile,
    pub financial_profile: FinancialProfile,
    pub funding_rounds: Vec<FundingRound>,
    pub team_members: Vec<TeamMember>,
    pub documents: Vec<UploadedDocument>,
    pub pitch_video_url: Option<String>,
}

/// A single recorded investment of an investor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[serde(alias = "name")]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
}

/// Form input for a new holding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldingInput {
    pub company_name: String,
    pub company_id: Option<CompanyId>,
    pub date: Option<NaiveDate>,
    pub amount: f64,
    pub doc_url: Option<String>,
}

impl HoldingInput {
    /// Validate and build the holding, defaulting the date to `today`.
    pub fn into_holding(self, today: NaiveDate) -> Result<Holding, ValidationError> {
        let company_name = self.company_name.trim().to_string();
        if company_name.is_empty() {
            return Err(ValidationError::Required {
                field: "company name",
            });
        }
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount { field: "amount" });
        }
        Ok(Holding {
            company_name,
            company_id: self.company_id,
            date: Some(self.date.unwrap_or(today)),
            amount: self.amount,
            doc_url: self.doc_url,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestorDetails {
    pub firm: Option<String>,
    pub focus_areas: Vec<String>,
    pub ticket_min: Option<f64>,
    pub ticket_max: Option<f64>,
    pub holdings: Vec<Holding>,
    pub previous_investments: Vec<String>,
}
