use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned when a string does not name any variant of a UI enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown option: {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Digital,
    Creative,
    Domestic,
    Academic,
    Professional,
    Business,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Digital,
        Category::Creative,
        Category::Domestic,
        Category::Academic,
        Category::Professional,
        Category::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Digital => "Digital",
            Category::Creative => "Creative",
            Category::Domestic => "Domestic",
            Category::Academic => "Academic",
            Category::Professional => "Professional",
            Category::Business => "Business",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poster {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub rating: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Open,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open for Bids",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub skills: Vec<String>,
    pub location: String,
    /// Whole naira.
    pub budget: u64,
    pub deadline: NaiveDate,
    pub posted_by: Poster,
    pub bid_count: u32,
    #[serde(default)]
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidDecision {
    Accept,
    Reject,
}

/// A decision was made on a bid that already left `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidAlreadyDecided(pub BidStatus);

impl fmt::Display for BidAlreadyDecided {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "bid is already {}", self.0.label().to_lowercase())
    }
}

impl BidStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BidStatus::Pending => "Pending",
            BidStatus::Accepted => "Accepted",
            BidStatus::Rejected => "Rejected",
        }
    }

    /// Accepted and rejected are terminal.
    pub fn apply(self, decision: BidDecision) -> Result<BidStatus, BidAlreadyDecided> {
        match (self, decision) {
            (BidStatus::Pending, BidDecision::Accept) => Ok(BidStatus::Accepted),
            (BidStatus::Pending, BidDecision::Reject) => Ok(BidStatus::Rejected),
            (done, _) => Err(BidAlreadyDecided(done)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: String,
    pub task_id: String,
    pub bidder_id: String,
    pub bidder_name: String,
    pub bidder_avatar: String,
    pub amount: u64,
    pub proposal: String,
    pub timeframe: String,
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
}

impl Bid {
    pub fn decide(&mut self, decision: BidDecision) -> Result<BidStatus, BidAlreadyDecided> {
        self.status = self.status.apply(decision)?;
        Ok(self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Counterpart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Full,
    Guest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Basic,
    Executive,
}

impl SubscriptionTier {
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionTier::Basic => "Basic Membership (1,000 naira/year)",
            SubscriptionTier::Executive => "Executive Membership (5,000 naira/year)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualification {
    Primary,
    Secondary,
    Ond,
    Hnd,
    Bachelors,
    Masters,
    Doctorate,
    Other,
}

impl Qualification {
    pub const ALL: [Qualification; 8] = [
        Qualification::Primary,
        Qualification::Secondary,
        Qualification::Ond,
        Qualification::Hnd,
        Qualification::Bachelors,
        Qualification::Masters,
        Qualification::Doctorate,
        Qualification::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Qualification::Primary => "primary",
            Qualification::Secondary => "secondary",
            Qualification::Ond => "ond",
            Qualification::Hnd => "hnd",
            Qualification::Bachelors => "bachelors",
            Qualification::Masters => "masters",
            Qualification::Doctorate => "doctorate",
            Qualification::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Qualification::Primary => "Primary School",
            Qualification::Secondary => "Secondary School",
            Qualification::Ond => "OND",
            Qualification::Hnd => "HND",
            Qualification::Bachelors => "Bachelor's Degree",
            Qualification::Masters => "Master's Degree",
            Qualification::Doctorate => "Doctorate",
            Qualification::Other => "Other",
        }
    }
}

impl FromStr for Qualification {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Qualification::ALL
            .into_iter()
            .find(|q| q.value() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub course_of_study: String,
    pub highest_qualification: Option<Qualification>,
}

/// Registration payload handed to the auth provider as user metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip)]
    pub password: String,
    pub location: String,
    pub national_id: String,
    pub skills: Vec<String>,
    pub skills_to_learn: Vec<String>,
    pub education: Education,
    /// `None` for guest accounts.
    pub subscription_tier: Option<SubscriptionTier>,
    pub account_type: AccountType,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
        JobType::Internship,
        JobType::Remote,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Freelance => "freelance",
            JobType::Internship => "internship",
            JobType::Remote => "remote",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
            JobType::Internship => "Internship",
            JobType::Remote => "Remote",
        }
    }
}

impl FromStr for JobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|j| j.value() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    pub skills: Vec<String>,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub email_updates: bool,
    pub online_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { dark_mode: false, notifications: true, email_updates: true, online_mode: true }
    }
}

/// The signed-in account as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_bids_accept_or_reject_once() {
        assert_eq!(BidStatus::Pending.apply(BidDecision::Accept), Ok(BidStatus::Accepted));
        assert_eq!(BidStatus::Pending.apply(BidDecision::Reject), Ok(BidStatus::Rejected));
        assert_eq!(
            BidStatus::Accepted.apply(BidDecision::Reject),
            Err(BidAlreadyDecided(BidStatus::Accepted))
        );
        assert_eq!(
            BidStatus::Rejected.apply(BidDecision::Accept),
            Err(BidAlreadyDecided(BidStatus::Rejected))
        );
    }

    #[test]
    fn category_parses_its_own_name() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
        assert!("digital".parse::<Category>().is_err());
    }

    #[test]
    fn profile_metadata_never_carries_the_password() {
        let draft = ProfileDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "hunter22".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("hunter22"));
        assert!(json.contains("\"accountType\":\"full\""));
    }

    #[test]
    fn settings_fill_missing_fields_with_defaults() {
        let s: Settings = serde_json::from_str(r#"{"dark_mode": true}"#).unwrap();
        assert!(s.dark_mode);
        assert!(s.notifications);
        assert!(s.online_mode);
    }
}
