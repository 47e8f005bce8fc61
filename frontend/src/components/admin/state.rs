//! Component state for the admin dashboard.
//!
//! Holds the locally cached award collection, the form backing store, and
//! the last failed request. The cache is replaced wholesale by each fetch;
//! the form is cleared only after a confirmed create, so a failed
//! submission never loses what the user typed.

use common::model::award::Award;

/// The free-text fields of the award form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Location,
    Category,
    Kind,
    Year,
    Competition,
    AwardName,
    School,
    Rank,
    Participants,
    AdditionalInfo,
    Comments,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Location,
        Field::Category,
        Field::Kind,
        Field::Year,
        Field::Competition,
        Field::AwardName,
        Field::School,
        Field::Rank,
        Field::Participants,
        Field::AdditionalInfo,
        Field::Comments,
    ];

    /// Placeholder label shown inside the empty input, matching the wire
    /// name of the field.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Location => "location",
            Field::Category => "category",
            Field::Kind => "type",
            Field::Year => "year",
            Field::Competition => "competition",
            Field::AwardName => "awardName",
            Field::School => "school",
            Field::Rank => "rank",
            Field::Participants => "participants",
            Field::AdditionalInfo => "additionalInfo",
            Field::Comments => "comments",
        }
    }
}

/// Form backing store, one string per field, empty by default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AwardForm {
    location: String,
    category: String,
    kind: String,
    year: String,
    competition: String,
    award_name: String,
    school: String,
    rank: String,
    participants: String,
    additional_info: String,
    comments: String,
}

impl AwardForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Location => &self.location,
            Field::Category => &self.category,
            Field::Kind => &self.kind,
            Field::Year => &self.year,
            Field::Competition => &self.competition,
            Field::AwardName => &self.award_name,
            Field::School => &self.school,
            Field::Rank => &self.rank,
            Field::Participants => &self.participants,
            Field::AdditionalInfo => &self.additional_info,
            Field::Comments => &self.comments,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Location => self.location = value,
            Field::Category => self.category = value,
            Field::Kind => self.kind = value,
            Field::Year => self.year = value,
            Field::Competition => self.competition = value,
            Field::AwardName => self.award_name = value,
            Field::School => self.school = value,
            Field::Rank => self.rank = value,
            Field::Participants => self.participants = value,
            Field::AdditionalInfo => self.additional_info = value,
            Field::Comments => self.comments = value,
        }
    }

    /// Resets every field to its empty-string default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds the create payload. The store assigns the id.
    pub fn to_record(&self) -> Award {
        Award {
            id: None,
            location: self.location.clone(),
            category: self.category.clone(),
            kind: self.kind.clone(),
            year: self.year.clone(),
            competition: self.competition.clone(),
            award_name: self.award_name.clone(),
            school: self.school.clone(),
            rank: self.rank.clone(),
            participants: self.participants.clone(),
            additional_info: self.additional_info.clone(),
            comments: self.comments.clone(),
        }
    }
}

/// The request that failed, kept so Retry can re-dispatch it.
#[derive(Clone, Debug, PartialEq)]
pub enum FailedAction {
    Load,
    Create,
    Delete(String),
}

/// A failed request surfaced in the error banner.
#[derive(Clone, Debug, PartialEq)]
pub struct FailedRequest {
    pub action: FailedAction,
    pub detail: String,
}

impl FailedRequest {
    /// Banner text naming the operation that failed.
    pub fn describe(&self) -> String {
        match &self.action {
            FailedAction::Load => format!("Could not load awards: {}", self.detail),
            FailedAction::Create => format!("Could not save the award: {}", self.detail),
            FailedAction::Delete(_) => format!("Could not delete the award: {}", self.detail),
        }
    }
}

/// Main state container for the admin dashboard.
pub struct AdminPanel {
    /// Local cache of the award collection.
    pub awards: Vec<Award>,
    /// Current form contents. Cleared only after a successful create.
    pub form: AwardForm,
    /// Last failed request, shown in the banner until retried or dismissed.
    pub error: Option<FailedRequest>,
    /// Guard so the first-render fetch runs once.
    pub loaded: bool,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self {
            awards: Vec::new(),
            form: AwardForm::default(),
            error: None,
            loaded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_starts_empty_and_clears_back_to_empty() {
        let mut form = AwardForm::default();
        assert!(Field::ALL.iter().all(|field| form.value(*field).is_empty()));

        form.set_value(Field::AwardName, "National Champion".into());
        form.set_value(Field::Year, "2025".into());
        assert_eq!(form.value(Field::AwardName), "National Champion");
        assert_eq!(form.value(Field::Year), "2025");

        form.clear();
        assert!(Field::ALL.iter().all(|field| form.value(*field).is_empty()));
    }

    #[test]
    fn record_payload_never_carries_an_id() {
        let mut form = AwardForm::default();
        form.set_value(Field::Kind, "Team".into());
        form.set_value(Field::Competition, "Regional Moot".into());

        let record = form.to_record();
        assert_eq!(record.id, None);
        assert_eq!(record.kind, "Team");
        assert_eq!(record.competition, "Regional Moot");
        assert_eq!(record.school, "");
    }

    #[test]
    fn every_field_round_trips_through_the_form() {
        let mut form = AwardForm::default();
        for (n, field) in Field::ALL.iter().enumerate() {
            form.set_value(*field, format!("value {n}"));
        }
        for (n, field) in Field::ALL.iter().enumerate() {
            assert_eq!(form.value(*field), format!("value {n}"));
        }
    }

    #[test]
    fn banner_text_names_the_failed_operation() {
        let failed = FailedRequest {
            action: FailedAction::Delete("6543f0c2a1".into()),
            detail: "status 500".into(),
        };
        assert!(failed.describe().contains("delete"));
        assert!(failed.describe().contains("status 500"));

        let failed = FailedRequest {
            action: FailedAction::Load,
            detail: "NetworkError".into(),
        };
        assert!(failed.describe().contains("load"));
    }
}
