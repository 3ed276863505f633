//! SurveyTopic - the discriminator that selects a conditional field group.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Topic chosen in the `surveyTopic` field.
///
/// An unset (empty) topic is modelled as `Option::<SurveyTopic>::None`
/// throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SurveyTopic {
    Technology,
    Health,
    Education,
}

impl SurveyTopic {
    /// All topics in the order the topic selector lists them.
    pub const ALL: [SurveyTopic; 3] = [
        SurveyTopic::Technology,
        SurveyTopic::Health,
        SurveyTopic::Education,
    ];

    /// Returns the raw value stored in the `surveyTopic` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyTopic::Technology => "Technology",
            SurveyTopic::Health => "Health",
            SurveyTopic::Education => "Education",
        }
    }

    /// Interprets a raw field value; empty or unrecognised input yields `None`.
    pub fn from_raw(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for SurveyTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurveyTopic {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Technology" => Ok(SurveyTopic::Technology),
            "Health" => Ok(SurveyTopic::Health),
            "Education" => Ok(SurveyTopic::Education),
            "" => Err(ValidationError::empty_field("surveyTopic")),
            other => Err(ValidationError::invalid_format(
                "surveyTopic",
                format!("unknown topic '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_listed_topic() {
        for topic in SurveyTopic::ALL {
            assert_eq!(topic.as_str().parse::<SurveyTopic>(), Ok(topic));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("technology".parse::<SurveyTopic>().is_err());
    }

    #[test]
    fn empty_value_is_unset() {
        assert_eq!(SurveyTopic::from_raw(""), None);
        assert_eq!(
            "".parse::<SurveyTopic>(),
            Err(ValidationError::empty_field("surveyTopic"))
        );
    }

    #[test]
    fn unknown_value_is_unset() {
        assert_eq!(SurveyTopic::from_raw("Finance"), None);
    }
}
