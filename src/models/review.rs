//! Review record.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// One employee review from an employer's reviews page.
///
/// Serialize only: absent advice is written as `[]`, so the output does not
/// tell a missing section apart from an empty one.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Review {
    /// Numeric identifier embedded in the element id
    pub id: String,

    /// Time the review was posted, in UTC
    pub date: DateTime<Utc>,

    /// Review headline
    pub title: String,

    /// Overall rating, usually 1.0 to 5.0
    pub rating: f64,

    pub pros: Vec<String>,

    pub cons: Vec<String>,

    /// Advice to management; `None` when the review has no such section.
    /// Serialized as an empty list in that case.
    #[serde(serialize_with = "serialize_advice")]
    pub advice: Option<Vec<String>>,
}

impl Review {
    /// Advice lines, empty when the section was absent.
    pub fn advice(&self) -> &[String] {
        self.advice.as_deref().unwrap_or_default()
    }
}

fn serialize_advice<S: Serializer>(
    advice: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    advice.as_deref().unwrap_or_default().serialize(serializer)
}
