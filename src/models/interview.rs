//! Interview record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One interview report from an employer's interviews page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interview {
    /// Numeric identifier embedded in the container marker
    pub id: String,

    /// Day the interview was posted
    pub date: NaiveDate,

    /// Headline, e.g. "Mechanical Engineer Intern Interview"
    pub title: String,

    /// How the candidate applied
    pub application: Vec<String>,

    /// Description of the interview process
    pub process: Vec<String>,

    /// Questions asked during the interview
    pub questions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_date_as_calendar_day() {
        let interview = Interview {
            id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2021, 4, 2).unwrap(),
            title: "Intern Interview".to_string(),
            application: vec![],
            process: vec![],
            questions: vec![],
        };
        let value = serde_json::to_value(&interview).unwrap();
        assert_eq!(value["date"], "2021-04-02");
        assert_eq!(value["application"], serde_json::json!([]));
    }
}
