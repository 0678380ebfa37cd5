use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HistorySort {
    #[serde(rename = "court")]
    Court,
    #[serde(rename = "playerA")]
    PlayerA,
    #[serde(rename = "playerB")]
    PlayerB,
    #[serde(rename = "startTime")]
    StartTime,
    #[default]
    #[serde(rename = "endTime")]
    EndTime,
    #[serde(rename = "id")]
    Id,
}

impl HistorySort {
    /// Unknown keys sort by end time.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "court" | "courtNumber" => HistorySort::Court,
            "playerA" => HistorySort::PlayerA,
            "playerB" => HistorySort::PlayerB,
            "startTime" | "actualStartTime" => HistorySort::StartTime,
            "id" => HistorySort::Id,
            _ => HistorySort::EndTime,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn from_key(key: &str) -> Self {
        if key.trim().eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// Filter and order for the completed-match history. Dates are UTC days of
/// the end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryQuery {
    pub court: Option<u32>,
    pub date: Option<NaiveDate>,
    pub sort: HistorySort,
    pub direction: SortDirection,
}
