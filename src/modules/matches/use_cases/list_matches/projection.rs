// Read-side views over stored match records.
//
// Purpose
// - Lay the board out as courts by rows, plus the unassigned pool.
// - Filter and sort the completed-match history.
//
// Boundaries
// - Pure functions over records already loaded from the store.

use std::cmp::Ordering;

use serde::Serialize;

use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::state::{BoardRow, CourtNames, MatchRecord, MatchStatus};
use crate::modules::matches::use_cases::list_matches::query::{
    HistoryQuery, HistorySort, SortDirection,
};
use crate::shared::core::primitives::is_on_utc_day;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CourtSlots {
    pub court: u32,
    pub name: String,
    pub current: Vec<MatchDocument>,
    pub next: Vec<MatchDocument>,
    pub next2: Vec<MatchDocument>,
}

impl CourtSlots {
    fn row_mut(&mut self, row: BoardRow) -> &mut Vec<MatchDocument> {
        match row {
            BoardRow::Current => &mut self.current,
            BoardRow::Next => &mut self.next,
            BoardRow::Next2 => &mut self.next2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub courts: Vec<CourtSlots>,
    pub unassigned: Vec<MatchDocument>,
}

/// Records must be ordered by id; every slot keeps that order. Completed
/// matches are left out. Positions beyond the configured courts land in the
/// unassigned pool.
pub fn build_board(records: &[MatchRecord], courts: u32, names: &CourtNames) -> BoardSnapshot {
    let mut board = BoardSnapshot {
        courts: (1..=courts)
            .map(|court| CourtSlots {
                court,
                name: names.name_for(court),
                ..CourtSlots::default()
            })
            .collect(),
        unassigned: Vec::new(),
    };
    for record in records.iter().filter(|r| r.status != MatchStatus::Completed) {
        let document = MatchDocument::from(record);
        match record.position.filter(|p| p.is_on_board(courts)) {
            Some(position) => board.courts[(position.court - 1) as usize]
                .row_mut(position.row)
                .push(document),
            None => board.unassigned.push(document),
        }
    }
    board
}

pub fn select_history(records: Vec<MatchRecord>, query: &HistoryQuery) -> Vec<MatchRecord> {
    let mut selected: Vec<MatchRecord> = records
        .into_iter()
        .filter(|r| r.is_decided())
        .filter(|r| query.court.is_none_or(|court| r.position.map(|p| p.court) == Some(court)))
        .filter(|r| {
            query.date.is_none_or(|date| {
                r.actual_end_time
                    .is_some_and(|end| is_on_utc_day(end, date))
            })
        })
        .collect();

    selected.sort_by(|a, b| {
        let ordering = compare_by(a, b, query.sort).then_with(|| a.id.cmp(&b.id));
        match query.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    selected
}

fn compare_by(a: &MatchRecord, b: &MatchRecord, sort: HistorySort) -> Ordering {
    match sort {
        HistorySort::Court => court_of(a).cmp(&court_of(b)),
        HistorySort::PlayerA => a.player_a.to_lowercase().cmp(&b.player_a.to_lowercase()),
        HistorySort::PlayerB => a.player_b.to_lowercase().cmp(&b.player_b.to_lowercase()),
        HistorySort::StartTime => a
            .actual_start_time
            .unwrap_or(0)
            .cmp(&b.actual_start_time.unwrap_or(0)),
        HistorySort::EndTime => a
            .actual_end_time
            .unwrap_or(0)
            .cmp(&b.actual_end_time.unwrap_or(0)),
        HistorySort::Id => a.id.cmp(&b.id),
    }
}

fn court_of(record: &MatchRecord) -> u32 {
    record.position.map_or(0, |p| p.court)
}
