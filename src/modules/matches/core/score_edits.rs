// Raw score edits as submitted by a client.
//
// Purpose
// - Carry a partial update of score fields in the flat document vocabulary.
//
// Notes
// - A field that is absent leaves the stored value alone. A field sent as null clears it.
// - Set slot arrays may be shorter than three; missing slots are left alone.

use serde::{Deserialize, Deserializer};

use crate::modules::matches::core::game_format::{GameFormat, SET_SLOTS};
use crate::modules::matches::core::score::{
    BestOfThreeScore, MatchScore, ScoreInput, SingleSetScore, coerce_score,
};

/// `None` when the field was not sent, `Some(None)` when it was sent as null.
pub type FieldEdit = Option<Option<ScoreInput>>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SlotEdits {
    #[serde(rename = "A", default)]
    pub a: Vec<Option<ScoreInput>>,
    #[serde(rename = "B", default)]
    pub b: Vec<Option<ScoreInput>>,
}

impl SlotEdits {
    fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEdits {
    #[serde(default, deserialize_with = "sent")]
    pub score_a: FieldEdit,
    #[serde(default, deserialize_with = "sent")]
    pub score_b: FieldEdit,
    #[serde(default, deserialize_with = "sent")]
    pub tie_break_a: FieldEdit,
    #[serde(default, deserialize_with = "sent")]
    pub tie_break_b: FieldEdit,
    #[serde(default)]
    pub set_scores: Option<SlotEdits>,
    #[serde(default)]
    pub set_tie_breaks: Option<SlotEdits>,
}

fn sent<'de, D>(deserializer: D) -> Result<FieldEdit, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<ScoreInput>::deserialize(deserializer).map(Some)
}

impl ScoreEdits {
    pub fn touches_single_set(&self) -> bool {
        self.score_a.is_some()
            || self.score_b.is_some()
            || self.tie_break_a.is_some()
            || self.tie_break_b.is_some()
    }

    pub fn touches_sets(&self) -> bool {
        self.set_scores.as_ref().is_some_and(|s| !s.is_empty())
            || self.set_tie_breaks.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// Whether every sent field belongs to the payload shape of `format`.
    pub fn fits(&self, format: GameFormat) -> bool {
        if format.is_best_of_three() {
            !self.touches_single_set()
        } else {
            !self.touches_sets()
        }
    }

    /// Applies the fields that belong to `format` on top of `score`. A payload
    /// of the wrong shape is replaced by the empty payload first.
    pub fn apply_to(&self, score: MatchScore, format: GameFormat) -> MatchScore {
        let base = if score.fits(format) {
            score
        } else {
            MatchScore::empty_for(format)
        };
        match base {
            MatchScore::SingleSet(mut single) => {
                self.apply_single_set(&mut single);
                MatchScore::SingleSet(single)
            }
            MatchScore::BestOfThree(mut sets) => {
                self.apply_sets(&mut sets);
                MatchScore::BestOfThree(sets)
            }
        }
    }

    fn apply_single_set(&self, score: &mut SingleSetScore) {
        apply_field(&mut score.a, &self.score_a);
        apply_field(&mut score.b, &self.score_b);
        apply_field(&mut score.tie_break_a, &self.tie_break_a);
        apply_field(&mut score.tie_break_b, &self.tie_break_b);
    }

    fn apply_sets(&self, score: &mut BestOfThreeScore) {
        if let Some(edits) = &self.set_scores {
            apply_slots(&mut score.sets_a, &edits.a);
            apply_slots(&mut score.sets_b, &edits.b);
        }
        if let Some(edits) = &self.set_tie_breaks {
            apply_slots(&mut score.tie_breaks_a, &edits.a);
            apply_slots(&mut score.tie_breaks_b, &edits.b);
        }
    }
}

fn apply_field(target: &mut Option<u32>, edit: &FieldEdit) {
    if let Some(value) = edit {
        *target = coerce_score(value.as_ref());
    }
}

fn apply_slots(target: &mut [Option<u32>; SET_SLOTS], edits: &[Option<ScoreInput>]) {
    for (slot, edit) in target.iter_mut().zip(edits) {
        *slot = coerce_score(edit.as_ref());
    }
}
