use ordered_float::OrderedFloat;
use schema::RecordTemplate;
use std::cmp::Ordering;

/// Fight score of a record: `attack * 1.5 + hp * 1.2`.
pub fn fight_score(template: &RecordTemplate) -> OrderedFloat<f64> {
    OrderedFloat(f64::from(template.attack) * 1.5 + f64::from(template.hp) * 1.2)
}

/// Result of pitting two records of the same Pokedex against each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FightOutcome {
    pub first: &'static RecordTemplate,
    pub first_score: OrderedFloat<f64>,
    pub second: &'static RecordTemplate,
    pub second_score: OrderedFloat<f64>,
}

impl FightOutcome {
    pub fn resolve(first: &'static RecordTemplate, second: &'static RecordTemplate) -> Self {
        FightOutcome {
            first,
            first_score: fight_score(first),
            second,
            second_score: fight_score(second),
        }
    }

    /// The higher score wins; `None` on a tie.
    pub fn winner(&self) -> Option<&'static RecordTemplate> {
        match self.first_score.cmp(&self.second_score) {
            Ordering::Greater => Some(self.first),
            Ordering::Less => Some(self.second),
            Ordering::Equal => None,
        }
    }
}
