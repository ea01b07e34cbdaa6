/// Popularity Recommender
///
/// Ranks items by how often they were interacted with inside a trailing
/// window that ends on the day of the most recent interaction.
use std::collections::HashMap;

use chrono::{Days, NaiveDateTime, NaiveTime};
use tracing::debug;

use super::interactions::Interaction;
use super::registry::{RankerError, Recommender};

pub const DEFAULT_MAX_K: usize = 10;
pub const DEFAULT_DAYS: u32 = 30;
pub const DEFAULT_ITEM_COLUMN: &str = "item_id";
pub const DEFAULT_DT_COLUMN: &str = "date";

/// Most-popular-items model
#[derive(Debug, Clone)]
pub struct PopularRecommender {
    max_k: usize,
    days: u32,
    item_column: String,
    dt_column: String,
    /// `None` until `fit` has run
    recommendations: Option<Vec<i64>>,
}

impl Default for PopularRecommender {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_K,
            DEFAULT_DAYS,
            DEFAULT_ITEM_COLUMN,
            DEFAULT_DT_COLUMN,
        )
    }
}

impl PopularRecommender {
    pub fn new(
        max_k: usize,
        days: u32,
        item_column: impl Into<String>,
        dt_column: impl Into<String>,
    ) -> Self {
        Self {
            max_k,
            days,
            item_column: item_column.into(),
            dt_column: dt_column.into(),
            recommendations: None,
        }
    }

    pub fn max_k(&self) -> usize {
        self.max_k
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Column holding item identifiers in the source interaction table
    pub fn item_column(&self) -> &str {
        &self.item_column
    }

    /// Column holding event timestamps in the source interaction table
    pub fn dt_column(&self) -> &str {
        &self.dt_column
    }

    pub fn is_fitted(&self) -> bool {
        self.recommendations.is_some()
    }

    /// Compute and store the top-`max_k` items of the trailing window.
    ///
    /// The window covers the calendar days `[max_date - days, max_date]`,
    /// where `max_date` is the day of the latest event. Items with equal
    /// counts keep the order of their first in-window occurrence. Any previous
    /// result is replaced and an empty table yields an empty ranking.
    pub fn fit(&mut self, interactions: &[Interaction]) {
        let ranked = match interactions.iter().map(|i| i.event_date).max() {
            Some(max_date) => {
                let window_start = max_date
                    .date()
                    .checked_sub_days(Days::new(u64::from(self.days)))
                    .map(|day| day.and_time(NaiveTime::MIN));
                rank_by_count(interactions, window_start, self.max_k)
            }
            None => Vec::new(),
        };

        debug!(
            interactions = interactions.len(),
            ranked = ranked.len(),
            days = self.days,
            "Popular model fitted"
        );

        self.recommendations = Some(ranked);
    }

    /// First `n` items of the stored ranking.
    pub fn recommend(&self, n: usize) -> Result<Vec<i64>, RankerError> {
        let recommendations = self
            .recommendations
            .as_ref()
            .ok_or(RankerError::NotFitted)?;

        Ok(recommendations.iter().take(n).copied().collect())
    }
}

impl Recommender for PopularRecommender {
    fn recommend(&self, n: usize) -> Result<Vec<i64>, RankerError> {
        PopularRecommender::recommend(self, n)
    }
}

/// Count in-window events per item and keep the `limit` most frequent.
///
/// `window_start == None` means the window reaches past the earliest
/// representable date, so every event counts.
fn rank_by_count(
    interactions: &[Interaction],
    window_start: Option<NaiveDateTime>,
    limit: usize,
) -> Vec<i64> {
    // item_id -> (count, first occurrence)
    let mut counts: HashMap<i64, (usize, usize)> = HashMap::new();

    for (position, interaction) in interactions
        .iter()
        .filter(|i| window_start.map_or(true, |start| i.event_date >= start))
        .enumerate()
    {
        counts
            .entry(interaction.item_id)
            .or_insert((0, position))
            .0 += 1;
    }

    let mut ranked: Vec<(i64, usize, usize)> = counts
        .into_iter()
        .map(|(item_id, (count, first_seen))| (item_id, count, first_seen))
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(item_id, _, _)| item_id)
        .collect()
}
