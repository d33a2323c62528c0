//! Filter panel state
//!
//! Owns the criteria being edited and the filtered view currently shown.
//! Input events mutate the criteria through setters; the view only changes
//! on an explicit filter or clear.

use chrono::NaiveDate;

use crate::filter;
use crate::models::{parse_amount, Dataset, FilterCriteria, Transaction};

/// Criteria plus the view derived from them
#[derive(Debug, Clone)]
pub struct FilterPanel {
    dataset: Dataset,
    criteria: FilterCriteria,
    view: Vec<Transaction>,
}

impl FilterPanel {
    /// Create a panel over a dataset, showing every record
    pub fn new(dataset: Dataset) -> Self {
        let view = dataset.to_vec();
        Self {
            dataset,
            criteria: FilterCriteria::new(),
            view,
        }
    }

    /// The canonical dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The criteria as currently edited
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The filtered view as last computed
    pub fn view(&self) -> &[Transaction] {
        &self.view
    }

    /// Accept a two-element range selection in one call
    ///
    /// A selection whose end precedes its start restarts the range from the
    /// new date with no end.
    pub fn select_date_range(&mut self, selection: [Option<NaiveDate>; 2]) {
        let [start, end] = selection;
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) if e < s => (Some(e), None),
            other => other,
        };
        self.criteria.start_date = start;
        self.criteria.end_date = end;
    }

    /// Set the payee pattern
    pub fn set_name_pattern(&mut self, pattern: impl Into<String>) {
        self.criteria.name_pattern = pattern.into();
    }

    /// Set the minimum amount from raw input text
    pub fn set_min_amount(&mut self, input: &str) {
        self.criteria.min_amount = parse_amount(input);
    }

    /// Set the maximum amount from raw input text
    pub fn set_max_amount(&mut self, input: &str) {
        self.criteria.max_amount = parse_amount(input);
    }

    /// Recompute the view from the dataset and current criteria
    pub fn apply_filter(&mut self) -> &[Transaction] {
        self.view = filter::apply(&self.dataset, &self.criteria);
        log::info!(
            "filter applied: {} of {} records shown",
            self.view.len(),
            self.dataset.len()
        );
        &self.view
    }

    /// Reset every criterion and show the full dataset again
    pub fn clear_all(&mut self) {
        self.criteria = FilterCriteria::new();
        self.view = self.dataset.to_vec();
        log::info!("filters cleared");
    }

    /// Whether the view currently hides any record
    pub fn is_filtered(&self) -> bool {
        self.view.len() != self.dataset.len()
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new(Dataset::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_starts_with_full_dataset() {
        let panel = FilterPanel::default();
        assert_eq!(panel.view().len(), 10);
        assert!(panel.criteria().is_empty());
        assert!(!panel.is_filtered());
    }

    #[test]
    fn test_setters_do_not_refilter() {
        let mut panel = FilterPanel::default();
        panel.set_name_pattern("david");
        assert_eq!(panel.view().len(), 10);

        panel.apply_filter();
        assert_eq!(panel.view().len(), 2);
        assert!(panel.is_filtered());
    }

    #[test]
    fn test_amount_setters_coerce() {
        let mut panel = FilterPanel::default();
        panel.set_min_amount("150");
        panel.set_max_amount("not a number");
        assert_eq!(panel.criteria().min_amount, Some(150.0));
        assert_eq!(panel.criteria().max_amount, None);

        let view = panel.apply_filter();
        assert!(view.iter().all(|t| t.amount >= 150.0));
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_select_date_range_is_atomic() {
        let mut panel = FilterPanel::default();
        panel.select_date_range([date(2023, 2, 1), date(2023, 2, 28)]);
        assert_eq!(panel.criteria().start_date, date(2023, 2, 1));
        assert_eq!(panel.criteria().end_date, date(2023, 2, 28));
        assert_eq!(panel.apply_filter().len(), 3);

        // first click of a new selection
        panel.select_date_range([date(2023, 1, 1), None]);
        assert_eq!(panel.criteria().end_date, None);
        assert_eq!(panel.apply_filter().len(), 10);
    }

    #[test]
    fn test_select_date_range_reversed_restarts() {
        let mut panel = FilterPanel::default();
        panel.select_date_range([date(2023, 3, 1), date(2023, 1, 1)]);
        assert_eq!(panel.criteria().start_date, date(2023, 1, 1));
        assert_eq!(panel.criteria().end_date, None);
    }

    #[test]
    fn test_clear_all_restores_full_dataset() {
        let mut panel = FilterPanel::default();
        panel.set_name_pattern("zzz");
        panel.set_min_amount("10");
        panel.select_date_range([date(2023, 1, 1), date(2023, 1, 31)]);
        panel.apply_filter();
        assert!(panel.view().is_empty());

        panel.clear_all();
        assert!(panel.criteria().is_empty());
        assert_eq!(panel.view(), panel.dataset().records());

        panel.clear_all();
        assert!(panel.criteria().is_empty());
        assert_eq!(panel.view(), panel.dataset().records());
    }

    #[test]
    fn test_filter_with_empty_criteria_matches_clear() {
        let mut panel = FilterPanel::default();
        panel.set_name_pattern("jane");
        panel.apply_filter();
        panel.set_name_pattern("");
        panel.apply_filter();
        assert_eq!(panel.view(), panel.dataset().records());
    }
}
