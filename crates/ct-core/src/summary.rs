//! Calorie totals derived from the activity list.

use serde::Serialize;

use crate::activity::Activity;
use crate::category::Category;

/// Consumed, burned and net calories for a set of activities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CalorieSummary {
    pub consumed: f64,
    pub burned: f64,
    pub net: f64,
}

impl CalorieSummary {
    /// Sums calories per category. Pure; callers recompute after every
    /// change to the list rather than caching the result.
    pub fn from_activities(activities: &[Activity]) -> Self {
        let consumed = total_for(activities, Category::Consumption);
        let burned = total_for(activities, Category::Expenditure);
        Self {
            consumed,
            burned,
            net: consumed - burned,
        }
    }

    /// False once a total has left the `f64` range. Each activity is finite,
    /// but enough huge ones can still overflow the sums.
    pub const fn is_finite(&self) -> bool {
        self.consumed.is_finite() && self.burned.is_finite() && self.net.is_finite()
    }
}

fn total_for(activities: &[Activity], category: Category) -> f64 {
    activities
        .iter()
        .filter(|a| a.category == category)
        .fold(0.0, |total, a| total + a.calories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityId;

    fn activity(id: &str, category: Category, calories: f64) -> Activity {
        Activity {
            id: ActivityId::new(id).unwrap(),
            category,
            name: id.to_string(),
            calories,
        }
    }

    #[test]
    fn empty_list_is_all_zero() {
        let summary = CalorieSummary::from_activities(&[]);
        assert_eq!(summary, CalorieSummary::default());
        // `-0.0 == 0.0`, so check the sign too: it shows up when rendered.
        assert!(summary.consumed.is_sign_positive());
        assert!(summary.burned.is_sign_positive());
        assert!(summary.net.is_sign_positive());
        insta::assert_snapshot!(
            serde_json::to_string(&summary).unwrap(),
            @r#"{"consumed":0.0,"burned":0.0,"net":0.0}"#
        );
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "integral calorie sums are exact in f64"
    )]
    fn sums_by_category() {
        let activities = [
            activity("a", Category::Consumption, 300.0),
            activity("b", Category::Expenditure, 150.0),
            activity("c", Category::Consumption, 200.0),
        ];
        let summary = CalorieSummary::from_activities(&activities);

        assert_eq!(summary.consumed, 500.0);
        assert_eq!(summary.burned, 150.0);
        assert_eq!(summary.net, 350.0);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "integral calorie sums are exact in f64"
    )]
    fn net_goes_negative_when_burning_more() {
        let activities = [
            activity("a", Category::Consumption, 100.0),
            activity("b", Category::Expenditure, 400.0),
        ];
        let summary = CalorieSummary::from_activities(&activities);

        assert_eq!(summary.net, -300.0);
        assert!(summary.consumed >= 0.0);
        assert!(summary.burned >= 0.0);
    }

    #[test]
    #[expect(
        clippy::float_cmp,
        reason = "integral calorie sums are exact in f64"
    )]
    fn only_one_category_present() {
        let activities = [
            activity("a", Category::Expenditure, 250.0),
            activity("b", Category::Expenditure, 50.0),
        ];
        let summary = CalorieSummary::from_activities(&activities);

        assert_eq!(summary.consumed, 0.0);
        assert!(summary.consumed.is_sign_positive());
        assert_eq!(summary.burned, 300.0);
        assert_eq!(summary.net, -300.0);
    }

    #[test]
    fn overflowing_totals_are_not_finite() {
        let activities = [
            activity("a", Category::Consumption, 1e308),
            activity("b", Category::Consumption, 1e308),
        ];
        let summary = CalorieSummary::from_activities(&activities);

        assert!(!summary.is_finite());
        assert!(CalorieSummary::from_activities(&activities[..1]).is_finite());
    }

    #[test]
    fn serializes_all_three_totals() {
        let summary = CalorieSummary::from_activities(&[activity(
            "a",
            Category::Consumption,
            120.0,
        )]);
        insta::assert_snapshot!(
            serde_json::to_string(&summary).unwrap(),
            @r#"{"consumed":120.0,"burned":0.0,"net":120.0}"#
        );
    }
}
