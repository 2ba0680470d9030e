//! Synthetic trend series.
//!
//! Illustrative only: nothing is read from history. The series ramps into the
//! current overall score so the chart has a plausible shape.

use chrono::{Months, NaiveDate};
use rand::Rng;

use crate::domain::entities::TrendPoint;

/// Number of periods in the series, oldest first.
pub const TREND_PERIODS: u32 = 3;

/// Score discount applied per month of age.
const DISCOUNT_PER_MONTH: f64 = 15.0;

/// Maximum absolute jitter added to each non-zero period.
const JITTER: f64 = 5.0;

/// Builds the trend series ending at the month of `today`.
///
/// A zero overall score yields a flat zero line with no jitter.
pub fn synthetic_trend<R: Rng + ?Sized>(
    overall_score: u8,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<TrendPoint> {
    (0..TREND_PERIODS)
        .rev()
        .map(|months_ago| {
            let period = period_label(today, months_ago);
            let score = if overall_score == 0 {
                0
            } else {
                let base = (f64::from(overall_score) - f64::from(months_ago) * DISCOUNT_PER_MONTH)
                    .max(0.0);
                let jitter = rng.random_range(-JITTER..=JITTER);
                (base + jitter).clamp(0.0, 100.0).round() as u8
            };
            TrendPoint { period, score }
        })
        .collect()
}

fn period_label(today: NaiveDate, months_ago: u32) -> String {
    today
        .checked_sub_months(Months::new(months_ago))
        .unwrap_or(today)
        .format("%b")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mid_december() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    #[test]
    fn test_zero_score_is_flat_line() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let trend = synthetic_trend(0, mid_december(), &mut rng);
            assert_eq!(trend.len(), 3);
            assert!(trend.iter().all(|point| point.score == 0));
        }
    }

    #[test]
    fn test_labels_are_oldest_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let labels: Vec<String> = synthetic_trend(50, mid_december(), &mut rng)
            .into_iter()
            .map(|point| point.period)
            .collect();

        assert_eq!(labels, vec!["Oct", "Nov", "Dec"]);
    }

    #[test]
    fn test_labels_cross_year_boundary() {
        let mut rng = StdRng::seed_from_u64(1);
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let labels: Vec<String> = synthetic_trend(50, today, &mut rng)
            .into_iter()
            .map(|point| point.period)
            .collect();

        assert_eq!(labels, vec!["Nov", "Dec", "Jan"]);
    }

    #[test]
    fn test_scores_stay_near_discounted_base() {
        let mut rng = StdRng::seed_from_u64(42);
        for overall in [1u8, 10, 44, 87, 100] {
            let trend = synthetic_trend(overall, mid_december(), &mut rng);
            for (point, months_ago) in trend.iter().zip([2u32, 1, 0]) {
                let base = (f64::from(overall) - f64::from(months_ago) * 15.0).max(0.0);
                let low = (base - 5.0).max(0.0).floor();
                let high = (base + 5.0).min(100.0).ceil();
                let score = f64::from(point.score);
                assert!(
                    score >= low && score <= high,
                    "overall={overall} months_ago={months_ago} score={score}"
                );
            }
        }
    }
}
