//! Priority-normalised action scores.

use crate::engine::LegalAction;

/// Highest score an action can get.
pub const MAX_SCORE: f64 = 10.0;

/// Score a chosen priority against the options it was chosen from.
///
/// `min(10, 10 * chosen / max)`, or 0 when no option has positive
/// priority. Pure: the same inputs always give the same score.
///
/// ```
/// use tianji::decision::score;
///
/// assert_eq!(score(0.4, &[0.2, 0.8, 0.4]), 5.0);
/// assert_eq!(score(0.8, &[0.2, 0.8, 0.4]), 10.0);
/// assert_eq!(score(0.5, &[]), 0.0);
/// ```
#[must_use]
pub fn score(chosen: f64, priorities: &[f64]) -> f64 {
    let max = priorities.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 0.0;
    }
    (MAX_SCORE * chosen / max).min(MAX_SCORE)
}

/// Score every option in a listing, in order.
#[must_use]
pub fn score_all(options: &[LegalAction]) -> Vec<f64> {
    let priorities: Vec<f64> = options.iter().map(|o| o.priority).collect();
    priorities.iter().map(|&p| score(p, &priorities)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Action;

    #[test]
    fn test_chosen_above_options_clamps() {
        assert_eq!(score(2.0, &[1.0]), 10.0);
    }

    #[test]
    fn test_non_positive_options() {
        assert_eq!(score(0.3, &[0.0, -1.0]), 0.0);
        assert_eq!(score(0.0, &[0.0]), 0.0);
    }

    #[test]
    fn test_ignores_nan_options() {
        assert_eq!(score(0.5, &[f64::NAN, 1.0]), 5.0);
    }

    #[test]
    fn test_score_all() {
        let options = vec![
            LegalAction {
                action: Action::Meditate,
                priority: 0.8,
            },
            LegalAction {
                action: Action::Pass,
                priority: 0.1,
            },
        ];
        let scores = score_all(&options);
        assert_eq!(scores[0], 10.0);
        assert!((scores[1] - 1.25).abs() < 1e-9);
    }
}
