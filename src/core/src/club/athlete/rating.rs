use crate::club::athlete::AthleteStats;

/// Overall rating of an athlete derived from its stats.
///
/// Implemented for plain functions and closures, so a caller can swap in its
/// own weighting without touching `Team` or `Market`.
pub trait Rating {
    fn rate(&self, stats: &AthleteStats) -> u16;
}

/// Unweighted mean of the four stats, truncated.
#[derive(Debug, Copy, Clone, Default)]
pub struct MeanRating;

impl Rating for MeanRating {
    fn rate(&self, stats: &AthleteStats) -> u16 {
        (stats.total() / 4) as u16
    }
}

impl<F> Rating for F
where
    F: Fn(&AthleteStats) -> u16,
{
    fn rate(&self, stats: &AthleteStats) -> u16 {
        self(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_rating_truncates() {
        let stats = AthleteStats::new(60, 61, 61, 61);
        assert_eq!(MeanRating.rate(&stats), 60);
    }

    #[test]
    fn test_closure_rating() {
        let offence_only = |stats: &AthleteStats| stats.offence;
        let stats = AthleteStats::new(68, 60, 60, 60);

        assert_eq!(offence_only.rate(&stats), 68);
    }
}
