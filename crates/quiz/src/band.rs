use serde::Serialize;

/// Results-screen tier, by percentage of correct answers.
///
/// Boundaries: 100 → `Perfect`, >= 80 → `Excellent`, >= 60 → `Good`,
/// >= 40 → `Fair`, below → `Encouragement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Perfect,
    Excellent,
    Good,
    Fair,
    Encouragement,
}

impl ScoreBand {
    /// Band for `score` correct answers out of `total`.
    ///
    /// Compared in integers (`score * 100` against `pct * total`) so the
    /// boundaries are exact.
    pub fn for_score(score: u32, total: u32) -> Self {
        if total == 0 {
            return ScoreBand::Encouragement;
        }
        let scaled = u64::from(score) * 100;
        let at_least = |pct: u64| scaled >= pct * u64::from(total);

        if score >= total {
            ScoreBand::Perfect
        } else if at_least(80) {
            ScoreBand::Excellent
        } else if at_least(60) {
            ScoreBand::Good
        } else if at_least(40) {
            ScoreBand::Fair
        } else {
            ScoreBand::Encouragement
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Perfect => "Parfait ! Vous êtes un expert ! 🏆",
            ScoreBand::Excellent => "Excellent ! Très bonne culture ! 🌟",
            ScoreBand::Good => "Bien joué ! Continuez d'apprendre ! 👍",
            ScoreBand::Fair => "Pas mal ! Il y a encore à découvrir ! 📚",
            ScoreBand::Encouragement => "Venez visiter le musée pour en apprendre plus ! 🎨",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_question_quiz_bands() {
        assert_eq!(ScoreBand::for_score(5, 5), ScoreBand::Perfect);
        assert_eq!(ScoreBand::for_score(4, 5), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(3, 5), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(2, 5), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(1, 5), ScoreBand::Encouragement);
        assert_eq!(ScoreBand::for_score(0, 5), ScoreBand::Encouragement);
    }

    #[test]
    fn boundaries_are_inclusive() {
        // 8/10 = 80%, 6/10 = 60%, 4/10 = 40%
        assert_eq!(ScoreBand::for_score(8, 10), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(6, 10), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(4, 10), ScoreBand::Fair);
        // just under each boundary
        assert_eq!(ScoreBand::for_score(79, 100), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(59, 100), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(39, 100), ScoreBand::Encouragement);
        assert_eq!(ScoreBand::for_score(99, 100), ScoreBand::Excellent);
    }

    #[test]
    fn thirds_do_not_round_up() {
        // 2/3 = 66.67%
        assert_eq!(ScoreBand::for_score(2, 3), ScoreBand::Good);
        // 1/3 = 33.33%
        assert_eq!(ScoreBand::for_score(1, 3), ScoreBand::Encouragement);
    }

    #[test]
    fn messages() {
        assert_eq!(ScoreBand::Perfect.message(), "Parfait ! Vous êtes un expert ! 🏆");
        assert!(ScoreBand::Encouragement.message().starts_with("Venez visiter"));
    }
}
