//! Quiz state machine.
//!
//! `InProgress` -> (`select_answer`) -> answered `InProgress` -> (`advance`)
//! -> next question or `Completed`. `restart` returns to the first question
//! from anywhere. Calls that are not legal in the current state return the
//! state unchanged.

use serde::Serialize;

use musee_catalog::QuizQuestion;
use musee_core::{DomainError, DomainResult};

use crate::band::ScoreBand;

/// Non-empty, ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn new(questions: Vec<QuizQuestion>) -> DomainResult<Self> {
        if questions.is_empty() {
            return Err(DomainError::validation("a quiz needs at least one question"));
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    InProgress {
        current_index: usize,
        score: u32,
        /// `Some` once the current question is answered.
        selected_answer: Option<usize>,
    },
    Completed {
        score: u32,
    },
}

impl Default for QuizState {
    fn default() -> Self {
        restart()
    }
}

impl QuizState {
    pub fn score(&self) -> u32 {
        match *self {
            QuizState::InProgress { score, .. } | QuizState::Completed { score } => score,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, QuizState::Completed { .. })
    }

    pub fn is_answered(&self) -> bool {
        matches!(
            self,
            QuizState::InProgress {
                selected_answer: Some(_),
                ..
            }
        )
    }

    pub fn current_index(&self) -> Option<usize> {
        match *self {
            QuizState::InProgress { current_index, .. } => Some(current_index),
            QuizState::Completed { .. } => None,
        }
    }

    pub fn selected_answer(&self) -> Option<usize> {
        match *self {
            QuizState::InProgress {
                selected_answer, ..
            } => selected_answer,
            QuizState::Completed { .. } => None,
        }
    }
}

/// Initial state: first question, no score, nothing selected.
pub fn restart() -> QuizState {
    QuizState::InProgress {
        current_index: 0,
        score: 0,
        selected_answer: None,
    }
}

/// Record an answer to the current question.
///
/// No-op when the question is already answered, the quiz is completed, or
/// `answer_index` is not one of the question's answers.
pub fn select_answer(quiz: &Quiz, state: QuizState, answer_index: usize) -> QuizState {
    let QuizState::InProgress {
        current_index,
        score,
        selected_answer: None,
    } = state
    else {
        return state;
    };
    let Some(question) = quiz.question(current_index) else {
        return state;
    };
    if answer_index >= question.answers().len() {
        return state;
    }

    QuizState::InProgress {
        current_index,
        score: score + u32::from(question.is_correct(answer_index)),
        selected_answer: Some(answer_index),
    }
}

/// Move past an answered question; after the last one the quiz is completed.
///
/// No-op when the current question is not answered yet or the quiz is
/// already completed.
pub fn advance(quiz: &Quiz, state: QuizState) -> QuizState {
    match state {
        QuizState::InProgress {
            current_index,
            score,
            selected_answer: Some(_),
        } => {
            if current_index >= quiz.last_index() {
                QuizState::Completed { score }
            } else {
                QuizState::InProgress {
                    current_index: current_index + 1,
                    score,
                    selected_answer: None,
                }
            }
        }
        other => other,
    }
}

/// What the quiz page shows for a state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum QuizView {
    Question {
        /// 1-based position, as displayed.
        number: usize,
        total: usize,
        /// Unrounded, e.g. 33.33.. for the first of three questions.
        progress_percent: f64,
        score: u32,
        question: String,
        image: String,
        answers: Vec<String>,
        selected_answer: Option<usize>,
        /// Revealed once answered.
        correct_answer: Option<usize>,
        /// Revealed once answered.
        explanation: Option<String>,
        is_last: bool,
    },
    Results {
        score: u32,
        total: usize,
        band: ScoreBand,
        message: String,
    },
}

impl QuizView {
    pub fn render(quiz: &Quiz, state: &QuizState) -> Self {
        let total = quiz.len();
        match *state {
            QuizState::Completed { score } => {
                let band = ScoreBand::for_score(score, total as u32);
                QuizView::Results {
                    score,
                    total,
                    band,
                    message: band.message().to_string(),
                }
            }
            QuizState::InProgress {
                current_index,
                score,
                selected_answer,
            } => {
                let index = current_index.min(quiz.last_index());
                let question = &quiz.questions[index];
                let answered = selected_answer.is_some();
                QuizView::Question {
                    number: index + 1,
                    total,
                    progress_percent: (index + 1) as f64 * 100.0 / total as f64,
                    score,
                    question: question.question().to_string(),
                    image: question.image().to_string(),
                    answers: question.answers().to_vec(),
                    selected_answer,
                    correct_answer: answered.then(|| question.correct_answer()),
                    explanation: answered.then(|| question.explanation().to_string()),
                    is_last: index == quiz.last_index(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musee_catalog::seed;

    fn site_quiz() -> Quiz {
        Quiz::new(seed::quiz_questions().unwrap()).unwrap()
    }

    fn single(correct: usize) -> Quiz {
        let answers = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        Quiz::new(vec![QuizQuestion::new("Q", "", answers, correct, "because").unwrap()]).unwrap()
    }

    #[test]
    fn empty_quiz_is_rejected() {
        assert!(matches!(Quiz::new(vec![]), Err(DomainError::Validation(_))));
    }

    #[test]
    fn correct_answer_scores_once() {
        let quiz = single(1);
        let state = select_answer(&quiz, restart(), 1);
        assert_eq!(state.score(), 1);
        assert!(state.is_answered());

        let again = select_answer(&quiz, state, 0);
        assert_eq!(again, state);
        assert_eq!(again.score(), 1);
        assert_eq!(again.selected_answer(), Some(1));
    }

    #[test]
    fn wrong_answer_does_not_score() {
        let quiz = single(1);
        let state = select_answer(&quiz, restart(), 2);
        assert_eq!(state.score(), 0);
        assert_eq!(state.selected_answer(), Some(2));
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let quiz = single(0);
        let state = select_answer(&quiz, restart(), 3);
        assert_eq!(state, restart());
    }

    #[test]
    fn advance_requires_an_answer() {
        let quiz = site_quiz();
        assert_eq!(advance(&quiz, restart()), restart());
    }

    #[test]
    fn advance_moves_to_next_question_and_clears_selection() {
        let quiz = site_quiz();
        let state = select_answer(&quiz, restart(), 1);
        let state = advance(&quiz, state);
        assert_eq!(
            state,
            QuizState::InProgress {
                current_index: 1,
                score: 1,
                selected_answer: None
            }
        );
    }

    #[test]
    fn last_advance_completes() {
        let quiz = single(0);
        let state = advance(&quiz, select_answer(&quiz, restart(), 0));
        assert_eq!(state, QuizState::Completed { score: 1 });

        // terminal
        assert_eq!(select_answer(&quiz, state, 0), state);
        assert_eq!(advance(&quiz, state), state);
        assert_eq!(restart(), QuizState::default());
    }

    #[test]
    fn perfect_run_through_site_quiz() {
        let quiz = site_quiz();
        let mut state = restart();
        for q in quiz.questions() {
            state = select_answer(&quiz, state, q.correct_answer());
            state = advance(&quiz, state);
        }
        assert_eq!(state, QuizState::Completed { score: 5 });

        match QuizView::render(&quiz, &state) {
            QuizView::Results { band, message, total, .. } => {
                assert_eq!(band, ScoreBand::Perfect);
                assert_eq!(total, 5);
                assert_eq!(message, ScoreBand::Perfect.message());
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn progress_is_not_truncated() {
        let question = || {
            let answers = vec!["a".to_string(), "b".to_string()];
            QuizQuestion::new("Q", "", answers, 0, "because").unwrap()
        };
        let quiz = Quiz::new(vec![question(), question(), question()]).unwrap();
        match QuizView::render(&quiz, &restart()) {
            QuizView::Question {
                progress_percent, ..
            } => assert!((progress_percent - 100.0 / 3.0).abs() < 1e-9),
            other => panic!("expected question, got {other:?}"),
        }
    }

    #[test]
    fn view_reveals_solution_only_after_answering() {
        let quiz = site_quiz();
        match QuizView::render(&quiz, &restart()) {
            QuizView::Question {
                number,
                progress_percent,
                correct_answer,
                explanation,
                ..
            } => {
                assert_eq!(number, 1);
                assert_eq!(progress_percent, 20.0);
                assert_eq!(correct_answer, None);
                assert_eq!(explanation, None);
            }
            other => panic!("expected question, got {other:?}"),
        }

        let answered = select_answer(&quiz, restart(), 0);
        match QuizView::render(&quiz, &answered) {
            QuizView::Question {
                correct_answer,
                explanation,
                ..
            } => {
                assert_eq!(correct_answer, Some(1));
                assert!(explanation.unwrap().contains("Liberia"));
            }
            other => panic!("expected question, got {other:?}"),
        }
    }

    #[test]
    fn state_serializes_with_tag() {
        let json = serde_json::to_value(QuizState::Completed { score: 3 }).unwrap();
        assert_eq!(json["state"], "completed");
        assert_eq!(json["score"], 3);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone, Copy)]
        enum Action {
            Select(usize),
            Advance,
        }

        fn arb_action() -> impl Strategy<Value = Action> {
            prop_oneof![
                (0usize..5).prop_map(Action::Select),
                Just(Action::Advance),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: whatever the visitor clicks, the index stays in range
            /// and the score never exceeds the number of answered questions.
            #[test]
            fn invariants_hold_under_any_clicks(
                actions in prop::collection::vec(arb_action(), 0..40),
            ) {
                let quiz = site_quiz();
                let mut state = restart();
                for action in actions {
                    state = match action {
                        Action::Select(i) => select_answer(&quiz, state, i),
                        Action::Advance => advance(&quiz, state),
                    };
                    match state {
                        QuizState::InProgress { current_index, score, .. } => {
                            prop_assert!(current_index < quiz.len());
                            prop_assert!(score as usize <= current_index + 1);
                        }
                        QuizState::Completed { score } => {
                            prop_assert!(score as usize <= quiz.len());
                        }
                    }
                }
            }

            /// Property: answering every question then advancing N times completes
            /// with a score in [0, N].
            #[test]
            fn full_run_completes(answers in prop::collection::vec(0usize..4, 5)) {
                let quiz = site_quiz();
                let mut state = restart();
                for a in &answers {
                    state = select_answer(&quiz, state, *a);
                    let again = select_answer(&quiz, state, (*a + 1) % 4);
                    prop_assert_eq!(again.score(), state.score());
                    state = advance(&quiz, state);
                }
                prop_assert!(state.is_completed());
                prop_assert!(state.score() as usize <= quiz.len());
            }
        }
    }
}
