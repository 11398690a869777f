use std::sync::Arc;

use serde::{Deserialize, Serialize};

use musee_core::{Aggregate, AggregateRoot, DomainError, SessionId};
use musee_events::{Event, Notice, Notify};

use crate::engine::{self, Quiz, QuizState, QuizView};

/// Aggregate root: one visitor's run through the quiz.
///
/// Unlike the pure functions in [`engine`], `handle` rejects illegal commands
/// with a [`DomainError`] so callers can tell a no-op from a transition.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: SessionId,
    quiz: Arc<Quiz>,
    state: QuizState,
    version: u64,
}

impl QuizSession {
    pub fn new(id: SessionId, quiz: Arc<Quiz>) -> Self {
        Self {
            id,
            quiz,
            state: engine::restart(),
            version: 0,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn view(&self) -> QuizView {
        QuizView::render(&self.quiz, &self.state)
    }
}

impl AggregateRoot for QuizSession {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizCommand {
    SelectAnswer(usize),
    Advance,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    AnswerSelected {
        question_index: usize,
        answer_index: usize,
        correct: bool,
    },
    Advanced {
        to_index: usize,
    },
    Completed {
        score: u32,
        total: usize,
    },
    Restarted,
}

impl Event for QuizEvent {
    fn event_type(&self) -> &'static str {
        match self {
            QuizEvent::AnswerSelected { .. } => "quiz.answer_selected",
            QuizEvent::Advanced { .. } => "quiz.advanced",
            QuizEvent::Completed { .. } => "quiz.completed",
            QuizEvent::Restarted => "quiz.restarted",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Notify for QuizEvent {
    fn notice(&self) -> Option<Notice> {
        match self {
            QuizEvent::AnswerSelected { correct: true, .. } => {
                Some(Notice::info("Bravo ! 🎉").with_description("Bonne réponse !"))
            }
            QuizEvent::AnswerSelected { correct: false, .. } => Some(
                Notice::destructive("Dommage").with_description("Ce n'est pas la bonne réponse"),
            ),
            QuizEvent::Advanced { .. } | QuizEvent::Completed { .. } | QuizEvent::Restarted => None,
        }
    }
}

impl Aggregate for QuizSession {
    type Command = QuizCommand;
    type Event = QuizEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        self.state = match *event {
            QuizEvent::AnswerSelected { answer_index, .. } => {
                engine::select_answer(&self.quiz, self.state, answer_index)
            }
            QuizEvent::Advanced { .. } | QuizEvent::Completed { .. } => {
                engine::advance(&self.quiz, self.state)
            }
            QuizEvent::Restarted => engine::restart(),
        };

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match *command {
            QuizCommand::Restart => Ok(vec![QuizEvent::Restarted]),
            QuizCommand::SelectAnswer(answer_index) => {
                let QuizState::InProgress {
                    current_index,
                    selected_answer,
                    ..
                } = self.state
                else {
                    return Err(DomainError::conflict("quiz is already completed"));
                };
                if selected_answer.is_some() {
                    return Err(DomainError::conflict("question already answered"));
                }
                let question = self
                    .quiz
                    .question(current_index)
                    .ok_or_else(|| DomainError::invariant("current question out of range"))?;
                if answer_index >= question.answers().len() {
                    return Err(DomainError::validation(format!(
                        "answer {answer_index} is not one of the {} choices",
                        question.answers().len()
                    )));
                }
                Ok(vec![QuizEvent::AnswerSelected {
                    question_index: current_index,
                    answer_index,
                    correct: question.is_correct(answer_index),
                }])
            }
            QuizCommand::Advance => match self.state {
                QuizState::Completed { .. } => {
                    Err(DomainError::conflict("quiz is already completed"))
                }
                QuizState::InProgress {
                    selected_answer: None,
                    ..
                } => Err(DomainError::conflict("answer the question before moving on")),
                QuizState::InProgress {
                    current_index,
                    score,
                    ..
                } => {
                    if current_index + 1 >= self.quiz.len() {
                        Ok(vec![QuizEvent::Completed {
                            score,
                            total: self.quiz.len(),
                        }])
                    } else {
                        Ok(vec![QuizEvent::Advanced {
                            to_index: current_index + 1,
                        }])
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musee_catalog::seed;

    fn session() -> QuizSession {
        let quiz = Quiz::new(seed::quiz_questions().unwrap()).unwrap();
        QuizSession::new(SessionId::new(), Arc::new(quiz))
    }

    #[test]
    fn correct_answer_emits_congratulation() {
        let mut s = session();
        let events = s.execute(&QuizCommand::SelectAnswer(1)).unwrap();
        assert_eq!(
            events,
            vec![QuizEvent::AnswerSelected {
                question_index: 0,
                answer_index: 1,
                correct: true
            }]
        );
        let notice = events[0].notice().unwrap();
        assert_eq!(notice.title, "Bravo ! 🎉");
        assert!(!notice.is_destructive());
        assert_eq!(s.state().score(), 1);
        assert_eq!(s.version(), 1);
    }

    #[test]
    fn wrong_answer_is_destructive() {
        let mut s = session();
        let events = s.execute(&QuizCommand::SelectAnswer(0)).unwrap();
        let notice = events[0].notice().unwrap();
        assert_eq!(notice.title, "Dommage");
        assert!(notice.is_destructive());
        assert_eq!(s.state().score(), 0);
    }

    #[test]
    fn second_answer_is_a_conflict_and_keeps_score() {
        let mut s = session();
        s.execute(&QuizCommand::SelectAnswer(1)).unwrap();
        let err = s.execute(&QuizCommand::SelectAnswer(0)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(s.state().score(), 1);
        assert_eq!(s.version(), 1);
    }

    #[test]
    fn out_of_range_answer_is_a_validation_error() {
        let mut s = session();
        let err = s.execute(&QuizCommand::SelectAnswer(9)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(*s.state(), engine::restart());
    }

    #[test]
    fn advancing_unanswered_is_a_conflict() {
        let mut s = session();
        let err = s.execute(&QuizCommand::Advance).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn full_run_completes_then_restarts() {
        let mut s = session();
        let answers: Vec<usize> = s.quiz().questions().iter().map(|q| q.correct_answer()).collect();
        let mut last = Vec::new();
        for a in answers {
            s.execute(&QuizCommand::SelectAnswer(a)).unwrap();
            last = s.execute(&QuizCommand::Advance).unwrap();
        }
        assert_eq!(last, vec![QuizEvent::Completed { score: 5, total: 5 }]);
        assert!(s.state().is_completed());
        assert!(matches!(
            s.execute(&QuizCommand::Advance),
            Err(DomainError::Conflict(_))
        ));

        let events = s.execute(&QuizCommand::Restart).unwrap();
        assert_eq!(events, vec![QuizEvent::Restarted]);
        assert_eq!(*s.state(), engine::restart());
        assert!(events[0].notice().is_none());
    }

    #[test]
    fn event_types_are_namespaced() {
        assert_eq!(QuizEvent::Restarted.event_type(), "quiz.restarted");
        assert_eq!(
            QuizEvent::Completed { score: 0, total: 5 }.event_type(),
            "quiz.completed"
        );
    }
}
