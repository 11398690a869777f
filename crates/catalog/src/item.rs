use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use musee_core::{DomainError, DomainResult, Entity, ItemId, Money};

/// An artwork of the permanent collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ItemId,
    pub title: String,
    pub origin: String,
    pub category: String,
    pub period: String,
    /// Likes recorded before this visit.
    pub likes: u32,
    pub image: String,
}

impl Artwork {
    /// Like count as displayed to a visitor: the baseline plus their own like.
    pub fn effective_likes(&self, liked: bool) -> u32 {
        self.likes + u32::from(liked)
    }
}

impl Entity for Artwork {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Locales for which artwork descriptions are authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
    /// Wolof.
    Wo,
}

impl core::str::FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            "wo" => Ok(Locale::Wo),
            other => Err(DomainError::validation(format!(
                "unsupported locale '{other}' (expected fr, en or wo)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub title: String,
    pub text: String,
}

/// Detail page content for one artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkDetail {
    pub artwork: Artwork,
    pub image: String,
    pub video: Option<String>,
    /// Parallel description blocks, one per authored locale.
    pub descriptions: BTreeMap<Locale, LocalizedText>,
}

impl ArtworkDetail {
    /// Description in `locale`, falling back to French when that block is
    /// not authored.
    pub fn description(&self, locale: Locale) -> Option<&LocalizedText> {
        self.descriptions
            .get(&locale)
            .or_else(|| self.descriptions.get(&Locale::Fr))
    }

    pub fn locales(&self) -> Vec<Locale> {
        self.descriptions.keys().copied().collect()
    }
}

/// A product sold in the museum shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopProduct {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price: Money,
    pub image: String,
    pub description: String,
}

impl Entity for ShopProduct {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Seating of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "seats", rename_all = "lowercase")]
pub enum Capacity {
    Unlimited,
    Seats(u32),
}

impl core::fmt::Display for Capacity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Capacity::Unlimited => f.write_str("Illimité"),
            Capacity::Seats(n) => write!(f, "{n} places"),
        }
    }
}

/// An entry of the events calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumEvent {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Display date, as printed on the programme (e.g. "15-30 Octobre 2025").
    pub date: String,
    pub time: String,
    pub location: String,
    pub capacity: Capacity,
    pub image: String,
    pub category: String,
}

impl Entity for MuseumEvent {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    Full,
    Student,
    Group,
}

impl TicketKind {
    pub const ALL: [TicketKind; 3] = [TicketKind::Full, TicketKind::Student, TicketKind::Group];
}

impl core::str::FromStr for TicketKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(TicketKind::Full),
            "student" => Ok(TicketKind::Student),
            "group" => Ok(TicketKind::Group),
            other => Err(DomainError::validation(format!("unknown ticket kind '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub kind: TicketKind,
    pub name: String,
    pub price: Money,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourSection {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    /// Running time as `m:ss`.
    pub duration: String,
}

/// A multiple-choice question of the cultural quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    question: String,
    image: String,
    answers: Vec<String>,
    correct_answer: usize,
    explanation: String,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        image: impl Into<String>,
        answers: Vec<String>,
        correct_answer: usize,
        explanation: impl Into<String>,
    ) -> DomainResult<Self> {
        if answers.is_empty() {
            return Err(DomainError::validation("a question needs at least one answer"));
        }
        if correct_answer >= answers.len() {
            return Err(DomainError::invariant(format!(
                "correct answer index {correct_answer} out of range for {} answers",
                answers.len()
            )));
        }
        Ok(Self {
            question: question.into(),
            image: image.into(),
            answers,
            correct_answer,
            explanation: explanation.into(),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn is_correct(&self, answer_index: usize) -> bool {
        answer_index == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masque_dan() -> Artwork {
        Artwork {
            id: ItemId::new(1),
            title: "Masque Dan".to_string(),
            origin: "Côte d'Ivoire".to_string(),
            category: "Masques".to_string(),
            period: "XIXe siècle".to_string(),
            likes: 234,
            image: String::new(),
        }
    }

    #[test]
    fn effective_likes_adds_own_like() {
        let artwork = masque_dan();
        assert_eq!(artwork.effective_likes(false), 234);
        assert_eq!(artwork.effective_likes(true), 235);
    }

    #[test]
    fn detail_falls_back_to_french() {
        let mut descriptions = BTreeMap::new();
        descriptions.insert(
            Locale::Fr,
            LocalizedText {
                title: "Masque Dan".to_string(),
                text: "texte".to_string(),
            },
        );
        let detail = ArtworkDetail {
            artwork: masque_dan(),
            image: String::new(),
            video: None,
            descriptions,
        };

        assert_eq!(detail.description(Locale::Wo).unwrap().text, "texte");
        assert_eq!(detail.locales(), vec![Locale::Fr]);
    }

    #[test]
    fn locale_parses_case_insensitively() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn quiz_question_rejects_out_of_range_correct_answer() {
        let err = QuizQuestion::new("Q", "", vec!["a".to_string()], 1, "").unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            other => panic!("expected InvariantViolation, got {other:?}"),
        }
    }

    #[test]
    fn capacity_displays_like_the_programme() {
        assert_eq!(Capacity::Unlimited.to_string(), "Illimité");
        assert_eq!(Capacity::Seats(200).to_string(), "200 places");
    }
}
