//! Newsletter signup gate. Nothing is stored.

use serde::Serialize;

use musee_events::Notice;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NewsletterOutcome {
    Subscribed { email: String, notice: Notice },
    Refused { notice: Notice },
}

impl NewsletterOutcome {
    pub fn notice(&self) -> &Notice {
        match self {
            NewsletterOutcome::Subscribed { notice, .. } | NewsletterOutcome::Refused { notice } => {
                notice
            }
        }
    }
}

/// An empty (or blank) address is refused with an advisory notice.
pub fn signup(email: &str) -> NewsletterOutcome {
    let email = email.trim();
    if email.is_empty() {
        return NewsletterOutcome::Refused {
            notice: Notice::destructive("Email requis"),
        };
    }
    NewsletterOutcome::Subscribed {
        email: email.to_string(),
        notice: Notice::info("Inscription réussie !")
            .with_description("Vous recevrez nos actualités par email"),
    }
}
