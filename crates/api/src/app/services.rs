use std::{
    collections::HashMap,
    convert::Infallible,
    sync::{Arc, PoisonError, RwLock},
    time::{Duration, Instant},
};

use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::broadcast;
use tokio_stream::{StreamExt, wrappers::BroadcastStream};

use musee_catalog::{
    Artwork, Catalog, HomePage, MuseumEvent, ShopProduct, TicketKind, TicketType, TourSection,
    seed,
};
use musee_core::{Aggregate, AggregateRoot, DomainError, DomainResult, ItemId, SessionId};
use musee_events::{Event, Notice, Notify};
use musee_observability::audit;
use musee_quiz::{Quiz, QuizCommand, QuizSession, QuizView};
use musee_session::{
    InteractionCommand, InteractionState, LikeSurface, NewsletterOutcome, PurchaseOutcome,
    TicketOrder,
};

use crate::config::SiteConfig;

/// Notice broadcast via SSE.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NoticeMessage {
    pub session_id: SessionId,
    pub topic: String,
    pub notice: Notice,
    pub occurred_at: DateTime<Utc>,
}

/// Read-only site content, built once at startup and shared by every request.
#[derive(Debug)]
pub struct SiteContent {
    pub artworks: Catalog<Artwork>,
    pub shop: Catalog<ShopProduct>,
    pub events: Catalog<MuseumEvent>,
    pub ticket_types: Vec<TicketType>,
    pub tour: Vec<TourSection>,
    pub quiz: Arc<Quiz>,
    pub home: HomePage,
}

impl SiteContent {
    pub fn load() -> DomainResult<Self> {
        Ok(Self {
            artworks: seed::artworks(),
            shop: seed::shop_products(),
            events: seed::events(),
            ticket_types: seed::ticket_types(),
            tour: seed::tour_sections(),
            quiz: Arc::new(Quiz::new(seed::quiz_questions()?)?),
            home: HomePage::default(),
        })
    }
}

/// Everything one visitor has done so far.
#[derive(Debug, Clone)]
pub struct VisitorSession {
    pub interaction: InteractionState,
    pub tickets: TicketOrder,
    pub quiz: QuizSession,
}

impl VisitorSession {
    pub fn new(id: SessionId, quiz: Arc<Quiz>) -> Self {
        Self {
            interaction: InteractionState::new(id),
            tickets: TicketOrder::new(),
            quiz: QuizSession::new(id, quiz),
        }
    }

    /// True while nothing has been recorded for this visit.
    pub fn is_pristine(&self) -> bool {
        self.interaction.version() == 0 && self.quiz.version() == 0 && self.tickets.is_empty()
    }
}

#[derive(Debug)]
struct StoredSession {
    session: VisitorSession,
    last_seen: Instant,
}

/// Session state keyed by session id.
///
/// Sessions idle for longer than `idle_ttl` are evicted, and the store never
/// holds more than `capacity` sessions: when full, the least recently seen
/// one makes room for the newcomer.
#[derive(Debug)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<SessionId, StoredSession>>,
    idle_ttl: Duration,
    capacity: usize,
}

impl InMemorySessionStore {
    pub fn new(idle_ttl: Duration, capacity: usize) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            idle_ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of a live session; reading counts as activity.
    pub fn get(&self, id: SessionId, now: Instant) -> Option<VisitorSession> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let stored = guard.get_mut(&id)?;
        if self.is_idle(stored, now) {
            guard.remove(&id);
            return None;
        }
        stored.last_seen = now;
        Some(stored.session.clone())
    }

    pub fn insert(&self, session: VisitorSession, now: Instant) {
        let id = session.interaction.session_id();
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if !guard.contains_key(&id) {
            self.make_room(&mut guard, now);
        }
        guard.insert(id, StoredSession { session, last_seen: now });
    }

    /// Run `f` on the session under the write lock. An unknown id starts
    /// from `init` and is only stored if `f` records something.
    pub fn update<R>(
        &self,
        id: SessionId,
        now: Instant,
        init: impl FnOnce() -> VisitorSession,
        f: impl FnOnce(&mut VisitorSession) -> R,
    ) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(stored) = guard.get_mut(&id) {
            if !self.is_idle(stored, now) {
                stored.last_seen = now;
                return f(&mut stored.session);
            }
            guard.remove(&id);
        }

        let mut session = init();
        let out = f(&mut session);
        if !session.is_pristine() {
            self.make_room(&mut guard, now);
            guard.insert(id, StoredSession { session, last_seen: now });
        }
        out
    }

    /// Drop every session idle at `now`; returns how many went.
    pub fn evict_idle(&self, now: Instant) -> usize {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        self.sweep(&mut guard, now)
    }

    fn is_idle(&self, stored: &StoredSession, now: Instant) -> bool {
        now.saturating_duration_since(stored.last_seen) > self.idle_ttl
    }

    fn sweep(&self, map: &mut HashMap<SessionId, StoredSession>, now: Instant) -> usize {
        let before = map.len();
        map.retain(|_, stored| !self.is_idle(stored, now));
        let evicted = before - map.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = map.len(), "idle sessions evicted");
        }
        evicted
    }

    fn make_room(&self, map: &mut HashMap<SessionId, StoredSession>, now: Instant) {
        self.sweep(map, now);
        while map.len() >= self.capacity {
            let Some(oldest) = map
                .iter()
                .min_by_key(|(_, stored)| stored.last_seen)
                .map(|(id, _)| *id)
            else {
                break;
            };
            map.remove(&oldest);
            tracing::info!(session = %oldest, capacity = self.capacity, "session store full; oldest session evicted");
        }
    }
}

/// Result of an interaction command: the state after it and the notice to show.
#[derive(Debug, Clone)]
pub struct Interaction {
    pub state: InteractionState,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone)]
pub struct QuizStep {
    pub view: QuizView,
    pub notice: Option<Notice>,
}

pub struct AppServices {
    content: SiteContent,
    sessions: InMemorySessionStore,
    notices_tx: broadcast::Sender<NoticeMessage>,
    sse_keepalive: Duration,
}

impl AppServices {
    pub fn new(content: SiteContent, config: &SiteConfig) -> Self {
        // Lossy broadcast, session-filtered in the SSE handler.
        let (notices_tx, _notices_rx) =
            broadcast::channel::<NoticeMessage>(config.notification_buffer);
        Self {
            content,
            sessions: InMemorySessionStore::new(config.session_idle_ttl, config.max_sessions),
            notices_tx,
            sse_keepalive: config.sse_keepalive,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn sessions(&self) -> &InMemorySessionStore {
        &self.sessions
    }

    pub fn notices_tx(&self) -> &broadcast::Sender<NoticeMessage> {
        &self.notices_tx
    }

    pub fn start_session(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(self.fresh_session(id), Instant::now());
        tracing::info!(session = %id, "session started");
        id
    }

    /// Current state of a session; an unknown id reads as a fresh visit.
    pub fn snapshot(&self, id: SessionId) -> VisitorSession {
        self.sessions
            .get(id, Instant::now())
            .unwrap_or_else(|| self.fresh_session(id))
    }

    fn fresh_session(&self, id: SessionId) -> VisitorSession {
        VisitorSession::new(id, Arc::clone(&self.content.quiz))
    }

    fn update<R>(&self, id: SessionId, f: impl FnOnce(&mut VisitorSession) -> R) -> R {
        self.sessions
            .update(id, Instant::now(), || self.fresh_session(id), f)
    }

    pub fn interact(&self, id: SessionId, command: InteractionCommand) -> DomainResult<Interaction> {
        let (events, state) = self.update(id, |session| {
            let events = session.interaction.execute(&command)?;
            Ok::<_, DomainError>((events, session.interaction.clone()))
        })?;

        let notice = self.publish_events(id, &events);
        Ok(Interaction { state, notice })
    }

    /// Like toggle worded for the page it came from.
    pub fn toggle_like(
        &self,
        id: SessionId,
        item: ItemId,
        surface: LikeSurface,
    ) -> DomainResult<Interaction> {
        let (events, state) = self.update(id, |session| {
            let events = session.interaction.execute(&InteractionCommand::ToggleLike(item))?;
            Ok::<_, DomainError>((events, session.interaction.clone()))
        })?;

        audit::record_all(id, &events);
        let notice = surface.notice(state.is_liked(item));
        if let (Some(notice), Some(event)) = (&notice, events.last()) {
            self.publish(id, event.event_type(), notice.clone());
        }
        Ok(Interaction { state, notice })
    }

    pub fn quiz(&self, id: SessionId, command: QuizCommand) -> DomainResult<QuizStep> {
        let (events, view) = self.update(id, |session| {
            let events = session.quiz.execute(&command)?;
            Ok::<_, DomainError>((events, session.quiz.view()))
        })?;

        let notice = self.publish_events(id, &events);
        Ok(QuizStep { view, notice })
    }

    pub fn update_ticket_count(&self, id: SessionId, kind: TicketKind, increment: bool) -> TicketOrder {
        self.update(id, |session| {
            session.tickets.update_count(kind, increment);
            session.tickets.clone()
        })
    }

    /// Date picker: must be after `today`.
    pub fn select_visit_date(
        &self,
        id: SessionId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> DomainResult<TicketOrder> {
        self.update(id, |session| {
            session.tickets.select_visit_date(date, today)?;
            Ok(session.tickets.clone())
        })
    }

    /// Purchase gate. `visit_date`, when given, is selected first and must be
    /// after `today`; the order is only saved when the purchase is confirmed.
    pub fn purchase_tickets(
        &self,
        id: SessionId,
        visit_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> DomainResult<PurchaseOutcome> {
        let outcome = self.update(id, |session| {
            let mut order = session.tickets.clone();
            if let Some(date) = visit_date {
                order.select_visit_date(date, today)?;
            }
            let outcome = order.purchase(&self.content.ticket_types);
            if outcome.is_confirmed() {
                session.tickets = order;
            }
            Ok::<_, DomainError>(outcome)
        })?;

        let topic = match &outcome {
            PurchaseOutcome::Confirmed { tickets, total, .. } => {
                tracing::info!(session = %id, tickets = *tickets, total = total.amount(), "tickets booked");
                "tickets.purchase_confirmed"
            }
            PurchaseOutcome::Refused { .. } => "tickets.purchase_refused",
        };
        self.publish(id, topic, outcome.notice().clone());
        Ok(outcome)
    }

    pub fn newsletter_signup(&self, id: SessionId, email: &str) -> NewsletterOutcome {
        let outcome = musee_session::signup(email);
        let topic = match outcome {
            NewsletterOutcome::Subscribed { .. } => "newsletter.subscribed",
            NewsletterOutcome::Refused { .. } => "newsletter.refused",
        };
        self.publish(id, topic, outcome.notice().clone());
        outcome
    }

    /// Audit every event and broadcast the notices they carry. Returns the
    /// last notice, the one the visitor sees.
    fn publish_events<E>(&self, id: SessionId, events: &[E]) -> Option<Notice>
    where
        E: Event + Notify,
    {
        audit::record_all(id, events);

        let mut last = None;
        for event in events {
            if let Some(notice) = event.notice() {
                self.publish(id, event.event_type(), notice.clone());
                last = Some(notice);
            }
        }
        last
    }

    fn publish(&self, id: SessionId, topic: &str, notice: Notice) {
        // No subscriber is not an error.
        let _ = self.notices_tx.send(NoticeMessage {
            session_id: id,
            topic: topic.to_string(),
            notice,
            occurred_at: Utc::now(),
        });
    }
}

/// Build an SSE stream of one session's notices (used by `/stream`).
pub fn session_sse_stream(
    services: Arc<AppServices>,
    session_id: SessionId,
) -> Sse<impl tokio_stream::Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = services.notices_tx().subscribe();
    let stream = BroadcastStream::new(rx).filter_map(move |msg| match msg {
        Ok(m) if m.session_id == session_id => {
            let data = serde_json::to_string(&m).unwrap_or_else(|_| "{}".to_string());
            Some(Ok(SseEvent::default().event(m.topic).data(data)))
        }
        // Lagged receivers skip what they missed.
        _ => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(services.sse_keepalive))
}
