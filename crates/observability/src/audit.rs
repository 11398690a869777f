use std::fmt::Display;

use musee_events::{Event, Notify};

/// Emit one `info` record per applied domain event.
///
/// `session` is whatever identifies the visitor (normally a `SessionId`).
pub fn record<E>(session: impl Display, event: &E)
where
    E: Event + Notify,
{
    let notice = event.notice();
    tracing::info!(
        session = %session,
        event_type = event.event_type(),
        event_version = event.version(),
        notified = notice.is_some(),
        "domain event applied"
    );
}

/// [`record`] for every event of a batch, in order.
pub fn record_all<'a, E>(session: impl Display + Copy, events: impl IntoIterator<Item = &'a E>)
where
    E: Event + Notify + 'a,
{
    for event in events {
        record(session, event);
    }
}
