// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transient notice delivery.
//!
//! A booking form publishes one notice per accepted submission. The server
//! delivers it two ways:
//!
//! - inline, as a toast in the page that answers the submission ([`Toaster`])
//! - live, to every WebSocket subscriber of `/notices/live`
//!   ([`NoticeBroadcaster`])
//!
//! Notices are informational only. Nothing is sent over the socket except
//! notices, and nothing received from a client is acted upon.

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, stream::StreamExt};
use prana::{Notice, NoticeChannel};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::AppState;

/// Maximum number of notices to buffer in the broadcast channel.
/// If clients cannot keep up, older notices will be dropped.
const NOTICE_BUFFER_SIZE: usize = 100;

/// Events sent to live notice subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoticeEvent {
    /// A booking form accepted a submission.
    Published {
        /// The form that published the notice.
        form: String,
        /// Short title.
        title: String,
        /// One-sentence description.
        description: String,
    },
    /// Connection confirmation (sent on initial connect).
    Connected {
        /// Server timestamp (ISO 8601).
        timestamp: String,
    },
}

/// Broadcaster for live notices.
///
/// A thin wrapper around `tokio::sync::broadcast`; cloning shares the
/// underlying channel.
#[derive(Debug, Clone)]
pub struct NoticeBroadcaster {
    tx: broadcast::Sender<NoticeEvent>,
}

impl NoticeBroadcaster {
    /// Creates a new broadcaster with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(NOTICE_BUFFER_SIZE);
        Self { tx }
    }

    /// Broadcasts an event to all connected clients.
    ///
    /// If no clients are connected, the event is silently dropped.
    pub fn broadcast(&self, event: &NoticeEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast notice");
            }
            Err(_) => {
                debug!(?event, "No receivers for notice");
            }
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Events sent before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<NoticeEvent> {
        self.tx.subscribe()
    }
}

impl Default for NoticeBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-request notice channel.
///
/// Keeps the published notice so the answering page can show it as a toast,
/// and forwards it to the live broadcaster.
pub struct Toaster<'a> {
    form: &'static str,
    broadcaster: &'a NoticeBroadcaster,
    shown: RefCell<Option<Notice>>,
}

impl<'a> Toaster<'a> {
    /// Creates a toaster for one submission of `form`.
    #[must_use]
    pub const fn new(form: &'static str, broadcaster: &'a NoticeBroadcaster) -> Self {
        Self {
            form,
            broadcaster,
            shown: RefCell::new(None),
        }
    }

    /// Takes the notice to show, if one was published.
    pub fn take(&self) -> Option<Notice> {
        self.shown.borrow_mut().take()
    }
}

impl NoticeChannel for Toaster<'_> {
    fn publish(&self, notice: Notice) {
        self.broadcaster.broadcast(&NoticeEvent::Published {
            form: self.form.to_string(),
            title: notice.title.clone(),
            description: notice.description.clone(),
        });
        *self.shown.borrow_mut() = Some(notice);
    }
}

/// Handles WebSocket upgrade requests for the live notice stream.
pub async fn live_notices_handler(
    ws: WebSocketUpgrade,
    AxumState(app_state): AxumState<AppState>,
) -> Response {
    let broadcaster: NoticeBroadcaster = app_state.notices.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, broadcaster))
}

/// Handles an individual WebSocket connection.
///
/// Sends a connection confirmation, then streams every notice until
/// the client disconnects or an error occurs.
async fn handle_socket(socket: WebSocket, broadcaster: NoticeBroadcaster) {
    info!("Client connected to live notice stream");

    let (mut sender, mut receiver) = socket.split();
    let mut rx: broadcast::Receiver<NoticeEvent> = broadcaster.subscribe();

    let connected_event: NoticeEvent = NoticeEvent::Connected {
        timestamp: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| String::from("unknown")),
    };

    if let Ok(json) = serde_json::to_string(&connected_event)
        && sender.send(Message::Text(json.into())).await.is_err()
    {
        warn!("Failed to send connection confirmation");
        return;
    }

    let mut send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => {
                        if sender.send(Message::Text(json.into())).await.is_err() {
                            // Client disconnected
                            break;
                        }
                    }
                    Err(e) => {
                        error!(?e, "Failed to serialize notice");
                    }
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Live notice subscriber lagged, notices dropped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(_) | Message::Binary(_)) => {
                    warn!("Received unexpected message from client, ignoring");
                }
                Ok(Message::Close(_)) => {
                    debug!("Client sent close frame");
                    break;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {}
                Err(e) => {
                    error!(?e, "WebSocket receive error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => {
            debug!("Send task completed");
            recv_task.abort();
        }
        _ = &mut recv_task => {
            debug!("Receive task completed");
            send_task.abort();
        }
    }

    info!("Client disconnected from live notice stream");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_notice() -> Notice {
        Notice::new(
            "Request Received",
            "We've received your booking request. We'll contact you shortly to confirm.",
        )
    }

    #[test]
    fn test_broadcaster_creation() {
        let broadcaster = NoticeBroadcaster::new();
        assert_eq!(broadcaster.tx.receiver_count(), 0);
    }

    #[test]
    fn test_broadcast_no_receivers() {
        let broadcaster = NoticeBroadcaster::new();
        // Should not panic when no receivers
        broadcaster.broadcast(&NoticeEvent::Connected {
            timestamp: String::from("2026-04-01T00:00:00Z"),
        });
    }

    #[test]
    fn test_toaster_keeps_notice_and_broadcasts_it() {
        let broadcaster = NoticeBroadcaster::new();
        let mut rx = broadcaster.subscribe();
        let toaster = Toaster::new("session-booking", &broadcaster);

        toaster.publish(sample_notice());

        assert_eq!(toaster.take(), Some(sample_notice()));
        assert_eq!(toaster.take(), None);
        match rx.try_recv() {
            Ok(NoticeEvent::Published { form, title, .. }) => {
                assert_eq!(form, "session-booking");
                assert_eq!(title, "Request Received");
            }
            other => panic!("Expected Published, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_receivers() {
        let broadcaster = NoticeBroadcaster::new();
        let mut rx1 = broadcaster.subscribe();
        let mut rx2 = broadcaster.subscribe();
        let toaster = Toaster::new("class-booking", &broadcaster);

        toaster.publish(sample_notice());

        assert!(matches!(rx1.try_recv(), Ok(NoticeEvent::Published { .. })));
        assert!(matches!(rx2.try_recv(), Ok(NoticeEvent::Published { .. })));
    }

    #[test]
    fn test_event_serialization() {
        let event = NoticeEvent::Published {
            form: String::from("seminar-inquiry"),
            title: String::from("Inquiry Received"),
            description: String::from("We'll be in touch."),
        };

        let json = serde_json::to_string(&event).expect("Failed to serialize");
        assert!(json.contains("\"type\":\"published\""));
        let deserialized: NoticeEvent = serde_json::from_str(&json).expect("Failed to deserialize");

        assert_eq!(deserialized, event);
    }
}
