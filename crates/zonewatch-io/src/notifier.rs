// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Rendering notifier: turns transition events into delivered text.

Sits on the engine's notifier boundary. Delivery failures are logged and
dropped; the zone state machine has already moved on and is never rolled
back for a lost message.
*/

use crate::messages::{render_message, MessageContext};
use tracing::warn;
use zonewatch_engine::{ZoneEvent, ZoneNotifier};

/// Destination for rendered transition messages
pub trait MessageSink {
    /// Deliver one rendered message
    ///
    /// # Errors
    ///
    /// A human-readable description of the delivery failure
    fn deliver(&mut self, message: &str) -> Result<(), String>;
}

/// Any closure over the rendered text works as a sink
impl<F> MessageSink for F
where
    F: FnMut(&str) -> Result<(), String>,
{
    fn deliver(&mut self, message: &str) -> Result<(), String> {
        self(message)
    }
}

/// Notifier that renders each event's template and hands it to a sink
pub struct RenderingNotifier<S: MessageSink> {
    nickname: String,
    sink: S,
}

impl<S: MessageSink> RenderingNotifier<S> {
    /// `nickname` fills the `[nickname]` placeholder in every template
    pub fn new(nickname: &str, sink: S) -> Self {
        Self {
            nickname: nickname.to_string(),
            sink,
        }
    }
}

impl<S: MessageSink> ZoneNotifier for RenderingNotifier<S> {
    fn notify(&mut self, event: &ZoneEvent) {
        let rendered = render_message(
            &event.message_template,
            &MessageContext {
                nickname: &self.nickname,
                zone_name: &event.zone_name,
                position: event.position,
            },
        );

        if let Err(err) = self.sink.deliver(&rendered) {
            warn!(zone = %event.zone_name, %err, "message delivery failed");
        }
    }
}
