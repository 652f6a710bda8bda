//! Event system for parse observation hooks.
//!
//! Provides an optional, non-intrusive way to observe a parse. The parser
//! emits events when it finds an answer key, closes or discards a question,
//! and when the normalization pass has to correct a question.
//! Users can implement [`EventHandler`] to receive these events for
//! logging, live previews, or import reports.

use std::sync::Arc;

/// Events emitted while parsing quiz text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseEvent {
    /// One or more answer key lines were found.
    AnswerKeyFound {
        /// Number of distinct question numbers in the key.
        entries: usize,
    },
    /// A question was closed and appended to the result.
    QuestionClosed {
        /// Number the question carried in the source text.
        number: u32,
        /// Number of options collected.
        options: usize,
        /// Number of statements collected.
        statements: usize,
    },
    /// A question was closed without text, options or statements and dropped.
    QuestionDiscarded {
        /// Number the question carried in the source text.
        number: u32,
        /// Why it was dropped.
        reason: &'static str,
    },
    /// No option was marked correct, so the first one was.
    CorrectnessFallback {
        /// 1-based position of the question in the output.
        order: usize,
    },
    /// A true/false question lost its surplus options.
    TrueFalseTruncated {
        /// 1-based position of the question in the output.
        order: usize,
        /// Number of options removed.
        dropped: usize,
    },
    /// More questions were assembled than the configured maximum.
    CapReached {
        /// Questions kept.
        kept: usize,
        /// Questions dropped from the end.
        dropped: usize,
    },
}

/// Handler for parse events.
///
/// This is entirely optional -- parsing works without an event handler.
///
/// # Example
///
/// ```
/// use quiz_text::events::{EventHandler, ParseEvent};
///
/// struct PrintHandler;
///
/// impl EventHandler for PrintHandler {
///     fn on_event(&self, event: ParseEvent) {
///         if let ParseEvent::QuestionClosed { number, options, .. } = event {
///             println!("question {} with {} options", number, options);
///         }
///     }
/// }
/// ```
pub trait EventHandler: Send + Sync {
    /// Called when the parser emits an event.
    fn on_event(&self, event: ParseEvent);
}

/// Emit an event if a handler is present. No-op otherwise.
pub(crate) fn emit(handler: &Option<Arc<dyn EventHandler>>, event: ParseEvent) {
    if let Some(ref h) = handler {
        h.on_event(event);
    }
}

/// An [`EventHandler`] backed by a closure.
///
/// # Example
///
/// ```
/// use quiz_text::events::{FnEventHandler, ParseEvent};
/// use std::sync::Arc;
///
/// let handler = Arc::new(FnEventHandler(|event: ParseEvent| {
///     println!("{:?}", event);
/// }));
/// ```
pub struct FnEventHandler<F: Fn(ParseEvent) + Send + Sync>(pub F);

impl<F: Fn(ParseEvent) + Send + Sync> EventHandler for FnEventHandler<F> {
    fn on_event(&self, event: ParseEvent) {
        (self.0)(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn emit_without_handler_is_noop() {
        emit(&None, ParseEvent::AnswerKeyFound { entries: 3 });
    }

    #[test]
    fn closure_handler_receives_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handler: Option<Arc<dyn EventHandler>> =
            Some(Arc::new(FnEventHandler(move |e: ParseEvent| {
                sink.lock().unwrap().push(e);
            })));

        emit(&handler, ParseEvent::CorrectnessFallback { order: 2 });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[ParseEvent::CorrectnessFallback { order: 2 }]);
    }
}
