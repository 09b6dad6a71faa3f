//! Applies terminal commands to a controller.

use crate::command::{self, Command};
use crate::terminal::TerminalView;
use ipo_compass_conversation::{AnswerService, ConversationError, Controller, Suggestions};
use std::io::Write;

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handles one line of input.
pub fn handle_line<S, W>(
    controller: &mut Controller<S, TerminalView<W>>,
    suggestions: &Suggestions,
    line: &str,
) -> Flow
where
    S: AnswerService + ?Sized + 'static,
    W: Write,
{
    let result = match command::parse(line) {
        Command::Submit(text) => {
            controller.set_input(text);
            controller.submit(text)
        }
        Command::Suggest(number) => match suggestions.get(number) {
            Some(text) => controller.choose_suggestion(text),
            None => {
                controller
                    .view_mut()
                    .notice(&format!("No suggestion number {number}."));
                return Flow::Continue;
            }
        },
        Command::ListSuggestions => {
            controller.view_mut().suggestions(suggestions);
            return Flow::Continue;
        }
        Command::Quit => return Flow::Quit,
        Command::Unknown(input) => {
            controller
                .view_mut()
                .notice(&format!("Unknown command {input}. Try /suggest or /quit."));
            return Flow::Continue;
        }
    };

    match result {
        Ok(request_id) => tracing::debug!(%request_id, "query submitted"),
        Err(ConversationError::InputRejected) => {}
        Err(e) => tracing::warn!(error = %e, "submission failed"),
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipo_compass_conversation::{AnswerError, FALLBACK_MESSAGE, MockAnswerService, Speaker};
    use std::sync::Arc;

    fn controller(
        service: MockAnswerService,
    ) -> Controller<MockAnswerService, TerminalView<Vec<u8>>> {
        Controller::new(Arc::new(service), TerminalView::new(Vec::new()))
    }

    fn printed(mut controller: Controller<MockAnswerService, TerminalView<Vec<u8>>>) -> String {
        let out = std::mem::replace(controller.view_mut(), TerminalView::new(Vec::new()));
        String::from_utf8(out.into_inner()).expect("utf-8")
    }

    #[tokio::test]
    async fn text_is_submitted_and_answered() {
        let mut ctrl = controller(MockAnswerService::succeeding("## Verdict\n- Subscribe"));
        let suggestions = Suggestions::default();

        assert_eq!(
            handle_line(&mut ctrl, &suggestions, "Should I apply?"),
            Flow::Continue
        );
        ctrl.settle_all().await;

        assert_eq!(ctrl.transcript().len(), 2);
        let text = printed(ctrl);
        assert!(text.contains("Nexa is typing..."));
        assert!(text.contains("Nexa: <h2"));
    }

    #[tokio::test]
    async fn suggestion_number_submits_its_text() {
        let service = Arc::new(MockAnswerService::succeeding("ok"));
        let mut ctrl = Controller::new(Arc::clone(&service), TerminalView::new(Vec::new()));

        handle_line(&mut ctrl, &Suggestions::default(), "/suggest 1");
        ctrl.settle_all().await;

        assert_eq!(service.queries(), vec!["What is an IPO?".to_string()]);
        assert_eq!(ctrl.transcript().entries()[0].speaker(), Speaker::User);
    }

    #[tokio::test]
    async fn out_of_range_suggestion_is_reported() {
        let mut ctrl = controller(MockAnswerService::succeeding("ok"));

        handle_line(&mut ctrl, &Suggestions::default(), "/suggest 9");

        assert!(ctrl.transcript().is_empty());
        assert!(printed(ctrl).contains("No suggestion number 9."));
    }

    #[tokio::test]
    async fn blank_line_sends_nothing() {
        let mut ctrl = controller(MockAnswerService::succeeding("ok"));

        handle_line(&mut ctrl, &Suggestions::default(), "   ");

        assert!(ctrl.transcript().is_empty());
        assert_eq!(ctrl.in_flight(), 0);
    }

    #[tokio::test]
    async fn failure_prints_fallback() {
        let mut ctrl = controller(MockAnswerService::failing(AnswerError::Timeout));

        handle_line(&mut ctrl, &Suggestions::default(), "hello");
        ctrl.settle_all().await;

        assert!(printed(ctrl).contains(FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let mut ctrl = controller(MockAnswerService::succeeding("ok"));
        assert_eq!(
            handle_line(&mut ctrl, &Suggestions::default(), "/quit"),
            Flow::Quit
        );
    }
}
