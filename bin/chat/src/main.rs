#[tokio::main(flavor = "current_thread")]
async fn main() {
    use ipo_compass_answer::HttpAnswerService;
    use ipo_compass_chat::{
        config::ChatConfig,
        repl::{self, Flow},
        terminal::TerminalView,
    };
    use ipo_compass_conversation::{Controller, Suggestions};
    use std::sync::Arc;
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Load configuration from environment
    let config = ChatConfig::from_env().expect("failed to load configuration");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let service = HttpAnswerService::new(&config.answer).expect("failed to build answer client");
    tracing::info!(endpoint = service.endpoint(), "Answer service configured");

    let suggestions = Suggestions::default();
    let mut controller = Controller::new(Arc::new(service), TerminalView::new(std::io::stdout()));
    controller
        .view_mut()
        .notice("Hi! I'm Nexa, your IPO assistant. Ask me anything, or /quit to leave.");
    controller.view_mut().suggestions(&suggestions);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if repl::handle_line(&mut controller, &suggestions, &line) == Flow::Quit {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read input");
                    break;
                }
            },
            Some(completion) = controller.next_completion() => {
                if let Err(e) = controller.complete(completion) {
                    tracing::warn!(error = %e, "Dropping completion");
                }
            }
        }
    }

    if controller.in_flight() > 0 {
        tracing::info!(pending = controller.in_flight(), "Waiting for outstanding answers");
        controller.settle_all().await;
    }
}
