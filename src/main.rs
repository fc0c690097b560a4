use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

/// Fact-check dashboard for a text/video verification service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/factdash-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the verification service base URL
    #[arg(long)]
    base_url: Option<String>,
}

mod handlers;
mod ui;

use factdash::api::VerifyClient;
use factdash::classifier::{ImageClassifier, UnavailableImageClassifier};
use factdash::config::{self, Config};
use factdash::logic;
use factdash::model::Model;
use factdash::services::{self, SubmitRequest, SubmitResponse};

pub struct App {
    pub model: Model,

    submit_tx: mpsc::UnboundedSender<SubmitRequest>,
    submit_rx: mpsc::UnboundedReceiver<SubmitResponse>,

    endpoint_url: String,
}

impl App {
    fn new(config: &Config, classifier: Arc<dyn ImageClassifier>) -> Self {
        let client = VerifyClient::from_config(config);
        let endpoint_url = client.endpoint_url().to_string();

        // Spawn submission worker
        let (submit_tx, submit_rx) = services::spawn_submit_service(client, classifier);

        App {
            model: Model::new(config.history_limit),
            submit_tx,
            submit_rx,
            endpoint_url,
        }
    }

    /// Submit whatever is in the input panel
    pub fn submit(&mut self) {
        let submission = self.model.ui.submission();

        if submission.content_type == factdash::ContentType::Text && submission.query.is_empty() {
            self.model.show_toast("Error: Enter a claim to check".to_string());
            return;
        }

        match self.model.dashboard.begin_submission(&submission) {
            Ok(seq) => {
                if self.submit_tx.send(SubmitRequest { seq, submission }).is_err() {
                    tracing::error!("Submit service is gone, dropping #{}", seq);
                    let error = logic::errors::SubmitError::Transport(
                        "submission worker stopped".to_string(),
                    );
                    self.model.show_toast(logic::errors::format_error_message(&error));
                    self.model.dashboard.complete_submission(seq, Err(error));
                }
            }
            Err(error) => {
                self.model.show_toast(logic::errors::format_error_message(&error));
            }
        }
    }

    /// Delegated to handlers::api module
    fn handle_submit_response(&mut self, response: SubmitResponse) {
        handlers::handle_submit_response(self, response);
    }

    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(self, key);
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    factdash::logging::init(args.debug)?;

    let mut config = match config::resolve_config_path(args.config)? {
        Some(path) => {
            tracing::debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let mut app = App::new(&config, Arc::new(UnavailableImageClassifier));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Apply responses in arrival order (non-blocking)
        while let Ok(response) = app.submit_rx.try_recv() {
            app.handle_submit_response(response);
        }

        // Redraw quickly while something moves on screen, otherwise idle
        let animating = logic::layout::is_animating(app.model.dashboard.since_expanded())
            || app.model.dashboard.processing;
        let timeout = if animating {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
