use std::io::{self, stdout};
use std::process::ExitCode;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{enable_raw_mode, EnterAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use cfo_helper::app::App;
use cfo_helper::cli::{json_report, parse_args, text_report, CliArgs, VERSION};
use cfo_helper::error::AppError;
use cfo_helper::logging::init_logging;
use cfo_helper::models::BaselineFinancials;
use cfo_helper::ui::{render_dashboard, restore_terminal};

fn main() -> ExitCode {
    let args = parse_args();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cfo-helper: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), AppError> {
    let log_path = init_logging(args.log_file.as_deref(), &args.log_level);
    tracing::info!(version = VERSION, log_file = ?log_path, "cfo-helper starting");

    let baseline = match &args.baseline {
        Some(path) => {
            let baseline = BaselineFinancials::load(path).inspect_err(|err| {
                tracing::error!(path = %path.display(), error = %err, "failed to load baseline");
            })?;
            tracing::info!(path = %path.display(), "baseline loaded from file");
            baseline
        }
        None => {
            tracing::info!("using built-in baseline");
            BaselineFinancials::default()
        }
    };

    let app = App::new(baseline, args.adjustment());

    if args.summary {
        let output = if args.json {
            json_report(&app.baseline, app.adjustment, &app.result)?
        } else {
            text_report(&app.baseline, app.adjustment, &app.result)
        };
        println!("{}", output);
        return Ok(());
    }

    run_dashboard(app)
}

fn run_dashboard(mut app: App) -> Result<(), AppError> {
    // Setup terminal
    enable_raw_mode()?;

    // Run the app
    let result = stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout())))
        .and_then(|mut terminal| event_loop(&mut terminal, &mut app));

    // Restore terminal even when setup or the loop failed
    let restored = restore_terminal(&mut stdout());

    tracing::info!("dashboard closed");
    result.and(restored).map_err(AppError::from)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| render_dashboard(app, frame))?;

        // Handle input
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
