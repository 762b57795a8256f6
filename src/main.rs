mod app;
mod domain;
mod identity;
mod input;
mod notifications;
mod store;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use store::{get_data_dir, init_local_dir, Store};

#[derive(Parser)]
#[command(name = "studyhelper")]
#[command(about = "A terminal-based study cockpit with tasks, agenda, achievements, and an interval timer", long_about = None)]
struct Cli {
    /// Userinfo endpoint consulted for the admin affordance
    #[arg(long, default_value = "http://127.0.0.1:4180/oauth2/userinfo")]
    userinfo_url: String,

    /// Logout link shown in the user bar
    #[arg(long, default_value = "http://127.0.0.1:4180/oauth2/sign_out")]
    logout_url: String,

    /// Initial work interval in minutes (minimum 1)
    #[arg(long, default_value_t = domain::DEFAULT_WORK_MINUTES)]
    work_minutes: u32,

    /// Initial break interval in minutes (minimum 1)
    #[arg(long, default_value_t = domain::DEFAULT_BREAK_MINUTES)]
    break_minutes: u32,

    /// Skip the identity fetch entirely
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .studyhelper directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized data directory: {}", data_dir.display());
            println!();
            println!("StudyHelper will now use this local directory for storage.");
            println!("Run 'studyhelper' to start.");
            Ok(())
        }
        None => run_tui(cli),
    }
}

fn run_tui(cli: Cli) -> Result<()> {
    let store = Store::open()?;

    // Show which directory we're using before entering the alternate screen
    let data_dir = get_data_dir()?;
    eprintln!("Using data directory: {}", data_dir.display());

    let mut app = AppState::new(store, cli.work_minutes, cli.break_minutes, cli.logout_url);

    // Kick off the one-shot identity fetch; the result is polled by the loop
    if !cli.offline {
        app.user_rx = Some(identity::spawn_userinfo_fetch(cli.userinfo_url));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();
    let mut last_frame = Instant::now();

    loop {
        // Pick up the identity result if it has arrived
        app.poll_user();

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with a timeout so the timer keeps ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Advance the timer by however much wall time passed
        let now = Instant::now();
        app.advance_time(now - last_frame);
        last_frame = now;
    }
}
