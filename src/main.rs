use crossterm::cursor::Show;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use flappy::build_info;
use flappy::core::{FlappyEngine, FrameClock, GameConfig, TickOutcome};
use flappy::error::{Result, ShellError};
use flappy::input::{map_event, FrameInput};
use flappy::ui::{render_flappy, SpriteSheet};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Restores the terminal when dropped, on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(ShellError::Usage(message)) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("flappy: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => return Err(ShellError::Usage(format!("Unknown argument: {}", other))),
        }
    }

    // Sprites load before the terminal is touched so a failure prints cleanly.
    let sheet = SpriteSheet::load()?;
    let (wall_width, wall_height) = sheet.wall_size;
    let config = GameConfig::load().with_wall_size(wall_width, wall_height);

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    game_loop(&mut terminal, config, &sheet)
}

fn game_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: GameConfig,
    sheet: &SpriteSheet,
) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut engine = FlappyEngine::new(config, &mut rng);
    let mut clock = FrameClock::new();
    let mut pending = FrameInput::default();
    let mut last_frame = Instant::now();

    log::info!("game started");

    loop {
        let snapshot = engine.snapshot();
        terminal.draw(|frame| {
            let area = frame.size();
            render_flappy(frame, area, &snapshot, sheet, engine.revivals);
        })?;

        // Wait for input until the next tick is due, then drain whatever queued up.
        let timeout = clock
            .until_next_tick()
            .saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            loop {
                pending.push(map_event(&event::read()?));
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if pending.quit_requested {
            log::info!(
                "quit after {} ticks, {} restarts",
                engine.ticks,
                engine.revivals
            );
            return Ok(());
        }

        let now = Instant::now();
        let due = clock.advance(now - last_frame);
        last_frame = now;

        for _ in 0..due {
            let outcome = engine.tick(pending.take_impulse(), &mut rng);
            log_outcome(&engine, outcome);
        }
    }
}

fn log_outcome(engine: &FlappyEngine, outcome: TickOutcome) {
    if outcome.recycled {
        log::trace!(
            "wall recycled, counter={} gap_offset={}",
            engine.counter,
            engine.gap_offset
        );
    }
    if outcome.collided {
        log::debug!("bird hit a wall at y={:.1}", engine.bird_y);
    }
    if outcome.revived {
        log::debug!("bird left the sky, run reset (restart #{})", engine.revivals);
    }
}

fn print_help() {
    println!("Flappy - Terminal Flappy Bird\n");
    println!("Usage: flappy [option]\n");
    println!("Options:");
    println!("  --version  Show version information");
    println!("  --help     Show this help message\n");
    println!("Controls:");
    println!("  Space, Up, Enter, W, K or mouse click  Flap");
    println!("  Esc, Q or Ctrl+C                       Quit");
}
