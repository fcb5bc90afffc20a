use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use crossy::core::event_log::{apply_tick_events, EventLog};
use crossy::input::{Command, InputEdges};
use crossy::ui::draw_ui;
use crossy::utils::build_info::version_line;
use crossy::utils::HighScoreRecord;
use crossy::{process_tick, restart, GameSession, RuleSet, TickEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

const USAGE: &str = "Crossy - terminal road crossing game

Usage: crossy [options]

Options:
  --classic      Play with the classic rules (clamped movement, goal bonus)
  --seed <N>     Use a fixed seed for vehicle spawning
  --version      Show version information
  --help         Show this help message";

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CliAction {
    Play { rules: RuleSet, seed: Option<u64> },
    Version,
    Help,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliAction, String> {
    let mut rules = RuleSet::Portal;
    let mut seed = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--classic" => rules = RuleSet::Classic,
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed needs a value".to_string())?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                seed = Some(parsed);
            }
            "--version" | "-v" => return Ok(CliAction::Version),
            "--help" | "-h" => return Ok(CliAction::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(CliAction::Play { rules, seed })
}

fn main() -> io::Result<()> {
    let (rules, seed) = match parse_args(std::env::args().skip(1)) {
        Ok(CliAction::Play { rules, seed }) => (rules, seed),
        Ok(CliAction::Version) => {
            println!("{}", version_line());
            return Ok(());
        }
        Ok(CliAction::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'crossy --help' for usage.");
            std::process::exit(1);
        }
    };

    let record = HighScoreRecord::for_rules(rules);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::new(rules, record.load(), &mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    if reports_release {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut edges = InputEdges::new(reports_release);
    let result = run(&mut terminal, &mut session, &mut rng, &record, &mut edges);

    // Restore terminal
    if reports_release {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Fixed-timestep loop: wait out the frame while collecting input, then run
/// one tick and draw.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut GameSession,
    rng: &mut StdRng,
    record: &HighScoreRecord,
    edges: &mut InputEdges,
) -> io::Result<()> {
    let mut log = EventLog::new();

    loop {
        let frame_start = Instant::now();
        let budget = session.frame_duration();

        loop {
            let remaining = budget.saturating_sub(frame_start.elapsed());
            if !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key_event) = event::read()? {
                match edges.handle_key(&key_event) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Restart) => {
                        if let Some(event) = restart(session, rng) {
                            apply_tick_events(&mut log, &[event]);
                        }
                    }
                    _ => {}
                }
            }
        }

        let events = process_tick(session, edges.frame_input());
        edges.end_frame();

        if events
            .iter()
            .any(|e| matches!(e, TickEvent::NewHighScore { .. }))
        {
            record.save(session.high_score)?;
        }
        apply_tick_events(&mut log, &events);

        terminal.draw(|frame| draw_ui(frame, session, &log))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_is_portal_rules() {
        assert_eq!(
            parse_args(args(&[])),
            Ok(CliAction::Play {
                rules: RuleSet::Portal,
                seed: None
            })
        );
    }

    #[test]
    fn test_classic_with_seed() {
        assert_eq!(
            parse_args(args(&["--classic", "--seed", "42"])),
            Ok(CliAction::Play {
                rules: RuleSet::Classic,
                seed: Some(42)
            })
        );
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(args(&["--seed"])).is_err());
        assert!(parse_args(args(&["--seed", "x"])).is_err());
        assert!(parse_args(args(&["--turbo"])).is_err());
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(args(&["-v"])), Ok(CliAction::Version));
        assert_eq!(parse_args(args(&["--help"])), Ok(CliAction::Help));
    }
}
