use anyhow::{Context, Result};
use dawg_core::{
    can_skip, instruction, is_game_over, location_heading, log_newest_first, resolution_message,
    valid_plays, Action, Card, Dealer, GameConfig, GameSnapshot, Phase, RngState, RuleError,
    SystemClock, Table,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DEFAULT_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone, Default)]
struct CliOptions {
    seed: Option<u64>,
    config: Option<PathBuf>,
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    New,
    Hand,
    Play(usize),
    Skip,
    Next,
    Undo,
    Log,
    State,
    Help,
    Quit,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        seed: std::env::var("DAWG_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok()),
        config: None,
        verbose: false,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--verbose" | "-v" => options.verbose = true,
            "--config" => {
                if let Some(value) = args.get(idx + 1) {
                    options.config = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    options
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command".to_string());
    };
    match head {
        "n" | "new" => Ok(Command::New),
        "h" | "hand" => Ok(Command::Hand),
        "p" | "play" => {
            let idx = parts
                .next()
                .ok_or_else(|| "missing card index".to_string())?;
            idx.parse::<usize>()
                .map(Command::Play)
                .map_err(|_| format!("invalid index '{idx}'"))
        }
        "s" | "skip" => Ok(Command::Skip),
        "c" | "next" | "continue" => Ok(Command::Next),
        "u" | "undo" => Ok(Command::Undo),
        "l" | "log" => Ok(Command::Log),
        "state" => Ok(Command::State),
        "?" | "help" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}'")),
    }
}

/// Logs go to stderr so they never interleave with the prompt on stdout.
fn init_logger(verbose: bool) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read config from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    init_logger(options.verbose)?;
    let config = load_config(options.config.as_deref())?;
    let seed = options.seed.unwrap_or(DEFAULT_SEED);
    log::info!("starting dawg with seed {seed}");

    let dealer = Dealer::new(config, RngState::from_seed(seed), Box::new(SystemClock));
    let mut table = Table::new(dealer);
    println!("dealing with seed {}", table.dealer().seed());
    report(table.dispatch(Action::new_game()));
    print_help();
    print_overview(table.snapshot());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}> ", table.snapshot().phase);
        io::stdout().flush().context("flush prompt")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read command")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };
        match command {
            Command::New => report(table.dispatch(Action::new_game())),
            Command::Hand => print_hand(table.snapshot()),
            Command::Play(idx) => {
                let card = table.snapshot().hand.get(idx).cloned();
                match card {
                    Some(card) => report(table.dispatch(Action::play_card(Some(card)))),
                    None => println!("error: no card at index {idx}"),
                }
            }
            Command::Skip => {
                if can_skip(table.snapshot()) {
                    report(table.dispatch(Action::play_card(None)));
                } else {
                    println!("error: nothing to skip right now");
                }
            }
            Command::Next => report(table.dispatch(Action::continue_turn())),
            Command::Undo => {
                if !table.undo() {
                    println!("error: nothing to undo");
                }
            }
            Command::Log => {
                print_log(table.snapshot());
                continue;
            }
            Command::State => {
                let json = serde_json::to_string_pretty(table.snapshot())
                    .context("serialize snapshot")?;
                println!("{json}");
                continue;
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Quit => break,
        }
        print_overview(table.snapshot());
    }
    Ok(())
}

fn report(result: Result<&GameSnapshot, RuleError>) {
    if let Err(err) = result {
        println!("error: {err}");
    }
}

fn print_help() {
    println!("commands:");
    println!("  new            start a new game");
    println!("  hand           list your hand (* marks legal plays)");
    println!("  play <idx>     play the card at <idx>");
    println!("  skip           find nothing at the location");
    println!("  next           continue after a resolution");
    println!("  undo           take back the last change");
    println!("  log            game log, newest first");
    println!("  state          dump the snapshot as json");
    println!("  (start with --seed <n> to replay a deal, --verbose for debug logs)");
    println!("  quit");
}

fn print_overview(state: &GameSnapshot) {
    println!();
    println!("== {} ==", location_heading(state));
    if let Some(message) = resolution_message(state) {
        for line in message.lines() {
            println!("  {line}");
        }
    }
    let text = instruction(state);
    if !text.is_empty() {
        println!("{text}");
    }
    if state.phase != Phase::Resolve {
        print_hand(state);
    }
    println!(
        "played: {}  deck: {}  discard: {}",
        state.played.len(),
        state.deck.len(),
        state.discard.len()
    );
    if is_game_over(state) {
        println!("type 'new' to deal again");
    }
}

fn print_hand(state: &GameSnapshot) {
    println!("== Hand == ({} cards)", state.hand.len());
    if state.hand.is_empty() {
        println!("  no cards in hand...");
        return;
    }
    let legal = valid_plays(state);
    for (idx, card) in state.hand.iter().enumerate() {
        let mark = if legal.contains(&card.kind) { '*' } else { ' ' };
        println!("{:>4} {mark} {}", idx, format_card(card, state));
    }
}

fn format_card(card: &Card, state: &GameSnapshot) -> String {
    if state.playing_card.as_ref() == Some(card) {
        format!("{} (travelling)", card.name)
    } else {
        card.name.clone()
    }
}

fn print_log(state: &GameSnapshot) {
    for entry in log_newest_first(state) {
        println!("[{}] {}", entry.posted_at, entry.message);
    }
}
