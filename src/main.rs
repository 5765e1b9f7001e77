#[cfg(not(feature = "cli"))]
fn main() {}

#[cfg(feature = "cli")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "cli")]
use battleship3d::{
    cli::{parse_dimension, Command, Prompter},
    init_logging, render_snapshot, Board, BoardError, ConfigError, FireReport, GameConfig,
    GameState, ShotResult, VesselKind, WinCondition, DEFAULT_COLS, DEFAULT_ROWS,
};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use rand::rngs::SmallRng;
#[cfg(feature = "cli")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "cli")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "cli")]
enum WinRule {
    /// Destroying the enemy General wins.
    General,
    /// Destroying the enemy General or every other enemy vessel wins.
    GeneralOrFleet,
}

#[cfg(feature = "cli")]
impl From<WinRule> for WinCondition {
    fn from(rule: WinRule) -> Self {
        match rule {
            WinRule::General => WinCondition::GeneralDestroyed,
            WinRule::GeneralOrFleet => WinCondition::GeneralOrFleet,
        }
    }
}

#[cfg(feature = "cli")]
fn positive(text: &str) -> Result<usize, ConfigError> {
    parse_dimension("value", text)
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "cli")]
struct SetupArgs {
    #[arg(long, value_parser = positive)]
    rows: Option<usize>,
    #[arg(long, value_parser = positive)]
    cols: Option<usize>,
    #[arg(long)]
    submarines: Option<usize>,
    #[arg(long)]
    destroyers: Option<usize>,
    #[arg(long)]
    jets: Option<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = WinRule::General)]
    win_condition: WinRule,
}

#[derive(Subcommand)]
#[cfg(feature = "cli")]
enum Commands {
    /// Play a two-player hot-seat game in this terminal.
    Play {
        #[command(flatten)]
        setup: SetupArgs,
    },
    /// Generate one board and print it as JSON.
    Generate {
        #[command(flatten)]
        setup: SetupArgs,
        #[arg(long)]
        pretty: bool,
        #[arg(long, help = "Print per-layer numeric arrays instead of the full snapshot")]
        values: bool,
    },
}

#[cfg(feature = "cli")]
impl SetupArgs {
    fn count(&self, kind: VesselKind) -> Option<usize> {
        match kind {
            VesselKind::Submarine => self.submarines,
            VesselKind::Destroyer => self.destroyers,
            VesselKind::Jet => self.jets,
            VesselKind::General => Some(1),
        }
    }

    /// Whether every setup value came from the command line.
    fn is_complete(&self) -> bool {
        self.rows.is_some()
            && self.cols.is_some()
            && VesselKind::FLEET.iter().all(|&kind| self.count(kind).is_some())
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }

    /// Configuration with defaults for anything not given.
    fn defaults(&self) -> GameConfig {
        let config = GameConfig::new(
            self.rows.unwrap_or(DEFAULT_ROWS),
            self.cols.unwrap_or(DEFAULT_COLS),
        )
        .with_win_condition(self.win_condition.into());
        VesselKind::FLEET.iter().fold(config, |config, &kind| match self.count(kind) {
            Some(count) => config.with_count(kind, count),
            None => config,
        })
    }

    /// Configuration with prompts for anything not given.
    fn prompt<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> io::Result<GameConfig> {
        let rows = match self.rows {
            Some(rows) => rows,
            None => prompter.read_dimension("rows")?,
        };
        let cols = match self.cols {
            Some(cols) => cols,
            None => prompter.read_dimension("cols")?,
        };
        let mut config =
            GameConfig::new(rows, cols).with_win_condition(self.win_condition.into());
        for kind in VesselKind::FLEET {
            let count = match self.count(kind) {
                Some(count) => count,
                None => prompter.read_count(kind)?,
            };
            config = config.with_count(kind, count);
        }
        Ok(config)
    }
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { setup } => play(&setup),
        Commands::Generate {
            setup,
            pretty,
            values,
        } => generate(&setup, pretty, values),
    }
}

#[cfg(feature = "cli")]
fn generate(setup: &SetupArgs, pretty: bool, values: bool) -> anyhow::Result<()> {
    let config = setup.defaults();
    let mut rng = setup.rng();
    let board = Board::generate(&config, &mut rng)?;
    let snapshot = board.snapshot();
    let json = match (values, pretty) {
        (true, true) => serde_json::to_string_pretty(&snapshot.values())?,
        (true, false) => serde_json::to_string(&snapshot.values())?,
        (false, true) => serde_json::to_string_pretty(&snapshot)?,
        (false, false) => serde_json::to_string(&snapshot)?,
    };
    println!("{}", json);
    Ok(())
}

#[cfg(feature = "cli")]
fn play(setup: &SetupArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    if let Some(s) = setup.seed {
        prompter.say(format!("Using fixed seed: {} (game will be reproducible)", s))?;
    }
    let mut rng = setup.rng();

    let mut game = loop {
        let config = setup.prompt(&mut prompter)?;
        match GameState::new(&config, &mut rng) {
            Ok(game) => break game,
            Err(err @ BoardError::PlacementExhausted { .. }) if !setup.is_complete() => {
                prompter.say(format!("Board initialization failed: {}", err))?;
            }
            Err(err) => return Err(err.into()),
        }
    };

    while let Some(player) = game.current_player() {
        let opponent = player.opponent();
        prompter.say(format!("\n=== {}'s turn ===", player))?;
        prompter.say(render_snapshot(&game.concealed_snapshot(opponent)))?;
        let dimensions = game.opponent_board(player).dimensions();
        match prompter.read_command(dimensions)? {
            Command::Quit => {
                prompter.say(format!("{} left the game.", player))?;
                return Ok(());
            }
            Command::Show => {
                prompter.say(format!("Your board, {}:", player))?;
                prompter.say(render_snapshot(&game.snapshot(player)))?;
            }
            Command::Fire(target) => match game.fire_at(target) {
                Ok(report) => prompter.say(describe(&report))?,
                Err(err) => prompter.say(format!("Cannot fire: {}", err))?,
            },
        }
    }

    if let Some(winner) = game.winner() {
        prompter.say(format!("\n=== GAME OVER: {} wins ===", winner))?;
        prompter.say(render_snapshot(&game.snapshot(winner.opponent())))?;
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn describe(report: &FireReport) -> String {
    let outcome = match report.result {
        ShotResult::Miss => "miss".to_string(),
        ShotResult::Hit { kind, .. } => format!("hit a {}!", kind),
        ShotResult::Destroyed { kind, .. } => format!("destroyed a {}!", kind),
        ShotResult::AlreadyMissed => "already fired there, still a miss".to_string(),
        ShotResult::AlreadyHit { kind, .. } => format!("that {} segment was already hit", kind),
    };
    format!("{} fires at {}: {}", report.shooter, report.target, outcome)
}
