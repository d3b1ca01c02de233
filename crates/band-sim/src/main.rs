//! Band chemistry season runner
//!
//! Drives one band through a number of in-game weeks: scheduled triggers,
//! periodic gig outcomes, and the weekly check/drift tick. Fired drama can be
//! written to a JSONL history file.

use band_chemistry::{BandEngine, EngineConfig, EngineError, HistoryLog, MemoryStore, Modifiers};
use band_events::{BandDramaEvent, BandId, ChemistryState, EventContext, GameWeek, TriggerSource};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

mod schedule;

use schedule::{due_in_week, ScheduledTrigger};

/// Command line arguments for the season runner
#[derive(Parser, Debug)]
#[command(name = "band-sim")]
#[command(about = "Simulates band chemistry and drama over a season")]
struct Args {
    /// Random seed for reproducibility [default: config seed, else 42]
    #[arg(long)]
    seed: Option<u64>,

    /// Number of weeks to simulate
    #[arg(long, default_value_t = 12)]
    weeks: u32,

    /// Engine configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Identifier of the simulated band
    #[arg(long, default_value = "band_demo")]
    band_id: String,

    /// Write fired drama events to this JSONL file
    #[arg(long)]
    history: Option<PathBuf>,

    /// Run a gig outcome trigger every N weeks (0 disables gigs)
    #[arg(long, default_value_t = 2)]
    gig_every: u32,

    /// Initial chemistry level
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    chemistry: i64,

    /// Initial romantic tension
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    tension: i64,

    /// Initial creative alignment
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    alignment: i64,

    /// Initial conflict index
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    conflict: i64,

    /// Extra trigger as WEEK:SOURCE, e.g. 3:romantic_breakup (repeatable)
    #[arg(long = "event", value_name = "WEEK:SOURCE")]
    events: Vec<ScheduledTrigger>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

const DEFAULT_SEED: u64 = 42;

/// End-of-season totals.
#[derive(Debug)]
struct SeasonSummary {
    seed: u64,
    weeks: u32,
    state: ChemistryState,
    modifiers: Option<Modifiers>,
    events_fired: usize,
    version: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    if args.print_default_config {
        print!("{}", band_chemistry::default_config_toml());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(summary) => {
            print_summary(&args, &summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "season aborted");
            ExitCode::FAILURE
        }
    }
}

/// Loads the engine config. `--seed` wins over `[engine].seed`; with neither
/// the run is still seeded.
fn load_config(args: &Args) -> Result<EngineConfig, EngineError> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    config.engine.seed = Some(args.seed.or(config.engine.seed).unwrap_or(DEFAULT_SEED));
    Ok(config)
}

fn run(args: &Args) -> Result<SeasonSummary, EngineError> {
    let config = load_config(args)?;
    let seed = config.engine.seed.unwrap_or(DEFAULT_SEED);

    let band = BandId::new(args.band_id.as_str());
    let initial = ChemistryState::new(args.chemistry, args.tension, args.alignment, args.conflict);
    let store = MemoryStore::new();
    store.insert_band(band.clone(), initial)?;

    let mut history = match &args.history {
        Some(path) => HistoryLog::create(path)?,
        None => HistoryLog::null(),
    };

    println!("Band Chemistry Simulation");
    println!("=========================");
    println!("Band: {}", band);
    println!("Seed: {}", seed);
    println!("Weeks: {}", args.weeks);
    println!("Initial state: {} ({})", initial, initial.tier());
    println!();

    let mut engine = BandEngine::new(config, store);
    let mut summary = SeasonSummary {
        seed,
        weeks: args.weeks,
        state: initial,
        modifiers: None,
        events_fired: 0,
        version: 0,
    };

    let mut game_week = GameWeek(1);
    for _ in 0..args.weeks {
        let week = game_week.0;
        let ctx = EventContext::new(band.clone(), game_week);
        let mut fired: Vec<BandDramaEvent> = Vec::new();

        for scheduled in due_in_week(&args.events, week) {
            let source = match scheduled.source.parse::<TriggerSource>() {
                Ok(source) => source,
                Err(e) => {
                    tracing::warn!(week, error = %e, "skipping scheduled trigger");
                    continue;
                }
            };
            let outcome = engine.process_trigger(source, &ctx)?;
            fired.extend(outcome.events);
        }

        if args.gig_every > 0 && week % args.gig_every == 0 {
            let outcome = engine.process_trigger(TriggerSource::GigOutcome, &ctx)?;
            fired.extend(outcome.events);
        }

        let report = engine.weekly_tick(&band, game_week)?;
        fired.extend(report.check.events);

        history.log_batch(&fired)?;
        print_week(game_week, &fired, &report.drift.state, &report.modifiers);

        summary.events_fired += fired.len();
        summary.state = report.drift.state;
        summary.modifiers = Some(report.modifiers);
        summary.version = report.drift.version;
        game_week = game_week.next();
    }

    history.flush()?;
    if let Some(path) = &args.history {
        tracing::info!(
            path = %path.display(),
            events = history.event_count(),
            "history written"
        );
    }

    Ok(summary)
}

fn print_week(week: GameWeek, fired: &[BandDramaEvent], state: &ChemistryState, modifiers: &Modifiers) {
    println!("{}: {} [{}]", week, state, state.tier());
    for event in fired {
        println!("  {} ({}): {}", event.preset, event.severity, event.description);
    }
    println!(
        "  song x{:.3}  performance x{:.3}  rehearsal x{:.3}  leave risk {}%  drama {}%  fans {:+}",
        modifiers.song_quality_multiplier,
        modifiers.performance_rating_multiplier,
        modifiers.rehearsal_efficiency_multiplier,
        modifiers.member_leave_risk,
        modifiers.drama_event_chance,
        modifiers.fan_perception_modifier,
    );
}

fn print_summary(args: &Args, summary: &SeasonSummary) {
    if args.json {
        let report = serde_json::json!({
            "band_id": args.band_id,
            "seed": summary.seed,
            "weeks": summary.weeks,
            "events_fired": summary.events_fired,
            "version": summary.version,
            "state": summary.state,
            "tier": summary.state.tier().to_string(),
            "modifiers": summary.modifiers,
        });
        println!("{}", report);
        return;
    }

    println!();
    println!("Season complete.");
    println!("  Weeks simulated: {}", summary.weeks);
    println!("  Drama events fired: {}", summary.events_fired);
    println!("  Final state: {} ({})", summary.state, summary.state.tier());
    println!("  Store version: {}", summary.version);
}
