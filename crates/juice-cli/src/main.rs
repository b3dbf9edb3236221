//! CLI frontend for the Juice solo oracle.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use commands::Output;

#[derive(Parser)]
#[command(
    name = "juice",
    about = "Juice: a table-driven oracle for solo roleplaying",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON records
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice expression such as 2d6+1 or 4dF
    Roll {
        /// Dice expression
        expr: String,

        /// Roll two pools and keep the higher
        #[arg(long, conflicts_with = "disadvantage")]
        advantage: bool,

        /// Roll two pools and keep the lower
        #[arg(long)]
        disadvantage: bool,
    },

    /// Roll a d6 skewed toward 6 (positive) or 1 (negative)
    Skew {
        /// Skew from -3 to 3
        #[arg(allow_negative_numbers = true)]
        skew: i32,
    },

    /// Ask the oracle a yes/no question
    Fate {
        /// Likelihood: unlikely, even, likely
        likelihood: Option<String>,

        /// Read a double blank with the primary die on the left
        #[arg(long, conflicts_with = "right")]
        left: bool,

        /// Read a double blank with the primary die on the right
        #[arg(long)]
        right: bool,
    },

    /// Roll for how the next scene opens
    Scene,

    /// Roll a random event
    Event,

    /// Roll a color
    Color,

    /// Roll a property with intensity
    Property,

    /// Roll a detail modifier
    Detail,

    /// Roll a history hook
    History,

    /// Roll a physical and a mental challenge with DCs
    Challenge {
        /// Keep the better of two DC dice
        #[arg(long, conflicts_with = "hard")]
        easy: bool,

        /// Keep the worse of two DC dice
        #[arg(long)]
        hard: bool,
    },

    /// Roll what a failure costs
    Price,

    /// Roll a dialog exchange
    Dialog {
        /// JSON state file (created if missing)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Roll exchanges until the conversation ends
        #[arg(long)]
        bulk: bool,

        /// Most exchanges in a bulk run (default 10)
        #[arg(long)]
        cap: Option<u32>,
    },

    /// Roll the next dungeon area
    Dungeon {
        /// JSON state file (created if missing)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Start a new map with the two-pass rules
        #[arg(long)]
        two_pass: bool,

        /// Roll passage shapes for passages
        #[arg(long)]
        passage: bool,

        /// Pool mode for passage rolls: straight, adv, dis
        #[arg(long, default_value = "straight")]
        passage_mode: String,

        /// Roll conditions for rooms
        #[arg(long)]
        condition: bool,

        /// Rooms are occupied
        #[arg(long)]
        occupied: bool,
    },

    /// Run the trap procedure
    Trap {
        /// The character is searching
        #[arg(long)]
        searching: bool,

        /// Keep the better of two DC dice
        #[arg(long, conflicts_with = "hard")]
        easy: bool,

        /// Keep the worse of two DC dice
        #[arg(long)]
        hard: bool,

        /// The character's check total
        #[arg(long, allow_negative_numbers = true)]
        check: Option<i32>,
    },

    /// Travel the wilderness
    Wilderness {
        /// What to roll
        #[arg(value_enum)]
        action: WildernessAction,

        /// JSON state file (created if missing)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// The party has a map
        #[arg(long)]
        map: bool,

        /// The party has a guide
        #[arg(long)]
        guide: bool,

        /// The terrain is dangerous
        #[arg(long)]
        dangerous: bool,

        /// The weather is bad
        #[arg(long)]
        weather: bool,

        /// Apply any encounter trigger to the saved state
        #[arg(long)]
        apply_trigger: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum WildernessAction {
    /// Move to the next hex
    Move,
    /// Roll an encounter in the current hex
    Encounter,
    /// Roll a monster for the current environment
    Monster,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let out = Output { json: cli.json };
    let exchange_cap = match &cli.command {
        Commands::Dialog { cap, .. } => *cap,
        _ => None,
    };
    let mut session = commands::session(cli.seed, exchange_cap);

    let result = match cli.command {
        Commands::Roll {
            expr,
            advantage,
            disadvantage,
        } => commands::oracle::roll(&mut session, &out, &expr, advantage, disadvantage),
        Commands::Skew { skew } => commands::oracle::skew(&mut session, &out, skew),
        Commands::Fate {
            likelihood,
            left,
            right,
        } => commands::oracle::fate(&mut session, &out, likelihood.as_deref(), left, right),
        Commands::Scene => out.result(&session.next_scene()),
        Commands::Event => out.result(&session.random_event()),
        Commands::Color => out.result(&session.color()),
        Commands::Property => out.result(&session.property()),
        Commands::Detail => out.result(&session.detail()),
        Commands::History => out.result(&session.history()),
        Commands::Challenge { easy, hard } => {
            commands::oracle::challenge(&mut session, &out, easy, hard)
        }
        Commands::Price => out.result(&session.pay_the_price()),
        Commands::Dialog { state, bulk, .. } => {
            commands::generator::dialog(&mut session, &out, state.as_deref(), bulk)
        }
        Commands::Dungeon {
            state,
            two_pass,
            passage,
            passage_mode,
            condition,
            occupied,
        } => commands::generator::dungeon(
            &mut session,
            &out,
            state.as_deref(),
            commands::generator::DungeonFlags {
                two_pass,
                passage,
                passage_mode: &passage_mode,
                condition,
                occupied,
            },
        ),
        Commands::Trap {
            searching,
            easy,
            hard,
            check,
        } => commands::generator::trap(&mut session, &out, searching, easy, hard, check),
        Commands::Wilderness {
            action,
            state,
            map,
            guide,
            dangerous,
            weather,
            apply_trigger,
        } => {
            let flags = commands::generator::WildernessFlags {
                map,
                guide,
                dangerous,
                weather,
                apply_trigger,
            };
            match action {
                WildernessAction::Move => {
                    commands::generator::wilderness_move(&mut session, &out, state.as_deref())
                }
                WildernessAction::Encounter => commands::generator::wilderness_encounter(
                    &mut session,
                    &out,
                    state.as_deref(),
                    flags,
                ),
                WildernessAction::Monster => {
                    commands::generator::wilderness_monster(&mut session, &out, state.as_deref())
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        process::exit(1);
    }
}
