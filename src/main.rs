use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use robot_builder::config::Config;
use robot_builder::render::render_robots;
use robot_builder::{Director, Part, Robot, RobotKind};

#[derive(Parser)]
#[command(name = "robots")]
#[command(about = "Assemble robots from interchangeable parts with the Builder pattern")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the named robots and print them
    Build {
        /// Robot kinds: android, autonomous_car, flying_monkey
        #[arg(required = true)]
        kinds: Vec<String>,

        /// Output format: text, tree or json
        #[arg(short, long)]
        format: Option<String>,

        /// Run the director this many times on the same builder
        #[arg(short, long)]
        runs: Option<usize>,

        /// Reset the builder before every run instead of stacking parts
        #[arg(long, conflicts_with = "stack")]
        fresh: bool,

        /// Stack parts across runs even if the config file asks for fresh runs
        #[arg(long)]
        stack: bool,
    },
    /// List the robot kinds that can be built
    Kinds,
    /// List every available part
    Parts,
}

/// Logs go to stderr so stdout only carries robots.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "robot_builder=warn,robots=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build one robot per kind, each on its own builder.
fn build(kinds: &[RobotKind], runs: usize, fresh: bool) -> Vec<Robot> {
    let director = Director::new();
    kinds
        .iter()
        .map(|kind| director.make_repeated(kind.builder().as_mut(), runs, fresh))
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Some(Commands::Build {
            kinds,
            format,
            runs,
            fresh,
            stack,
        }) => {
            let kinds = kinds
                .iter()
                .map(|s| RobotKind::parse(s))
                .collect::<Result<Vec<_>, _>>()?;
            let format =
                config.resolve_format(format.as_deref(), Config::env_format().as_deref())?;

            let runs = runs.unwrap_or(config.runs);

            tracing::info!("Building {} robot(s), {} run(s) each", kinds.len(), runs);
            let robots = build(&kinds, runs, config.resolve_fresh(fresh, stack));
            print!("{}", render_robots(&robots, format));
        }
        Some(Commands::Kinds) => {
            for kind in RobotKind::ALL {
                println!("{:<16}{}", kind.as_str(), kind.robot_type());
            }
        }
        Some(Commands::Parts) => {
            for part in Part::ALL {
                println!("{:<12}{}", part.category().as_str(), part.label());
            }
        }
        None => {
            // Default: the classic demo, every configured robot in turn
            let format = config.resolve_format(None, Config::env_format().as_deref())?;
            let robots = build(&config.default_kinds, config.runs, config.fresh);
            print!("{}", render_robots(&robots, format));
        }
    }

    Ok(())
}
