use std::path::PathBuf;

use splud_app::error::{AppError, AppResult};
use splud_app::session::{run_session, SessionOptions};
use splud_app::settings::load_settings;
use splud_app::state::Pacing;
use splud_sim::engine::SimConfig;

const USAGE: &str = "usage: splud [--settings <file.toml>] [--seed <u64>] [--waves <n>] [--realtime]";

#[derive(Debug, Default)]
struct CliArgs {
    settings: Option<PathBuf>,
    seed: Option<u64>,
    waves: Option<u32>,
    realtime: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> AppResult<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--settings" => parsed.settings = Some(PathBuf::from(value(&flag, args.next())?)),
            "--seed" => parsed.seed = Some(number(&flag, args.next())?),
            "--waves" => parsed.waves = Some(number(&flag, args.next())?),
            "--realtime" => parsed.realtime = true,
            _ => {
                return Err(AppError::InvalidArgument {
                    flag,
                    reason: USAGE.into(),
                })
            }
        }
    }
    Ok(parsed)
}

fn value(flag: &str, next: Option<String>) -> AppResult<String> {
    next.ok_or_else(|| AppError::InvalidArgument {
        flag: flag.into(),
        reason: "missing value".into(),
    })
}

fn number<T: std::str::FromStr>(flag: &str, next: Option<String>) -> AppResult<T> {
    let raw = value(flag, next)?;
    raw.parse().map_err(|_| AppError::InvalidArgument {
        flag: flag.into(),
        reason: format!("expected an unsigned integer, got '{raw}'"),
    })
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn run() -> AppResult<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let settings = load_settings(args.settings.as_deref())?;

    let defaults = SimConfig::default();
    let seed = args.seed.unwrap_or(defaults.seed);
    let config = SimConfig {
        seed,
        settings,
        ..defaults
    };
    let options = SessionOptions {
        waves: args.waves.unwrap_or(SessionOptions::default().waves),
        pacing: if args.realtime {
            Pacing::Realtime
        } else {
            Pacing::Unthrottled
        },
        autopilot_seed: seed,
    };

    let summary = run_session(config, &options)?;
    tracing::info!(
        waves = summary.waves_cleared,
        died = summary.died,
        score = summary.score,
        level = summary.level,
        kills = summary.enemies_killed,
        gold = summary.total_gold,
        exp = summary.total_exp,
        ticks = summary.ticks,
        "session finished"
    );
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        tracing::error!(%err, "splud failed");
        std::process::exit(1);
    }
}
