use std::path::PathBuf;

use chandra_config::{EngineConfig, load_config};
use chandra_icon::{IconGenerator, IconModel, IconStrategy, sanitize_phase};
use chandra_phase::tithi_from_elongation;
use chandra_rs::{
    Clock, DARK_FILL, LIT_FILL, MoonEngine, MoonSnapshot, SystemClock, Ticker, UtcTime,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "chandra", about = "Chandra lunar phase CLI")]
struct Cli {
    /// TOML configuration file (CHANDRA_* environment variables override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// IANA timezone for displayed timestamps (default: host zone)
    #[arg(long, global = true)]
    timezone: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Phase state for an instant
    Phase {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long)]
        date: Option<UtcTime>,
    },
    /// Tithi and paksha for an instant
    Tithi {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long)]
        date: Option<UtcTime>,
    },
    /// Icon geometry for an instant or a raw phase fraction
    Icon {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long, conflicts_with = "phase")]
        date: Option<UtcTime>,
        /// Phase fraction in [0, 1)
        #[arg(long)]
        phase: Option<f64>,
        /// Icon model: arc_sweep or mask_offset (default from config)
        #[arg(long)]
        model: Option<IconModel>,
        /// Print a standalone SVG document instead of the geometry
        #[arg(long)]
        svg: bool,
    },
    /// Print a snapshot on every clock tick
    Watch {
        /// Stop after this many ticks (default: run until Ctrl-C)
        #[arg(long)]
        ticks: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    let cli = Cli::parse();
    let config = load_engine_config(&cli);
    let engine = MoonEngine::new(&config);

    match cli.command {
        Commands::Phase { date } => {
            let snap = engine.snapshot(&date.unwrap_or_else(|| SystemClock.now()));
            print_phase(&snap);
        }

        Commands::Tithi { date } => {
            let snap = engine.snapshot(&date.unwrap_or_else(|| SystemClock.now()));
            let pos = tithi_from_elongation(snap.phase.elongation_deg());
            println!(
                "{} (tithi {}) - {} Paksha {} ({:.4} deg in tithi)",
                pos.tithi.name(),
                pos.tithi_index,
                pos.paksha.name(),
                pos.tithi_in_paksha,
                pos.degrees_in_tithi
            );
            println!("{}", snap.timestamp);
        }

        Commands::Icon {
            date,
            phase,
            model,
            svg,
        } => {
            let generator = IconGenerator::new(
                model.unwrap_or(config.icon.model),
                config.icon.disk(),
            );
            let phase_fraction = match phase {
                Some(p) => require_phase_fraction(p),
                None => {
                    engine
                        .phase(&date.unwrap_or_else(|| SystemClock.now()))
                        .phase_fraction
                }
            };
            let geometry = generator.geometry(phase_fraction);
            if svg {
                println!("{}", geometry.to_svg(LIT_FILL, DARK_FILL));
            } else {
                println!("Model:        {}", generator.model.name());
                println!("Phase:        {phase_fraction:.6}");
                println!("Lit fraction: {:.6}", geometry.lit_fraction());
                let (left, right) = geometry.lit_span();
                println!("Lit span:     {left:.3} .. {right:.3}");
                match geometry.path_data() {
                    Some(d) => println!("Path:         {d}"),
                    None => println!("Geometry:     {geometry:?}"),
                }
            }
        }

        Commands::Watch { ticks } => {
            let (handle, mut rx) = Ticker::subscribe(SystemClock, config.tick_period(), 8)
                .unwrap_or_else(|e| {
                    eprintln!("Failed to start clock: {e}");
                    std::process::exit(1);
                });
            let mut seen = 0u64;
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    next = rx.recv() => {
                        let Some(now) = next else { break };
                        let snap = engine.snapshot(&now);
                        println!(
                            "{} | {} | {:.1}% lit | {}",
                            snap.timestamp,
                            snap.label,
                            snap.phase.illumination * 100.0,
                            snap.phase.moon_phase.name()
                        );
                        seen += 1;
                        if ticks.is_some_and(|n| seen >= n) {
                            break;
                        }
                    }
                }
            }
            if let Err(e) = handle.stop().await {
                eprintln!("Clock did not shut down cleanly: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn print_phase(snap: &MoonSnapshot) {
    let p = &snap.phase;
    println!("{}", snap.timestamp);
    println!(
        "Sun:          {:.4} deg  Moon: {:.4} deg",
        snap.angles.sun_longitude_deg(),
        snap.angles.moon_longitude_deg()
    );
    println!("Elongation:   {:.4} deg", p.elongation_deg());
    println!("Phase:        {:.6}", p.phase_fraction);
    println!("Illumination: {:.2}%", p.illumination * 100.0);
    println!(
        "Moon:         {} ({})",
        p.moon_phase.name(),
        if p.waxing { "waxing" } else { "waning" }
    );
    println!("Tithi:        {} ({})", snap.label, p.tithi_index);
}

fn load_engine_config(cli: &Cli) -> EngineConfig {
    let mut config = load_config(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    });
    if cli.timezone.is_some() {
        config.timezone = cli.timezone.clone();
    }
    config
}

fn require_phase_fraction(p: f64) -> f64 {
    if !p.is_finite() {
        eprintln!("Invalid phase fraction: {p}");
        std::process::exit(1);
    }
    sanitize_phase(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_icon_arguments() {
        let cli = Cli::try_parse_from([
            "chandra",
            "icon",
            "--phase",
            "0.25",
            "--model",
            "mask_offset",
            "--svg",
            "--timezone",
            "Asia/Kolkata",
        ])
        .unwrap();
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Kolkata"));
        match cli.command {
            Commands::Icon {
                phase, model, svg, ..
            } => {
                assert_eq!(phase, Some(0.25));
                assert_eq!(model, Some(IconModel::MaskOffset));
                assert!(svg);
            }
            _ => panic!("expected icon"),
        }
    }

    #[test]
    fn parses_date_into_instant() {
        let cli = Cli::try_parse_from(["chandra", "tithi", "--date", "2024-03-20T12:00:00Z"])
            .unwrap();
        match cli.command {
            Commands::Tithi { date } => {
                assert_eq!(date, Some(UtcTime::new(2024, 3, 20, 12, 0, 0.0)));
            }
            _ => panic!("expected tithi"),
        }
    }

    #[test]
    fn rejects_bad_date_and_conflicting_inputs() {
        assert!(Cli::try_parse_from(["chandra", "phase", "--date", "yesterday"]).is_err());
        assert!(
            Cli::try_parse_from([
                "chandra",
                "icon",
                "--date",
                "2024-03-20T12:00:00Z",
                "--phase",
                "0.5"
            ])
            .is_err()
        );
    }

    #[test]
    fn watch_tick_limit_is_optional() {
        let cli = Cli::try_parse_from(["chandra", "watch"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch { ticks: None }));
        let cli = Cli::try_parse_from(["chandra", "watch", "--ticks", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch { ticks: Some(3) }));
    }
}
