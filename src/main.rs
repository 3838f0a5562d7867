#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    cli::{coord_to_string, parse_coord, print_player_view},
    init_logging, EngineConfig, GameEngine, Mode, RESPONSE_DELAY_MS,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the scripted opponent in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = RESPONSE_DELAY_MS, help = "Opponent response delay in milliseconds")]
        delay_ms: u64,
    },
    /// Start a match and print its read-out as JSON.
    Snapshot {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, delay_ms } => {
            let config = EngineConfig {
                response_delay_ms: delay_ms,
                ..EngineConfig::default()
            };
            let engine = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                    GameEngine::with_config(s, config)
                }
                None => GameEngine::from_entropy(config),
            };
            run_play(engine).await?;
        }
        Commands::Snapshot { seed } => {
            let mut engine = GameEngine::new(seed);
            engine.start()?;
            println!("{}", engine.render_to_text()?);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_help() {
    println!("Commands: <cell> fire (e.g. C4), r restart, m menu (after a match), s read-out, h help, q quit");
}

#[cfg(feature = "std")]
async fn run_play(mut engine: GameEngine) -> anyhow::Result<()> {
    engine.start()?;
    print_help();
    print_player_view(&engine);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => continue,
            "q" | "quit" => break,
            "h" | "help" => {
                print_help();
                continue;
            }
            "s" => {
                println!("{}", engine.render_to_text()?);
                continue;
            }
            "r" => engine.start()?,
            "m" => {
                if !engine.return_to_menu() {
                    println!("The menu is only reachable once the match is over.");
                    continue;
                }
            }
            _ => {
                if engine.mode() != Mode::Play {
                    println!("No match in progress. Press r to start.");
                    continue;
                }
                let cell = match parse_coord(input) {
                    Ok(cell) => cell,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                engine.set_hover(Some(cell));
                match engine.fire(cell.x, cell.y)? {
                    Some(outcome) if !outcome.duplicate => {
                        println!("You fired at {}: {}", coord_to_string(cell), engine.message());
                        // The opponent answers on this task, so no input is read
                        // until its shot has been applied.
                        while let Some(wait) = engine.next_due_in() {
                            sleep(Duration::from_millis(wait)).await;
                            engine.advance_time(wait);
                        }
                    }
                    Some(_) => {}
                    None => println!("Hold fire, the opponent is aiming."),
                }
            }
        }
        print_player_view(&engine);
    }
    Ok(())
}
