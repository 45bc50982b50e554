use clap::{Parser, Subcommand};
use hengio_cli::CliContext;
use hengio_cli::commands;
use hengio_cli::logging;
use hengio_cli::readline;
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _guard = logging::init();

    let ctx = CliContext::new();
    commands::welcome(&ctx).await;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    ctx.shutdown().await;
    Ok(())
}

#[derive(Parser)]
#[command(version, about = "countdown timer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Presets,
    Select {
        #[arg(short, long)]
        minutes: Option<u32>,
        #[arg(short, long)]
        seconds: Option<u32>,
    },
    Start,
    Resume,
    Pause,
    Reset,
    Status,
    History,
    Again {
        #[arg(short, long)]
        id: u64,
    },
    ClearHistory,
    Lang {
        #[arg(short, long)]
        code: String,
    },
    Voice,
    Config,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "hengio".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Presets) => commands::presets(ctx).await,
        Some(Commands::Select { minutes, seconds }) => {
            commands::select(ctx, *minutes, *seconds).await
        }
        Some(Commands::Start) | Some(Commands::Resume) => commands::start(ctx).await,
        Some(Commands::Pause) => commands::pause(ctx).await,
        Some(Commands::Reset) => commands::reset(ctx).await,
        Some(Commands::Status) => commands::status(ctx).await,
        Some(Commands::History) => commands::history(ctx).await,
        Some(Commands::Again { id }) => commands::again(ctx, *id).await,
        Some(Commands::ClearHistory) => commands::clear_history(ctx).await,
        Some(Commands::Lang { code }) => commands::set_language(ctx, code).await,
        Some(Commands::Voice) => commands::toggle_voice(ctx).await,
        Some(Commands::Config) => commands::show_config(ctx).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
