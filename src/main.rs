// src/main.rs
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chess_dashboard::dashboard::{Dashboard, Flow};
use chess_dashboard::fixtures::Fixtures;
use chess_dashboard::input::{parse_command, Command, InputError};
use chess_dashboard::presentation::{GlyphSet, Style};
use chess_dashboard::Interaction;
use clap::Parser;
use log::{info, warn, LevelFilter};

#[derive(Parser, Debug)]
#[command(version, about = "Terminal chess dashboard with a freely rearrangeable board")]
struct Args {
    /// JSON file with tournaments, lessons, history, profile and clocks
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Draw pieces as letters instead of chess symbols
    #[arg(long)]
    ascii: bool,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Write the log here instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(level);
    let dispatch = match log_file {
        Some(path) => dispatch.chain(fern::log_file(path)?),
        None => dispatch.chain(io::stderr()),
    };
    dispatch.apply()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(args.log_level, args.log_file.as_deref())?;

    let fixtures = match &args.fixtures {
        Some(path) => Fixtures::load(path)?,
        None => {
            info!("using built-in sample fixtures");
            Fixtures::sample()
        }
    };
    let style = Style {
        glyphs: if args.ascii { GlyphSet::Ascii } else { GlyphSet::Unicode },
        color: !args.no_color,
    };
    let mut dashboard = Dashboard::new(fixtures, style);

    print_help();

    'session: loop {
        println!("------------------------------------------");
        println!("{}", dashboard.render());

        print!("> ");
        io::stdout().flush()?;

        let mut input_line = String::new();
        match io::stdin().read_line(&mut input_line) {
            Ok(0) => {
                println!("\nEnd of input detected.");
                break 'session;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}. Try again or use 'quit'.", e);
                continue 'session;
            }
        }

        match parse_command(&input_line) {
            Ok(Command::Help) => print_help(),
            Ok(command) => {
                if dashboard.handle(command) == Flow::Quit {
                    break 'session;
                }
                if let (Command::Click(_), Some(interaction)) = (command, dashboard.last_interaction()) {
                    describe(interaction);
                }
            }
            Err(InputError::Empty) => {}
            Err(e) => {
                warn!("rejected input {:?}: {}", input_line.trim(), e);
                println!("Input Error: {}", e);
            }
        }
    }

    println!("Session finished.");
    Ok(())
}

fn describe(interaction: Interaction) {
    match interaction {
        Interaction::Ignored => println!("Nothing to pick up there."),
        Interaction::Selected(sq) => println!("Picked up {}. Choose a target square.", sq),
        Interaction::Relocated { from, to } if from == to => println!("Put the piece back on {}.", to),
        Interaction::Relocated { from, to } => println!("Moved {} -> {}.", from, to),
    }
}

/// Prints available commands.
fn print_help() {
    println!("\nAvailable Commands:");
    println!("  <row> <col>    Click a square by grid position, 0-7 from the top-left (e.g. 6 4)");
    println!("  <square>       Click a square by name (e.g. e2)");
    println!("                 First click picks up a piece, the next click puts it down anywhere.");
    println!("                 Whatever stood on the target square is replaced.");
    println!("  tab <name>     Show a tab: board, tournaments, lessons, history (or just the name)");
    println!("  help           Show this help message.");
    println!("  quit / exit    Leave the dashboard.");
    println!();
}
