// ptrsim: step-through C pointer simulator with memory visualization

mod interpreter;
mod memory;
mod snapshot;
mod tutor;
mod ui;

use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ui::App;

/// Loaded when no file is given: the classic pointer walkthrough.
const DEFAULT_PROGRAM: &str = "\
int a = 10;
int b = 25;

int *ptr;

ptr = &a;

int y = *ptr;

*ptr = 99;

ptr = &b;

*ptr = *ptr + 5;";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let source = match args.get(1) {
        Some(path) => {
            if !Path::new(path).exists() {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("ptrsim");
                eprintln!("Error: File '{}' not found", path);
                eprintln!();
                eprintln!("Usage: {} [snippet.c]", program_name);
                eprintln!();
                eprintln!("Without an argument, a built-in pointer walkthrough is loaded.");
                return ExitCode::FAILURE;
            }
            match fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("Error: Failed to read '{}': {}", path, e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => DEFAULT_PROGRAM.to_string(),
    };

    match run_tui(source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_tui(source: String) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
