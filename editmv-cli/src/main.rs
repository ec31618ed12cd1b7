use anyhow::Context;
use clap::Parser;
use editmv_core::{
    default_edit_file_name, resolve_editor, should_use_color, Config, RenameSession,
};
use std::process;

mod cli;
mod repl;

#[cfg(test)]
mod test_exit_signals;

use cli::Cli;
use repl::Repl;

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let directory = match std::env::current_dir() {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("Error: Failed to resolve the working directory: {e}");
            process::exit(2);
        }
    };

    let config = Config::load().unwrap_or_default();

    let edit_file_name = cli.edit_file.clone().unwrap_or_else(default_edit_file_name);
    let edit_file_path = directory.join(&edit_file_name);

    // Set up signal handlers before the edit file is created. An interrupt
    // keeps the edit file so in-progress edits are not lost.
    let kept = edit_file_path.display().to_string();
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupted. Keeping {kept}.");
        process::exit(0);
    })
    .expect("Error setting SIGINT handler");

    // Handle SIGTERM the same way (sent by service managers and editors)
    let kept = edit_file_path.display().to_string();
    unsafe {
        signal_hook::low_level::register(signal_hook::consts::SIGTERM, move || {
            eprintln!("\nTerminated. Keeping {kept}.");
            signal_hook::low_level::exit(0);
        })
        .expect("Error setting SIGTERM handler");
    }

    let session = match RenameSession::initialize_with_file(&directory, &edit_file_name) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::from(e));
            process::exit(2);
        }
    };
    println!(
        "Captured {} entries into {}",
        session.snapshot_names().len(),
        session.edit_file_name()
    );

    let use_color = if cli.no_color {
        false
    } else {
        should_use_color(config.defaults.use_color)
    };
    let editor_command = resolve_editor(cli.editor.as_deref(), &config);

    let mut repl = Repl::new(session, config, editor_command, use_color);
    let exit_code = match repl.run() {
        Ok(()) => repl::finish(repl.session(), true),
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };
    process::exit(exit_code);
}
