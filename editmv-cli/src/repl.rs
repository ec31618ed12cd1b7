use anyhow::Result;
use std::io::{self, BufRead, Write};

use editmv_core::{
    launch_editor, map_path, render_apply_report, render_preview, ApplyOutcome, Config,
    RenameSession, Validation,
};

const PROMPT: &str =
    "Enter command (d: back to default, p: preview, t: texteditor, r: rename, q: quit): ";
const SEPARATOR: &str = "----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    Preview,
    Rename,
    TextEditor,
    Quit,
    Unknown,
}

pub fn parse_command(input: &str) -> Command {
    match input.trim() {
        "d" => Command::Reset,
        "p" | "preview" => Command::Preview,
        "r" | "rename" => Command::Rename,
        "t" | "texteditor" => Command::TextEditor,
        "q" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}

/// The interactive prompt loop around one rename session.
///
/// Every command's output is bracketed by separator lines; quitting prints
/// the opening separator only, since the farewell follows immediately.
/// Errors inside a command are reported and the loop continues; only a
/// broken stdin/stdout terminates the loop itself.
pub struct Repl {
    session: RenameSession,
    config: Config,
    editor_command: String,
    use_color: bool,
}

impl Repl {
    pub fn new(
        session: RenameSession,
        config: Config,
        editor_command: String,
        use_color: bool,
    ) -> Self {
        Self {
            session,
            config,
            editor_command,
            use_color,
        }
    }

    pub fn session(&self) -> &RenameSession {
        &self.session
    }

    /// Run the loop on stdin until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.run_with_input(&mut io::stdin().lock())
    }

    /// `run` with the input injected, for tests. End of input behaves like
    /// `q`, so piped command scripts terminate cleanly.
    pub fn run_with_input<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        loop {
            print!("{PROMPT}");
            io::stdout().flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                println!();
                println!("{SEPARATOR}");
                return Ok(());
            }

            let command = parse_command(&line);
            println!("{SEPARATOR}");
            match command {
                Command::Reset => self.handle_reset(),
                Command::Preview => self.handle_preview(),
                Command::Rename => self.handle_rename(),
                Command::TextEditor => self.handle_editor(),
                Command::Quit => return Ok(()),
                Command::Unknown => println!("Unknown command."),
            }
            println!("{SEPARATOR}");
        }
    }

    fn handle_reset(&mut self) {
        match self.session.reset() {
            Ok(()) => println!("Reinitialised data"),
            Err(e) => eprintln!("Error: {e:#}"),
        }
    }

    fn handle_preview(&self) {
        match self.session.validate() {
            Ok(Validation::Valid(plan)) => {
                print!("{}", render_preview(&plan, self.use_color));
            }
            Ok(Validation::Invalid(error)) => eprintln!("{error}"),
            Err(e) => eprintln!("Error: {e:#}"),
        }
    }

    fn handle_rename(&self) {
        match self.session.apply() {
            Ok(ApplyOutcome::Applied(report)) => {
                print!("{}", render_apply_report(&report, self.use_color));
            }
            Ok(ApplyOutcome::Rejected(error)) => eprintln!("{error}"),
            Err(e) => eprintln!("Error: {e:#}"),
        }
    }

    fn handle_editor(&self) {
        if !self.session.edit_file_path().exists() {
            println!("The edit file does not exist");
            return;
        }

        let mapped = map_path(self.session.edit_file_path(), &self.config);
        println!(
            "Opening {} with {}",
            self.session.edit_file_name(),
            self.editor_command
        );
        if let Err(e) = launch_editor(&self.editor_command, &mapped) {
            eprintln!("Error: {e:#}");
        }
    }
}

/// Delete the edit file if asked, print the farewell, and hand back the
/// process exit code.
pub fn finish(session: &RenameSession, delete: bool) -> i32 {
    if delete {
        match session.delete_edit_file() {
            Ok(true) => {}
            Ok(false) => println!("The edit file does not exist"),
            Err(e) => eprintln!("Error: {e:#}"),
        }
    }
    println!("Exiting editmv.");
    0
}
