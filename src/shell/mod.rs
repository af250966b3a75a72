use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

pub mod chain;
pub mod executor;
pub mod expand;
pub mod tokenizer;

use crate::{
    core::{
        commands::CommandExecutor,
        config::{ConfigLoader, ConfigPaths},
        env::EnvVarManager,
        state::ShellState,
    },
    error::ShellError,
    flags::Flags,
    input::{History, ShellCompleter, HISTORY_MAX},
    path::PathExpander,
    process::InterruptGuard,
};

use executor::CommandHandler;

const PROMPT: &str = "$ ";

pub struct Shell {
    pub(crate) state: ShellState,
    pub(crate) executor: CommandExecutor,
    flags: Flags,
    paths: Option<ConfigPaths>,
    expander: PathExpander,
}

impl Shell {
    pub fn new(flags: Flags, program_name: &str) -> Result<Self, ShellError> {
        let expander = PathExpander::new();

        let paths = match ConfigPaths::new() {
            Ok(paths) => Some(match flags.get_value("config") {
                Some(rc) => paths.with_rc(expander.expand(rc)),
                None => paths,
            }),
            Err(e) => {
                log::warn!("{}; history will not be saved", e);
                None
            }
        };

        let history = match &paths {
            Some(paths) => History::new(paths.history_path.clone(), HISTORY_MAX)
                .unwrap_or_else(|e| {
                    log::warn!("could not load {}: {}", paths.history_path.display(), e);
                    History::in_memory(HISTORY_MAX)
                }),
            None => History::in_memory(HISTORY_MAX),
        };

        let state = ShellState::new(program_name, EnvVarManager::from_process(), history);

        Ok(Shell {
            state,
            executor: CommandExecutor::new(),
            flags,
            paths,
            expander,
        })
    }

    /// Runs until end of input or `exit` and returns the process exit code.
    /// History is saved on every way out; a fatal error is reported here,
    /// against the line that caused it.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let result = match self.flags.script().map(str::to_owned) {
            Some(script) => self.run_script(&script),
            None if io::stdin().is_terminal() => self.run_interactive(),
            None => self.run_reader(io::stdin().lock()),
        };

        if let Err(e) = self.state.history.save() {
            log::warn!("could not save history: {}", e);
        }

        if let Err(e) = result {
            eprintln!("{}", self.fatal_message(&e));
            return Ok(e.exit_code());
        }
        Ok(self
            .state
            .exit_requested()
            .unwrap_or_else(|| self.state.status().code()))
    }

    fn run_script(&mut self, script: &str) -> Result<(), ShellError> {
        let path = self.expander.expand(script);
        let file = File::open(&path).map_err(|e| {
            log::debug!("open {}: {}", path.display(), e);
            ShellError::ScriptNotFound(script.to_string())
        })?;
        self.run_reader(BufReader::new(file))
    }

    /// Line loop shared by piped stdin and script files.
    /// Bytes that are not UTF-8 are replaced rather than ending the session.
    fn run_reader<R: BufRead>(&mut self, mut reader: R) -> Result<(), ShellError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches('\n').trim_end_matches('\r');

            self.process_line(line, true)?;
            if self.state.exit_requested().is_some() {
                break;
            }
        }
        Ok(())
    }

    fn run_interactive(&mut self) -> Result<(), ShellError> {
        let interrupt = InterruptGuard::install()?;
        self.load_rc()?;
        if self.state.exit_requested().is_some() {
            return Ok(());
        }

        let mut completer =
            ShellCompleter::new(self.executor.builtin_names(), self.expander.clone());
        completer.refresh_commands(self.state.env.get("PATH"));
        completer.update_aliases(self.state.aliases.names());

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(false);
        for line in self.state.history.iter() {
            editor.add_history_entry(line)?;
        }

        let prompt = if self.flags.is_set("quiet") { "" } else { PROMPT };

        loop {
            match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.as_str())?;
                    }
                    self.process_line(&line, true)?;
                    if interrupt.take() {
                        println!();
                    }
                    if self.state.exit_requested().is_some() {
                        break;
                    }
                    if let Some(helper) = editor.helper_mut() {
                        helper.update_aliases(self.state.aliases.names());
                        helper.refresh_commands(self.state.env.get("PATH"));
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    /// Runs the startup file through the normal line pipeline.
    fn load_rc(&mut self) -> Result<(), ShellError> {
        let Some(rc_path) = self.paths.as_ref().map(|paths| paths.rc_path.clone()) else {
            return Ok(());
        };

        let lines = match ConfigLoader::new(&rc_path).load_lines() {
            Ok(lines) => lines,
            Err(e) => {
                log::warn!("could not read {}: {}", rc_path.display(), e);
                return Ok(());
            }
        };

        log::debug!("running {} lines from {}", lines.len(), rc_path.display());
        for line in lines {
            self.process_line(&line, false)?;
            if self.state.exit_requested().is_some() {
                break;
            }
        }
        Ok(())
    }

    fn process_line(&mut self, line: &str, record: bool) -> Result<(), ShellError> {
        self.state.advance_line();
        if record {
            self.state.history.add(line);
        }
        self.execute_command(line)
    }

    fn fatal_message(&self, err: &ShellError) -> String {
        self.state.format_error("", &err.to_string())
    }
}
