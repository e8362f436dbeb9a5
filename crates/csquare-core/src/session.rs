//! Per-instance terminal state.
//!
//! A [`Session`] owns everything one terminal window mutates: the working
//! directory, the input line, command history and the transcript. The
//! filesystem and clock are shared, read-only collaborators injected at
//! construction.

use std::sync::Arc;

use crate::autocomplete::{AutocompleteResult, autocomplete};
use crate::clock::{Clock, SystemClock};
use crate::commands::{Command, CommandResult, ExecContext, execute_command};
use crate::config::TerminalConfig;
use crate::filesystem::VirtualFs;
use crate::history::CommandHistory;
use crate::models::{OutputLine, VirtualPath};
use crate::parser::parse_input;
use crate::utils::BoundedBuffer;

/// One interpreter run.
#[derive(Clone)]
pub struct Session {
    fs: Arc<VirtualFs>,
    clock: Arc<dyn Clock>,
    user: String,
    host: String,
    welcome: Vec<String>,
    cwd: VirtualPath,
    input: String,
    history: CommandHistory,
    transcript: BoundedBuffer<OutputLine>,
}

impl Session {
    /// Start a session at `/` with an empty transcript.
    ///
    /// Zero capacities in `config` are raised to one.
    pub fn new(fs: Arc<VirtualFs>, config: &TerminalConfig) -> Self {
        Self {
            fs,
            clock: Arc::new(SystemClock),
            user: config.user.clone(),
            host: config.host.clone(),
            welcome: config.welcome.clone(),
            cwd: VirtualPath::root(),
            input: String::new(),
            history: CommandHistory::new(config.max_history.max(1)),
            transcript: BoundedBuffer::new(config.max_transcript.max(1)),
        }
    }

    /// Replace the clock used by `date`.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // -- Accessors --

    pub fn cwd(&self) -> &VirtualPath {
        &self.cwd
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn transcript(&self) -> &BoundedBuffer<OutputLine> {
        &self.transcript
    }

    /// `user@host`
    pub fn identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Prompt shown before the input, e.g. `guest@c-square-club:/projects`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}", self.user, self.host, self.cwd)
    }

    // -- Input line --

    /// Replace the input text. Does not reset history recall.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Arrow-up. Returns whether the input changed.
    pub fn recall_previous(&mut self) -> bool {
        match self.history.previous() {
            Some(line) => {
                self.input = line;
                true
            }
            None => false,
        }
    }

    /// Arrow-down. Returns whether the input changed.
    pub fn recall_next(&mut self) -> bool {
        match self.history.next() {
            Some(line) => {
                self.input = line;
                true
            }
            None => false,
        }
    }

    /// Tab. Completes the input only when exactly one command matches.
    pub fn complete(&mut self) -> AutocompleteResult {
        let result = autocomplete(&self.input);
        match &result {
            AutocompleteResult::Single(name) => self.input = name.clone(),
            AutocompleteResult::Multiple(matches) => {
                log::debug!("ambiguous completion for {:?}: {:?}", self.input, matches)
            }
            AutocompleteResult::None => {}
        }
        result
    }

    // -- Transcript --

    /// Append the configured welcome banner.
    pub fn push_welcome(&mut self) {
        let lines: Vec<OutputLine> = self.welcome.iter().map(OutputLine::info).collect();
        self.transcript.extend(lines);
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    // -- Execution --

    /// Run one line and apply its state changes, without touching the
    /// transcript's input echo or history.
    ///
    /// Blank input yields no output.
    pub fn execute(&mut self, line: &str) -> Vec<OutputLine> {
        let Some(parsed) = parse_input(line) else {
            return Vec::new();
        };
        let cmd = Command::from(&parsed);
        log::debug!("dispatch {:?} in {}", cmd, self.cwd);

        let identity = self.identity();
        let ctx = ExecContext {
            fs: &self.fs,
            cwd: &self.cwd,
            identity: &identity,
            clock: self.clock.as_ref(),
        };
        let CommandResult {
            output,
            navigate_to,
            clear_transcript,
        } = execute_command(cmd, &ctx);

        if clear_transcript {
            self.clear_transcript();
        }
        if let Some(path) = navigate_to {
            self.cwd = path;
        }
        output
    }

    /// Submit a line as if typed and entered.
    ///
    /// In order: echo the prompt and input, execute, append the output,
    /// record the raw line in history, clear the input. Blank lines are
    /// ignored entirely and return `None`.
    pub fn submit(&mut self, line: &str) -> Option<Vec<OutputLine>> {
        if line.trim().is_empty() {
            return None;
        }

        let echo = OutputLine::command(self.prompt(), line);
        self.transcript.push(echo);

        let output = self.execute(line);
        self.transcript.extend(output.iter().cloned());

        self.history.push(line);
        self.input.clear();
        Some(output)
    }

    /// Submit the current input line.
    pub fn submit_input(&mut self) -> Option<Vec<OutputLine>> {
        let line = self.input.clone();
        self.submit(&line)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cwd", &self.cwd)
            .field("input", &self.input)
            .field("history", &self.history.len())
            .field("transcript", &self.transcript.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::history::Recall;
    use crate::models::LineKind;

    fn session() -> Session {
        Session::new(Arc::new(VirtualFs::builtin()), &TerminalConfig::default())
            .with_clock(Arc::new(FixedClock("now".to_string())))
    }

    fn transcript_text(session: &Session) -> Vec<String> {
        session.transcript().iter().map(OutputLine::plain).collect()
    }

    #[test]
    fn test_submit_echoes_then_outputs() {
        let mut s = session();
        let output = s.submit("pwd").unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(
            transcript_text(&s),
            vec!["guest@c-square-club:/$ pwd", "/"]
        );
        assert_eq!(s.transcript().get(0).map(OutputLine::kind), Some(LineKind::Input));
        assert_eq!(s.transcript().get(1).map(OutputLine::kind), Some(LineKind::Output));
    }

    #[test]
    fn test_blank_submission_ignored() {
        let mut s = session();
        s.set_input("   ");
        assert_eq!(s.submit_input(), None);
        assert!(s.transcript().is_empty());
        assert!(s.history().is_empty());
        assert_eq!(s.input(), "   ");
    }

    #[test]
    fn test_prompt_tracks_cwd() {
        let mut s = session();
        s.submit("cd events");
        assert_eq!(s.prompt(), "guest@c-square-club:/events");
        s.submit("ls");
        assert!(transcript_text(&s).contains(&"guest@c-square-club:/events$ ls".to_string()));
    }

    #[test]
    fn test_unknown_command_leaves_state() {
        let mut s = session();
        s.submit("cd team");
        let output = s.submit("rm -rf /").unwrap();
        assert_eq!(
            output.iter().map(OutputLine::plain).collect::<Vec<_>>(),
            vec!["Command not found: rm. Type 'help' for available commands."]
        );
        assert_eq!(s.cwd(), "/team");
    }

    #[test]
    fn test_clear_keeps_cwd_and_history() {
        let mut s = session();
        s.submit("cd projects");
        s.submit("help");
        s.submit("clear");

        assert!(s.transcript().is_empty());
        assert_eq!(s.cwd(), "/projects");
        assert_eq!(
            s.history().entries().collect::<Vec<_>>(),
            vec!["cd projects", "help", "clear"]
        );
    }

    #[test]
    fn test_submit_input_clears_input() {
        let mut s = session();
        s.set_input("whoami");
        s.submit_input();
        assert_eq!(s.input(), "");
        assert_eq!(transcript_text(&s).last().map(String::as_str), Some("guest@c-square-club"));
    }

    #[test]
    fn test_recall_sets_input() {
        let mut s = session();
        s.submit("help");
        s.submit("ls");

        assert!(s.recall_previous());
        assert_eq!(s.input(), "ls");
        assert!(s.recall_previous());
        assert_eq!(s.input(), "help");
        assert!(!s.recall_previous());
        assert_eq!(s.input(), "help");
        assert!(s.recall_next());
        assert_eq!(s.input(), "ls");
        assert!(s.recall_next());
        assert_eq!(s.input(), "");
    }

    #[test]
    fn test_editing_input_keeps_recall_position() {
        let mut s = session();
        s.submit("help");
        s.submit("ls");
        s.submit("pwd");

        assert!(s.recall_previous());
        assert_eq!(s.input(), "pwd");
        s.set_input("x");
        assert_eq!(s.history().recall(), Recall::Recalling(0));

        assert!(s.recall_previous());
        assert_eq!(s.input(), "ls");
        assert_eq!(s.history().recall(), Recall::Recalling(1));
    }

    #[test]
    fn test_complete_unique_and_ambiguous() {
        let mut s = session();
        s.set_input("he");
        assert_eq!(s.complete(), AutocompleteResult::Single("help".into()));
        assert_eq!(s.input(), "help");

        s.set_input("c");
        assert!(matches!(s.complete(), AutocompleteResult::Multiple(_)));
        assert_eq!(s.input(), "c");
    }

    #[test]
    fn test_welcome_banner() {
        let mut s = session();
        s.push_welcome();
        let text = transcript_text(&s);
        assert_eq!(text[0], "Welcome to C-Square Club Terminal");
        assert_eq!(text.len(), 3);
    }

    #[test]
    fn test_transcript_is_bounded() {
        let config = TerminalConfig {
            max_transcript: 4,
            ..TerminalConfig::default()
        };
        let mut s = Session::new(Arc::new(VirtualFs::builtin()), &config);
        s.submit("pwd");
        s.submit("whoami");
        s.submit("pwd");

        assert_eq!(s.transcript().len(), 4);
        assert_eq!(
            transcript_text(&s),
            vec![
                "guest@c-square-club:/$ whoami",
                "guest@c-square-club",
                "guest@c-square-club:/$ pwd",
                "/"
            ]
        );
    }

    #[test]
    fn test_date_uses_injected_clock() {
        let mut s = session();
        let output = s.submit("date").unwrap();
        assert_eq!(output[0].plain(), "now");
    }
}
