//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::Clock;
use crate::config::{
    ABOUT_TEXT, CODE_TEXT, CONTACT_TEXT, EVENTS_TEXT, HACK_TEXT, HELP_TEXT, JOIN_TEXT,
    PROJECTS_TEXT,
};
use crate::filesystem::VirtualFs;
use crate::models::{FsEntry, OutputLine, VirtualPath};

use super::{Command, CommandResult, PathArg, fun};

/// Everything a command may read while it runs.
pub struct ExecContext<'a> {
    pub fs: &'a VirtualFs,
    /// Current working directory
    pub cwd: &'a VirtualPath,
    /// `user@host`
    pub identity: &'a str,
    pub clock: &'a dyn Clock,
}

/// Execute a parsed command.
///
/// Never fails: every problem is reported as an output line.
pub fn execute_command(cmd: Command, ctx: &ExecContext<'_>) -> CommandResult {
    match cmd {
        Command::Ls(path) => execute_ls(path, ctx),
        Command::Cd(Some(path)) => execute_cd(path, ctx),
        Command::Cd(None) => usage("Usage: cd <directory>"),
        Command::Cat(Some(file)) => execute_cat(file, ctx),
        Command::Cat(None) => usage("Usage: cat <filename>"),
        Command::Pwd => CommandResult::output(vec![OutputLine::text(ctx.cwd.as_str())]),
        Command::Clear => CommandResult::clear(),
        Command::Help => text_block(HELP_TEXT),
        Command::Whoami => CommandResult::output(vec![OutputLine::text(ctx.identity)]),
        Command::Date => CommandResult::output(vec![OutputLine::text(ctx.clock.now())]),
        Command::About => text_block(ABOUT_TEXT),
        Command::Projects => text_block(PROJECTS_TEXT),
        Command::Events => text_block(EVENTS_TEXT),
        Command::Join => text_block(JOIN_TEXT),
        Command::Contact => text_block(CONTACT_TEXT),
        Command::Hack => text_block(HACK_TEXT),
        Command::Code => text_block(CODE_TEXT),
        Command::Matrix => CommandResult::output(fun::matrix_lines(&mut StdRng::from_entropy())),
        Command::Fortune => {
            CommandResult::output(vec![fun::fortune_line(&mut StdRng::from_entropy())])
        }
        Command::Unknown(name) => CommandResult::output(vec![OutputLine::error(format!(
            "Command not found: {}. Type 'help' for available commands.",
            name
        ))]),
    }
}

fn text_block(block: &str) -> CommandResult {
    CommandResult::output(OutputLine::from_text_block(block))
}

fn usage(line: &str) -> CommandResult {
    CommandResult::output(vec![OutputLine::info(line)])
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, ctx: &ExecContext<'_>) -> CommandResult {
    let (target, shown) = match &path {
        Some(arg) => (ctx.fs.resolve(ctx.cwd, arg.as_str()), arg.to_string()),
        None => (Some(ctx.cwd.clone()), ctx.cwd.to_string()),
    };

    match target.and_then(|target| ctx.fs.list_dir(&target)) {
        Some(entries) => CommandResult::output(
            entries
                .into_iter()
                .map(|entry| {
                    if entry.is_dir {
                        OutputLine::dir_entry(entry.name)
                    } else {
                        OutputLine::file_entry(entry.name)
                    }
                })
                .collect(),
        ),
        None => CommandResult::output(vec![OutputLine::error(format!(
            "ls: {}: No such file or directory",
            shown
        ))]),
    }
}

/// Execute `cd` command.
fn execute_cd(path: PathArg, ctx: &ExecContext<'_>) -> CommandResult {
    let resolved = ctx.fs.resolve(ctx.cwd, path.as_str()).and_then(|target| {
        let entry = ctx.fs.get_entry(&target)?;
        Some((target, entry))
    });

    match resolved {
        None => CommandResult::output(vec![OutputLine::error(format!(
            "cd: {}: No such file or directory",
            path
        ))]),
        Some((_, FsEntry::File(_))) => CommandResult::output(vec![OutputLine::error(format!(
            "cd: {}: Not a directory",
            path
        ))]),
        Some((target, FsEntry::Directory(_))) => {
            log::debug!("cd {} -> {}", ctx.cwd, target);
            let confirmation = OutputLine::success(format!("Changed to {}", target));
            CommandResult::navigate(target, vec![confirmation])
        }
    }
}

/// Execute `cat` command.
///
/// The name is looked up in the current directory only.
fn execute_cat(file: PathArg, ctx: &ExecContext<'_>) -> CommandResult {
    match ctx.fs.child(ctx.cwd, file.as_str()).map(FsEntry::content) {
        None => CommandResult::output(vec![OutputLine::error(format!(
            "cat: {}: No such file or directory",
            file
        ))]),
        Some(None) => CommandResult::output(vec![OutputLine::error(format!(
            "cat: {}: Is a directory",
            file
        ))]),
        Some(Some(lines)) => CommandResult::output(lines.into_iter().map(OutputLine::text).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    struct Fixture {
        fs: VirtualFs,
        clock: FixedClock,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                fs: VirtualFs::builtin(),
                clock: FixedClock("2024-09-01 10:00:00 UTC".to_string()),
            }
        }

        fn run(&self, cwd: &str, cmd: Command) -> CommandResult {
            let cwd = VirtualPath::normalize(cwd);
            let ctx = ExecContext {
                fs: &self.fs,
                cwd: &cwd,
                identity: "guest@c-square-club",
                clock: &self.clock,
            };
            execute_command(cmd, &ctx)
        }
    }

    fn arg(s: &str) -> Option<PathArg> {
        Some(PathArg::new(s))
    }

    #[test]
    fn test_unknown_command() {
        let result = Fixture::new().run("/", Command::Unknown("sudo".into()));
        assert_eq!(
            result.lines(),
            vec!["Command not found: sudo. Type 'help' for available commands."]
        );
        assert_eq!(result.navigate_to, None);
        assert!(!result.clear_transcript);
    }

    #[test]
    fn test_cd_into_subdirectory() {
        let result = Fixture::new().run("/", Command::Cd(arg("projects")));
        assert_eq!(result.navigate_to, Some(VirtualPath::normalize("/projects")));
        assert_eq!(result.lines(), vec!["Changed to /projects"]);
    }

    #[test]
    fn test_cd_parent_clamps_at_root() {
        let fixture = Fixture::new();
        let up = fixture.run("/projects", Command::Cd(arg("..")));
        assert_eq!(up.navigate_to, Some(VirtualPath::root()));

        let clamped = fixture.run("/", Command::Cd(arg("..")));
        assert_eq!(clamped.navigate_to, Some(VirtualPath::root()));
        assert_eq!(clamped.lines(), vec!["Changed to /"]);
    }

    #[test]
    fn test_cd_errors() {
        let fixture = Fixture::new();
        let missing = fixture.run("/", Command::Cd(arg("nowhere")));
        assert_eq!(missing.navigate_to, None);
        assert_eq!(
            missing.lines(),
            vec!["cd: nowhere: No such file or directory"]
        );

        let file = fixture.run("/", Command::Cd(arg("mission.txt")));
        assert_eq!(file.navigate_to, None);
        assert_eq!(file.lines(), vec!["cd: mission.txt: Not a directory"]);

        for through in ["nowhere/..", "mission.txt/.."] {
            let result = fixture.run("/", Command::Cd(arg(through)));
            assert_eq!(result.navigate_to, None);
            assert_eq!(
                result.lines(),
                vec![format!("cd: {through}: No such file or directory")]
            );
        }

        let bare = fixture.run("/", Command::Cd(None));
        assert_eq!(bare.lines(), vec!["Usage: cd <directory>"]);
    }

    #[test]
    fn test_ls_current_and_argument() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.run("/", Command::Ls(None)).lines(),
            vec![
                "📁 events/",
                "📁 projects/",
                "📁 team/",
                "📄 about.txt",
                "📄 mission.txt"
            ]
        );
        assert_eq!(
            fixture.run("/events", Command::Ls(arg("/projects"))).lines(),
            vec!["📄 cybersecurity", "📄 mobile-apps", "📄 web-development"]
        );
    }

    #[test]
    fn test_ls_through_missing_directory() {
        assert_eq!(
            Fixture::new().run("/", Command::Ls(arg("ghost/../team"))).lines(),
            vec!["ls: ghost/../team: No such file or directory"]
        );
        assert_eq!(
            Fixture::new().run("/", Command::Ls(arg("team/../events"))).lines(),
            vec!["📄 competitions", "📄 hackathons", "📄 workshops"]
        );
    }

    #[test]
    fn test_ls_on_file_is_an_error() {
        let result = Fixture::new().run("/", Command::Ls(arg("mission.txt")));
        assert_eq!(
            result.lines(),
            vec!["ls: mission.txt: No such file or directory"]
        );
    }

    #[test]
    fn test_cat_file_lines() {
        let result = Fixture::new().run("/", Command::Cat(arg("mission.txt")));
        assert_eq!(
            result.lines(),
            vec![
                "Coding - Creating - Collaborating",
                "Building the future, one line at a time..."
            ]
        );
    }

    #[test]
    fn test_cat_errors() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.run("/", Command::Cat(arg("projects"))).lines(),
            vec!["cat: projects: Is a directory"]
        );
        assert_eq!(
            fixture.run("/", Command::Cat(arg("nope.txt"))).lines(),
            vec!["cat: nope.txt: No such file or directory"]
        );
        // Not path-resolved: only direct children of the cwd.
        assert_eq!(
            fixture.run("/projects", Command::Cat(arg("/mission.txt"))).lines(),
            vec!["cat: /mission.txt: No such file or directory"]
        );
        assert_eq!(
            fixture.run("/", Command::Cat(None)).lines(),
            vec!["Usage: cat <filename>"]
        );
    }

    #[test]
    fn test_cat_listing_file_in_subdirectory() {
        let result = Fixture::new().run("/team", Command::Cat(arg("mentors")));
        assert_eq!(result.lines(), vec!["dr-tech.json", "prof-code.json"]);
    }

    #[test]
    fn test_pwd_whoami_date() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.run("/events", Command::Pwd).lines(),
            vec!["/events"]
        );
        assert_eq!(
            fixture.run("/", Command::Whoami).lines(),
            vec!["guest@c-square-club"]
        );
        assert_eq!(
            fixture.run("/", Command::Date).lines(),
            vec!["2024-09-01 10:00:00 UTC"]
        );
    }

    #[test]
    fn test_clear_requests_wipe() {
        let result = Fixture::new().run("/", Command::Clear);
        assert!(result.clear_transcript);
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_static_pages() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.run("/", Command::Help).lines()[0],
            "Available commands:"
        );
        assert!(fixture
            .run("/", Command::Hack)
            .lines()
            .last()
            .is_some_and(|l| l.contains("ethical hacking")));
        let code = fixture.run("/", Command::Code).lines();
        assert_eq!(code.len(), 10);
        assert_eq!(code[5], "  ");
        assert_eq!(fixture.run("/", Command::Matrix).output.len(), 10);
        assert_eq!(fixture.run("/", Command::Fortune).output.len(), 1);
    }
}
