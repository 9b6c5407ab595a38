//! Text commands.
//!
//! A command line is split on whitespace, the first word picks the handler and the rest are
//! passed along as arguments. Handlers either succeed or return a [`CommandError`] with a
//! message meant for the user.

use std::fmt;

use trellis_config::Config;

use crate::tree::{Arrange, Tree};

pub mod resize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command is malformed or cannot run in the current state.
    Invalid(String),
    /// The command was understood but could not be carried out.
    Failure(String),
}

impl CommandError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Invalid(message) | Self::Failure(message) => message,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CommandError {}

pub type CmdResult = Result<(), CommandError>;

/// Everything a command may look at or change.
pub struct CommandContext<'a> {
    pub tree: &'a mut Tree,
    pub arranger: &'a mut dyn Arrange,
    pub config: &'a Config,
}

/// Runs one command line.
pub fn execute(ctx: &mut CommandContext<'_>, line: &str) -> CmdResult {
    let _span = tracy_client::span!("execute");

    let argv: Vec<&str> = line.split_whitespace().collect();
    let Some((name, args)) = argv.split_first() else {
        return Err(CommandError::invalid("No command given"));
    };

    debug!("running {line:?}");
    if name.eq_ignore_ascii_case("resize") {
        resize::cmd_resize(ctx, args)
    } else {
        Err(CommandError::invalid(format!("Unknown/invalid command '{name}'")))
    }
}

/// Fails unless at least `expected` arguments were given.
pub(crate) fn check_at_least(name: &str, args: &[&str], expected: usize) -> CmdResult {
    if args.len() >= expected {
        return Ok(());
    }

    let plural = if expected == 1 { "" } else { "s" };
    Err(CommandError::invalid(format!(
        "Invalid {name} command (expected at least {expected} argument{plural}, got {})",
        args.len()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SplitArranger;

    #[test]
    fn unknown_commands_are_invalid() {
        let mut tree = Tree::new();
        let config = Config::default();
        let mut ctx = CommandContext {
            tree: &mut tree,
            arranger: &mut SplitArranger,
            config: &config,
        };

        assert_eq!(
            execute(&mut ctx, "frobnicate now"),
            Err(CommandError::invalid("Unknown/invalid command 'frobnicate'"))
        );
        assert_eq!(
            execute(&mut ctx, "   "),
            Err(CommandError::invalid("No command given"))
        );
    }

    #[test]
    fn argument_count_message() {
        assert_eq!(check_at_least("resize", &["set", "10"], 2), Ok(()));
        assert_eq!(
            check_at_least("resize", &["grow"], 2).unwrap_err().to_string(),
            "Invalid resize command (expected at least 2 arguments, got 1)"
        );
        assert_eq!(
            check_at_least("resize", &[], 1).unwrap_err().message(),
            "Invalid resize command (expected at least 1 argument, got 0)"
        );
    }
}
