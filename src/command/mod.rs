// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command Builder: logical operation + options --> argument vector.
//!
//! ```text
//! GitCommand::Log + GitOptions
//!          |
//!          v
//!   build(command, &options)
//!          |
//!          +-- None       --> [log]
//!          +-- Raw("a b") --> [log, a, b]          (whitespace split)
//!          +-- List([..]) --> [log, ..]            (order preserved)
//!          +-- Map{k: v}  --> [log, --k=v, --flag] (insertion order,
//!                                                  false flags dropped)
//!          v
//!   ArgumentVector (argv[0] is always the subcommand, never the executable)
//! ```

mod options;

pub use options::{GitOptions, OptionMap, OptionValue};

use serde::Serialize;
use std::fmt;

/// Git subcommands issued by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GitCommand {
    Add,
    Branch,
    CatFile,
    Checkout,
    Clone,
    Commit,
    Config,
    Diff,
    Fetch,
    Init,
    Log,
    Merge,
    Pull,
    Push,
    Remote,
    RevParse,
    Status,
    Tag,
}

impl GitCommand {
    /// Returns the subcommand as passed to git.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Branch => "branch",
            Self::CatFile => "cat-file",
            Self::Checkout => "checkout",
            Self::Clone => "clone",
            Self::Commit => "commit",
            Self::Config => "config",
            Self::Diff => "diff",
            Self::Fetch => "fetch",
            Self::Init => "init",
            Self::Log => "log",
            Self::Merge => "merge",
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Remote => "remote",
            Self::RevParse => "rev-parse",
            Self::Status => "status",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered argument list passed to the git process.
///
/// Each element is one argument; values are never joined with their flags
/// unless the caller asked for `--key=value` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentVector {
    command: GitCommand,
    args: Vec<String>,
}

impl ArgumentVector {
    /// Starts a vector holding only the subcommand.
    #[must_use]
    pub fn new(command: GitCommand) -> Self {
        Self {
            command,
            args: vec![command.as_str().to_string()],
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments in order.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Appends an argument only when `condition` holds.
    #[must_use]
    pub fn arg_if(self, condition: bool, arg: impl Into<String>) -> Self {
        if condition { self.arg(arg) } else { self }
    }

    /// Appends a normalized options value.
    #[must_use]
    pub fn options(mut self, options: &GitOptions) -> Self {
        options.append_to(&mut self.args);
        self
    }

    /// Returns the subcommand this vector invokes.
    #[must_use]
    pub const fn command(&self) -> GitCommand {
        self.command
    }

    /// Returns the arguments, subcommand first.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Consumes the vector into its arguments.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.args
    }
}

impl fmt::Display for ArgumentVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, "\"{arg}\"")?;
            } else {
                f.write_str(arg)?;
            }
        }
        Ok(())
    }
}

/// Builds the argument vector for `command` with `options` appended.
#[must_use]
pub fn build(command: GitCommand, options: &GitOptions) -> ArgumentVector {
    ArgumentVector::new(command).options(options)
}

#[cfg(test)]
mod tests;
