//! Positional flag scanning over one invocation's argument vector
//!
//! Flags are `--name value` pairs only. There is no `--name=value` form and no repeated
//! flags: the first occurrence wins.

pub const HOST_FLAG: &str = "--host";

/// Index of the top-level command; the subcommand search starts right after it.
const COMMAND_INDEX: usize = 1;

#[derive(Debug, Clone)]
pub struct FlagParser {
    args: Vec<String>,
}

impl FlagParser {
    /// `args` includes the program name at index 0, as produced by `std::env::args()`.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn command(&self) -> Option<&str> {
        self.args.get(COMMAND_INDEX).map(String::as_str)
    }

    /// Value following the first exact match of `name`. A flag in last position has no
    /// value and counts as absent, as does an empty value.
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|arg| arg == name)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn global_flag<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.flag(name).unwrap_or(default)
    }

    /// Position of the first non-flag token after the command, skipping the `--host` pair.
    pub fn subcommand_index(&self) -> Option<usize> {
        let mut skip_next = false;
        for (i, arg) in self.args.iter().enumerate().skip(COMMAND_INDEX + 1) {
            if skip_next {
                skip_next = false;
                continue;
            }
            if arg == HOST_FLAG {
                skip_next = true;
                continue;
            }
            if !is_flag(arg) {
                return Some(i);
            }
        }
        None
    }

    pub fn subcommand(&self) -> Option<&str> {
        self.subcommand_index().map(|i| self.args[i].as_str())
    }
}

pub fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}
