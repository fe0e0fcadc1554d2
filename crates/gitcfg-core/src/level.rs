//! Configuration precedence levels

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// A precedence tier of git configuration.
///
/// Variants are declared from lowest to highest precedence, so the derived
/// ordering is the order levels are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLevel {
    /// `%PROGRAMDATA%\Git\config` on Windows
    ProgramData,
    /// `$(prefix)/etc/gitconfig`
    System,
    /// `$XDG_CONFIG_HOME/git/config`
    Xdg,
    /// `~/.gitconfig`
    Global,
    /// `$GIT_DIR/config`
    Local,
    /// Application specific configuration
    App,
    /// Highest level available
    Highest,
}

impl ConfigLevel {
    /// Number of canonical levels.
    pub const COUNT: usize = 7;

    /// All levels, lowest precedence first.
    pub const ALL: [ConfigLevel; Self::COUNT] = [
        ConfigLevel::ProgramData,
        ConfigLevel::System,
        ConfigLevel::Xdg,
        ConfigLevel::Global,
        ConfigLevel::Local,
        ConfigLevel::App,
        ConfigLevel::Highest,
    ];

    /// Display name of the level, as used in listings.
    pub fn name(self) -> &'static str {
        match self {
            ConfigLevel::ProgramData => "programdata",
            ConfigLevel::System => "system",
            ConfigLevel::Xdg => "xdg",
            ConfigLevel::Global => "global",
            ConfigLevel::Local => "local",
            ConfigLevel::App => "app",
            ConfigLevel::Highest => "highest",
        }
    }

    /// Position of the level in [`ConfigLevel::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ConfigLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ConfigLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for ConfigLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ConfigLevel::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| Error::UnrecognizedLevel {
                level: s.to_string(),
            })
    }
}

impl TryFrom<&str> for ConfigLevel {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<git2::ConfigLevel> for ConfigLevel {
    type Error = Error;

    fn try_from(level: git2::ConfigLevel) -> Result<Self> {
        match level {
            git2::ConfigLevel::ProgramData => Ok(ConfigLevel::ProgramData),
            git2::ConfigLevel::System => Ok(ConfigLevel::System),
            git2::ConfigLevel::XDG => Ok(ConfigLevel::Xdg),
            git2::ConfigLevel::Global => Ok(ConfigLevel::Global),
            git2::ConfigLevel::Local => Ok(ConfigLevel::Local),
            git2::ConfigLevel::App => Ok(ConfigLevel::App),
            git2::ConfigLevel::Highest => Ok(ConfigLevel::Highest),
            other => Err(Error::UnrecognizedLevel {
                level: format!("{other:?}"),
            }),
        }
    }
}

impl From<ConfigLevel> for git2::ConfigLevel {
    fn from(level: ConfigLevel) -> Self {
        match level {
            ConfigLevel::ProgramData => git2::ConfigLevel::ProgramData,
            ConfigLevel::System => git2::ConfigLevel::System,
            ConfigLevel::Xdg => git2::ConfigLevel::XDG,
            ConfigLevel::Global => git2::ConfigLevel::Global,
            ConfigLevel::Local => git2::ConfigLevel::Local,
            ConfigLevel::App => git2::ConfigLevel::App,
            ConfigLevel::Highest => git2::ConfigLevel::Highest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all() {
        for (i, level) in ConfigLevel::ALL.into_iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn test_order_is_ascending_precedence() {
        assert!(ConfigLevel::ProgramData < ConfigLevel::System);
        assert!(ConfigLevel::Global < ConfigLevel::Local);
        assert!(ConfigLevel::App < ConfigLevel::Highest);
    }

    #[test]
    fn test_names_parse_back() {
        for level in ConfigLevel::ALL {
            assert_eq!(level.name().parse::<ConfigLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "worktree".parse::<ConfigLevel>().unwrap_err();
        assert!(matches!(err, Error::UnrecognizedLevel { level } if level == "worktree"));
    }

    #[test]
    fn test_git2_levels_convert_both_ways() {
        for level in ConfigLevel::ALL {
            let raw: git2::ConfigLevel = level.into();
            assert_eq!(ConfigLevel::try_from(raw).unwrap(), level);
        }
    }
}
