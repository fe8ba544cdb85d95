//! Database privilege levels.
//!
//! These come from the query layer. Authorization only compares them for
//! equality or against `All`; the declaration order carries no meaning.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DatabasePrivilege {
    NoPrivileges,
    Read,
    Write,
    /// Satisfies any requested level.
    All,
}

impl DatabasePrivilege {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoPrivileges => "NO_PRIVILEGES",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::All => "ALL_PRIVILEGES",
        }
    }

    /// Returns `true` if holding `self` satisfies a request for `required`.
    #[must_use]
    pub fn satisfies(self, required: Self) -> bool {
        self == required || self == Self::All
    }
}

impl std::fmt::Display for DatabasePrivilege {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DatabasePrivilege {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NO_PRIVILEGES" | "NONE" => Ok(Self::NoPrivileges),
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            "ALL_PRIVILEGES" | "ALL" => Ok(Self::All),
            _ => Err(CoreError::UnknownPrivilege(s.to_string())),
        }
    }
}

impl TryFrom<String> for DatabasePrivilege {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        value.parse()
    }
}

impl From<DatabasePrivilege> for String {
    fn from(value: DatabasePrivilege) -> Self {
        value.as_str().to_string()
    }
}
