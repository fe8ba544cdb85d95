//! Action privileges.
//!
//! A privilege is a bitmask of elementary rights (`READ`, `CREATE`, `UPDATE`,
//! `DELETE`) or the `ALL` sentinel. `ALL` is not the union of the four rights:
//! it is compared by identity before any bit test, and combining it with
//! anything else yields `ALL` again.
//!
//! ## Text form
//!
//! ```text
//! NONE | READ | CREATE | UPDATE | DELETE | ALL
//! READ|CREATE        (combined rights, in canonical order)
//! ```

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

const SEPARATORS: [char; 2] = ['|', ','];

/// A bitmask of action rights, or the `ALL` sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Privilege(u8);

impl Privilege {
    /// No rights. Only ever a placeholder, never a valid grant.
    pub const NONE: Self = Self(0);
    pub const READ: Self = Self(1 << 0);
    pub const CREATE: Self = Self(1 << 1);
    pub const UPDATE: Self = Self(1 << 2);
    pub const DELETE: Self = Self(1 << 3);
    /// Every right. Distinct from `READ | CREATE | UPDATE | DELETE`.
    pub const ALL: Self = Self(1 << 4);

    /// The elementary rights in canonical order.
    pub const RIGHTS: [Self; 4] = [Self::READ, Self::CREATE, Self::UPDATE, Self::DELETE];

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    #[must_use]
    pub const fn is_all(self) -> bool {
        self.0 == Self::ALL.0
    }

    /// Returns `true` if holding `self` satisfies a request for `required`.
    ///
    /// The `ALL` sentinel satisfies everything. Otherwise at least one bit
    /// must be shared, so `NONE` never satisfies anything.
    #[must_use]
    pub const fn grants(self, required: Self) -> bool {
        self.is_all() || self.0 & required.0 != 0
    }

    /// Iterates over the elementary rights contained in this mask.
    ///
    /// The `ALL` sentinel contains no elementary bits and yields nothing.
    pub fn rights(self) -> impl Iterator<Item = Self> {
        Self::RIGHTS.into_iter().filter(move |r| self.0 & r.0 != 0)
    }

    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::NONE => Some("NONE"),
            Self::READ => Some("READ"),
            Self::CREATE => Some("CREATE"),
            Self::UPDATE => Some("UPDATE"),
            Self::DELETE => Some("DELETE"),
            Self::ALL => Some("ALL"),
            _ => None,
        }
    }

    fn from_name(token: &str) -> CoreResult<Self> {
        match token.to_ascii_uppercase().as_str() {
            "NONE" | "NO_PRIVILEGES" => Ok(Self::NONE),
            "READ" | "GET" => Ok(Self::READ),
            "CREATE" | "POST" => Ok(Self::CREATE),
            "UPDATE" | "PATCH" => Ok(Self::UPDATE),
            "DELETE" => Ok(Self::DELETE),
            "ALL" | "ALL_PRIVILEGES" => Ok(Self::ALL),
            _ => Err(CoreError::UnknownPrivilege(token.to_string())),
        }
    }
}

impl BitOr for Privilege {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        if self.is_all() || rhs.is_all() {
            Self::ALL
        } else {
            Self(self.0 | rhs.0)
        }
    }
}

impl BitOrAssign for Privilege {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl FromIterator<Privilege> for Privilege {
    fn from_iter<I: IntoIterator<Item = Privilege>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, BitOr::bitor)
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }
        for (i, right) in self.rights().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(right.name().unwrap_or_default())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Privilege({self})")
    }
}

impl FromStr for Privilege {
    type Err = CoreError;

    /// Parses a `|` or `,` separated list of privilege names.
    fn from_str(s: &str) -> CoreResult<Self> {
        s.split(SEPARATORS)
            .map(str::trim)
            .map(|token| {
                if token.is_empty() {
                    Err(CoreError::UnknownPrivilege(s.to_string()))
                } else {
                    Self::from_name(token)
                }
            })
            .collect()
    }
}

impl TryFrom<String> for Privilege {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        value.parse()
    }
}

impl From<Privilege> for String {
    fn from(value: Privilege) -> Self {
        value.to_string()
    }
}
