//! Cell roles: [`Role`].

use std::fmt;

/// The role a grid cell currently plays.
///
/// `Path` and `Discovered` are transient: they only exist between a
/// successful search and the next reset or edit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Empty,
    /// Non-traversable: the permanent outer ring or a user-placed obstacle.
    Boundary,
    Path,
    Discovered,
    Start,
    Goal,
}

impl Role {
    /// Whether a search may step onto a cell with this role.
    #[inline]
    pub fn is_traversable(self) -> bool {
        self != Role::Boundary
    }

    /// Whether the role is a transient search marking.
    #[inline]
    pub fn is_transient(self) -> bool {
        matches!(self, Role::Path | Role::Discovered)
    }

    /// Whether the role is one of the two endpoint markers.
    #[inline]
    pub fn is_endpoint(self) -> bool {
        matches!(self, Role::Start | Role::Goal)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Empty => "empty",
            Role::Boundary => "boundary",
            Role::Path => "path",
            Role::Discovered => "discovered",
            Role::Start => "start",
            Role::Goal => "goal",
        };
        f.write_str(s)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        for role in [
            Role::Empty,
            Role::Boundary,
            Role::Path,
            Role::Discovered,
            Role::Start,
            Role::Goal,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(role, back);
        }
    }
}
