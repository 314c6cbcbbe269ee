//! Enumerated codes carried by the wire format.
//!
//! Every enum decodes leniently: an unrecognized code becomes an explicit
//! unknown variant instead of failing the surrounding entity.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A faction taking part in the war.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Faction {
    Humans,
    Terminids,
    Automaton,
    Illuminate,
    /// Code or name not known to this client.
    Unknown,
}

impl Faction {
    /// Decode a numeric faction code.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Faction::Humans,
            2 => Faction::Terminids,
            3 => Faction::Automaton,
            4 => Faction::Illuminate,
            _ => Faction::Unknown,
        }
    }

    /// Decode a faction name as served by the community API.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            n if n.eq_ignore_ascii_case("humans") => Faction::Humans,
            n if n.eq_ignore_ascii_case("terminids") => Faction::Terminids,
            n if n.eq_ignore_ascii_case("automaton") => Faction::Automaton,
            n if n.eq_ignore_ascii_case("illuminate") => Faction::Illuminate,
            _ => Faction::Unknown,
        }
    }

    /// Decode either representation. Returns `None` only when the value is
    /// neither a string nor an integer.
    pub fn from_wire(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::from_name(name)),
            Value::Number(number) => Some(number.as_i64().map_or(Faction::Unknown, Self::from_code)),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Faction::Humans => "Humans",
            Faction::Terminids => "Terminids",
            Faction::Automaton => "Automaton",
            Faction::Illuminate => "Illuminate",
            Faction::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Declares a code-backed enum with an `Unknown(code)` fallback.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident = $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Code not known to this client.
            Unknown(i64),
        }

        impl $name {
            pub fn from_code(code: i64) -> Self {
                match code {
                    $($code => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }

            pub fn code(&self) -> i64 {
                match self {
                    $($name::$variant => $code,)+
                    $name::Unknown(code) => *code,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($name::$variant => f.pad(stringify!($variant)),)+
                    $name::Unknown(code) => write!(f, "Unknown({})", code),
                }
            }
        }
    };
}

coded_enum! {
    /// Kind of objective an assignment task asks for.
    AssignmentType {
        Eradicate = 3,
        Liberation = 11,
        Defense = 12,
        Control = 13,
    }
}

coded_enum! {
    /// Meaning of one entry in an assignment task's `values` list.
    ValueType {
        Race = 1,
        /// Present on the wire without a documented meaning.
        Unspecified = 2,
        TargetCount = 3,
        UnitId = 4,
        ItemId = 5,
        Liberate = 11,
        Planet = 12,
    }
}

coded_enum! {
    RewardType {
        Medals = 1,
    }
}

coded_enum! {
    /// Kind of event running on a planet.
    EventType {
        Defense = 1,
    }
}

coded_enum! {
    DispatchKind {
        Message = 0,
    }
}

coded_enum! {
    CampaignKind {
        Standard = 0,
    }
}
