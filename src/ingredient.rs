use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every component a burger can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IngredientId {
    Bun,
    Patty,
    Lettuce,
    Tomato,
    Cheese,
    Pickle,
    Onion,
    #[serde(alias = "Ketchup2")]
    Ketchup,
    #[serde(alias = "Mayo2")]
    Mayo,
    #[serde(alias = "Bulgogi2")]
    Bulgogi,
}

/// Coarse grouping used by hosts to pick sprites and by the stock table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngredientKind {
    Bun,
    Filling,
    Sauce,
}

struct Entry {
    id: IngredientId,
    name: &'static str,
    aliases: &'static [&'static str],
    kind: IngredientKind,
}

// Lookup table backing name resolution. Sauce aliases are the names the
// sprite assets were authored with.
const TABLE: [Entry; 10] = [
    Entry { id: IngredientId::Bun, name: "Bun", aliases: &[], kind: IngredientKind::Bun },
    Entry { id: IngredientId::Patty, name: "Patty", aliases: &[], kind: IngredientKind::Filling },
    Entry { id: IngredientId::Lettuce, name: "Lettuce", aliases: &[], kind: IngredientKind::Filling },
    Entry { id: IngredientId::Tomato, name: "Tomato", aliases: &[], kind: IngredientKind::Filling },
    Entry { id: IngredientId::Cheese, name: "Cheese", aliases: &[], kind: IngredientKind::Filling },
    Entry { id: IngredientId::Pickle, name: "Pickle", aliases: &[], kind: IngredientKind::Filling },
    Entry { id: IngredientId::Onion, name: "Onion", aliases: &[], kind: IngredientKind::Filling },
    Entry { id: IngredientId::Ketchup, name: "Ketchup", aliases: &["Ketchup2"], kind: IngredientKind::Sauce },
    Entry { id: IngredientId::Mayo, name: "Mayo", aliases: &["Mayo2"], kind: IngredientKind::Sauce },
    Entry { id: IngredientId::Bulgogi, name: "Bulgogi", aliases: &["Bulgogi2"], kind: IngredientKind::Sauce },
];

impl IngredientId {
    /// All ingredients in shelf order.
    pub const ALL: [IngredientId; 10] = [
        IngredientId::Bun,
        IngredientId::Patty,
        IngredientId::Lettuce,
        IngredientId::Tomato,
        IngredientId::Cheese,
        IngredientId::Pickle,
        IngredientId::Onion,
        IngredientId::Ketchup,
        IngredientId::Mayo,
        IngredientId::Bulgogi,
    ];

    fn entry(self) -> &'static Entry {
        // TABLE is laid out in declaration order.
        &TABLE[self as usize]
    }

    /// The canonical display name.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn kind(self) -> IngredientKind {
        self.entry().kind
    }

    pub fn is_sauce(self) -> bool {
        self.kind() == IngredientKind::Sauce
    }

    /// Resolves a host-side object name into an ingredient.
    ///
    /// Accepts canonical names and legacy aliases. Instantiated sprites carry a
    /// `(Clone)` suffix, which is ignored along with surrounding whitespace.
    pub fn lookup(raw: &str) -> Option<Self> {
        let name = raw.replace("(Clone)", "");
        let name = name.trim();
        TABLE
            .iter()
            .find(|e| e.name == name || e.aliases.contains(&name))
            .map(|e| e.id)
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name any ingredient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an ingredient")]
pub struct UnknownIngredientName(pub String);

impl FromStr for IngredientId {
    type Err = UnknownIngredientName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownIngredientName(s.to_string()))
    }
}
