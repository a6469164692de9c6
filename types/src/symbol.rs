use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::UnknownSymbol, REEL_POSITIONS};

/// Reel symbols, in wheel order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Cherry = 0,
    Bell = 1,
    Lemon = 2,
    Diamond = 3,
    Seven = 4,
    Clover = 5,
    Melon = 6,
}

impl Symbol {
    /// Every symbol on the wheel. Uniform draws index into this array.
    pub const ALL: [Symbol; 7] = [
        Symbol::Cherry,
        Symbol::Bell,
        Symbol::Lemon,
        Symbol::Diamond,
        Symbol::Seven,
        Symbol::Clover,
        Symbol::Melon,
    ];

    /// Static multiplier applied to the bet on a three-of-a-kind match.
    pub fn payout_multiplier(self) -> u64 {
        match self {
            Symbol::Cherry => 5,
            Symbol::Bell => 8,
            Symbol::Lemon => 4,
            Symbol::Diamond => 12,
            Symbol::Seven => 50,
            Symbol::Clover => 10,
            Symbol::Melon => 6,
        }
    }

    pub fn to_index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Symbol {
    type Error = UnknownSymbol;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Symbol::Cherry),
            1 => Ok(Symbol::Bell),
            2 => Ok(Symbol::Lemon),
            3 => Ok(Symbol::Diamond),
            4 => Ok(Symbol::Seven),
            5 => Ok(Symbol::Clover),
            6 => Ok(Symbol::Melon),
            _ => Err(UnknownSymbol(value)),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Symbol::Cherry => "🍒",
            Symbol::Bell => "🔔",
            Symbol::Lemon => "🍋",
            Symbol::Diamond => "💎",
            Symbol::Seven => "7️⃣",
            Symbol::Clover => "🍀",
            Symbol::Melon => "🍉",
        };
        f.write_str(glyph)
    }
}

/// The ordered symbol result of one spin.
///
/// Positions are drawn independently and uniformly, with replacement across
/// the symbol set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelOutcome([Symbol; REEL_POSITIONS]);

impl ReelOutcome {
    pub fn new(symbols: [Symbol; REEL_POSITIONS]) -> Self {
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol; REEL_POSITIONS] {
        &self.0
    }
}

impl fmt::Display for ReelOutcome {
    /// Space-joined symbols, the layout used in exports and result lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, symbol) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
