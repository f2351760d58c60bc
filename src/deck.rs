//! The deck registry: the closed set of 52 card identities and their
//! attribute lookups.
//!
//! [`CardName`] is the only key into the registry. Because it is a closed
//! enum, the four attribute accessors are total `const fn`s checked for
//! exhaustiveness by the compiler; [`UnknownCardError`] can only arise at the
//! boundaries where runtime tokens enter ([`CardName::from_index`] and
//! [`FromStr`](core::str::FromStr)).

extern crate alloc;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::card::{Color, Rank, Suite};
use crate::error::UnknownCardError;

/// Identity of one of the 52 standard cards.
///
/// Listed in canonical deck order: hearts, diamonds, clubs, spades, each ace
/// through king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardName {
    /// A♥
    AceOfHearts,
    /// 2♥
    TwoOfHearts,
    /// 3♥
    ThreeOfHearts,
    /// 4♥
    FourOfHearts,
    /// 5♥
    FiveOfHearts,
    /// 6♥
    SixOfHearts,
    /// 7♥
    SevenOfHearts,
    /// 8♥
    EightOfHearts,
    /// 9♥
    NineOfHearts,
    /// 10♥
    TenOfHearts,
    /// J♥
    JackOfHearts,
    /// Q♥
    QueenOfHearts,
    /// K♥
    KingOfHearts,
    /// A♦
    AceOfDiamonds,
    /// 2♦
    TwoOfDiamonds,
    /// 3♦
    ThreeOfDiamonds,
    /// 4♦
    FourOfDiamonds,
    /// 5♦
    FiveOfDiamonds,
    /// 6♦
    SixOfDiamonds,
    /// 7♦
    SevenOfDiamonds,
    /// 8♦
    EightOfDiamonds,
    /// 9♦
    NineOfDiamonds,
    /// 10♦
    TenOfDiamonds,
    /// J♦
    JackOfDiamonds,
    /// Q♦
    QueenOfDiamonds,
    /// K♦
    KingOfDiamonds,
    /// A♣
    AceOfClubs,
    /// 2♣
    TwoOfClubs,
    /// 3♣
    ThreeOfClubs,
    /// 4♣
    FourOfClubs,
    /// 5♣
    FiveOfClubs,
    /// 6♣
    SixOfClubs,
    /// 7♣
    SevenOfClubs,
    /// 8♣
    EightOfClubs,
    /// 9♣
    NineOfClubs,
    /// 10♣
    TenOfClubs,
    /// J♣
    JackOfClubs,
    /// Q♣
    QueenOfClubs,
    /// K♣
    KingOfClubs,
    /// A♠
    AceOfSpades,
    /// 2♠
    TwoOfSpades,
    /// 3♠
    ThreeOfSpades,
    /// 4♠
    FourOfSpades,
    /// 5♠
    FiveOfSpades,
    /// 6♠
    SixOfSpades,
    /// 7♠
    SevenOfSpades,
    /// 8♠
    EightOfSpades,
    /// 9♠
    NineOfSpades,
    /// 10♠
    TenOfSpades,
    /// J♠
    JackOfSpades,
    /// Q♠
    QueenOfSpades,
    /// K♠
    KingOfSpades,
}

impl CardName {
    /// All 52 identities in canonical deck order.
    pub const ALL: [Self; 52] = [
        Self::AceOfHearts,
        Self::TwoOfHearts,
        Self::ThreeOfHearts,
        Self::FourOfHearts,
        Self::FiveOfHearts,
        Self::SixOfHearts,
        Self::SevenOfHearts,
        Self::EightOfHearts,
        Self::NineOfHearts,
        Self::TenOfHearts,
        Self::JackOfHearts,
        Self::QueenOfHearts,
        Self::KingOfHearts,
        Self::AceOfDiamonds,
        Self::TwoOfDiamonds,
        Self::ThreeOfDiamonds,
        Self::FourOfDiamonds,
        Self::FiveOfDiamonds,
        Self::SixOfDiamonds,
        Self::SevenOfDiamonds,
        Self::EightOfDiamonds,
        Self::NineOfDiamonds,
        Self::TenOfDiamonds,
        Self::JackOfDiamonds,
        Self::QueenOfDiamonds,
        Self::KingOfDiamonds,
        Self::AceOfClubs,
        Self::TwoOfClubs,
        Self::ThreeOfClubs,
        Self::FourOfClubs,
        Self::FiveOfClubs,
        Self::SixOfClubs,
        Self::SevenOfClubs,
        Self::EightOfClubs,
        Self::NineOfClubs,
        Self::TenOfClubs,
        Self::JackOfClubs,
        Self::QueenOfClubs,
        Self::KingOfClubs,
        Self::AceOfSpades,
        Self::TwoOfSpades,
        Self::ThreeOfSpades,
        Self::FourOfSpades,
        Self::FiveOfSpades,
        Self::SixOfSpades,
        Self::SevenOfSpades,
        Self::EightOfSpades,
        Self::NineOfSpades,
        Self::TenOfSpades,
        Self::JackOfSpades,
        Self::QueenOfSpades,
        Self::KingOfSpades,
    ];

    /// Returns the suite of the card.
    #[must_use]
    pub const fn suite(self) -> Suite {
        match self {
            Self::AceOfHearts
            | Self::TwoOfHearts
            | Self::ThreeOfHearts
            | Self::FourOfHearts
            | Self::FiveOfHearts
            | Self::SixOfHearts
            | Self::SevenOfHearts
            | Self::EightOfHearts
            | Self::NineOfHearts
            | Self::TenOfHearts
            | Self::JackOfHearts
            | Self::QueenOfHearts
            | Self::KingOfHearts => Suite::Hearts,
            Self::AceOfDiamonds
            | Self::TwoOfDiamonds
            | Self::ThreeOfDiamonds
            | Self::FourOfDiamonds
            | Self::FiveOfDiamonds
            | Self::SixOfDiamonds
            | Self::SevenOfDiamonds
            | Self::EightOfDiamonds
            | Self::NineOfDiamonds
            | Self::TenOfDiamonds
            | Self::JackOfDiamonds
            | Self::QueenOfDiamonds
            | Self::KingOfDiamonds => Suite::Diamonds,
            Self::AceOfClubs
            | Self::TwoOfClubs
            | Self::ThreeOfClubs
            | Self::FourOfClubs
            | Self::FiveOfClubs
            | Self::SixOfClubs
            | Self::SevenOfClubs
            | Self::EightOfClubs
            | Self::NineOfClubs
            | Self::TenOfClubs
            | Self::JackOfClubs
            | Self::QueenOfClubs
            | Self::KingOfClubs => Suite::Clubs,
            Self::AceOfSpades
            | Self::TwoOfSpades
            | Self::ThreeOfSpades
            | Self::FourOfSpades
            | Self::FiveOfSpades
            | Self::SixOfSpades
            | Self::SevenOfSpades
            | Self::EightOfSpades
            | Self::NineOfSpades
            | Self::TenOfSpades
            | Self::JackOfSpades
            | Self::QueenOfSpades
            | Self::KingOfSpades => Suite::Spades,
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        match self {
            Self::AceOfHearts | Self::AceOfDiamonds | Self::AceOfClubs | Self::AceOfSpades => {
                Rank::Ace
            }
            Self::TwoOfHearts | Self::TwoOfDiamonds | Self::TwoOfClubs | Self::TwoOfSpades => {
                Rank::Two
            }
            Self::ThreeOfHearts
            | Self::ThreeOfDiamonds
            | Self::ThreeOfClubs
            | Self::ThreeOfSpades => Rank::Three,
            Self::FourOfHearts | Self::FourOfDiamonds | Self::FourOfClubs | Self::FourOfSpades => {
                Rank::Four
            }
            Self::FiveOfHearts | Self::FiveOfDiamonds | Self::FiveOfClubs | Self::FiveOfSpades => {
                Rank::Five
            }
            Self::SixOfHearts | Self::SixOfDiamonds | Self::SixOfClubs | Self::SixOfSpades => {
                Rank::Six
            }
            Self::SevenOfHearts
            | Self::SevenOfDiamonds
            | Self::SevenOfClubs
            | Self::SevenOfSpades => Rank::Seven,
            Self::EightOfHearts
            | Self::EightOfDiamonds
            | Self::EightOfClubs
            | Self::EightOfSpades => Rank::Eight,
            Self::NineOfHearts | Self::NineOfDiamonds | Self::NineOfClubs | Self::NineOfSpades => {
                Rank::Nine
            }
            Self::TenOfHearts | Self::TenOfDiamonds | Self::TenOfClubs | Self::TenOfSpades => {
                Rank::Ten
            }
            Self::JackOfHearts | Self::JackOfDiamonds | Self::JackOfClubs | Self::JackOfSpades => {
                Rank::Jack
            }
            Self::QueenOfHearts
            | Self::QueenOfDiamonds
            | Self::QueenOfClubs
            | Self::QueenOfSpades => Rank::Queen,
            Self::KingOfHearts | Self::KingOfDiamonds | Self::KingOfClubs | Self::KingOfSpades => {
                Rank::King
            }
        }
    }

    /// Returns the comparable rank number (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.rank().number()
    }

    /// Returns the display label of the rank ("Ace", "King", ...).
    #[must_use]
    pub const fn rank_label(self) -> &'static str {
        self.rank().label()
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suite().color()
    }

    /// Returns the identity for the given rank and suite.
    #[must_use]
    pub const fn of(rank: Rank, suite: Suite) -> Self {
        let suite_base = match suite {
            Suite::Hearts => 0,
            Suite::Diamonds => 13,
            Suite::Clubs => 26,
            Suite::Spades => 39,
        };
        Self::ALL[suite_base + rank.number() as usize - 1]
    }

    /// Returns the position of the identity in canonical deck order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the identity at the given canonical position.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCardError`] if `index` is not in `0..52`.
    pub fn from_index(index: u8) -> Result<Self, UnknownCardError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| UnknownCardError::new(index.to_string()))
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().symbol(), self.suite().symbol())
    }
}

impl FromStr for CardName {
    type Err = UnknownCardError;

    /// Parses compact rank+suite notation: `"AS"`, `"TD"`, `"10d"`, `"kh"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let Some(last) = chars.next_back() else {
            return Err(UnknownCardError::new(s));
        };
        let rest = chars.as_str();

        let suite = match last.to_ascii_uppercase() {
            'H' => Suite::Hearts,
            'D' => Suite::Diamonds,
            'C' => Suite::Clubs,
            'S' => Suite::Spades,
            _ => return Err(UnknownCardError::new(s)),
        };

        let rank = match rest.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(UnknownCardError::new(s)),
        };

        Ok(Self::of(rank, suite))
    }
}
