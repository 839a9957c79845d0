/// A cell symbol on a validated board.
///
/// Parsing a board maps every character into this closed set, so the solver never has
/// to reason about arbitrary characters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Symbol {
    /// `@`, the unique cell every search starts from.
    Entry,
    /// `x`, the unique cell every search must end on.
    Exit,
    /// `+`, a junction open to movement in all four directions.
    Junction,
    /// `-`, a segment only horizontal movement passes through.
    Horizontal,
    /// `|`, a segment only vertical movement passes through.
    Vertical,
    /// An uppercase letter, collected into the word; moves like a junction.
    Letter(char),
    /// A space, filler that no path may enter.
    Blank,
}

impl Symbol {
    /// The character this symbol prints as.
    pub fn as_char(&self) -> char {
        match self {
            Self::Entry => '@',
            Self::Exit => 'x',
            Self::Junction => '+',
            Self::Horizontal => '-',
            Self::Vertical => '|',
            Self::Letter(letter) => *letter,
            Self::Blank => ' ',
        }
    }

    /// Whether a path may occupy this cell at all.
    pub fn is_traversable(&self) -> bool {
        !matches!(self, Self::Blank)
    }
}

impl TryFrom<char> for Symbol {
    /// The offending character, verbatim.
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '@' => Ok(Self::Entry),
            'x' => Ok(Self::Exit),
            '+' => Ok(Self::Junction),
            '-' => Ok(Self::Horizontal),
            '|' => Ok(Self::Vertical),
            ' ' => Ok(Self::Blank),
            'A'..='Z' => Ok(Self::Letter(value)),
            other => Err(other),
        }
    }
}
