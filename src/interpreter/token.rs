use std::fmt;

/// The classification of a [`Token`].
///
/// Variants are declared in a fixed order; [`KindSet`] iterates in this order
/// so diagnostics always list expected kinds the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of digits, such as `42`.
    Number,
    /// Digits with a single interior `.`, such as `3.14`.
    Decimal,
    /// A run of spaces, tabs, carriage returns and line feeds.
    Whitespace,
    /// `(`
    OpenBrace,
    /// `)`
    CloseBrace,
    /// `+`
    Add,
    /// Binary `-`.
    Sub,
    /// Unary `-`.
    Neg,
    /// `*`
    Mul,
    /// `%`
    Mod,
    /// `/`
    Div,
    /// `^`
    Exp,
}

/// The number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand (negation).
    Unary,
    /// Two operands.
    Binary,
}

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 12] = [Self::Number,
                                 Self::Decimal,
                                 Self::Whitespace,
                                 Self::OpenBrace,
                                 Self::CloseBrace,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Neg,
                                 Self::Mul,
                                 Self::Mod,
                                 Self::Div,
                                 Self::Exp];

    /// Returns `true` for the arithmetic operators, unary negation included.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        self.arity().is_some()
    }

    /// Returns `true` for numeric literals.
    #[must_use]
    pub const fn is_operand(self) -> bool {
        matches!(self, Self::Number | Self::Decimal)
    }

    /// Returns the arity of an operator, or `None` for anything else.
    #[must_use]
    pub const fn arity(self) -> Option<Arity> {
        match self {
            Self::Neg => Some(Arity::Unary),
            Self::Add | Self::Sub | Self::Mul | Self::Mod | Self::Div | Self::Exp => {
                Some(Arity::Binary)
            },
            Self::Number
            | Self::Decimal
            | Self::Whitespace
            | Self::OpenBrace
            | Self::CloseBrace => None,
        }
    }

    /// Returns the binding strength of an operator or brace.
    ///
    /// | kind                | precedence |
    /// |---------------------|------------|
    /// | `Add`, `Sub`        | 1          |
    /// | `Mul`, `Div`, `Mod` | 2          |
    /// | `Exp`               | 3          |
    /// | `Neg`, braces       | 4          |
    ///
    /// Operands and whitespace have no precedence.
    #[must_use]
    pub const fn precedence(self) -> Option<u8> {
        match self {
            Self::Add | Self::Sub => Some(1),
            Self::Mul | Self::Div | Self::Mod => Some(2),
            Self::Exp => Some(3),
            Self::Neg | Self::OpenBrace | Self::CloseBrace => Some(4),
            Self::Number | Self::Decimal | Self::Whitespace => None,
        }
    }

    /// Returns how an operator groups with operators of the same precedence.
    #[must_use]
    pub const fn associativity(self) -> Option<Associativity> {
        match self {
            Self::Exp | Self::Neg => Some(Associativity::Right),
            Self::Add | Self::Sub | Self::Mul | Self::Mod | Self::Div => Some(Associativity::Left),
            Self::Number
            | Self::Decimal
            | Self::Whitespace
            | Self::OpenBrace
            | Self::CloseBrace => None,
        }
    }

    /// The name used for this kind in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "T_NUMBER",
            Self::Decimal => "T_DECIMAL",
            Self::Whitespace => "T_WHITE_SPACE",
            Self::OpenBrace => "T_OPEN_BRACE",
            Self::CloseBrace => "T_CLOSE_BRACE",
            Self::Add => "T_ADD",
            Self::Sub => "T_SUB",
            Self::Neg => "T_NEG",
            Self::Mul => "T_MUL",
            Self::Mod => "T_MOD",
            Self::Div => "T_DIV",
            Self::Exp => "T_EXP",
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A location in the source text.
///
/// Both fields are 1-based. `offset` counts characters from the start of the
/// current line and restarts at 1 after every line feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Column of the character, starting at 1.
    pub offset: usize,
    /// Line of the character, starting at 1.
    pub line:   usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Self = Self { offset: 1,
                                   line:   1, };

    /// Moves the position past every character of `text`.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.offset = 1;
            } else {
                self.offset += 1;
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

/// The atomic unit produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The literal source text of the token.
    pub lexeme: String,
    /// Column of the token's first character.
    pub offset: usize,
    /// Line of the token's first character.
    pub line:   usize,
}

impl Token {
    /// Creates a token starting at `at`.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, at: Position) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               offset: at.offset,
               line: at.line }
    }

    /// The position of the token's first character.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position { offset: self.offset,
                   line:   self.line, }
    }

    /// The position immediately after the token's last character.
    #[must_use]
    pub fn end(&self) -> Position {
        let mut end = self.position();
        end.advance(&self.lexeme);
        end
    }

    /// Returns `true` if the token only separates other tokens.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}

/// A set of [`TokenKind`]s, used to describe which tokens the grammar accepts
/// next.
///
/// ```
/// use opprec::interpreter::token::{KindSet, TokenKind};
///
/// let set = KindSet::of(&[TokenKind::Neg, TokenKind::Number, TokenKind::OpenBrace]);
/// assert_eq!(set.to_string(), "T_NUMBER, T_OPEN_BRACE or T_NEG");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KindSet(u16);

impl KindSet {
    /// The kinds that may begin an operand: a literal, a negation or a group.
    pub const OPERAND_START: Self = Self(TokenKind::Number.bit()
                                         | TokenKind::Decimal.bit()
                                         | TokenKind::OpenBrace.bit()
                                         | TokenKind::Neg.bit());

    /// The binary operators.
    pub const BINARY_OPERATORS: Self = Self(TokenKind::Add.bit()
                                            | TokenKind::Sub.bit()
                                            | TokenKind::Mul.bit()
                                            | TokenKind::Mod.bit()
                                            | TokenKind::Div.bit()
                                            | TokenKind::Exp.bit());

    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from a slice of kinds.
    #[must_use]
    pub fn of(kinds: &[TokenKind]) -> Self {
        kinds.iter().fold(Self::empty(), |set, &kind| set.with(kind))
    }

    /// Returns a copy of the set with `kind` added.
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Returns `true` if `kind` is a member.
    #[must_use]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The number of members.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |&kind| self.contains(kind))
    }
}

impl FromIterator<TokenKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(TokenKind::name).collect();
        match names.split_last() {
            None => Ok(()),
            Some((last, [])) => f.write_str(last),
            Some((last, rest)) => write!(f, "{} or {last}", rest.join(", ")),
        }
    }
}
