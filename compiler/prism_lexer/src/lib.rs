//! Ruby lexer for the Prism parser.
//!
//! The lexer is pull-based: the parser asks for one token at a time through
//! [`Lexer::next_token`] and, in return, tells the lexer which identifiers
//! are local variables and where `do` belongs to a loop. That feedback is
//! what lets `foo -1`, `x /y/` and `a ?b : c` come out right.
//!
//! Literal content is returned as raw source spans. The parser decodes it
//! with [`unescape::unescape`] once it knows what kind of literal it is in,
//! and computes numeric values with the helpers in [`number`].

mod keywords;
mod lexer;
mod magic_comment;
mod mode;
pub mod number;
mod state;
mod token;
pub mod unescape;

pub use keywords::is_keyword;
pub use lexer::{LexOutput, Lexer, LexerConfig, LocalTable};
pub use state::{LexState, StateStack};
pub use token::{Token, TokenKind};
