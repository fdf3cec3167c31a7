//! Error-tolerant recursive descent parser for Ruby.
//!
//! Produces a flat [`Ast`] arena plus everything collected along the way:
//! comments, magic comments, line offsets and diagnostics. Parsing never
//! fails; malformed input yields `Missing` placeholder nodes and errors.
//!
//! # Layout
//!
//! - `cursor`: token navigation, diagnostics and node helpers
//! - `grammar`: one module per family of productions
//! - `scope`: local variable frames, fed back to the lexer
//! - `static_literals`: duplicate hash key and `when` detection

mod context;
mod cursor;
mod grammar;
mod named_captures;
mod options;
mod recovery;
mod result;
mod scope;
mod static_literals;

pub use named_captures::named_captures;
pub use options::{EncodingCallback, Forwarding, FrozenStringLiteral, Options, Scope};
pub use result::{LexResult, LexedToken, ParseResult};
pub use static_literals::{inspect, LiteralContext, StaticLiterals};

use context::{ParseContext, Terminators};
use prism_diagnostic::DiagnosticList;
use prism_ir::{Ast, ConstantId, ConstantPool, NodeId};
use prism_lexer::{Lexer, LexerConfig, Token};
use prism_lexer_core::SourceBuffer;
use prism_stack::ensure_sufficient_stack;
use scope::{ScopeKind, Scopes};

/// Parser state for one source.
struct Parser<'src> {
    source: &'src [u8],
    options: &'src Options,
    lexer: Lexer<'src>,
    scopes: Scopes,
    constants: ConstantPool,
    ast: Ast,

    current: Token,
    previous: Token,
    context: ParseContext,
    /// Statement lists being parsed, innermost last.
    closers: Vec<Terminators>,

    errors: DiagnosticList,
    warnings: DiagnosticList,
    /// Every token lexed, trivia included, when serving [`lex`].
    recorded: Option<Vec<LexedToken>>,
    /// Optional parameter whose default value is being parsed.
    circular_parameter: Option<ConstantId>,
}

impl<'src> Parser<'src> {
    fn new(buffer: &'src SourceBuffer, options: &'src Options) -> Self {
        let config = LexerConfig {
            encoding: options.encoding,
            encoding_locked: options.encoding_locked,
        };
        let source = buffer.as_bytes();
        let mut parser = Parser {
            source,
            options,
            lexer: Lexer::new(buffer, config),
            scopes: Scopes::new(),
            constants: ConstantPool::new(),
            ast: Ast::with_capacity(source.len()),
            current: Token::missing(0),
            previous: Token::missing(0),
            context: ParseContext::empty(),
            closers: Vec::new(),
            errors: DiagnosticList::new(),
            warnings: DiagnosticList::new(),
            recorded: None,
            circular_parameter: None,
        };

        for scope in &options.scopes {
            parser.scopes.push(ScopeKind::Eval);
            for local in &scope.locals {
                let name = parser.constants.insert(local);
                parser.scopes.add_local(name);
            }
            parser.scopes.add_forwarding(scope.forwarding);
        }
        parser.scopes.push(ScopeKind::Top);
        parser
    }

    /// Hand over the tree and merge the lexer's side records.
    fn into_result(self, root: NodeId) -> ParseResult {
        let output = self.lexer.finish();

        let mut errors = output.errors;
        errors.extend(self.errors);
        errors.sort();

        let mut warnings = output.warnings;
        warnings.extend(self.warnings);
        warnings.sort();
        if !self.options.verbose {
            warnings.clear();
        }

        if output.encoding_changed {
            tracing::debug!(encoding = output.encoding.name(), "source encoding changed");
            if let Some(callback) = &self.options.on_encoding_changed {
                callback(output.encoding);
            }
        }

        ParseResult {
            ast: self.ast,
            root,
            constants: self.constants,
            comments: output.comments,
            magic_comments: output.magic_comments,
            errors,
            warnings,
            newlines: output.newlines,
            encoding: output.encoding,
            data_loc: output.data_loc,
            frozen_string_literal: output.frozen_string_literal,
            start_line: self.options.line,
        }
    }
}

/// Parse `source` into a syntax tree.
///
/// Always returns a tree; check [`ParseResult::is_success`] for errors.
pub fn parse(source: &[u8], options: &Options) -> ParseResult {
    let _span = tracing::debug_span!("parse", bytes = source.len()).entered();
    let buffer = SourceBuffer::new(source);
    let mut parser = Parser::new(&buffer, options);
    let root = ensure_sufficient_stack(|| parser.parse_program());
    let result = parser.into_result(root);
    tracing::debug!(
        nodes = result.ast.len(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "parsed"
    );
    result
}

/// Lex `source` the way the parser does, reporting every token together
/// with the lexer state that followed it.
///
/// The parser runs alongside so that local variables and `do` placement
/// influence the tokens exactly as in [`parse`].
pub fn lex(source: &[u8], options: &Options) -> LexResult {
    let _span = tracing::debug_span!("lex", bytes = source.len()).entered();
    let buffer = SourceBuffer::new(source);
    let mut parser = Parser::new(&buffer, options);
    parser.recorded = Some(Vec::new());
    let root = ensure_sufficient_stack(|| parser.parse_program());
    let tokens = parser.recorded.take().unwrap_or_default();
    let result = parser.into_result(root);
    LexResult {
        tokens,
        comments: result.comments,
        magic_comments: result.magic_comments,
        errors: result.errors,
        warnings: result.warnings,
        newlines: result.newlines,
        encoding: result.encoding,
        data_loc: result.data_loc,
    }
}

#[cfg(test)]
mod tests;
