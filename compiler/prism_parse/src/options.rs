//! Parse options.

use bitflags::bitflags;
use prism_lexer_core::Encoding;
use std::fmt;
use std::sync::Arc;

/// Initial value of the `frozen_string_literal` setting.
///
/// A magic comment in the source overrides it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FrozenStringLiteral {
    #[default]
    Unset,
    Disabled,
    Enabled,
}

bitflags! {
    /// Which anonymous parameters an enclosing scope forwards.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Forwarding: u8 {
        /// `*`
        const POSITIONALS = 1 << 0;
        /// `**`
        const KEYWORDS = 1 << 1;
        /// `&`
        const BLOCK = 1 << 2;
        /// `...`
        const ALL = 1 << 3;
    }
}

/// An enclosing local scope supplied by the caller, as for `eval`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scope {
    pub locals: Vec<Vec<u8>>,
    pub forwarding: Forwarding,
}

impl Scope {
    pub fn new<I, S>(locals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        Scope {
            locals: locals.into_iter().map(Into::into).collect(),
            forwarding: Forwarding::empty(),
        }
    }

    #[must_use]
    pub fn with_forwarding(mut self, forwarding: Forwarding) -> Self {
        self.forwarding = forwarding;
        self
    }
}

/// Called with the new encoding when a magic comment switches it.
pub type EncodingCallback = Arc<dyn Fn(Encoding) + Send + Sync>;

/// Everything that shapes a parse besides the source itself.
#[derive(Clone)]
pub struct Options {
    /// Value of `__FILE__`.
    pub filepath: String,
    /// Line number of the first source line.
    pub line: i32,
    pub encoding: Encoding,
    /// Ignore `encoding:` magic comments.
    pub encoding_locked: bool,
    pub frozen_string_literal: FrozenStringLiteral,
    /// Keep warnings. Without it only errors are reported.
    pub verbose: bool,
    /// Enclosing scopes, outermost first.
    pub scopes: Vec<Scope>,
    pub on_encoding_changed: Option<EncodingCallback>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            filepath: String::new(),
            line: 1,
            encoding: Encoding::default(),
            encoding_locked: false,
            frozen_string_literal: FrozenStringLiteral::Unset,
            verbose: true,
            scopes: Vec::new(),
            on_encoding_changed: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("filepath", &self.filepath)
            .field("line", &self.line)
            .field("encoding", &self.encoding)
            .field("encoding_locked", &self.encoding_locked)
            .field("frozen_string_literal", &self.frozen_string_literal)
            .field("verbose", &self.verbose)
            .field("scopes", &self.scopes)
            .field("on_encoding_changed", &self.on_encoding_changed.is_some())
            .finish()
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filepath(mut self, filepath: impl Into<String>) -> Self {
        self.filepath = filepath.into();
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: i32) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_encoding_locked(mut self, locked: bool) -> Self {
        self.encoding_locked = locked;
        self
    }

    #[must_use]
    pub fn with_frozen_string_literal(mut self, value: FrozenStringLiteral) -> Self {
        self.frozen_string_literal = value;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    #[must_use]
    pub fn on_encoding_changed(mut self, callback: impl Fn(Encoding) + Send + Sync + 'static) -> Self {
        self.on_encoding_changed = Some(Arc::new(callback));
        self
    }
}

#[cfg(test)]
mod tests;
