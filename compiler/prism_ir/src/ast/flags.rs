//! Per-node flag bits.

use bitflags::bitflags;

bitflags! {
    /// Small bitset carried by every node.
    ///
    /// `NEWLINE` and `STATIC_LITERAL` apply to any node; the remaining bits
    /// are only set on the node kinds named in their docs.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct NodeFlags: u32 {
        /// First node of a line, for line-event tracing.
        const NEWLINE = 1 << 0;
        /// Literal with no runtime variation, eligible for duplicate detection.
        const STATIC_LITERAL = 1 << 1;

        /// Integer: `0b` prefix.
        const BINARY = 1 << 2;
        /// Integer: no prefix or `0d`.
        const DECIMAL = 1 << 3;
        /// Integer: `0`, `0o` or `0_` prefix.
        const OCTAL = 1 << 4;
        /// Integer: `0x` prefix.
        const HEXADECIMAL = 1 << 5;

        /// Range and flip-flop: `...` rather than `..`.
        const EXCLUDE_END = 1 << 6;

        /// Call: `&.` operator.
        const SAFE_NAVIGATION = 1 << 7;
        /// Call: bare identifier that could have been a local.
        const VARIABLE_CALL = 1 << 8;
        /// Call: `recv.name = value` or `recv[i] = value`.
        const ATTRIBUTE_WRITE = 1 << 9;
        /// Call: receiver written as `self` where privacy is relaxed.
        const IGNORE_VISIBILITY = 1 << 10;

        /// While/until: `begin ... end while cond`.
        const BEGIN_MODIFIER = 1 << 11;

        /// String: frozen by magic comment or option.
        const FROZEN = 1 << 12;
        /// String: explicitly not frozen.
        const MUTABLE = 1 << 13;
        /// String, regexp, symbol: `\u` escape forced UTF-8.
        const FORCED_UTF8_ENCODING = 1 << 14;
        /// String, regexp, symbol: non-ASCII byte escape forced binary.
        const FORCED_BINARY_ENCODING = 1 << 15;
        /// Symbol, regexp: only US-ASCII content.
        const FORCED_US_ASCII_ENCODING = 1 << 16;

        /// Regexp: `i`
        const IGNORE_CASE = 1 << 17;
        /// Regexp: `x`
        const EXTENDED = 1 << 18;
        /// Regexp: `m`
        const MULTI_LINE = 1 << 19;
        /// Regexp: `o`
        const ONCE = 1 << 20;
        /// Regexp: `e`
        const EUC_JP = 1 << 21;
        /// Regexp: `n`
        const ASCII_8BIT = 1 << 22;
        /// Regexp: `s`
        const WINDOWS_31J = 1 << 23;
        /// Regexp: `u`
        const UTF_8 = 1 << 24;

        /// Keyword hash: every key is a symbol literal.
        const SYMBOL_KEYS = 1 << 25;
        /// Array, arguments: contains a splat element.
        const CONTAINS_SPLAT = 1 << 26;
        /// Arguments: contains `**` or keyword arguments.
        const CONTAINS_KEYWORDS = 1 << 27;
        /// Parameter: name reused, e.g. `_` in `|_, _|`.
        const REPEATED_PARAMETER = 1 << 28;
        /// Parentheses, statements: the value is discarded.
        const VOID_STATEMENT = 1 << 29;
    }
}

impl NodeFlags {
    /// Every regexp option bit, in the order Ruby prints them.
    pub const REGEXP_OPTIONS: [(NodeFlags, char); 8] = [
        (NodeFlags::MULTI_LINE, 'm'),
        (NodeFlags::IGNORE_CASE, 'i'),
        (NodeFlags::EXTENDED, 'x'),
        (NodeFlags::ONCE, 'o'),
        (NodeFlags::EUC_JP, 'e'),
        (NodeFlags::ASCII_8BIT, 'n'),
        (NodeFlags::WINDOWS_31J, 's'),
        (NodeFlags::UTF_8, 'u'),
    ];

    /// Flag for a single regexp option character, if recognized.
    pub fn regexp_option(option: u8) -> Option<NodeFlags> {
        NodeFlags::REGEXP_OPTIONS
            .iter()
            .find(|(_, ch)| u32::from(option) == u32::from(*ch))
            .map(|(flag, _)| *flag)
    }

    /// The encoding-related bits that distinguish otherwise equal strings.
    pub fn string_encoding(self) -> NodeFlags {
        self & (NodeFlags::FORCED_BINARY_ENCODING | NodeFlags::FORCED_UTF8_ENCODING)
    }
}
