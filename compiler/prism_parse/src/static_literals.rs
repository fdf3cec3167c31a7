//! Duplicate detection for literal hash keys, `when` values and hash
//! pattern keys.
//!
//! Literals are bucketed by kind and stored in open-addressing tables keyed
//! by a murmur hash of their value. `1` and `__LINE__` on line 1 collide, as
//! do `"a"` and `__FILE__` when the file is named `a`.

use num_bigint::{BigInt, Sign};
use prism_ir::{Ast, NewlineList, NodeFlags, NodeId, NodeKind};
use prism_lexer_core::Encoding;
use std::cmp::Ordering;
use std::fmt::Write as _;

/// What hashing and printing a literal needs besides the node.
#[derive(Copy, Clone)]
pub struct LiteralContext<'a> {
    pub ast: &'a Ast,
    pub source: &'a [u8],
    pub newlines: &'a NewlineList,
    pub start_line: i32,
    pub encoding: Encoding,
}

impl LiteralContext<'_> {
    fn line(&self, node: NodeId) -> i32 {
        self.newlines.line(self.ast.span(node).start, self.start_line)
    }

    /// Integer value of an `Integer` or `SourceLine` node.
    fn integer(&self, node: NodeId) -> BigInt {
        match self.ast.kind(node) {
            NodeKind::Integer { value } => self.ast.integer(value).clone(),
            _ => BigInt::from(self.line(node)),
        }
    }

    fn bytes(&self, node: NodeId) -> &[u8] {
        match self.ast.kind(node) {
            NodeKind::String { content }
            | NodeKind::RegularExpression { content }
            | NodeKind::XString { content } => self.ast.string(content),
            NodeKind::Symbol { value } => self.ast.string(value),
            NodeKind::SourceFile { filepath } => self.ast.string(filepath),
            _ => &[],
        }
    }

    /// Flag bits that take part in equality.
    fn value_flags(&self, node: NodeId) -> NodeFlags {
        let flags = self.ast.flags(node);
        match self.ast.kind(node) {
            NodeKind::String { .. } => flags.string_encoding(),
            NodeKind::Symbol { .. } => {
                flags.string_encoding() | (flags & NodeFlags::FORCED_US_ASCII_ENCODING)
            }
            NodeKind::RegularExpression { .. } => {
                let options = NodeFlags::REGEXP_OPTIONS
                    .iter()
                    .fold(NodeFlags::empty(), |acc, (flag, _)| acc | *flag);
                (flags & (options | NodeFlags::FORCED_US_ASCII_ENCODING))
                    | flags.string_encoding()
            }
            _ => NodeFlags::empty(),
        }
    }
}

// ─── Hashing ───

fn murmur_scramble(value: u32) -> u32 {
    value
        .wrapping_mul(0xcc9e_2d51)
        .rotate_left(15)
        .wrapping_mul(0x1b87_3593)
}

fn murmur_hash(bytes: &[u8]) -> u32 {
    let mut hash: u32 = 0x9747_b28c;
    let chunks = bytes.chunks_exact(4);
    let tail = chunks.remainder();
    for chunk in chunks {
        let segment = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        hash ^= murmur_scramble(segment);
        hash = hash.rotate_left(13);
        hash = hash.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let mut segment = 0u32;
    for &byte in tail.iter().rev() {
        segment = (segment << 8) | u32::from(byte);
    }
    hash ^= murmur_scramble(segment);

    #[expect(clippy::cast_possible_truncation, reason = "length only mixes into the hash")]
    let length = bytes.len() as u32;
    hash ^= length;
    hash ^= hash >> 16;
    hash = hash.wrapping_mul(0x85eb_ca6b);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(0xc2b2_ae35);
    hash ^= hash >> 16;
    hash
}

fn integer_hash(value: &BigInt) -> u32 {
    let (sign, digits) = value.to_u32_digits();
    let hash = match digits.as_slice() {
        [] => murmur_hash(&0u32.to_le_bytes()),
        [single] => murmur_hash(&single.to_le_bytes()),
        many => {
            let bytes: Vec<u8> = many.iter().flat_map(|digit| digit.to_le_bytes()).collect();
            murmur_hash(&bytes)
        }
    };
    if sign == Sign::Minus {
        hash ^ murmur_scramble(1)
    } else {
        hash
    }
}

/// Small tag mixed into number hashes so `1r` and `1i` differ.
fn number_tag(kind: &NodeKind) -> u32 {
    match kind {
        NodeKind::Integer { .. } | NodeKind::SourceLine => 1,
        NodeKind::Float { .. } => 2,
        NodeKind::Rational { .. } => 3,
        NodeKind::Imaginary { .. } => 4,
        _ => 0,
    }
}

fn node_hash(ctx: &LiteralContext<'_>, node: NodeId) -> u32 {
    let kind = ctx.ast.kind(node);
    match kind {
        NodeKind::Integer { .. } | NodeKind::SourceLine => integer_hash(&ctx.integer(node)),
        NodeKind::Float { value } => murmur_hash(&value.to_bits().to_le_bytes()),
        NodeKind::Rational {
            numerator,
            denominator,
        } => {
            integer_hash(ctx.ast.integer(numerator))
                ^ integer_hash(ctx.ast.integer(denominator))
                ^ murmur_scramble(number_tag(&kind))
        }
        NodeKind::Imaginary { numeric } => {
            node_hash(ctx, numeric) ^ murmur_scramble(number_tag(&kind))
        }
        NodeKind::SourceFile { .. } => murmur_hash(ctx.bytes(node)),
        _ => murmur_hash(ctx.bytes(node)) ^ murmur_scramble(ctx.value_flags(node).bits()),
    }
}

// ─── Comparison ───

fn compare_numbers(ctx: &LiteralContext<'_>, left: NodeId, right: NodeId) -> Ordering {
    let left_kind = ctx.ast.kind(left);
    let right_kind = ctx.ast.kind(right);
    let by_tag = number_tag(&left_kind).cmp(&number_tag(&right_kind));
    if by_tag != Ordering::Equal {
        return by_tag;
    }
    match (left_kind, right_kind) {
        (NodeKind::Float { value: a }, NodeKind::Float { value: b }) => {
            a.to_bits().cmp(&b.to_bits())
        }
        (
            NodeKind::Rational {
                numerator: ln,
                denominator: ld,
            },
            NodeKind::Rational {
                numerator: rn,
                denominator: rd,
            },
        ) => ctx
            .ast
            .integer(ld)
            .cmp(ctx.ast.integer(rd))
            .then_with(|| ctx.ast.integer(ln).cmp(ctx.ast.integer(rn))),
        (NodeKind::Imaginary { numeric: a }, NodeKind::Imaginary { numeric: b }) => {
            compare_numbers(ctx, a, b)
        }
        _ => ctx.integer(left).cmp(&ctx.integer(right)),
    }
}

fn compare_bytes(ctx: &LiteralContext<'_>, left: NodeId, right: NodeId) -> Ordering {
    ctx.value_flags(left)
        .bits()
        .cmp(&ctx.value_flags(right).bits())
        .then_with(|| ctx.bytes(left).cmp(ctx.bytes(right)))
}

// ─── Tables ───

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Bucket {
    Integer,
    Float,
    Number,
    String,
    Regexp,
    Symbol,
}

impl Bucket {
    fn compare(self, ctx: &LiteralContext<'_>, left: NodeId, right: NodeId) -> Ordering {
        match self {
            Bucket::Integer | Bucket::Float | Bucket::Number => compare_numbers(ctx, left, right),
            Bucket::String | Bucket::Regexp | Bucket::Symbol => compare_bytes(ctx, left, right),
        }
    }
}

#[derive(Debug, Default)]
struct Table {
    slots: Vec<Option<(u32, NodeId)>>,
    size: usize,
}

impl Table {
    fn index(hash: u32, capacity: usize) -> usize {
        usize::try_from(hash).unwrap_or(usize::MAX) & (capacity - 1)
    }

    fn grow(&mut self) {
        let capacity = if self.slots.is_empty() {
            4
        } else {
            self.slots.len() * 2
        };
        let old = std::mem::replace(&mut self.slots, vec![None; capacity]);
        for (hash, node) in old.into_iter().flatten() {
            let mut index = Self::index(hash, capacity);
            while self.slots[index].is_some() {
                index = (index + 1) & (capacity - 1);
            }
            self.slots[index] = Some((hash, node));
        }
    }

    fn insert(&mut self, ctx: &LiteralContext<'_>, bucket: Bucket, node: NodeId) -> Option<NodeId> {
        if self.size * 2 >= self.slots.len() {
            self.grow();
        }
        let capacity = self.slots.len();
        let hash = node_hash(ctx, node);
        let mut index = Self::index(hash, capacity);
        loop {
            match self.slots[index] {
                None => {
                    self.slots[index] = Some((hash, node));
                    self.size += 1;
                    return None;
                }
                Some((existing_hash, existing))
                    if existing_hash == hash
                        && bucket.compare(ctx, existing, node) == Ordering::Equal =>
                {
                    self.slots[index] = Some((hash, node));
                    return Some(existing);
                }
                Some(_) => index = (index + 1) & (capacity - 1),
            }
        }
    }
}

/// Literals seen so far in one hash literal or one `case`.
#[derive(Debug, Default)]
pub struct StaticLiterals {
    integers: Table,
    floats: Table,
    numbers: Table,
    strings: Table,
    regexps: Table,
    symbols: Table,
    true_node: Option<NodeId>,
    false_node: Option<NodeId>,
    nil_node: Option<NodeId>,
    source_encoding_node: Option<NodeId>,
}

impl StaticLiterals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` and return an earlier equal literal, if any.
    ///
    /// The new node always takes the earlier one's place, so a later
    /// duplicate is reported against the most recent occurrence. Nodes that
    /// are not static literals are ignored.
    pub fn add(&mut self, ctx: &LiteralContext<'_>, node: NodeId) -> Option<NodeId> {
        let (table, bucket) = match ctx.ast.kind(node) {
            NodeKind::Integer { .. } | NodeKind::SourceLine => (&mut self.integers, Bucket::Integer),
            NodeKind::Float { .. } => (&mut self.floats, Bucket::Float),
            NodeKind::Rational { .. } | NodeKind::Imaginary { .. } => {
                (&mut self.numbers, Bucket::Number)
            }
            NodeKind::String { .. } | NodeKind::SourceFile { .. } => {
                (&mut self.strings, Bucket::String)
            }
            NodeKind::RegularExpression { .. } => (&mut self.regexps, Bucket::Regexp),
            NodeKind::Symbol { .. } => (&mut self.symbols, Bucket::Symbol),
            NodeKind::True => return self.true_node.replace(node),
            NodeKind::False => return self.false_node.replace(node),
            NodeKind::Nil => return self.nil_node.replace(node),
            NodeKind::SourceEncoding => return self.source_encoding_node.replace(node),
            _ => return None,
        };
        table.insert(ctx, bucket, node)
    }
}

// ─── Inspection ───

/// Ruby's `inspect` of a static literal, as shown in duplicate warnings.
pub fn inspect(ctx: &LiteralContext<'_>, node: NodeId) -> String {
    let mut out = String::new();
    inspect_into(&mut out, ctx, node);
    out
}

fn inspect_into(out: &mut String, ctx: &LiteralContext<'_>, node: NodeId) {
    let kind = ctx.ast.kind(node);
    match kind {
        NodeKind::False => out.push_str("false"),
        NodeKind::True => out.push_str("true"),
        NodeKind::Nil => out.push_str("nil"),
        NodeKind::Integer { value } => {
            let _ = write!(out, "{}", ctx.ast.integer(value));
        }
        NodeKind::SourceLine => {
            let _ = write!(out, "{}", ctx.line(node));
        }
        NodeKind::Float { value } => {
            let negative = ctx.ast.span(node).slice(ctx.source).first() == Some(&b'-');
            if value.is_infinite() || value == 0.0 {
                if negative {
                    out.push('-');
                }
                out.push_str(if value.is_infinite() { "Infinity" } else { "0.0" });
            } else {
                out.push_str(&format_general(value));
            }
        }
        NodeKind::Rational {
            numerator,
            denominator,
        } => {
            let _ = write!(
                out,
                "({}/{})",
                ctx.ast.integer(numerator),
                ctx.ast.integer(denominator)
            );
        }
        NodeKind::Imaginary { numeric } => {
            out.push_str("(0");
            if is_positive(ctx, numeric) {
                out.push('+');
            }
            inspect_into(out, ctx, numeric);
            if matches!(ctx.ast.kind(numeric), NodeKind::Rational { .. }) {
                out.push('*');
            }
            out.push_str("i)");
        }
        NodeKind::RegularExpression { .. } => {
            out.push('/');
            escape_ruby(out, ctx.bytes(node));
            out.push('/');
            let flags = ctx.ast.flags(node);
            for (flag, letter) in [
                (NodeFlags::MULTI_LINE, 'm'),
                (NodeFlags::IGNORE_CASE, 'i'),
                (NodeFlags::EXTENDED, 'x'),
                (NodeFlags::ASCII_8BIT, 'n'),
            ] {
                if flags.contains(flag) {
                    out.push(letter);
                }
            }
        }
        NodeKind::SourceEncoding => {
            let _ = write!(out, "#<Encoding:{}>", ctx.encoding.name());
        }
        NodeKind::SourceFile { .. } | NodeKind::String { .. } => {
            out.push('"');
            escape_ruby(out, ctx.bytes(node));
            out.push('"');
        }
        NodeKind::Symbol { .. } => {
            out.push(':');
            escape_ruby(out, ctx.bytes(node));
        }
        _ => out.push_str(kind.name()),
    }
}

fn is_positive(ctx: &LiteralContext<'_>, node: NodeId) -> bool {
    match ctx.ast.kind(node) {
        NodeKind::Float { value } => value > 0.0,
        NodeKind::Integer { value } => ctx.ast.integer(value).sign() != Sign::Minus,
        NodeKind::Rational { numerator, .. } => ctx.ast.integer(numerator).sign() != Sign::Minus,
        NodeKind::Imaginary { numeric } => is_positive(ctx, numeric),
        _ => false,
    }
}

/// C's `%g`, plus a `.0` when the result has no decimal point.
fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;
    let scientific = format!("{:.*e}", usize::try_from(PRECISION - 1).unwrap_or(5), value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut text = if exponent < -4 || exponent >= PRECISION {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else {
        let decimals = usize::try_from(PRECISION - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    };

    if !text.contains('.') {
        let at = text.find('e').unwrap_or(text.len());
        text.insert_str(at, ".0");
    }
    text
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Append `bytes` the way Ruby's `inspect` prints string contents.
fn escape_ruby(out: &mut String, bytes: &[u8]) {
    for (index, &byte) in bytes.iter().enumerate() {
        match byte {
            0x07 => out.push_str("\\a"),
            0x08 => out.push_str("\\b"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            0x0b => out.push_str("\\v"),
            0x0c => out.push_str("\\f"),
            b'\r' => out.push_str("\\r"),
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'#' => {
                if matches!(bytes.get(index + 1), Some(b'{' | b'@' | b'$')) {
                    out.push('\\');
                }
                out.push('#');
            }
            0x00..=0x06 | 0x0e..=0x1f | 0x7f..=0xff => {
                let _ = write!(out, "\\x{byte:02X}");
            }
            _ => out.push(char::from(byte)),
        }
    }
}

#[cfg(test)]
mod tests;
