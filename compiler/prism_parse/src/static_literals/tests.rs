use super::*;
use pretty_assertions::assert_eq;
use prism_ir::Span;

struct Fixture {
    ast: Ast,
    newlines: NewlineList,
    source: Vec<u8>,
}

impl Fixture {
    fn new(source: &str) -> Self {
        let mut newlines = NewlineList::new();
        for (index, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                newlines.append(u32::try_from(index).unwrap_or(0));
            }
        }
        Fixture {
            ast: Ast::new(),
            newlines,
            source: source.as_bytes().to_vec(),
        }
    }

    fn ctx(&self) -> LiteralContext<'_> {
        LiteralContext {
            ast: &self.ast,
            source: &self.source,
            newlines: &self.newlines,
            start_line: 1,
            encoding: Encoding::default(),
        }
    }

    fn integer(&mut self, value: i64, at: u32) -> NodeId {
        let value = self.ast.alloc_integer(BigInt::from(value));
        self.ast.alloc(NodeKind::Integer { value }, Span::new(at, at + 1))
    }

    fn string(&mut self, text: &str) -> NodeId {
        let content = self.ast.alloc_string(text.as_bytes());
        self.ast.alloc(NodeKind::String { content }, Span::DUMMY)
    }

    fn symbol(&mut self, text: &str) -> NodeId {
        let value = self.ast.alloc_string(text.as_bytes());
        self.ast.alloc(NodeKind::Symbol { value }, Span::DUMMY)
    }

    fn float(&mut self, value: f64, span: Span) -> NodeId {
        self.ast.alloc(NodeKind::Float { value }, span)
    }
}

#[test]
fn integer_duplicates() {
    let mut fx = Fixture::new("1, 2, 1");
    let a = fx.integer(1, 0);
    let b = fx.integer(2, 3);
    let c = fx.integer(1, 6);

    let mut literals = StaticLiterals::new();
    assert_eq!(literals.add(&fx.ctx(), a), None);
    assert_eq!(literals.add(&fx.ctx(), b), None);
    assert_eq!(literals.add(&fx.ctx(), c), Some(a));
}

#[test]
fn source_line_equals_integer() {
    let mut fx = Fixture::new("\n\n3 __LINE__");
    let three = fx.integer(3, 2);
    let line = fx.ast.alloc(NodeKind::SourceLine, Span::new(4, 12));

    let mut literals = StaticLiterals::new();
    literals.add(&fx.ctx(), three);
    assert_eq!(literals.add(&fx.ctx(), line), Some(three));
    assert_eq!(inspect(&fx.ctx(), line), "3");
}

#[test]
fn last_inserted_duplicate_wins() {
    let mut fx = Fixture::new("");
    let first = fx.symbol("a");
    let second = fx.symbol("a");
    let third = fx.symbol("a");

    let mut literals = StaticLiterals::new();
    assert_eq!(literals.add(&fx.ctx(), first), None);
    assert_eq!(literals.add(&fx.ctx(), second), Some(first));
    assert_eq!(literals.add(&fx.ctx(), third), Some(second));

    let nil = fx.ast.alloc(NodeKind::Nil, Span::DUMMY);
    let nil_again = fx.ast.alloc(NodeKind::Nil, Span::DUMMY);
    let nil_third = fx.ast.alloc(NodeKind::Nil, Span::DUMMY);
    literals.add(&fx.ctx(), nil);
    literals.add(&fx.ctx(), nil_again);
    assert_eq!(literals.add(&fx.ctx(), nil_third), Some(nil_again));
}

#[test]
fn strings_and_symbols_do_not_collide() {
    let mut fx = Fixture::new("");
    let string = fx.string("a");
    let symbol = fx.symbol("a");
    let mut literals = StaticLiterals::new();
    assert_eq!(literals.add(&fx.ctx(), string), None);
    assert_eq!(literals.add(&fx.ctx(), symbol), None);
}

#[test]
fn singletons() {
    let mut fx = Fixture::new("");
    let a = fx.ast.alloc(NodeKind::Nil, Span::DUMMY);
    let b = fx.ast.alloc(NodeKind::Nil, Span::DUMMY);
    let t = fx.ast.alloc(NodeKind::True, Span::DUMMY);
    let mut literals = StaticLiterals::new();
    assert_eq!(literals.add(&fx.ctx(), a), None);
    assert_eq!(literals.add(&fx.ctx(), t), None);
    assert_eq!(literals.add(&fx.ctx(), b), Some(a));
}

#[test]
fn non_literals_are_ignored() {
    let mut fx = Fixture::new("");
    let node = fx.ast.alloc(NodeKind::SelfValue, Span::DUMMY);
    let mut literals = StaticLiterals::new();
    assert_eq!(literals.add(&fx.ctx(), node), None);
    assert_eq!(literals.add(&fx.ctx(), node), None);
}

#[test]
fn many_entries_grow_the_table() {
    let mut fx = Fixture::new("");
    for half in [0usize, 1, 2, 7, 50] {
        let count = 2 * half + 1;
        let nodes: Vec<NodeId> = (0..count)
            .map(|value| fx.integer(i64::try_from(value).unwrap_or(0), 0))
            .collect();
        let mut literals = StaticLiterals::new();
        for &node in &nodes {
            assert_eq!(literals.add(&fx.ctx(), node), None);
        }

        let capacity = literals.integers.slots.len();
        assert!(capacity.is_power_of_two(), "{count}: {capacity}");
        assert!(capacity >= 2 * count, "{count}: {capacity}");
        assert_eq!(literals.integers.size, count);

        for (value, &node) in nodes.iter().enumerate() {
            let again = fx.integer(i64::try_from(value).unwrap_or(0), 0);
            assert_eq!(literals.add(&fx.ctx(), again), Some(node), "{count}: {value}");
        }
    }
}

#[test]
fn integers_and_floats_do_not_collide() {
    let mut fx = Fixture::new("42 42.0");
    let integer = fx.integer(42, 0);
    let float = fx.float(42.0, Span::new(3, 7));
    let mut literals = StaticLiterals::new();
    assert_eq!(literals.add(&fx.ctx(), integer), None);
    assert_eq!(literals.add(&fx.ctx(), float), None);

    let float_again = fx.float(42.0, Span::new(3, 7));
    assert_eq!(literals.add(&fx.ctx(), float_again), Some(float));
}

#[test]
fn rationals_and_imaginaries_do_not_collide() {
    let mut fx = Fixture::new("");
    let one = fx.integer(1, 0);
    let numerator = fx.ast.alloc_integer(BigInt::from(1));
    let denominator = fx.ast.alloc_integer(BigInt::from(1));
    let rational = fx.ast.alloc(
        NodeKind::Rational {
            numerator,
            denominator,
        },
        Span::DUMMY,
    );
    let imaginary = fx.ast.alloc(NodeKind::Imaginary { numeric: one }, Span::DUMMY);

    let mut literals = StaticLiterals::new();
    assert_eq!(literals.add(&fx.ctx(), rational), None);
    assert_eq!(literals.add(&fx.ctx(), imaginary), None);

    let imaginary_again = fx.ast.alloc(NodeKind::Imaginary { numeric: one }, Span::DUMMY);
    assert_eq!(literals.add(&fx.ctx(), imaginary_again), Some(imaginary));
}

#[test]
fn inspect_strings_escape() {
    let mut fx = Fixture::new("");
    let string = fx.string("a\"b\n#{x}\x01");
    assert_eq!(inspect(&fx.ctx(), string), "\"a\\\"b\\n\\#{x}\\x01\"");
    let symbol = fx.symbol("foo");
    assert_eq!(inspect(&fx.ctx(), symbol), ":foo");
}

#[test]
fn inspect_numbers() {
    let mut fx = Fixture::new("-0.0 1e100 -1.0/0");
    let zero = fx.float(-0.0, Span::new(0, 4));
    let big = fx.float(1e100, Span::new(5, 10));
    let infinity = fx.float(f64::NEG_INFINITY, Span::new(11, 17));
    assert_eq!(inspect(&fx.ctx(), zero), "-0.0");
    assert_eq!(inspect(&fx.ctx(), big), "1.0e+100");
    assert_eq!(inspect(&fx.ctx(), infinity), "-Infinity");

    let numerator = fx.ast.alloc_integer(BigInt::from(3));
    let denominator = fx.ast.alloc_integer(BigInt::from(2));
    let rational = fx.ast.alloc(
        NodeKind::Rational {
            numerator,
            denominator,
        },
        Span::DUMMY,
    );
    assert_eq!(inspect(&fx.ctx(), rational), "(3/2)");
    let imaginary = fx.ast.alloc(NodeKind::Imaginary { numeric: rational }, Span::DUMMY);
    assert_eq!(inspect(&fx.ctx(), imaginary), "(0+(3/2)*i)");
}

#[test]
fn general_float_format() {
    assert_eq!(format_general(1.5), "1.5");
    assert_eq!(format_general(100.0), "100.0");
    assert_eq!(format_general(0.0001), "0.0001");
    assert_eq!(format_general(0.00001), "1.0e-05");
    assert_eq!(format_general(1_234_567.0), "1.23457e+06");
}

#[test]
fn inspect_regexp_and_encoding() {
    let mut fx = Fixture::new("");
    let content = fx.ast.alloc_string(&b"a+"[..]);
    let regexp = fx.ast.alloc_with_flags(
        NodeKind::RegularExpression { content },
        Span::DUMMY,
        NodeFlags::IGNORE_CASE | NodeFlags::MULTI_LINE,
    );
    assert_eq!(inspect(&fx.ctx(), regexp), "/a+/mi");

    let encoding = fx.ast.alloc(NodeKind::SourceEncoding, Span::DUMMY);
    assert_eq!(inspect(&fx.ctx(), encoding), "#<Encoding:UTF-8>");
}
