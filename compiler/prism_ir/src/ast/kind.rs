//! One variant per Ruby grammar production.

use super::{ConstantRange, IntegerId, NodeId, NodeRange, StringId};
use crate::ConstantId;

/// Node payloads. Children are ids into the owning [`super::Ast`].
///
/// Optional children use `Option<NodeId>`; lists use [`NodeRange`].
/// Every variant is `Copy` so grammar code can match on it without borrowing
/// the arena.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Placeholder synthesized by error recovery.
    Missing,

    Program {
        locals: ConstantRange,
        statements: NodeId,
    },
    Statements {
        body: NodeRange,
    },
    Parentheses {
        body: Option<NodeId>,
    },
    Begin {
        statements: Option<NodeId>,
        rescue_clause: Option<NodeId>,
        else_clause: Option<NodeId>,
        ensure_clause: Option<NodeId>,
    },
    Rescue {
        exceptions: NodeRange,
        reference: Option<NodeId>,
        statements: Option<NodeId>,
        subsequent: Option<NodeId>,
    },
    RescueModifier {
        expression: NodeId,
        rescue_expression: NodeId,
    },
    Else {
        statements: Option<NodeId>,
    },
    Ensure {
        statements: Option<NodeId>,
    },
    /// `BEGIN { ... }`
    PreExecution {
        statements: Option<NodeId>,
    },
    /// `END { ... }`
    PostExecution {
        statements: Option<NodeId>,
    },

    // Literals
    Nil,
    True,
    False,
    SelfValue,
    Integer {
        value: IntegerId,
    },
    Float {
        value: f64,
    },
    Rational {
        numerator: IntegerId,
        denominator: IntegerId,
    },
    Imaginary {
        numeric: NodeId,
    },
    String {
        content: StringId,
    },
    XString {
        content: StringId,
    },
    Symbol {
        value: StringId,
    },
    RegularExpression {
        content: StringId,
    },
    InterpolatedString {
        parts: NodeRange,
    },
    InterpolatedXString {
        parts: NodeRange,
    },
    InterpolatedSymbol {
        parts: NodeRange,
    },
    InterpolatedRegularExpression {
        parts: NodeRange,
    },
    /// `#{ ... }` inside a string.
    EmbeddedStatements {
        statements: Option<NodeId>,
    },
    /// `#@ivar`, `#$gvar`, `#@@cvar` inside a string.
    EmbeddedVariable {
        variable: NodeId,
    },
    /// `__FILE__`
    SourceFile {
        filepath: StringId,
    },
    /// `__LINE__`
    SourceLine,
    /// `__ENCODING__`
    SourceEncoding,
    Array {
        elements: NodeRange,
    },
    Hash {
        elements: NodeRange,
    },
    /// Braceless hash at the end of an argument list.
    KeywordHash {
        elements: NodeRange,
    },
    Assoc {
        key: NodeId,
        value: NodeId,
    },
    AssocSplat {
        value: Option<NodeId>,
    },
    Range {
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
    Splat {
        expression: Option<NodeId>,
    },
    /// Value implied by shorthand syntax, e.g. `{ x: }`.
    Implicit {
        value: NodeId,
    },
    /// Trailing comma in `a, = b` or block parameters `|a,|`.
    ImplicitRest,

    // Variables
    LocalVariableRead {
        name: ConstantId,
        depth: u32,
    },
    LocalVariableWrite {
        name: ConstantId,
        depth: u32,
        value: NodeId,
    },
    LocalVariableTarget {
        name: ConstantId,
        depth: u32,
    },
    InstanceVariableRead {
        name: ConstantId,
    },
    InstanceVariableWrite {
        name: ConstantId,
        value: NodeId,
    },
    InstanceVariableTarget {
        name: ConstantId,
    },
    ClassVariableRead {
        name: ConstantId,
    },
    ClassVariableWrite {
        name: ConstantId,
        value: NodeId,
    },
    ClassVariableTarget {
        name: ConstantId,
    },
    GlobalVariableRead {
        name: ConstantId,
    },
    GlobalVariableWrite {
        name: ConstantId,
        value: NodeId,
    },
    GlobalVariableTarget {
        name: ConstantId,
    },
    /// `$&`, `` $` ``, `$'`, `$+`
    BackReferenceRead {
        name: ConstantId,
    },
    /// `$1` .. `$9` and beyond.
    NumberedReferenceRead {
        number: u32,
    },
    ConstantRead {
        name: ConstantId,
    },
    ConstantWrite {
        name: ConstantId,
        value: NodeId,
    },
    ConstantTarget {
        name: ConstantId,
    },
    /// `Parent::Name`, or `::Name` when `parent` is `None`.
    ConstantPath {
        parent: Option<NodeId>,
        name: ConstantId,
    },
    ConstantPathWrite {
        target: NodeId,
        value: NodeId,
    },
    ConstantPathTarget {
        parent: Option<NodeId>,
        name: ConstantId,
    },
    /// `recv.name` on the left of a multiple or operator assignment.
    CallTarget {
        receiver: NodeId,
        name: ConstantId,
    },
    /// `recv[args]` on the left of a multiple or operator assignment.
    IndexTarget {
        receiver: NodeId,
        arguments: Option<NodeId>,
    },
    MultiTarget {
        lefts: NodeRange,
        rest: Option<NodeId>,
        rights: NodeRange,
    },
    MultiWrite {
        lefts: NodeRange,
        rest: Option<NodeId>,
        rights: NodeRange,
        value: NodeId,
    },
    /// `target op= value` for any assignable target.
    OperatorWrite {
        target: NodeId,
        operator: ConstantId,
        value: NodeId,
    },
    /// `target &&= value`
    AndWrite {
        target: NodeId,
        value: NodeId,
    },
    /// `target ||= value`
    OrWrite {
        target: NodeId,
        value: NodeId,
    },
    /// `/(?<name>..)/ =~ str` declaring locals for each named capture.
    MatchWrite {
        call: NodeId,
        targets: NodeRange,
    },

    // Calls
    Call {
        receiver: Option<NodeId>,
        name: ConstantId,
        arguments: Option<NodeId>,
        block: Option<NodeId>,
    },
    Arguments {
        arguments: NodeRange,
    },
    /// `&blk` in an argument list.
    BlockArgument {
        expression: Option<NodeId>,
    },
    /// `...` in an argument list.
    ForwardingArguments,
    Block {
        locals: ConstantRange,
        parameters: Option<NodeId>,
        body: Option<NodeId>,
    },
    BlockParameters {
        parameters: Option<NodeId>,
        locals: NodeRange,
    },
    /// `|a; b|` block-local `b`.
    BlockLocalVariable {
        name: ConstantId,
    },
    /// Block using `_1`..`_9`.
    NumberedParameters {
        maximum: u8,
    },
    Lambda {
        locals: ConstantRange,
        parameters: Option<NodeId>,
        body: Option<NodeId>,
    },
    Super {
        arguments: Option<NodeId>,
        block: Option<NodeId>,
    },
    /// Bare `super` forwarding the current method's arguments.
    ForwardingSuper {
        block: Option<NodeId>,
    },
    Yield {
        arguments: Option<NodeId>,
    },
    And {
        left: NodeId,
        right: NodeId,
    },
    Or {
        left: NodeId,
        right: NodeId,
    },
    Defined {
        value: NodeId,
    },

    // Control flow
    If {
        predicate: NodeId,
        statements: Option<NodeId>,
        subsequent: Option<NodeId>,
    },
    Unless {
        predicate: NodeId,
        statements: Option<NodeId>,
        else_clause: Option<NodeId>,
    },
    While {
        predicate: NodeId,
        statements: Option<NodeId>,
    },
    Until {
        predicate: NodeId,
        statements: Option<NodeId>,
    },
    For {
        index: NodeId,
        collection: NodeId,
        statements: Option<NodeId>,
    },
    Case {
        predicate: Option<NodeId>,
        conditions: NodeRange,
        else_clause: Option<NodeId>,
    },
    CaseMatch {
        predicate: Option<NodeId>,
        conditions: NodeRange,
        else_clause: Option<NodeId>,
    },
    When {
        conditions: NodeRange,
        statements: Option<NodeId>,
    },
    In {
        pattern: NodeId,
        statements: Option<NodeId>,
    },
    /// A range literal used as a condition.
    FlipFlop {
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
    Break {
        arguments: Option<NodeId>,
    },
    Next {
        arguments: Option<NodeId>,
    },
    Return {
        arguments: Option<NodeId>,
    },
    Redo,
    Retry,

    // Definitions
    Def {
        name: ConstantId,
        receiver: Option<NodeId>,
        parameters: Option<NodeId>,
        body: Option<NodeId>,
        locals: ConstantRange,
    },
    Parameters {
        requireds: NodeRange,
        optionals: NodeRange,
        rest: Option<NodeId>,
        posts: NodeRange,
        keywords: NodeRange,
        keyword_rest: Option<NodeId>,
        block: Option<NodeId>,
    },
    RequiredParameter {
        name: ConstantId,
    },
    OptionalParameter {
        name: ConstantId,
        value: NodeId,
    },
    RestParameter {
        name: Option<ConstantId>,
    },
    RequiredKeywordParameter {
        name: ConstantId,
    },
    OptionalKeywordParameter {
        name: ConstantId,
        value: NodeId,
    },
    KeywordRestParameter {
        name: Option<ConstantId>,
    },
    /// `**nil`
    NoKeywordsParameter,
    BlockParameter {
        name: Option<ConstantId>,
    },
    /// `...` in a parameter list.
    ForwardingParameter,
    Class {
        locals: ConstantRange,
        constant_path: NodeId,
        superclass: Option<NodeId>,
        body: Option<NodeId>,
        name: ConstantId,
    },
    /// `class << expr`
    SingletonClass {
        locals: ConstantRange,
        expression: NodeId,
        body: Option<NodeId>,
    },
    Module {
        locals: ConstantRange,
        constant_path: NodeId,
        body: Option<NodeId>,
        name: ConstantId,
    },
    Alias {
        new_name: NodeId,
        old_name: NodeId,
    },
    AliasGlobal {
        new_name: NodeId,
        old_name: NodeId,
    },
    Undef {
        names: NodeRange,
    },

    // Pattern matching
    /// `value in pattern`
    MatchPredicate {
        value: NodeId,
        pattern: NodeId,
    },
    /// `value => pattern`
    MatchRequired {
        value: NodeId,
        pattern: NodeId,
    },
    ArrayPattern {
        constant: Option<NodeId>,
        requireds: NodeRange,
        rest: Option<NodeId>,
        posts: NodeRange,
    },
    /// `[*, x, *]`
    FindPattern {
        constant: Option<NodeId>,
        left: NodeId,
        requireds: NodeRange,
        right: NodeId,
    },
    HashPattern {
        constant: Option<NodeId>,
        elements: NodeRange,
        rest: Option<NodeId>,
    },
    AlternationPattern {
        left: NodeId,
        right: NodeId,
    },
    /// `pattern => name`
    CapturePattern {
        value: NodeId,
        target: NodeId,
    },
    /// `^(expr)`
    PinnedExpression {
        expression: NodeId,
    },
    /// `^var`
    PinnedVariable {
        variable: NodeId,
    },
}

impl NodeKind {
    /// Variant name, as shown by the tree dumper and in test failures.
    #[expect(clippy::too_many_lines, reason = "exhaustive NodeKind → name dispatch")]
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Missing => "Missing",
            NodeKind::Program { .. } => "Program",
            NodeKind::Statements { .. } => "Statements",
            NodeKind::Parentheses { .. } => "Parentheses",
            NodeKind::Begin { .. } => "Begin",
            NodeKind::Rescue { .. } => "Rescue",
            NodeKind::RescueModifier { .. } => "RescueModifier",
            NodeKind::Else { .. } => "Else",
            NodeKind::Ensure { .. } => "Ensure",
            NodeKind::PreExecution { .. } => "PreExecution",
            NodeKind::PostExecution { .. } => "PostExecution",
            NodeKind::Nil => "Nil",
            NodeKind::True => "True",
            NodeKind::False => "False",
            NodeKind::SelfValue => "Self",
            NodeKind::Integer { .. } => "Integer",
            NodeKind::Float { .. } => "Float",
            NodeKind::Rational { .. } => "Rational",
            NodeKind::Imaginary { .. } => "Imaginary",
            NodeKind::String { .. } => "String",
            NodeKind::XString { .. } => "XString",
            NodeKind::Symbol { .. } => "Symbol",
            NodeKind::RegularExpression { .. } => "RegularExpression",
            NodeKind::InterpolatedString { .. } => "InterpolatedString",
            NodeKind::InterpolatedXString { .. } => "InterpolatedXString",
            NodeKind::InterpolatedSymbol { .. } => "InterpolatedSymbol",
            NodeKind::InterpolatedRegularExpression { .. } => "InterpolatedRegularExpression",
            NodeKind::EmbeddedStatements { .. } => "EmbeddedStatements",
            NodeKind::EmbeddedVariable { .. } => "EmbeddedVariable",
            NodeKind::SourceFile { .. } => "SourceFile",
            NodeKind::SourceLine => "SourceLine",
            NodeKind::SourceEncoding => "SourceEncoding",
            NodeKind::Array { .. } => "Array",
            NodeKind::Hash { .. } => "Hash",
            NodeKind::KeywordHash { .. } => "KeywordHash",
            NodeKind::Assoc { .. } => "Assoc",
            NodeKind::AssocSplat { .. } => "AssocSplat",
            NodeKind::Range { .. } => "Range",
            NodeKind::Splat { .. } => "Splat",
            NodeKind::Implicit { .. } => "Implicit",
            NodeKind::ImplicitRest => "ImplicitRest",
            NodeKind::LocalVariableRead { .. } => "LocalVariableRead",
            NodeKind::LocalVariableWrite { .. } => "LocalVariableWrite",
            NodeKind::LocalVariableTarget { .. } => "LocalVariableTarget",
            NodeKind::InstanceVariableRead { .. } => "InstanceVariableRead",
            NodeKind::InstanceVariableWrite { .. } => "InstanceVariableWrite",
            NodeKind::InstanceVariableTarget { .. } => "InstanceVariableTarget",
            NodeKind::ClassVariableRead { .. } => "ClassVariableRead",
            NodeKind::ClassVariableWrite { .. } => "ClassVariableWrite",
            NodeKind::ClassVariableTarget { .. } => "ClassVariableTarget",
            NodeKind::GlobalVariableRead { .. } => "GlobalVariableRead",
            NodeKind::GlobalVariableWrite { .. } => "GlobalVariableWrite",
            NodeKind::GlobalVariableTarget { .. } => "GlobalVariableTarget",
            NodeKind::BackReferenceRead { .. } => "BackReferenceRead",
            NodeKind::NumberedReferenceRead { .. } => "NumberedReferenceRead",
            NodeKind::ConstantRead { .. } => "ConstantRead",
            NodeKind::ConstantWrite { .. } => "ConstantWrite",
            NodeKind::ConstantTarget { .. } => "ConstantTarget",
            NodeKind::ConstantPath { .. } => "ConstantPath",
            NodeKind::ConstantPathWrite { .. } => "ConstantPathWrite",
            NodeKind::ConstantPathTarget { .. } => "ConstantPathTarget",
            NodeKind::CallTarget { .. } => "CallTarget",
            NodeKind::IndexTarget { .. } => "IndexTarget",
            NodeKind::MultiTarget { .. } => "MultiTarget",
            NodeKind::MultiWrite { .. } => "MultiWrite",
            NodeKind::OperatorWrite { .. } => "OperatorWrite",
            NodeKind::AndWrite { .. } => "AndWrite",
            NodeKind::OrWrite { .. } => "OrWrite",
            NodeKind::MatchWrite { .. } => "MatchWrite",
            NodeKind::Call { .. } => "Call",
            NodeKind::Arguments { .. } => "Arguments",
            NodeKind::BlockArgument { .. } => "BlockArgument",
            NodeKind::ForwardingArguments => "ForwardingArguments",
            NodeKind::Block { .. } => "Block",
            NodeKind::BlockParameters { .. } => "BlockParameters",
            NodeKind::BlockLocalVariable { .. } => "BlockLocalVariable",
            NodeKind::NumberedParameters { .. } => "NumberedParameters",
            NodeKind::Lambda { .. } => "Lambda",
            NodeKind::Super { .. } => "Super",
            NodeKind::ForwardingSuper { .. } => "ForwardingSuper",
            NodeKind::Yield { .. } => "Yield",
            NodeKind::And { .. } => "And",
            NodeKind::Or { .. } => "Or",
            NodeKind::Defined { .. } => "Defined",
            NodeKind::If { .. } => "If",
            NodeKind::Unless { .. } => "Unless",
            NodeKind::While { .. } => "While",
            NodeKind::Until { .. } => "Until",
            NodeKind::For { .. } => "For",
            NodeKind::Case { .. } => "Case",
            NodeKind::CaseMatch { .. } => "CaseMatch",
            NodeKind::When { .. } => "When",
            NodeKind::In { .. } => "In",
            NodeKind::FlipFlop { .. } => "FlipFlop",
            NodeKind::Break { .. } => "Break",
            NodeKind::Next { .. } => "Next",
            NodeKind::Return { .. } => "Return",
            NodeKind::Redo => "Redo",
            NodeKind::Retry => "Retry",
            NodeKind::Def { .. } => "Def",
            NodeKind::Parameters { .. } => "Parameters",
            NodeKind::RequiredParameter { .. } => "RequiredParameter",
            NodeKind::OptionalParameter { .. } => "OptionalParameter",
            NodeKind::RestParameter { .. } => "RestParameter",
            NodeKind::RequiredKeywordParameter { .. } => "RequiredKeywordParameter",
            NodeKind::OptionalKeywordParameter { .. } => "OptionalKeywordParameter",
            NodeKind::KeywordRestParameter { .. } => "KeywordRestParameter",
            NodeKind::NoKeywordsParameter => "NoKeywordsParameter",
            NodeKind::BlockParameter { .. } => "BlockParameter",
            NodeKind::ForwardingParameter => "ForwardingParameter",
            NodeKind::Class { .. } => "Class",
            NodeKind::SingletonClass { .. } => "SingletonClass",
            NodeKind::Module { .. } => "Module",
            NodeKind::Alias { .. } => "Alias",
            NodeKind::AliasGlobal { .. } => "AliasGlobal",
            NodeKind::Undef { .. } => "Undef",
            NodeKind::MatchPredicate { .. } => "MatchPredicate",
            NodeKind::MatchRequired { .. } => "MatchRequired",
            NodeKind::ArrayPattern { .. } => "ArrayPattern",
            NodeKind::FindPattern { .. } => "FindPattern",
            NodeKind::HashPattern { .. } => "HashPattern",
            NodeKind::AlternationPattern { .. } => "AlternationPattern",
            NodeKind::CapturePattern { .. } => "CapturePattern",
            NodeKind::PinnedExpression { .. } => "PinnedExpression",
            NodeKind::PinnedVariable { .. } => "PinnedVariable",
        }
    }

    /// Whether this node may appear on the left of `=` as an assignment
    /// target without further rewriting.
    pub fn is_target(&self) -> bool {
        matches!(
            self,
            NodeKind::LocalVariableTarget { .. }
                | NodeKind::InstanceVariableTarget { .. }
                | NodeKind::ClassVariableTarget { .. }
                | NodeKind::GlobalVariableTarget { .. }
                | NodeKind::ConstantTarget { .. }
                | NodeKind::ConstantPathTarget { .. }
                | NodeKind::CallTarget { .. }
                | NodeKind::IndexTarget { .. }
                | NodeKind::MultiTarget { .. }
                | NodeKind::Splat { .. }
                | NodeKind::ImplicitRest
                | NodeKind::RequiredParameter { .. }
        )
    }

    /// Numeric literal kinds, including the compound rational and imaginary.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            NodeKind::Integer { .. }
                | NodeKind::Float { .. }
                | NodeKind::Rational { .. }
                | NodeKind::Imaginary { .. }
        )
    }
}
