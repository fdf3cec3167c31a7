//! Indented, human readable tree dump used by `prism parse` and tests.

use super::{Ast, NodeFlags, NodeId, NodeKind};
use crate::{ConstantId, ConstantPool};
use std::fmt::Write;

impl Ast {
    /// Render the subtree at `root`, one node per line.
    ///
    /// ```text
    /// @ Program (0...6) locals=[x]
    ///   @ Statements (0...5)
    ///     @ LocalVariableWrite (0...5) name=x depth=0
    ///       @ Integer (4...5) value=1 flags=STATIC_LITERAL|DECIMAL
    /// ```
    pub fn dump(&self, root: NodeId, constants: &ConstantPool) -> String {
        let mut out = String::new();
        self.walk(root, |id, depth| {
            let node = self.node(id);
            let _ = write!(
                out,
                "{:indent$}@ {} {}",
                "",
                node.kind.name(),
                node.span,
                indent = depth * 2
            );
            self.write_detail(&mut out, &node.kind, constants);
            if !node.flags.is_empty() {
                out.push_str(" flags=");
                write_flags(&mut out, node.flags);
            }
            out.push('\n');
        });
        out
    }

    fn write_detail(&self, out: &mut String, kind: &NodeKind, constants: &ConstantPool) {
        let name = |id: ConstantId| constants.display(id);
        let _ = match *kind {
            NodeKind::Integer { value } => write!(out, " value={}", self.integer(value)),
            NodeKind::Float { value } => write!(out, " value={value:?}"),
            NodeKind::Rational {
                numerator,
                denominator,
            } => write!(
                out,
                " value={}/{}",
                self.integer(numerator),
                self.integer(denominator)
            ),
            NodeKind::String { content }
            | NodeKind::XString { content }
            | NodeKind::RegularExpression { content } => {
                write!(out, " unescaped={:?}", String::from_utf8_lossy(self.string(content)))
            }
            NodeKind::Symbol { value } => {
                write!(out, " unescaped={:?}", String::from_utf8_lossy(self.string(value)))
            }
            NodeKind::SourceFile { filepath } => {
                write!(out, " filepath={:?}", String::from_utf8_lossy(self.string(filepath)))
            }
            NodeKind::LocalVariableRead { name: id, depth }
            | NodeKind::LocalVariableWrite {
                name: id, depth, ..
            }
            | NodeKind::LocalVariableTarget { name: id, depth } => {
                write!(out, " name={} depth={depth}", name(id))
            }
            NodeKind::InstanceVariableRead { name: id }
            | NodeKind::InstanceVariableWrite { name: id, .. }
            | NodeKind::InstanceVariableTarget { name: id }
            | NodeKind::ClassVariableRead { name: id }
            | NodeKind::ClassVariableWrite { name: id, .. }
            | NodeKind::ClassVariableTarget { name: id }
            | NodeKind::GlobalVariableRead { name: id }
            | NodeKind::GlobalVariableWrite { name: id, .. }
            | NodeKind::GlobalVariableTarget { name: id }
            | NodeKind::BackReferenceRead { name: id }
            | NodeKind::ConstantRead { name: id }
            | NodeKind::ConstantWrite { name: id, .. }
            | NodeKind::ConstantTarget { name: id }
            | NodeKind::ConstantPath { name: id, .. }
            | NodeKind::ConstantPathTarget { name: id, .. }
            | NodeKind::CallTarget { name: id, .. }
            | NodeKind::Call { name: id, .. }
            | NodeKind::BlockLocalVariable { name: id }
            | NodeKind::RequiredParameter { name: id }
            | NodeKind::OptionalParameter { name: id, .. }
            | NodeKind::RequiredKeywordParameter { name: id }
            | NodeKind::OptionalKeywordParameter { name: id, .. }
            | NodeKind::Def { name: id, .. }
            | NodeKind::Class { name: id, .. }
            | NodeKind::Module { name: id, .. } => write!(out, " name={}", name(id)),
            NodeKind::RestParameter { name: Some(id) }
            | NodeKind::KeywordRestParameter { name: Some(id) }
            | NodeKind::BlockParameter { name: Some(id) } => write!(out, " name={}", name(id)),
            NodeKind::OperatorWrite { operator, .. } => {
                write!(out, " operator={}", name(operator))
            }
            NodeKind::NumberedReferenceRead { number } => write!(out, " number={number}"),
            NodeKind::NumberedParameters { maximum } => write!(out, " maximum={maximum}"),
            NodeKind::Program { locals, .. }
            | NodeKind::Block { locals, .. }
            | NodeKind::Lambda { locals, .. }
            | NodeKind::SingletonClass { locals, .. }
                if !locals.is_empty() =>
            {
                let names: Vec<String> = self.locals(locals).iter().map(|&id| name(id)).collect();
                write!(out, " locals=[{}]", names.join(", "))
            }
            _ => Ok(()),
        };
    }
}

fn write_flags(out: &mut String, flags: NodeFlags) {
    let mut first = true;
    for (name, _) in flags.iter_names() {
        if !first {
            out.push('|');
        }
        out.push_str(name);
        first = false;
    }
}
