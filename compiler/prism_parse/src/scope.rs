//! Local variable scopes.
//!
//! Every `def`, `class`, `module`, block and lambda opens a frame. Lookups
//! walk outward through blocks and lambdas and stop after the first frame
//! that closes over nothing (`def`, `class`, `module`). The number of frames
//! crossed is the `depth` stored in local variable nodes.

use crate::options::Forwarding;
use prism_ir::{ConstantId, ConstantPool};
use prism_lexer::LocalTable;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ScopeKind {
    /// Supplied by the caller through the options.
    Eval,
    Top,
    Def,
    /// `class`, `module` and `class << self` bodies.
    Class,
    Block,
    Lambda,
}

impl ScopeKind {
    fn is_closed(self) -> bool {
        matches!(self, ScopeKind::Def | ScopeKind::Class)
    }

    fn is_block(self) -> bool {
        matches!(self, ScopeKind::Block | ScopeKind::Lambda)
    }
}

#[derive(Debug)]
pub(crate) struct Frame {
    kind: ScopeKind,
    locals: Vec<ConstantId>,
    forwarding: Forwarding,
    has_parameters: bool,
    numbered_maximum: u8,
}

impl Frame {
    fn new(kind: ScopeKind) -> Self {
        Frame {
            kind,
            locals: Vec::new(),
            forwarding: Forwarding::empty(),
            has_parameters: false,
            numbered_maximum: 0,
        }
    }

    pub(crate) fn locals(&self) -> &[ConstantId] {
        &self.locals
    }

    /// Highest `_N` referenced in this block, or 0.
    pub(crate) fn numbered_maximum(&self) -> u8 {
        self.numbered_maximum
    }
}

/// Why `_1` cannot be a numbered parameter here.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum NumberedError {
    /// Not inside a block; `_1` is an ordinary method call.
    NotInBlock,
    /// The block declares ordinary parameters.
    NotAllowed,
    /// An enclosing block already uses numbered parameters.
    OuterScope,
}

#[derive(Debug, Default)]
pub(crate) struct Scopes {
    frames: Vec<Frame>,
}

impl Scopes {
    pub(crate) fn new() -> Self {
        Scopes { frames: Vec::new() }
    }

    pub(crate) fn push(&mut self, kind: ScopeKind) {
        self.frames.push(Frame::new(kind));
    }

    pub(crate) fn pop(&mut self) -> Frame {
        self.frames.pop().unwrap_or_else(|| Frame::new(ScopeKind::Top))
    }

    fn innermost(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Declare `name` in the innermost frame. Returns `false` if it was
    /// already declared there.
    pub(crate) fn add_local(&mut self, name: ConstantId) -> bool {
        let Some(frame) = self.innermost() else {
            return false;
        };
        if frame.locals.contains(&name) {
            return false;
        }
        frame.locals.push(name);
        true
    }

    /// Depth of the frame declaring `name`, counting outward from 0.
    pub(crate) fn find(&self, name: ConstantId) -> Option<u32> {
        let mut depth = 0;
        for frame in self.frames.iter().rev() {
            if frame.locals.contains(&name) {
                return Some(depth);
            }
            if frame.kind.is_closed() {
                return None;
            }
            depth += 1;
        }
        None
    }

    /// Whether the innermost frame already declares `name`.
    pub(crate) fn declared_here(&self, name: ConstantId) -> bool {
        self.frames.last().is_some_and(|frame| frame.locals.contains(&name))
    }

    pub(crate) fn mark_parameters(&mut self) {
        if let Some(frame) = self.innermost() {
            frame.has_parameters = true;
        }
    }

    pub(crate) fn add_forwarding(&mut self, forwarding: Forwarding) {
        if let Some(frame) = self.innermost() {
            frame.forwarding |= forwarding;
        }
    }

    /// Forwarding of the nearest method (or caller-supplied) scope.
    pub(crate) fn forwarding(&self) -> Forwarding {
        for frame in self.frames.iter().rev() {
            if !frame.kind.is_block() {
                return frame.forwarding;
            }
        }
        Forwarding::empty()
    }

    /// Record a use of `_N` in the innermost block.
    pub(crate) fn use_numbered(&mut self, number: u8) -> Result<(), NumberedError> {
        let Some((innermost, outer)) = self.frames.split_last_mut() else {
            return Err(NumberedError::NotInBlock);
        };
        if !innermost.kind.is_block() {
            return Err(NumberedError::NotInBlock);
        }
        if innermost.has_parameters {
            return Err(NumberedError::NotAllowed);
        }
        let outer_uses = outer
            .iter()
            .rev()
            .take_while(|frame| frame.kind.is_block())
            .any(|frame| frame.numbered_maximum > 0);
        if outer_uses {
            return Err(NumberedError::OuterScope);
        }
        innermost.numbered_maximum = innermost.numbered_maximum.max(number);
        Ok(())
    }
}

/// The lexer's view of which identifiers are locals.
pub(crate) struct Locals<'p> {
    pub(crate) scopes: &'p Scopes,
    pub(crate) constants: &'p ConstantPool,
}

impl LocalTable for Locals<'_> {
    fn is_local(&self, name: &[u8]) -> bool {
        self.constants
            .find(name)
            .is_some_and(|id| self.scopes.find(id).is_some())
    }
}

#[cfg(test)]
mod tests;
