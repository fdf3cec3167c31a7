//! Per-parse interner for identifier bytes.
//!
//! Local variable names, method names, constant names and operator names
//! are stored once and referred to by [`ConstantId`]. Names are raw bytes
//! because Ruby identifiers are in the source encoding, which need not be
//! UTF-8.

use rustc_hash::FxHashMap;
use std::fmt;

/// Index of an interned name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ConstantId(u32);

impl ConstantId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ConstantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstantId({})", self.0)
    }
}

/// Interned name storage. Ids are dense and start at 0.
#[derive(Clone, Default)]
pub struct ConstantPool {
    map: FxHashMap<Box<[u8]>, ConstantId>,
    names: Vec<Box<[u8]>>,
}

impl ConstantPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ConstantPool {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Intern `name`, returning the existing id when already present.
    pub fn insert(&mut self, name: &[u8]) -> ConstantId {
        if let Some(&id) = self.map.get(name) {
            return id;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "one constant per source byte at most, sources are < 4 GiB"
        )]
        let id = ConstantId(self.names.len() as u32);
        self.names.push(Box::from(name));
        self.map.insert(Box::from(name), id);
        id
    }

    pub fn find(&self, name: &[u8]) -> Option<ConstantId> {
        self.map.get(name).copied()
    }

    /// Bytes of an interned name. Ids from another pool yield an empty slice.
    pub fn get(&self, id: ConstantId) -> &[u8] {
        self.names.get(id.index()).map_or(&[][..], |name| &name[..])
    }

    /// Lossy UTF-8 view, for display.
    pub fn display(&self, id: ConstantId) -> String {
        String::from_utf8_lossy(self.get(id)).into_owned()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Debug for ConstantPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.names.iter().map(|name| String::from_utf8_lossy(name)))
            .finish()
    }
}

#[cfg(test)]
mod tests;
