//! Lexically nested binding frames.
//!
//! An [`Environment`] is a handle to one frame; cloning the handle shares the
//! frame. Each frame maps names to operands and links to its parent, and a
//! lookup that misses locally continues outward.
//!
//! Binding is first-bind-wins: once a name is bound in a frame, later binds
//! of the same name in that frame are ignored. Shadowing happens only by
//! binding in a child frame.
//!
//! A named closure stored in its own defining frame forms an `Rc` cycle.
//! Call [`Environment::clear`] when discarding an environment to break it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::trace;
use vela_ir::Name;

use crate::Operand;

struct Frame {
    bindings: FxHashMap<Name, Operand>,
    parent: Option<Environment>,
}

#[derive(Clone)]
pub struct Environment(Rc<RefCell<Frame>>);

impl Environment {
    /// A root environment with no bindings.
    pub fn new() -> Self {
        Environment::with_parent(None)
    }

    /// A fresh frame nested inside this one.
    pub fn child(&self) -> Self {
        Environment::with_parent(Some(self.clone()))
    }

    fn with_parent(parent: Option<Environment>) -> Self {
        Environment(Rc::new(RefCell::new(Frame {
            bindings: FxHashMap::default(),
            parent,
        })))
    }

    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// Look up a name given as source text (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<Operand> {
        self.lookup_name(&Name::new(name))
    }

    /// Look up a name in this frame, then in each enclosing frame.
    pub fn lookup_name(&self, name: &Name) -> Option<Operand> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let inner = frame.0.borrow();
                if let Some(value) = inner.bindings.get(name) {
                    return Some(value.clone());
                }
                inner.parent.clone()
            };
            frame = parent?;
        }
    }

    /// Bind `name` in this frame. Returns `false`, leaving the existing
    /// value in place, if the name is already bound here.
    pub fn bind(&self, name: &str, value: Operand) -> bool {
        self.bind_name(Name::new(name), value)
    }

    pub fn bind_name(&self, name: Name, value: Operand) -> bool {
        let mut inner = self.0.borrow_mut();
        if inner.bindings.contains_key(&name) {
            trace!(%name, "already bound; keeping first binding");
            return false;
        }
        trace!(%name, %value, "bind");
        inner.bindings.insert(name, value);
        true
    }

    pub fn is_bound_locally(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(&Name::new(name))
    }

    /// Names bound in this frame, sorted.
    pub fn local_names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of enclosing frames; a root environment has depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut parent = self.parent();
        while let Some(frame) = parent {
            depth += 1;
            parent = frame.parent();
        }
        depth
    }

    /// Drop every binding in this frame.
    pub fn clear(&self) {
        let bindings = std::mem::take(&mut self.0.borrow_mut().bindings);
        // Values may hold closures over this frame; drop them after the
        // borrow is released.
        drop(bindings);
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.local_names())
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
