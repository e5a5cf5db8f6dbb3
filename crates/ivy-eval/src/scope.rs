//! Environment: a parent-linked chain of scopes holding live values.
//!
//! Grounded on `faxc-sem::scope`'s `Rib`/`ScopeTree`: a scope is a binding
//! map plus a parent link, and `resolve`/`lookup` walks parent links until
//! the root. The payload is different — the teacher's `Rib` maps `Symbol`
//! to a `DefId` produced by a compile-time resolver; this maps `Symbol` to
//! a live runtime `Value`, reference-counted so a closure's declaration-site
//! scope survives exactly as long as something can still call it, with no
//! manual rib arena or explicit `exit_scope` bookkeeping to get wrong.

use crate::value::Value;
use ivy_util::Symbol;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub struct ScopeData {
    bindings: HashMap<Symbol, Value>,
    parent: Option<Environment>,
}

/// A handle to one scope. Cloning an `Environment` clones the handle, not
/// the bindings — exactly what a closure needs to hold onto its
/// declaration-site scope.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<ScopeData>>);

impl Environment {
    /// The root (global) scope, with no parent.
    pub fn root() -> Self {
        Environment(Rc::new(RefCell::new(ScopeData { bindings: HashMap::new(), parent: None })))
    }

    /// A new scope whose parent is `self`, per `spec.md` §4.D's
    /// `create(parent?)`.
    pub fn create_child(&self) -> Self {
        Environment(Rc::new(RefCell::new(ScopeData {
            bindings: HashMap::new(),
            parent: Some(self.clone()),
        })))
    }

    /// Binds `name` in *this* scope, overwriting any existing binding with
    /// the same name in this same scope. Never touches a parent scope —
    /// this is the operation `let x = …;` and function-parameter binding
    /// both use.
    pub fn define(&self, name: Symbol, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Walks the parent chain looking for `name`.
    pub fn lookup(&self, name: Symbol) -> Option<Value> {
        let data = self.0.borrow();
        if let Some(value) = data.bindings.get(&name) {
            return Some(value.clone());
        }
        data.parent.as_ref().and_then(|parent| parent.lookup(name))
    }

    /// Mutates the nearest existing binding for `name`, walking up the
    /// chain, and returns `false` if no scope in the chain has ever defined
    /// it. This is the non-declaration `x = …;` form — see `DESIGN.md` for
    /// why it mutates the existing binding (lexical mutation) rather than
    /// defining a new one in the innermost scope (`spec.md` §4.D's
    /// documented quirk).
    pub fn assign(&self, name: Symbol, value: Value) -> bool {
        let mut data = self.0.borrow_mut();
        if data.bindings.contains_key(&name) {
            data.bindings.insert(name, value);
            return true;
        }
        match &data.parent {
            Some(parent) => parent.assign(name, value),
            None => false,
        }
    }
}
