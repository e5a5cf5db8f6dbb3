//! Symbol module - string interning for identifiers and keywords.
//!
//! The teacher (`faxc-util::symbol`) backs its interner with `DashMap` so
//! symbols can be created from any compiler thread at once. `spec.md` §5
//! rules out multi-threaded evaluation entirely, so that concurrency has no
//! remaining use here: Ivy interns through a plain `RefCell`-backed table
//! kept in a `thread_local!`, which is the single-threaded idiom for the same
//! "compare identifiers as integers" trick.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

thread_local! {
    static INTERNER: RefCell<Interner> = RefCell::new(Interner::new());
}

struct Interner {
    strings: Vec<&'static str>,
    lookup: HashMap<&'static str, u32>,
}

impl Interner {
    fn new() -> Self {
        Self { strings: Vec::new(), lookup: HashMap::new() }
    }

    fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.lookup.get(s) {
            return id;
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let id = self.strings.len() as u32;
        self.strings.push(leaked);
        self.lookup.insert(leaked, id);
        id
    }

    fn resolve(&self, id: u32) -> &'static str {
        self.strings[id as usize]
    }
}

/// A compact, comparable-by-index handle to an interned string.
///
/// Two symbols compare equal iff they were interned from equal strings,
/// regardless of how many times each string was interned.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Intern `s`, returning a handle usable for O(1) equality comparison.
    pub fn intern(s: &str) -> Symbol {
        INTERNER.with(|i| Symbol(i.borrow_mut().intern(s)))
    }

    /// Look up the original string. O(1): the table never removes entries.
    pub fn as_str(self) -> &'static str {
        INTERNER.with(|i| i.borrow().resolve(self.0))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
