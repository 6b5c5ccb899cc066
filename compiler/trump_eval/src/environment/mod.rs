//! Variable scoping for the interpreter.
//!
//! Scopes form a parent-linked chain of shared, interior-mutable records.
//! A closure keeps a handle to the scope it was created in, so later
//! assignments in that scope are visible to the closure and vice versa.
//! `Environment` keeps a stack of those handles for the code currently
//! running; a function call replaces it with a fresh stack rooted at the
//! callee's captured scope.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::Object;

/// Error returned by `Scope::assign` when no binding exists to rebind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable not found in any scope.
    Undefined,
}

/// A single-threaded, reference-counted, interior-mutable handle.
///
/// All scope allocations go through [`LocalScope::new`]. Cloning the handle
/// shares the scope; it never copies bindings.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same scope.
    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Object>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any binding it already holds.
    #[inline]
    pub fn define(&mut self, name: String, value: Object) {
        self.bindings.insert(name, value);
    }

    /// Look `name` up here, then along the parent chain.
    pub fn lookup(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Rebind the nearest existing binding of `name`.
    pub fn assign(&mut self, name: &str, value: Object) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(AssignError::Undefined)
    }

    /// Whether this scope itself, ignoring parents, binds `name`.
    #[cfg(test)]
    pub(crate) fn binds(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}

/// The scope stack of the code currently being evaluated.
pub struct Environment {
    /// Pushed scopes, innermost last. Never empty: `base` is always first.
    scopes: Vec<LocalScope<Scope>>,
    base: LocalScope<Scope>,
}

impl Environment {
    /// A fresh top-level environment.
    pub fn new() -> Self {
        Environment::rooted(LocalScope::new(Scope::new()))
    }

    /// A call frame: one new scope whose parent is `captured`.
    pub fn enclosed(captured: LocalScope<Scope>) -> Self {
        Environment::rooted(LocalScope::new(Scope::with_parent(captured)))
    }

    fn rooted(base: LocalScope<Scope>) -> Self {
        Environment {
            scopes: vec![base.clone()],
            base,
        }
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current_scope();
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
    }

    /// Pop the innermost scope. The base scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Handle to the innermost scope, as captured by closures.
    #[inline]
    pub fn current_scope(&self) -> LocalScope<Scope> {
        self.innermost().clone()
    }

    #[inline]
    fn innermost(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.base)
    }

    #[inline]
    pub fn define(&mut self, name: String, value: Object) {
        self.innermost().borrow_mut().define(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Object> {
        self.innermost().borrow().lookup(name)
    }

    #[inline]
    pub fn assign(&mut self, name: &str, value: Object) -> Result<(), AssignError> {
        self.innermost().borrow_mut().assign(name, value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
