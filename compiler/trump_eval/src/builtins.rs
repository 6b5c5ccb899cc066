//! The native function table.
//!
//! Built-ins validate their own arguments and report mismatches as
//! `Object::Error` values. Nothing here panics on user input. The ones
//! that need randomness receive the interpreter's [`Chaos`].

use std::cmp::Ordering;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::chaos::Chaos;
use crate::errors::{
    argument_must_be_array, argument_not_supported, cannot_sort, wrong_arg_count,
};
use crate::value::{Object, BEST_NUMBER, NULL};

pub type BuiltinFn = fn(&[Object], &mut Chaos) -> Object;

/// A named native function.
#[derive(Copy, Clone)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: &[Object], chaos: &mut Chaos) -> Object {
        (self.func)(args, chaos)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

const BUILTINS: &[Builtin] = &[
    Builtin::new("len", len),
    Builtin::new("first", first),
    Builtin::new("last", last),
    Builtin::new("rest", rest),
    Builtin::new("push", push),
    Builtin::new("DEAL", deal),
    Builtin::new("BUILD", build),
    Builtin::new("FIRE", fire),
    Builtin::new("TREMENDOUS_SORT", tremendous_sort),
    Builtin::new("AMERICA_FIRST", america_first),
];

/// Lookup table from name to built-in.
///
/// Identifier resolution consults this before any scope, so a built-in
/// cannot be shadowed by a user variable.
pub struct Builtins {
    table: FxHashMap<&'static str, Builtin>,
}

impl Builtins {
    pub fn new() -> Self {
        Builtins {
            table: BUILTINS.iter().map(|b| (b.name, *b)).collect(),
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.table.get(name).copied()
    }

    /// Names in registration order.
    #[cfg(test)]
    pub(crate) fn names() -> impl Iterator<Item = &'static str> {
        BUILTINS.iter().map(|b| b.name)
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

fn expect_args(name: &str, args: &[Object], want: usize) -> Result<(), Object> {
    if args.len() == want {
        Ok(())
    } else {
        Err(wrong_arg_count(name, args.len(), want))
    }
}

/// The single array argument of a one-argument built-in.
fn single_array<'a>(name: &str, args: &'a [Object]) -> Result<&'a [Object], Object> {
    expect_args(name, args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(&**elements),
        other => Err(argument_must_be_array(name, other.type_name())),
    }
}

fn flatten(result: Result<Object, Object>) -> Object {
    result.unwrap_or_else(|error| error)
}

/// Number of characters in a string, or elements in an array.
fn len(args: &[Object], _: &mut Chaos) -> Object {
    flatten(expect_args("len", args, 1).and_then(|()| {
        let count = match &args[0] {
            Object::String(s) => s.chars().count(),
            Object::Array(elements) => elements.len(),
            other => return Err(argument_not_supported("len", other.type_name())),
        };
        Ok(Object::Integer(i64::try_from(count).unwrap_or(i64::MAX)))
    }))
}

fn first(args: &[Object], _: &mut Chaos) -> Object {
    flatten(single_array("first", args).map(|elements| elements.first().cloned().unwrap_or(NULL)))
}

fn last(args: &[Object], _: &mut Chaos) -> Object {
    flatten(single_array("last", args).map(|elements| elements.last().cloned().unwrap_or(NULL)))
}

/// Everything but the first element, as a new array; Null when empty.
fn rest(args: &[Object], _: &mut Chaos) -> Object {
    flatten(single_array("rest", args).map(|elements| match elements.split_first() {
        Some((_, tail)) => Object::array(tail.to_vec()),
        None => NULL,
    }))
}

/// A new array with the second argument appended.
fn push(args: &[Object], _: &mut Chaos) -> Object {
    flatten(expect_args("push", args, 2).and_then(|()| match &args[0] {
        Object::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend_from_slice(elements);
            extended.push(args[1].clone());
            Ok(Object::array(extended))
        }
        other => Err(argument_must_be_array("push", other.type_name())),
    }))
}

/// `DEAL(a, b)` is `[b, a]`.
fn deal(args: &[Object], _: &mut Chaos) -> Object {
    flatten(
        expect_args("DEAL", args, 2)
            .map(|()| Object::array(vec![args[1].clone(), args[0].clone()])),
    )
}

/// Constructor: returns its first argument, or Null when called bare.
fn build(args: &[Object], _: &mut Chaos) -> Object {
    args.first().cloned().unwrap_or(NULL)
}

/// Destructor: accepts anything, returns Null.
fn fire(_: &[Object], _: &mut Chaos) -> Object {
    NULL
}

/// Stable ascending sort of numbers or strings, with a small chance of
/// swapping two positions afterwards. Always a permutation of its input.
fn tremendous_sort(args: &[Object], chaos: &mut Chaos) -> Object {
    const NAME: &str = "TREMENDOUS_SORT";
    flatten(single_array(NAME, args).and_then(|elements| {
        check_sortable(NAME, elements)?;
        let mut sorted = elements.to_vec();
        sorted.sort_by(compare_sortable);
        if sorted.len() > 1 && chaos.swap_after_sort() {
            let i = chaos.index(sorted.len());
            let j = chaos.index(sorted.len());
            tracing::trace!(i, j, "sort swap");
            sorted.swap(i, j);
        }
        Ok(Object::array(sorted))
    }))
}

/// Elements must be all numbers (integers and floats mix) or all strings.
fn check_sortable(name: &str, elements: &[Object]) -> Result<(), Object> {
    let Some(head) = elements.first() else {
        return Ok(());
    };
    let class = |obj: &Object| match obj {
        Object::Integer(_) | Object::Float(_) => Some(0),
        Object::String(_) => Some(1),
        _ => None,
    };
    let head_class = class(head);
    for element in elements {
        let element_class = class(element);
        if element_class.is_none() || element_class != head_class {
            return Err(cannot_sort(name, head.type_name(), element.type_name()));
        }
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn compare_sortable(a: &Object, b: &Object) -> Ordering {
    match (a, b) {
        (Object::Integer(x), Object::Integer(y)) => x.cmp(y),
        (Object::Integer(x), Object::Float(y)) => (*x as f64).total_cmp(y),
        (Object::Float(x), Object::Integer(y)) => x.total_cmp(&(*y as f64)),
        (Object::Float(x), Object::Float(y)) => x.total_cmp(y),
        (Object::String(x), Object::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Moves the first `45` to the front, keeping everything else in order.
/// Returns the argument itself when there is nothing to move.
fn america_first(args: &[Object], _: &mut Chaos) -> Object {
    flatten(single_array("AMERICA_FIRST", args).map(|elements| {
        let position = elements
            .iter()
            .position(|e| matches!(e, Object::Integer(BEST_NUMBER)));
        match position {
            Some(at) if at > 0 => {
                let mut reordered = elements.to_vec();
                reordered[..=at].rotate_right(1);
                Object::array(reordered)
            }
            _ => args[0].clone(),
        }
    }))
}
