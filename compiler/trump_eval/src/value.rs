//! Runtime values.
//!
//! `Object` is a closed sum type: every value the interpreter can produce is
//! one of its variants. Booleans and Null are plain constants ([`TRUE`],
//! [`FALSE`], [`NULL`]) rather than shared singletons, so independent
//! interpreters never touch common mutable state.
//!
//! `ReturnValue` and `Error` are control-flow sentinels. They travel through
//! the interpreter's `Err` channel and only surface as ordinary values at the
//! program boundary.

use std::fmt::{self, Write as _};
use std::rc::Rc;

use trump_ir::FunctionLiteral;

use crate::builtins::Builtin;
use crate::environment::{LocalScope, Scope};

pub const TRUE: Object = Object::Boolean(true);
pub const FALSE: Object = Object::Boolean(false);
pub const NULL: Object = Object::Null;

/// The integer that renders with a flourish and that `AMERICA_FIRST`
/// moves to the front.
pub const BEST_NUMBER: i64 = 45;

#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(Rc<str>),
    Null,
    /// Arrays are never mutated in place; every array operation builds a
    /// new one.
    Array(Rc<[Object]>),
    Function(Rc<Function>),
    Builtin(Builtin),
    ReturnValue(Box<Object>),
    Error(String),
}

impl Object {
    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Object::String(text.into())
    }

    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(elements.into())
    }

    /// Kind tag, as it appears in runtime error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Float(_) => "FLOAT",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::Array(_) => "ARRAY",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::ReturnValue(_) => "RETURN",
            Object::Error(_) => "ERROR",
        }
    }

    /// Everything except `LOSER` and Null is truthy.
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Human-readable rendering used by `TWEET`, `RALLY` and the driver.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Reference identity, the fallback for `==` between values that are
    /// neither both numbers nor both strings.
    pub fn is_identical(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b),
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

/// Structural equality, for tests and host-side comparisons.
///
/// The language's own `==` is implemented in `operators` and follows
/// different rules for arrays and functions.
impl PartialEq for Object {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Float(a), Object::Float(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a.name() == b.name(),
            (Object::ReturnValue(a), Object::ReturnValue(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(v) => f.debug_tuple("Integer").field(v).finish(),
            Object::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Object::Boolean(v) => f.debug_tuple("Boolean").field(v).finish(),
            Object::String(v) => f.debug_tuple("String").field(v).finish(),
            Object::Null => f.write_str("Null"),
            Object::Array(v) => f.debug_tuple("Array").field(v).finish(),
            Object::Function(v) => f.debug_tuple("Function").field(v).finish(),
            Object::Builtin(v) => f.debug_tuple("Builtin").field(&v.name()).finish(),
            Object::ReturnValue(v) => f.debug_tuple("ReturnValue").field(v).finish(),
            Object::Error(v) => f.debug_tuple("Error").field(v).finish(),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(BEST_NUMBER) => {
                write!(f, "{BEST_NUMBER} - THE BEST NUMBER, BELIEVE ME!")
            }
            Object::Integer(v) => write!(f, "{v}"),
            Object::Float(v) => f.write_str(&format_float(*v)),
            Object::Boolean(true) => f.write_str("WINNING"),
            Object::Boolean(false) => f.write_str("LOSER"),
            Object::String(s) => f.write_str(s),
            Object::Null => f.write_str("COVFEFE"),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Object::Function(function) => write!(f, "{}", function.literal),
            Object::Builtin(_) => f.write_str("BUILT-IN FUNCTION"),
            Object::ReturnValue(inner) => write!(f, "{inner}"),
            Object::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

/// A user function: its literal plus the scope it was created in.
///
/// The scope is shared, not copied, so assignments made in the defining
/// scope after the closure was created are visible when it runs.
pub struct Function {
    pub literal: Rc<FunctionLiteral>,
    pub env: LocalScope<Scope>,
}

impl Function {
    pub fn new(literal: Rc<FunctionLiteral>, env: LocalScope<Scope>) -> Self {
        Function { literal, env }
    }

    pub fn name(&self) -> Option<&str> {
        self.literal.name.as_deref()
    }
}

// The captured scope may hold this very function, so Debug stays shallow.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.literal.name)
            .field("parameters", &self.literal.parameters)
            .finish_non_exhaustive()
    }
}

/// Formats a float the way C's `%g` does with the shortest digits that
/// round-trip: positional notation for decimal exponents in `-4..6`,
/// scientific notation with a signed two-digit exponent otherwise.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{sign}0");
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. `1.2345e2`.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let mut out = String::from(sign);
    if !(-4..6).contains(&exponent) {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(out, "e{exp_sign}{:02}", exponent.unsigned_abs());
    } else if exponent >= 0 {
        let int_len = exponent.unsigned_abs() as usize + 1;
        if digits.len() <= int_len {
            out.push_str(&digits);
            out.extend(std::iter::repeat('0').take(int_len - digits.len()));
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    } else {
        out.push_str("0.");
        let zeros = exponent.unsigned_abs() as usize - 1;
        out.extend(std::iter::repeat('0').take(zeros));
        out.push_str(&digits);
    }
    out
}
