//! Runtime value representation.
//!
//! `spec.md` §3: a tagged sum with `Null`, `Boolean`, `Integer`, `Float`,
//! `String`, `Array`, `Matrix`, `Object`, `Function`. Only `Null`,
//! `Boolean`, `Float`, and `String` are constructible from Ivy source (no
//! grammar production yields the rest — `spec.md` §1's non-goal: "no
//! compound data types exposed in source"); the others are carried so the
//! value model matches the full contract, the way `faxc-sem`'s type model
//! tracks type variants a given surface syntax may never construct.

use crate::scope::Environment;
use ivy_par::ast::Stmt;
use ivy_util::Symbol;
use std::rc::Rc;

/// A native function an embedding host can register under a name, so it
/// becomes callable exactly like a scripted function. Nothing in Ivy's own
/// grammar constructs one (functions are declared with `function`, never
/// passed as values — `spec.md` §1's non-goal: "no first-class functions
/// passed as arguments"); this exists purely as the embedding seam
/// `spec.md` §3's `Native { handler, user_data }` descriptor describes.
pub type NativeHandler = Rc<dyn Fn(&[Value], Option<&Value>) -> Result<Value, crate::error::LangError>>;

#[derive(Clone)]
pub enum FunctionValue {
    Native { handler: NativeHandler, user_data: Option<Box<Value>> },
    Scripted { params: Vec<Symbol>, body: Rc<Stmt>, closure: Environment },
}

/// An opaque handle standing in for the value model's `Object` variant,
/// which has no construction syntax in Ivy.
#[derive(Clone)]
pub struct ObjectHandle(Rc<()>);

impl ObjectHandle {
    pub fn new() -> Self {
        ObjectHandle(Rc::new(()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    Int,
    Float,
}

#[derive(Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Matrix { rows: usize, cols: usize, element_type: ElementType, cells: Vec<Value> },
    Object(ObjectHandle),
    Function(FunctionValue),
}

impl Value {
    /// `spec.md` §4.E's truthiness coercion for `if`/`while`/`&&`/`||`:
    /// `false` for `false`, `Null`, `0`, or the empty string; `true`
    /// otherwise.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Float(n) => *n != 0.0,
            Value::Integer(n) => *n != 0,
            Value::String(s) => !s.is_empty(),
            Value::Array(_)
            | Value::Matrix { .. }
            | Value::Object(_)
            | Value::Function(_) => true,
        }
    }

    /// Numeric value for arithmetic, with boolean coerced to `0.0`/`1.0`
    /// per `spec.md` §4.E's arithmetic rule. `None` for anything else.
    pub fn as_arithmetic_operand(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Numeric value for relational/unary operators, which — unlike
    /// arithmetic — do *not* coerce booleans (`spec.md` §4.E gives
    /// arithmetic an explicit boolean-coercion clause and conspicuously
    /// omits it from relational and unary; see `DESIGN.md`).
    pub fn as_strict_numeric(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Matrix { .. } => "matrix",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// `spec.md` §4.E: `Null → "null"`; `Boolean → "true"/"false"`;
    /// `Number → "%f"` (six fractional digits, not trimmed); `String →`
    /// verbatim; everything else a bracketed placeholder. This is a
    /// presentation policy the REPL opts into, kept distinct from
    /// `std::fmt::Display` the way `faxc-util`'s `SourceSnippet` keeps a
    /// dedicated `format()` rather than implementing `Display` itself.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
            Value::Float(n) => format!("{:.6}", n),
            Value::Integer(n) => format!("{:.6}", *n as f64),
            Value::String(s) => s.clone(),
            Value::Array(_) => "[array]".to_string(),
            Value::Matrix { .. } => "[matrix]".to_string(),
            Value::Object(_) => "[object]".to_string(),
            Value::Function(_) => "[function]".to_string(),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality, strictly by variant: `spec.md` §4.E — "values
    /// of different variants are unequal (so `1 == true` is false)". Two
    /// `Function` values are never equal to each other either; functions
    /// have no source-level comparison syntax to begin with.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (
                Value::Matrix { rows: r1, cols: c1, element_type: e1, cells: v1 },
                Value::Matrix { rows: r2, cols: c2, element_type: e2, cells: v2 },
            ) => r1 == r2 && c1 == c2 && e1 == e2 && v1 == v2,
            _ => false,
        }
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.type_name(), self.to_display_string())
    }
}
