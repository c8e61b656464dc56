use std::{fmt};
use std::sync::{Arc};

use super::{Error, Result};

/// Returns the unqualified name of `T`, e.g. `i32` or `Vec<String>`.
///
/// Module paths are stripped from every component, including generic
/// arguments, so `alloc::vec::Vec<alloc::string::String>` becomes
/// `Vec<String>`.
pub fn type_name_of<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut ret = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            ret.push_str(segment.rsplit("::").next().unwrap_or(""));
            segment.clear();
            ret.push(c);
        }
    }
    ret.push_str(segment.rsplit("::").next().unwrap_or(""));
    ret
}

// ----------------------------------------------------------------------------

/// An immutable, structurally compared value that a host can inspect.
///
/// Containers share their storage, so cloning is cheap and a `Value` may be
/// sent to, and read from, any number of threads.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// A piece of text, e.g. a label.
    Str(Arc<str>),

    /// A single number.
    Double(f64),

    /// An ordered sequence of numbers.
    Doubles(Arc<[f64]>),

    /// An ordered sequence of `Value`s, possibly of different kinds.
    Values(Arc<[Value]>),
}

impl Value {
    /// The name of the class a host sees when it inspects `self`.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "System.String",
            Self::Double(_) => "System.Double",
            Self::Doubles(_) => "System.Double[]",
            Self::Values(_) => "System.Object[]",
        }
    }

    /// The number of elements in a sequence, or `1` for a scalar.
    pub fn len(&self) -> usize {
        match self {
            Self::Str(_) | Self::Double(_) => 1,
            Self::Doubles(numbers) => numbers.len(),
            Self::Values(values) => values.len(),
        }
    }

    /// Returns `true` for an empty sequence.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::Str(s) = self { Some(s) } else { None }
    }

    pub fn as_double(&self) -> Option<f64> {
        if let Self::Double(x) = self { Some(*x) } else { None }
    }

    pub fn as_doubles(&self) -> Option<&[f64]> {
        if let Self::Doubles(numbers) = self { Some(numbers) } else { None }
    }

    pub fn as_values(&self) -> Option<&[Value]> {
        if let Self::Values(values) = self { Some(values) } else { None }
    }

    /// Destructure a container of exactly `N` elements.
    pub fn unpack<const N: usize>(&self) -> Result<&[Value; N]> {
        let values = self.as_values().ok_or(Error::NotAContainer(self.class_name()))?;
        values.try_into().map_err(|_| Error::WrongLength {expected: N, found: values.len()})
    }

    /// Visit `self` and every nested `Value` depth-first, passing the
    /// nesting depth (`0` for `self`).
    pub fn walk(&self, visit: &mut impl FnMut(usize, &Value)) {
        self.walk_at(0, visit);
    }

    fn walk_at(&self, depth: usize, visit: &mut impl FnMut(usize, &Value)) {
        visit(depth, self);
        if let Self::Values(values) = self {
            for value in values.iter() { value.walk_at(depth + 1, visit); }
        }
    }
}

/// Writes `numbers` separated by spaces.
fn write_doubles(f: &mut fmt::Formatter, numbers: &[f64]) -> fmt::Result {
    let mut sep = "";
    for x in numbers {
        write!(f, "{}{}", sep, x)?;
        sep = " ";
    }
    Ok(())
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Str(string) => string.fmt(f),
            Self::Double(x) => x.fmt(f),
            Self::Doubles(numbers) => numbers.fmt(f),
            Self::Values(values) => values.fmt(f),
        }
    }
}

/// Renders like a host prints a cell array:
/// `{'label', [1 2.5]}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Str(string) => write!(f, "'{}'", string),
            Self::Double(x) => write!(f, "{}", x),
            Self::Doubles(numbers) => {
                f.write_str("[")?;
                write_doubles(f, numbers)?;
                f.write_str("]")
            },
            Self::Values(values) => {
                f.write_str("{")?;
                let mut sep = "";
                for value in values.iter() {
                    write!(f, "{}{}", sep, value)?;
                    sep = ", ";
                }
                f.write_str("}")
            },
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self { Self::Double(value) }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self { Self::Str(value.into()) }
}

impl From<&[f64]> for Value {
    fn from(numbers: &[f64]) -> Self { Self::Doubles(numbers.into()) }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(numbers: [f64; N]) -> Self { Self::Doubles(Arc::new(numbers)) }
}

impl<const N: usize> From<[Value; N]> for Value {
    fn from(fields: [Value; N]) -> Self { Self::Values(Arc::new(fields)) }
}

impl From<Vec<Value>> for Value {
    fn from(fields: Vec<Value>) -> Self { Self::Values(fields.into()) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_are_short() {
        assert_eq!(type_name_of::<i32>(), "i32");
        assert_eq!(type_name_of::<&str>(), "&str");
        assert_eq!(type_name_of::<String>(), "String");
        assert_eq!(type_name_of::<Vec<String>>(), "Vec<String>");
        assert_eq!(type_name_of::<Value>(), "Value");
    }

    #[test]
    fn class_names() {
        assert_eq!(Value::from("a").class_name(), "System.String");
        assert_eq!(Value::from(1.5f64).class_name(), "System.Double");
        assert_eq!(Value::from([1.0f64, 2.0]).class_name(), "System.Double[]");
        assert_eq!(Value::from([Value::from("a")]).class_name(), "System.Object[]");
    }

    #[test]
    fn unpack() {
        let pair = Value::from([Value::from("a"), Value::from(2.0f64)]);
        let [a, b] = pair.unpack::<2>().unwrap();
        assert_eq!(a.as_str(), Some("a"));
        assert_eq!(b.as_double(), Some(2.0));
        assert_eq!(pair.unpack::<3>(), Err(Error::WrongLength {expected: 3, found: 2}));
        assert_eq!(Value::from("a").unpack::<1>(), Err(Error::NotAContainer("System.String")));
    }

    #[test]
    fn display() {
        let v = Value::from([Value::from("x"), Value::from([1.0f64, -2.5])]);
        assert_eq!(v.to_string(), "{'x', [1 -2.5]}");
        assert_eq!(format!("{:?}", v), "[\"x\", [1.0, -2.5]]");
    }

    #[test]
    fn walk_depths() {
        let v = Value::from([Value::from("x"), Value::from([Value::from(1.0f64)])]);
        let mut seen = Vec::new();
        v.walk(&mut |depth, value| seen.push((depth, value.class_name())));
        assert_eq!(seen, vec![
            (0, "System.Object[]"),
            (1, "System.String"),
            (1, "System.Object[]"),
            (2, "System.Double"),
        ]);
    }

    #[test]
    fn values_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Value>();
    }
}
