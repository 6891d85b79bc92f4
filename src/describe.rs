use core::fmt::Debug;

use crate::alloc::{format, Arc, BTreeMap, BTreeSet, Box, Rc, String, Vec, VecDeque};

/// How equality of a described value is decided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Semantics {
    /// Equal when the contents are equal.
    Value,
    /// Equal only when it is the very same instance.
    Identity,
    /// Equal when the elements are equal and appear in the same order.
    OrderedContainer,
    /// Equal when the elements are equal, in any order.
    UnorderedContainer,
}

/// The canonical structure of a described value.
///
/// A [Shape] is rendered into text by the [FingerprintEngine](crate::FingerprintEngine),
/// which applies the ordering rules of each variant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    /// An absent value.
    Nil,
    /// A value rendered directly to text.
    Scalar(String),
    /// An identity token, typically a memory address.
    Identity(usize),
    /// A struct or an enum variant.
    Record {
        /// Type name for structs, variant name for enums.
        name: &'static str,
        /// Fields in declaration order.
        fields: Vec<Field>,
    },
    /// A sequence where order is significant.
    Ordered(Vec<Shape>),
    /// A fixed-size tuple.
    Tuple(Vec<Shape>),
    /// A set-like container, rendered in sorted order.
    Unordered(Vec<Shape>),
    /// A map-like container, rendered sorted by key.
    Map(Vec<(Shape, Shape)>),
}

impl Shape {
    /// A scalar rendered through its [Debug] implementation.
    pub fn debug(value: &(impl Debug + ?Sized)) -> Self {
        Self::Scalar(format!("{value:?}"))
    }

    /// A struct or enum variant with the given fields.
    pub fn record(name: &'static str, fields: impl IntoIterator<Item = Field>) -> Self {
        Self::Record {
            name,
            fields: fields.into_iter().collect(),
        }
    }

    /// A fieldless struct or enum variant.
    pub fn unit(name: &'static str) -> Self {
        Self::Record {
            name,
            fields: Vec::new(),
        }
    }

    /// The equality semantics of this shape.
    pub fn semantics(&self) -> Semantics {
        match self {
            Self::Nil | Self::Scalar(_) | Self::Record { .. } => Semantics::Value,
            Self::Identity(_) => Semantics::Identity,
            Self::Ordered(_) | Self::Tuple(_) => Semantics::OrderedContainer,
            Self::Unordered(_) | Self::Map(_) => Semantics::UnorderedContainer,
        }
    }
}

/// One field of a [Shape::Record].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    /// `None` for tuple-like fields.
    pub name: Option<&'static str>,
    /// The field's value.
    pub shape: Shape,
}

impl Field {
    /// A named field.
    pub fn named(name: &'static str, shape: Shape) -> Self {
        Self {
            name: Some(name),
            shape,
        }
    }

    /// A positional (tuple-like) field.
    pub fn positional(shape: Shape) -> Self {
        Self { name: None, shape }
    }
}

///
/// Implemented by every type that can be passed as an argument to a [Mock](crate::Mock).
///
/// The engine never inspects a value on its own; it only sees the [Shape] the value
/// reports and its type name. Use `#[derive(Describe)]` for structs and enums with
/// value semantics, and [ByAddress], [Rc] or [Arc] for values compared by identity.
///
pub trait Describe {
    /// The canonical structure of this value.
    fn shape(&self) -> Shape;

    /// The type name appended to the value's description.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

macro_rules! describe_debug {
    ($($t:ty),+) => {
        $(
            impl Describe for $t {
                fn shape(&self) -> Shape {
                    Shape::debug(self)
                }
            }
        )+
    };
}

describe_debug!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, ()
);

impl<T: Describe + ?Sized> Describe for &T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn shape(&self) -> Shape {
        match self {
            Some(value) => match value.shape() {
                // A present value wrapping an absent one is not absent.
                Shape::Nil => Shape::record("Some", [Field::positional(Shape::Nil)]),
                shape => shape,
            },
            None => Shape::Nil,
        }
    }
}

impl<T: Describe, E: Describe> Describe for Result<T, E> {
    fn shape(&self) -> Shape {
        match self {
            Ok(value) => Shape::record("Ok", [Field::positional(value.shape())]),
            Err(error) => Shape::record("Err", [Field::positional(error.shape())]),
        }
    }
}

impl<T: Describe> Describe for [T] {
    fn shape(&self) -> Shape {
        Shape::Ordered(self.iter().map(Describe::shape).collect())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn shape(&self) -> Shape {
        Shape::Ordered(self.iter().map(Describe::shape).collect())
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::Ordered(self.iter().map(Describe::shape).collect())
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn shape(&self) -> Shape {
        Shape::Ordered(self.iter().map(Describe::shape).collect())
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn shape(&self) -> Shape {
        Shape::Unordered(self.iter().map(Describe::shape).collect())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn shape(&self) -> Shape {
        Shape::Map(
            self.iter()
                .map(|(key, value)| (key.shape(), value.shape()))
                .collect(),
        )
    }
}

#[cfg(feature = "std")]
impl<T: Describe, S> Describe for std::collections::HashSet<T, S> {
    fn shape(&self) -> Shape {
        Shape::Unordered(self.iter().map(Describe::shape).collect())
    }
}

#[cfg(feature = "std")]
impl<K: Describe, V: Describe, S> Describe for std::collections::HashMap<K, V, S> {
    fn shape(&self) -> Shape {
        Shape::Map(
            self.iter()
                .map(|(key, value)| (key.shape(), value.shape()))
                .collect(),
        )
    }
}

impl<T: ?Sized> Describe for Rc<T> {
    fn shape(&self) -> Shape {
        Shape::Identity(Rc::as_ptr(self) as *const () as usize)
    }
}

impl<T: ?Sized> Describe for Arc<T> {
    fn shape(&self) -> Shape {
        Shape::Identity(Arc::as_ptr(self) as *const () as usize)
    }
}

///
/// Gives any borrowed value identity semantics.
///
/// Two `ByAddress` arguments are equal only if they point to the same place in memory,
/// regardless of the contents found there.
///
/// ```rust
/// use tallymock::*;
///
/// struct Connection {
///     port: u16,
/// }
///
/// let a = Connection { port: 80 };
/// let b = Connection { port: 80 };
///
/// let engine = FingerprintEngine::new();
/// assert_ne!(
///     engine.fingerprint("send", &[&ByAddress(&a)]),
///     engine.fingerprint("send", &[&ByAddress(&b)]),
/// );
/// ```
pub struct ByAddress<'a, T: ?Sized>(pub &'a T);

impl<'a, T: ?Sized> Clone for ByAddress<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized> Copy for ByAddress<'a, T> {}

impl<'a, T: ?Sized> Describe for ByAddress<'a, T> {
    fn shape(&self) -> Shape {
        Shape::Identity(self.0 as *const T as *const () as usize)
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

macro_rules! describe_tuples {
    ($(($($t:ident . $i:tt),+)),+) => {
        $(
            impl<$($t: Describe),+> Describe for ($($t,)+) {
                fn shape(&self) -> Shape {
                    Shape::Tuple(Vec::from([$(self.$i.shape()),+]))
                }
            }
        )+
    };
}

describe_tuples!(
    (A.0),
    (A.0, B.1),
    (A.0, B.1, C.2),
    (A.0, B.1, C.2, D.3),
    (A.0, B.1, C.2, D.3, E.4),
    (A.0, B.1, C.2, D.3, E.4, F.5),
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6),
    (A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7)
);
