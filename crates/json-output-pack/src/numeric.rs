//! Numeric-array values produced by model code.
//!
//! [`NumericScalar`] is a boxed 0-d number and [`NumericArray`] an
//! n-dimensional array backed by [`ndarray::ArrayD`]. Neither maps onto a
//! JSON type directly; [`NumericScalar::item`] and [`NumericArray::to_list`]
//! convert them into native [`ResultValue`]s first.

use std::fmt;

use ndarray::{ArrayD, ArrayViewD};

use crate::repr::{float32_repr, float_repr};
use crate::ResultValue;

/// A boxed numeric scalar, e.g. the result of reducing an array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericScalar {
    Bool(bool),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl NumericScalar {
    /// Unbox into the equivalent native value.
    pub fn item(&self) -> ResultValue {
        match *self {
            NumericScalar::Bool(b) => ResultValue::Bool(b),
            NumericScalar::I64(n) => ResultValue::Int(n),
            NumericScalar::U64(n) => ResultValue::UInt(n),
            NumericScalar::F32(f) => ResultValue::Float(f as f64),
            NumericScalar::F64(f) => ResultValue::Float(f),
        }
    }
}

impl fmt::Display for NumericScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NumericScalar::Bool(b) => f.write_str(if b { "True" } else { "False" }),
            NumericScalar::I64(n) => write!(f, "{n}"),
            NumericScalar::U64(n) => write!(f, "{n}"),
            NumericScalar::F32(x) => f.write_str(&float32_repr(x)),
            NumericScalar::F64(x) => f.write_str(&float_repr(x)),
        }
    }
}

/// An n-dimensional numeric array in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericArray {
    Bool(ArrayD<bool>),
    I64(ArrayD<i64>),
    U64(ArrayD<u64>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

impl NumericArray {
    pub fn shape(&self) -> &[usize] {
        match self {
            NumericArray::Bool(a) => a.shape(),
            NumericArray::I64(a) => a.shape(),
            NumericArray::U64(a) => a.shape(),
            NumericArray::F32(a) => a.shape(),
            NumericArray::F64(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Convert into nested [`ResultValue::Seq`]s, outermost axis first.
    ///
    /// A 0-d array yields its single element as a native scalar.
    pub fn to_list(&self) -> ResultValue {
        match self {
            NumericArray::Bool(a) => nest(a.view(), &|b| NumericScalar::Bool(b).item()),
            NumericArray::I64(a) => nest(a.view(), &|n| NumericScalar::I64(n).item()),
            NumericArray::U64(a) => nest(a.view(), &|n| NumericScalar::U64(n).item()),
            NumericArray::F32(a) => nest(a.view(), &|x| NumericScalar::F32(x).item()),
            NumericArray::F64(a) => nest(a.view(), &|x| NumericScalar::F64(x).item()),
        }
    }
}

fn nest<T: Copy>(view: ArrayViewD<'_, T>, leaf: &dyn Fn(T) -> ResultValue) -> ResultValue {
    if view.ndim() == 0 {
        return view.first().map_or(ResultValue::Null, |x| leaf(*x));
    }
    ResultValue::Seq(view.outer_iter().map(|row| nest(row, leaf)).collect())
}

// Rows are separated by a newline per remaining axis, like numpy's printer:
// [[1 2]
//  [3 4]]
fn write_rows<T: Copy>(
    f: &mut fmt::Formatter<'_>,
    view: ArrayViewD<'_, T>,
    depth: usize,
    elem: &dyn Fn(T) -> String,
) -> fmt::Result {
    if view.ndim() == 0 {
        return match view.first() {
            Some(x) => f.write_str(&elem(*x)),
            None => Ok(()),
        };
    }
    f.write_str("[")?;
    if view.ndim() == 1 {
        for (i, x) in view.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&elem(*x))?;
        }
    } else {
        let sep = format!("{}{}", "\n".repeat(view.ndim() - 1), " ".repeat(depth + 1));
        for (i, row) in view.outer_iter().enumerate() {
            if i > 0 {
                f.write_str(&sep)?;
            }
            write_rows(f, row, depth + 1, elem)?;
        }
    }
    f.write_str("]")
}

fn write_nested<T: Copy>(
    f: &mut fmt::Formatter<'_>,
    view: ArrayViewD<'_, T>,
    elem: &dyn Fn(T) -> String,
) -> fmt::Result {
    if view.ndim() == 0 {
        return match view.first() {
            Some(x) => f.write_str(&elem(*x)),
            None => Ok(()),
        };
    }
    f.write_str("[")?;
    for (i, row) in view.outer_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_nested(f, row, elem)?;
    }
    f.write_str("]")
}

impl NumericArray {
    /// Text form used when the array sits inside a container:
    /// `array([1.0, nan])`.
    pub(crate) fn write_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("array(")?;
        match self {
            NumericArray::Bool(a) => write_nested(f, a.view(), &|b: bool| {
                NumericScalar::Bool(b).to_string()
            })?,
            NumericArray::I64(a) => write_nested(f, a.view(), &|n: i64| n.to_string())?,
            NumericArray::U64(a) => write_nested(f, a.view(), &|n: u64| n.to_string())?,
            NumericArray::F32(a) => write_nested(f, a.view(), &float32_repr)?,
            NumericArray::F64(a) => write_nested(f, a.view(), &float_repr)?,
        }
        f.write_str(")")
    }
}

impl fmt::Display for NumericArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericArray::Bool(a) => write_rows(f, a.view(), 0, &|b: bool| {
                NumericScalar::Bool(b).to_string()
            }),
            NumericArray::I64(a) => write_rows(f, a.view(), 0, &|n: i64| n.to_string()),
            NumericArray::U64(a) => write_rows(f, a.view(), 0, &|n: u64| n.to_string()),
            NumericArray::F32(a) => write_rows(f, a.view(), 0, &float32_repr),
            NumericArray::F64(a) => write_rows(f, a.view(), 0, &float_repr),
        }
    }
}

macro_rules! impl_from_array {
    ($($elem:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<ArrayD<$elem>> for NumericArray {
                fn from(array: ArrayD<$elem>) -> Self {
                    NumericArray::$variant(array)
                }
            }
        )*
    };
}

impl_from_array! {
    bool => Bool,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, arr1, arr2, Array3};

    #[test]
    fn scalar_item_unboxes() {
        assert_eq!(NumericScalar::F64(3.5).item(), ResultValue::Float(3.5));
        assert_eq!(NumericScalar::I64(-7).item(), ResultValue::Int(-7));
        assert_eq!(NumericScalar::Bool(true).item(), ResultValue::Bool(true));
        assert_eq!(NumericScalar::F32(0.5).item(), ResultValue::Float(0.5));
    }

    #[test]
    fn to_list_is_row_major() {
        let grid = NumericArray::from(arr2(&[[1_i64, 2], [3, 4]]).into_dyn());
        assert_eq!(grid.shape(), &[2, 2]);
        assert_eq!(
            grid.to_list(),
            ResultValue::Seq(vec![
                ResultValue::Seq(vec![ResultValue::Int(1), ResultValue::Int(2)]),
                ResultValue::Seq(vec![ResultValue::Int(3), ResultValue::Int(4)]),
            ])
        );
    }

    #[test]
    fn to_list_zero_dim_is_scalar() {
        let array = NumericArray::from(arr0(2.5_f64).into_dyn());
        assert_eq!(array.ndim(), 0);
        assert_eq!(array.to_list(), ResultValue::Float(2.5));
    }

    #[test]
    fn to_list_empty_axis() {
        let array = NumericArray::from(Array3::<u64>::zeros((2, 0, 3)).into_dyn());
        assert_eq!(
            array.to_list(),
            ResultValue::Seq(vec![ResultValue::Seq(vec![]), ResultValue::Seq(vec![])])
        );
    }

    #[test]
    fn display_matches_numpy_layout() {
        let row = NumericArray::from(arr1(&[1.0_f64, 2.5]).into_dyn());
        assert_eq!(row.to_string(), "[1.0 2.5]");
        let grid = NumericArray::from(arr2(&[[1_i64, 2], [3, 4]]).into_dyn());
        assert_eq!(grid.to_string(), "[[1 2]\n [3 4]]");
        let flags = NumericArray::from(arr1(&[true, false]).into_dyn());
        assert_eq!(flags.to_string(), "[True False]");
    }

    #[test]
    fn float32_display_keeps_single_precision() {
        assert_eq!(NumericScalar::F32(0.1).to_string(), "0.1");
        let boxed = ResultValue::from(NumericScalar::F32(0.1));
        assert_eq!(boxed.to_string(), "0.1");
        let row = NumericArray::from(arr1(&[0.1_f32, 0.2]).into_dyn());
        assert_eq!(row.to_string(), "[0.1 0.2]");
    }
}
