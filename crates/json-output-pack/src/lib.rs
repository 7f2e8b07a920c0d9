//! Result value model and numeric-aware JSON encoder for model outputs.
//!
//! A compute call hands back [`ResultValue`]s: native JSON-like data, boxed
//! numeric scalars, n-dimensional numeric arrays, or values with no JSON
//! form at all. [`jsonize`] turns any of them into a JSON text payload and
//! never fails on a value it merely cannot represent.

mod error;
mod numeric;
mod repr;
mod value;

pub mod json;

pub use error::{EncodeError, FormatError};
pub use json::{jsonize, to_json_value, try_jsonize};
pub use numeric::{NumericArray, NumericScalar};
pub use value::{Opaque, ResultValue};

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;
    use serde_json::json;

    #[test]
    fn jsonize_native_values() {
        let value = ResultValue::from(json!({"label": "cat", "scores": [0.5, 0.25], "ok": true}));
        assert_eq!(
            jsonize(&value).unwrap(),
            r#"{"label": "cat", "scores": [0.5, 0.25], "ok": true}"#
        );
    }

    #[test]
    fn jsonize_unboxes_numeric_values() {
        assert_eq!(jsonize(&NumericScalar::F64(3.5).into()).unwrap(), "3.5");
        let grid = ResultValue::from(arr2(&[[1_i64, 2], [3, 4]]).into_dyn());
        assert_eq!(jsonize(&grid).unwrap(), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn jsonize_falls_back_to_text() {
        let value = ResultValue::Opaque(Opaque::new("Tensor", "tensor([1, 2])"));
        assert_eq!(jsonize(&value).unwrap(), r#"{"result": "tensor([1, 2])"}"#);
        assert!(matches!(
            try_jsonize(&value),
            Err(EncodeError::Unrepresentable(ref name)) if name == "Tensor"
        ));
    }

    #[test]
    fn jsonize_surfaces_item_failures() {
        let value = ResultValue::Seq(vec![
            ResultValue::Opaque(Opaque::new("Model", "<Model>")),
            FormatError::validation("image too small").into(),
        ]);
        assert_eq!(
            jsonize(&value),
            Err(FormatError::Validation("image too small".to_owned()))
        );
    }
}
