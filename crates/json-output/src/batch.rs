//! Batch response assembly.
//!
//! A batched compute call returns one concatenated result collection for
//! every caller that entered the batch. Each caller carries a [`Slice`]
//! into that collection, or no slice at all when it never reached the
//! batch (for example because an earlier stage already rejected it), in
//! which case its precomputed fallback response is used instead.
//!
//! Output position `i` always belongs to caller `i`: the transport matches
//! responses back to requests by position only.

use std::borrow::Cow;
use std::ops::Range;

use json_output_pack::{jsonize, FormatError, ResultValue};

use crate::Response;

/// Where one caller's result sits in the result collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slice {
    /// A single item.
    Index(usize),
    /// A contiguous run of items, delivered as one sequence.
    Range(Range<usize>),
}

impl From<usize> for Slice {
    fn from(index: usize) -> Self {
        Slice::Index(index)
    }
}

impl From<Range<usize>> for Slice {
    fn from(range: Range<usize>) -> Self {
        Slice::Range(range)
    }
}

/// Read-only indexed access to a batch's concatenated results.
pub trait ResultCollection {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&ResultValue>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultCollection for [ResultValue] {
    fn len(&self) -> usize {
        <[ResultValue]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&ResultValue> {
        <[ResultValue]>::get(self, index)
    }
}

impl ResultCollection for Vec<ResultValue> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&ResultValue> {
        self.as_slice().get(index)
    }
}

/// Locate one caller's result.
///
/// An index outside the collection means the batching layer handed us
/// inconsistent selectors, which is an internal failure. A range that is
/// inverted or reaches past the end is reported as a validation failure.
pub fn select<'a, C>(results: &'a C, slice: &Slice) -> Result<Cow<'a, ResultValue>, FormatError>
where
    C: ResultCollection + ?Sized,
{
    match slice {
        Slice::Index(index) => match results.get(*index) {
            Some(item) => Ok(Cow::Borrowed(item)),
            None => Err(FormatError::internal(format!(
                "result index {index} out of range for batch of {}",
                results.len()
            ))),
        },
        Slice::Range(range) => {
            if range.start > range.end || range.end > results.len() {
                return Err(FormatError::validation(format!(
                    "result slice {}..{} invalid for batch of {}",
                    range.start,
                    range.end,
                    results.len()
                )));
            }
            let items = range
                .clone()
                .filter_map(|index| results.get(index).cloned())
                .collect();
            Ok(Cow::Owned(ResultValue::Seq(items)))
        }
    }
}

/// Encode one located result into its response.
pub fn respond<C>(results: &C, slice: &Slice) -> Response
where
    C: ResultCollection + ?Sized,
{
    match select(results, slice).and_then(|value| jsonize(&value)) {
        Ok(payload) => Response::json(payload),
        Err(err) => {
            tracing::debug!(?slice, error = %err, "result formatting failed for caller");
            Response::from(err)
        }
    }
}

/// Build one response per caller.
///
/// `slices` defaults to one [`Slice::Index`] per result, and `fallbacks` to
/// no fallback for anyone. A caller without a slice gets its fallback
/// verbatim; a caller with neither gets `None`.
pub fn assemble<C>(
    results: &C,
    slices: Option<&[Option<Slice>]>,
    fallbacks: Option<Vec<Option<Response>>>,
) -> Vec<Option<Response>>
where
    C: ResultCollection + ?Sized,
{
    let identity: Vec<Option<Slice>>;
    let slices = match slices {
        Some(slices) => slices,
        None => {
            identity = (0..results.len()).map(|i| Some(Slice::Index(i))).collect();
            &identity
        }
    };
    let mut fallbacks = fallbacks.unwrap_or_default();
    fallbacks.resize(slices.len(), None);

    tracing::debug!(
        callers = slices.len(),
        results = results.len(),
        "assembling batch responses"
    );

    slices
        .iter()
        .zip(fallbacks)
        .enumerate()
        .map(|(caller, (slice, fallback))| match slice {
            Some(slice) => Some(respond(results, slice)),
            None => {
                if fallback.is_none() {
                    tracing::warn!(caller, "caller has neither a batch result nor a fallback");
                }
                fallback
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<ResultValue> {
        vec![
            ResultValue::Int(10),
            ResultValue::Int(20),
            ResultValue::Int(30),
        ]
    }

    #[test]
    fn select_index_borrows() {
        let results = results();
        let value = select(&results, &Slice::Index(1)).unwrap();
        assert!(matches!(value, Cow::Borrowed(ResultValue::Int(20))));
    }

    #[test]
    fn select_range_collects_sequence() {
        let results = results();
        let value = select(&results, &Slice::Range(1..3)).unwrap();
        assert_eq!(
            value.into_owned(),
            ResultValue::Seq(vec![ResultValue::Int(20), ResultValue::Int(30)])
        );
        let empty = select(&results, &Slice::Range(2..2)).unwrap();
        assert_eq!(empty.into_owned(), ResultValue::Seq(vec![]));
    }

    #[test]
    fn select_errors() {
        let results = results();
        assert!(matches!(
            select(&results, &Slice::Index(3)),
            Err(FormatError::Internal(_))
        ));
        assert!(matches!(
            select(&results, &Slice::Range(2..4)),
            Err(FormatError::Validation(_))
        ));
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = Slice::Range(2..1);
        let err = select(&results, &inverted).unwrap_err();
        assert!(matches!(err, FormatError::Validation(_)));
    }

    #[test]
    fn assemble_defaults_to_identity() {
        let responses = assemble(&results(), None, None);
        let bodies: Vec<_> = responses
            .iter()
            .map(|r| r.as_ref().map(|r| r.body.as_str()))
            .collect();
        assert_eq!(bodies, vec![Some("10"), Some("20"), Some("30")]);
    }

    #[test]
    fn assemble_pads_short_fallbacks() {
        let slices = vec![None, Some(Slice::Index(0))];
        let responses = assemble(&results(), Some(&slices), Some(vec![]));
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0], None);
        assert_eq!(responses[1], Some(Response::json("10")));
    }
}
