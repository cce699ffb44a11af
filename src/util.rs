/// Numeric conversion helpers.
///
/// This module converts between `f64` and `BigDecimal` without silently
/// producing garbage: non-finite floats have no decimal counterpart and
/// decimals outside the `f64` range do not convert.
///
/// All fallible functions return an `Option`, which is `None` when the value
/// cannot be represented on the other side.
pub mod num;
/// A map keyed by case-folded names.
///
/// Variable and function names of the formula language are
/// case-insensitive. `FoldedMap` folds every key to lower case on the way in
/// and on lookup, so callers never fold names themselves.
pub mod folded_map;
