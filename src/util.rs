/// Number formatting helpers.
///
/// Converts runtime numbers to the text the language prints and concatenates:
/// whole numbers lose their fractional part, non-finite numbers get readable
/// names.
pub mod num;
