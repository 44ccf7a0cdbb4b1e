mod labels;
pub use labels::Labels;

mod status;
pub use status::CheckStatus;

mod check;
pub use check::Check;

mod constants;
pub use constants::{LABEL_FLAG_VALUE, LABEL_ID_SEPARATOR};

/// Human-readable description of a check.
///
/// This is the only sort key used when checks are listed.
pub type Description = String;
