//! Check filtering: health evaluation, label matching and the sorted, filtered view.
mod health;
pub use health::is_healthy;

mod matching;
pub use matching::matches_label;

mod selection;
pub use selection::{Selection, index_of};

mod view;
pub use view::{CheckFilter, FilterSummary, filter_checks};
