mod kind;
pub use kind::LabelKind;

mod facet;
pub use facet::{Label, display_text};
