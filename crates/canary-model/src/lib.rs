mod domain;
pub use domain::{Check, CheckStatus, Description, Labels};
pub use domain::{LABEL_FLAG_VALUE, LABEL_ID_SEPARATOR};

mod error;
pub use error::{ModelError, ModelResult};

mod label;
pub use label::{Label, LabelKind, display_text};
