pub mod line_classifier;

pub use line_classifier::{
    classify,
    classify_with,
    classify_document,
    classify_document_with,
    is_character_shape,
    ClassifyConf,
};
