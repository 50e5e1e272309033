// stream-picker - picks the best playable stream URL(s) from an extractor's
// format catalog
//
// The core (resolver, classifier, selector) is pure and synchronous; the
// extractors module is the async glue that obtains the catalog.

pub mod cli;
pub mod picker;

pub use picker::{
    candidate_formats, ExtractError, ExtractionResult, FormatDescriptor, SelectError, Selection,
    SelectionPolicy, StreamSelector,
};
