// Entry resolver - reduces an extraction result to a flat candidate sequence
//
// Resolution order:
// 1. playlist: hop to the first non-null entry
// 2. requested_formats: extractor-level pre-selection, returned verbatim
// 3. formats: the generic catalog, returned verbatim
// 4. direct url: the root object itself is the single candidate
// 5. nothing matched: empty sequence
//
// Malformed or missing data never raises; every tier degrades to the next.

use super::models::{ExtractionResult, FormatDescriptor};

/// Flatten an extraction result into its ordered candidate formats.
///
/// The returned references borrow from `info`; order is exactly the order
/// the extractor reported.
pub fn candidate_formats(info: &ExtractionResult) -> Vec<&FormatDescriptor> {
    let mut current = info;

    // Playlist shape: strictly the first non-null entry, by list order.
    if let Some(entries) = &current.entries {
        if !entries.is_empty() {
            match entries.iter().flatten().next() {
                Some(first) => current = first,
                None => return Vec::new(),
            }
        }
    }

    if let Some(requested) = &current.requested_formats {
        if !requested.is_empty() {
            return requested.iter().collect();
        }
    }

    if let Some(formats) = &current.formats {
        if !formats.is_empty() {
            return formats.iter().collect();
        }
    }

    // Single-format shape: the object doubles as its own descriptor.
    if current.descriptor.url.is_some() {
        return vec![&current.descriptor];
    }

    Vec::new()
}
