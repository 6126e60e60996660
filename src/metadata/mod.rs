//! Page-level metadata: `<meta>` tags and the attendee name.

pub mod meta_tags;
pub mod name;

pub use meta_tags::{extract_meta_content, first_meta_content};
pub use name::{resolve_name, resolve_name_with_source, NameSource};
