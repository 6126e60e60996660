//! Sponsor content blocks.
//!
//! Two stages: [`discovery`] turns every marked anchor into a
//! [`ProfileContentBlock`](crate::result::ProfileContentBlock), then
//! [`cndw`] parses the structured fields of the CNDW2025 block, if any.

pub mod cndw;
pub mod discovery;

pub use cndw::{is_sponsor_title, parse_cndw2025};
pub use discovery::{discover_blocks, CONTENT_BLOCK_ATTR};
