//! Email extraction module
//!
//! Addresses come from two places on a page:
//! - free text matched against an address pattern
//! - `mailto:` anchor targets, which may list several recipients
//!
//! Both paths share the same sanitization so the per-site and global dedup
//! compare like with like.

mod extract;
mod sanitize;

pub use extract::{extract_from_mailto, extract_from_text, MAX_EMAIL_LEN};
pub use sanitize::sanitize_email;
