//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The navigation gate picks one page per render. Business pages outside the
//! interaction core render as titled placeholders.

pub mod ai;
pub mod landing;
pub mod not_found;
pub mod placeholder;
