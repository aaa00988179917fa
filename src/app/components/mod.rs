//! Shared UI components.

pub mod layout;
pub mod nav;

pub use layout::Layout;
pub use nav::Nav;
