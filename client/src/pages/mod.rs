//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signals and request orchestration, and delegates
//! rendering details to `components`.

pub mod gallery;
pub mod live;
