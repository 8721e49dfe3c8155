//! Page state held in `RwSignal` contexts.
//!
//! DESIGN
//! ======
//! State types are plain structs with pure transitions so they can be tested
//! without a browser; components only read them and call their methods.

pub mod manifest;
pub mod stats;
pub mod tabs;
pub mod viewer;
