//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome from page-owned state signals
//! passed in as props.

pub mod map_card;
pub mod map_list;
pub mod map_viewer;
pub mod stats_panels;
pub mod tab_bar;
