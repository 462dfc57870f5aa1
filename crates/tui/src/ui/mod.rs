//! UI rendering module for the search application.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
