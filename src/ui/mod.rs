//! UI module - result renderer and status views

pub mod components;
