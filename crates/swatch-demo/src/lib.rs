#![forbid(unsafe_code)]

//! Swatch demo: drives a color panel through a scripted sequence of frames.

pub mod cli;
pub mod script;
