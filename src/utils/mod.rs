//! Small helpers for user-facing output

pub mod string;
