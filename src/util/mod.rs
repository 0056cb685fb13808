//! Shared utility modules used across Lyricgraph components.

pub mod path;
