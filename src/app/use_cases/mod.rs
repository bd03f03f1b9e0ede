//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod drawing;
pub mod file_io;
pub mod snapping;
pub mod viewport;
