// ABOUTME: Logical editing commands and how they appear as styles, classes and tags.
// ABOUTME: Includes the registry types and the builtin registry loader.

pub mod loader;
pub mod registry;
