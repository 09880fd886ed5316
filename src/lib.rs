//! minigit creates and locates repositories that use the `.git` folder layout.
//!
//! Only repository bootstrap (`init`) and discovery are implemented. Object
//! storage and the rest of the porcelain are left to other crates.

pub mod repo;
