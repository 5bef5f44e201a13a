//! CLI command implementations.

pub(crate) mod base;
mod common;
pub(crate) mod render;
pub(crate) mod translate;

pub(crate) use base::BaseArgs;
pub(crate) use render::RenderArgs;
pub(crate) use translate::TranslateArgs;
