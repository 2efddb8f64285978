#[path = "helpers/mod.rs"]
mod helpers;

#[path = "render/mod.rs"]
mod render;
