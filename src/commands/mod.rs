mod export;
mod render;
mod serve;

pub use export::export;
pub use render::render;
pub use serve::serve;
