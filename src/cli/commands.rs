pub mod inspect;
pub mod render;
pub mod serve;

pub use inspect::inspect;
pub use render::render;
pub use serve::serve;
