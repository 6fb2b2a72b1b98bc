pub mod loader;
pub mod matrix;
pub mod normalize;
pub mod pipeline;
pub mod sampler;
