pub mod normalize;
pub mod partition;
