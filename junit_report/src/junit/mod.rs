pub mod decode;
pub mod normalize;
pub mod tree;

pub use normalize::{NormalizedFile, normalize, normalize_file};
