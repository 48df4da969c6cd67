mod shuffler;

pub use shuffler::{RandomSource, SeededRandom, Shuffler, ThreadRandom};
