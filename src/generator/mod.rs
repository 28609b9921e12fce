// Seeded price-path generation
mod path_generator;
mod random_source;

pub use path_generator::{PathGenerator, StepSignals};
pub use random_source::RandomSource;
