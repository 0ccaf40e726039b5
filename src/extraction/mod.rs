pub mod assembler;
pub mod confidence;
pub mod dates;
pub mod extractors;
pub mod patterns;

pub use assembler::EntityAssembler;
