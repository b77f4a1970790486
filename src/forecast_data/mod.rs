pub mod assembler;
pub mod conversions;
pub mod error;
pub mod extractor;
pub mod record;
