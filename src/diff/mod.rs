pub mod file;
pub mod full;
pub mod hunk;

pub use file::DiffBlock;
pub use full::DiffDocument;
pub use hunk::Hunk;
