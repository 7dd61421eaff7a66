mod index;

pub use index::TrackedFiles;
