mod clock;
mod files;
mod paths;

pub use clock::SystemClock;
pub use files::FsPageFileStore;
pub use paths::FsPagePathResolver;
