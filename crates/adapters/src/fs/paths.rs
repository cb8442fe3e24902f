use std::path::PathBuf;

use partial_pages_application::PagePathResolver;
use partial_pages_domain::{PageNumber, WidthTag};

/// Resolves `<root>/width<tag>/pageNNN.png`.
#[derive(Debug, Clone, Default)]
pub struct FsPagePathResolver {
    images_root: Option<PathBuf>,
}

impl FsPagePathResolver {
    pub fn new(images_root: Option<PathBuf>) -> Self {
        Self { images_root }
    }
}

impl PagePathResolver for FsPagePathResolver {
    fn images_directory(&self, width: &WidthTag) -> Option<PathBuf> {
        let directory = self
            .images_root
            .as_ref()?
            .join(format!("width{}", width.as_str()));
        directory.is_dir().then_some(directory)
    }

    fn page_file_name(&self, page: PageNumber) -> String {
        format!("page{:03}.png", page.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn page_file_names_are_zero_padded() {
        let resolver = FsPagePathResolver::default();
        assert_eq!(
            resolver.page_file_name(PageNumber::new(5).expect("page")),
            "page005.png"
        );
        assert_eq!(
            resolver.page_file_name(PageNumber::new(604).expect("page")),
            "page604.png"
        );
    }

    #[test]
    fn directory_resolves_only_when_present() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::create_dir(dir.path().join("width_1920")).expect("mkdir");
        let resolver = FsPagePathResolver::new(Some(dir.path().to_path_buf()));

        let found = resolver.images_directory(&WidthTag::new("_1920").expect("tag"));
        assert_eq!(found, Some(dir.path().join("width_1920")));
        assert_eq!(
            resolver.images_directory(&WidthTag::new("_1280").expect("tag")),
            None
        );
    }

    #[test]
    fn no_root_means_no_directory() {
        let resolver = FsPagePathResolver::new(None);
        assert_eq!(
            resolver.images_directory(&WidthTag::new("_1920").expect("tag")),
            None
        );
    }
}
