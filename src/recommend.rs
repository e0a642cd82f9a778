//! Remediation bundle for failed subjects and the reference-file store it
//! draws papers and syllabi from.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::curriculum;
use crate::models::{
    BookRecommendation, RecommendationBundle, ResourceFile, ResourceKind, Subject,
    TopicRecommendation, Unavailable,
};

/// Source of downloadable reference files.
///
/// `fetch` answers existence and content in one call: `Ok(None)` means the
/// file is not in the store.
pub trait ResourceStore {
    fn fetch(&self, kind: ResourceKind, file_name: &str) -> io::Result<Option<Vec<u8>>>;
}

/// Reference files laid out on disk as `<root>/previous_papers/` and
/// `<root>/syllabus/`.
#[derive(Debug, Clone)]
pub struct FsResourceStore {
    root: PathBuf,
}

impl FsResourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn dir_for(&self, kind: ResourceKind) -> PathBuf {
        match kind {
            ResourceKind::Paper => self.root.join("previous_papers"),
            ResourceKind::Syllabus => self.root.join("syllabus"),
        }
    }
}

impl ResourceStore for FsResourceStore {
    fn fetch(&self, kind: ResourceKind, file_name: &str) -> io::Result<Option<Vec<u8>>> {
        let path = self.dir_for(kind).join(file_name);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "reference file not found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// `C Programming` is stored as `C_Programming.pdf`.
pub fn paper_file_name(subject: Subject) -> String {
    format!("{}.pdf", subject.name().replace(' ', "_"))
}

fn file_name_for(kind: ResourceKind, subject: Subject) -> Option<String> {
    match kind {
        ResourceKind::Paper => Some(paper_file_name(subject)),
        ResourceKind::Syllabus => curriculum::reference_for(subject)
            .syllabus_file
            .map(str::to_string),
    }
}

/// Fetches one reference file. Absence, or a store error, yields `None`.
pub fn fetch_resource(
    store: &dyn ResourceStore,
    subject: Subject,
    kind: ResourceKind,
) -> Option<ResourceFile> {
    let Some(file_name) = file_name_for(kind, subject) else {
        warn!(%subject, ?kind, "no file registered for subject");
        return None;
    };

    let bytes = match store.fetch(kind, &file_name) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            warn!(%subject, file = %file_name, "{} not available", kind.label());
            return None;
        }
        Err(err) => {
            warn!(%subject, file = %file_name, error = %err, "failed to read reference file");
            return None;
        }
    };

    Some(ResourceFile {
        subject,
        kind,
        download_name: kind.download_name(subject),
        size: bytes.len(),
        file_name,
        bytes,
    })
}

/// Builds the remediation bundle for `failed`, in the order given.
///
/// Each category is filtered on its own: a missing syllabus file drops only
/// the syllabus entry for that subject.
pub fn recommend(failed: &[Subject], store: &dyn ResourceStore) -> RecommendationBundle {
    let mut bundle = RecommendationBundle::default();

    for &subject in failed {
        let reference = curriculum::reference_for(subject);

        if let Some(book) = reference.book {
            bundle.books.push(BookRecommendation { subject, book });
        }
        if !reference.topics.is_empty() {
            bundle.topics.push(TopicRecommendation {
                subject,
                topics: reference.topics,
            });
        }

        for kind in [ResourceKind::Paper, ResourceKind::Syllabus] {
            match fetch_resource(store, subject, kind) {
                Some(file) if kind == ResourceKind::Paper => bundle.papers.push(file),
                Some(file) => bundle.syllabi.push(file),
                None => bundle.unavailable.push(Unavailable { subject, kind }),
            }
        }
    }

    bundle
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use tempfile::TempDir;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        files: HashMap<(ResourceKind, String), Vec<u8>>,
        fetches: RefCell<usize>,
    }

    impl MemoryStore {
        fn with(mut self, kind: ResourceKind, name: &str, bytes: &[u8]) -> Self {
            self.files.insert((kind, name.to_string()), bytes.to_vec());
            self
        }
    }

    impl ResourceStore for MemoryStore {
        fn fetch(&self, kind: ResourceKind, file_name: &str) -> io::Result<Option<Vec<u8>>> {
            *self.fetches.borrow_mut() += 1;
            Ok(self.files.get(&(kind, file_name.to_string())).cloned())
        }
    }

    struct BrokenStore;

    impl ResourceStore for BrokenStore {
        fn fetch(&self, _kind: ResourceKind, _file_name: &str) -> io::Result<Option<Vec<u8>>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn empty_failure_list_gives_empty_bundle() {
        let store = MemoryStore::default();
        let bundle = recommend(&[], &store);
        assert_eq!(bundle, RecommendationBundle::default());
        assert_eq!(*store.fetches.borrow(), 0);
    }

    #[test]
    fn paper_names_replace_spaces() {
        assert_eq!(paper_file_name(Subject::CProgramming), "C_Programming.pdf");
        assert_eq!(
            paper_file_name(Subject::AccountingAndFinancialManagement),
            "Accounting_And_Financial_Management.pdf"
        );
    }

    #[test]
    fn categories_are_filtered_independently() {
        let store = MemoryStore::default().with(ResourceKind::Paper, "C_Programming.pdf", b"paper");
        let bundle = recommend(&[Subject::CProgramming], &store);

        assert_eq!(bundle.books.len(), 1);
        assert_eq!(
            bundle.books[0].book,
            "The C Programming Language by Kernighan and Ritchie"
        );
        assert_eq!(bundle.topics[0].topics.len(), 6);
        assert_eq!(bundle.papers.len(), 1);
        assert_eq!(bundle.papers[0].bytes, b"paper");
        assert_eq!(bundle.papers[0].download_name, "C Programming_Previous_Papers.pdf");
        assert!(bundle.syllabi.is_empty());
        assert_eq!(
            bundle.unavailable,
            vec![Unavailable {
                subject: Subject::CProgramming,
                kind: ResourceKind::Syllabus,
            }]
        );
    }

    #[test]
    fn bundle_keeps_supplied_order() {
        let store = MemoryStore::default()
            .with(ResourceKind::Syllabus, "Python_Syllabus.pdf", b"py")
            .with(ResourceKind::Syllabus, "Statistical_Methods_Syllabus.pdf", b"sm");
        let failed = [Subject::StatisticalMethods, Subject::Python];
        let bundle = recommend(&failed, &store);

        let book_subjects: Vec<Subject> = bundle.books.iter().map(|b| b.subject).collect();
        let syllabus_subjects: Vec<Subject> = bundle.syllabi.iter().map(|s| s.subject).collect();
        assert_eq!(book_subjects, failed);
        assert_eq!(syllabus_subjects, failed);
        assert_eq!(bundle.unavailable.len(), 2);
    }

    #[test]
    fn store_errors_degrade_to_unavailable() {
        let bundle = recommend(&[Subject::Java], &BrokenStore);
        assert_eq!(bundle.books.len(), 1);
        assert!(bundle.papers.is_empty());
        assert!(bundle.syllabi.is_empty());
        assert_eq!(bundle.unavailable.len(), 2);
    }

    #[test]
    fn filesystem_store_reads_both_directories() {
        let dir = TempDir::new().unwrap();
        let store = FsResourceStore::new(dir.path());
        fs::create_dir_all(store.dir_for(ResourceKind::Paper)).unwrap();
        fs::create_dir_all(store.dir_for(ResourceKind::Syllabus)).unwrap();
        fs::write(
            store.dir_for(ResourceKind::Paper).join("Cloud_Computing.pdf"),
            b"%PDF-paper",
        )
        .unwrap();
        fs::write(
            store.dir_for(ResourceKind::Syllabus).join("Cloud_Computing_Syllabus.pdf"),
            b"%PDF-syllabus",
        )
        .unwrap();

        let bundle = recommend(&[Subject::CloudComputing, Subject::DataSecurity], &store);
        assert_eq!(bundle.papers.len(), 1);
        assert_eq!(bundle.syllabi.len(), 1);
        assert_eq!(bundle.syllabi[0].size, 13);
        assert_eq!(
            bundle.unavailable,
            vec![
                Unavailable {
                    subject: Subject::DataSecurity,
                    kind: ResourceKind::Paper,
                },
                Unavailable {
                    subject: Subject::DataSecurity,
                    kind: ResourceKind::Syllabus,
                },
            ]
        );
    }

    #[test]
    fn bundle_tracks_filesystem_changes() {
        let dir = TempDir::new().unwrap();
        let store = FsResourceStore::new(dir.path());
        let failed = [Subject::Python];
        assert!(recommend(&failed, &store).papers.is_empty());

        fs::create_dir_all(store.dir_for(ResourceKind::Paper)).unwrap();
        fs::write(store.dir_for(ResourceKind::Paper).join("Python.pdf"), b"x").unwrap();
        assert_eq!(recommend(&failed, &store).papers.len(), 1);
    }

    #[test]
    fn fetch_resource_returns_none_when_missing() {
        let store = MemoryStore::default();
        assert!(fetch_resource(&store, Subject::Java, ResourceKind::Syllabus).is_none());
    }
}
