//! Address book persistence

use crate::domain::AddressBook;
use crate::error::{AbookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Abstract storage for the whole address book
pub trait BookStore {
    /// Load the stored book, or an empty one if nothing was saved yet
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`
    fn save(&self, book: &AddressBook) -> Result<()>;
}

/// TOML file implementation of BookStore
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        FileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no address book yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(AbookError::Io(e)),
        };

        let book: AddressBook = toml::from_str(&contents)?;
        debug!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(book)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use tempfile::TempDir;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();

        let mut john = Record::new("John").unwrap();
        john.add_phone("1234567890").unwrap();
        john.add_phone("5555555555").unwrap();
        john.add_birthday("07.04.2020").unwrap();
        book.add_record(john);

        let mut jane = Record::new("Jane").unwrap();
        jane.add_phone("9876543210").unwrap();
        book.add_record(jane);

        book.add_record(Record::new("Bare").unwrap());
        book
    }

    #[test]
    fn test_load_missing_file_gives_empty_book() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("addressbook.toml"));

        let book = store.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_and_load_preserves_everything() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("addressbook.toml"));
        let book = sample_book();

        store.save(&book).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, book);
        let names: Vec<&str> = loaded.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane", "Bare"]);
    }

    #[test]
    fn test_save_empty_book() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("addressbook.toml"));

        store.save(&AddressBook::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nested/dir/addressbook.toml"));

        store.save(&sample_book()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_file_layout() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("addressbook.toml"));
        store.save(&sample_book()).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("[[contacts]]"));
        assert!(contents.contains("name = \"John\""));
        assert!(contents.contains("birthday = \"07.04.2020\""));
    }

    #[test]
    fn test_load_revalidates_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("addressbook.toml");
        fs::write(
            &path,
            "[[contacts]]\nname = \"Ann\"\nphones = [\"12345\"]\n",
        )
        .unwrap();

        let err = FileStore::new(path).load().unwrap_err();
        assert!(matches!(err, AbookError::TomlDeserialize(_)));
    }

    #[test]
    fn test_load_drops_duplicates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("addressbook.toml");
        fs::write(
            &path,
            "[[contacts]]\n\
             name = \"Ann\"\n\
             phones = [\"1234567890\", \"1234567890\"]\n\
             \n\
             [[contacts]]\n\
             name = \"Bob\"\n\
             \n\
             [[contacts]]\n\
             name = \"Ann\"\n\
             phones = [\"5555555555\"]\n\
             birthday = \"01.01.1990\"\n",
        )
        .unwrap();

        let book = FileStore::new(path).load().unwrap();
        assert_eq!(book.len(), 2);
        let ann = book.find("Ann").unwrap();
        assert_eq!(ann.phones().len(), 1);
        assert_eq!(ann.phones()[0].as_str(), "5555555555");
        assert_eq!(ann.birthday().unwrap().to_string(), "01.01.1990");
    }
}
