//! Tests for deterministic image selection, padding and error cases

#[cfg(test)]
mod tests {
    use batchprep::ErrorKind;
    use batchprep::io::manifest::read_manifest;
    use batchprep::pipeline::selector::{ImageSelector, is_jpeg_name, take_padded};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    // Tests extension matching is case-insensitive and limited to JPEG
    // Verified by matching only lowercase extensions
    #[test]
    fn test_is_jpeg_name() {
        assert!(is_jpeg_name("a.jpg"));
        assert!(is_jpeg_name("b.JPG"));
        assert!(is_jpeg_name("c.jpeg"));
        assert!(is_jpeg_name("d.JpEg"));
        assert!(!is_jpeg_name("e.png"));
        assert!(!is_jpeg_name("f.jpg.txt"));
        assert!(!is_jpeg_name("jpg"));
    }

    // Tests padding repeats the last available entry
    // Verified by repeating the first entry instead
    #[test]
    fn test_take_padded() {
        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(take_padded(&names, 1), vec!["a"]);
        assert_eq!(take_padded(&names, 2), vec!["a", "b"]);
        assert_eq!(take_padded(&names, 5), vec!["a", "b", "b", "b", "b"]);
        assert!(take_padded(&[], 3).is_empty());
    }

    // Tests the reference example: lexicographic order with mixed-case extensions
    // Verified by sorting case-insensitively
    #[test]
    fn test_mixed_extension_example() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["a.jpg", "c.jpeg", "b.JPG"]);
        let manifest = temp_dir.path().join("list.txt");

        let selector = ImageSelector::new(temp_dir.path(), None, 0, 2);
        let selected = selector.select_into(&manifest).unwrap();

        assert_eq!(selected, vec!["a.jpg", "b.JPG"]);
        assert_eq!(fs::read_to_string(&manifest).unwrap(), "a.jpg\nb.JPG\n");
    }

    // Tests non-JPEG files and subdirectories are ignored
    // Verified by including directories whose names end in .jpg
    #[test]
    fn test_filters_files() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["z.jpg", "notes.txt", "pic.png"]);
        fs::create_dir(temp_dir.path().join("folder.jpg")).unwrap();

        let selected = ImageSelector::new(temp_dir.path(), None, 0, 3)
            .select()
            .unwrap();
        assert_eq!(selected, vec!["z.jpg", "z.jpg", "z.jpg"]);
    }

    // Tests skipping and padding combine on the sorted list
    // Verified by skipping before sorting
    #[test]
    fn test_skip_then_pad() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["04.jpg", "01.jpg", "03.jpg", "02.jpg"]);

        let selected = ImageSelector::new(temp_dir.path(), None, 2, 4)
            .select()
            .unwrap();
        assert_eq!(selected, vec!["03.jpg", "04.jpg", "04.jpg", "04.jpg"]);
    }

    // Tests selection is stable across repeated runs
    // Verified by returning directory enumeration order
    #[test]
    fn test_selection_deterministic() {
        let temp_dir = TempDir::new().unwrap();
        touch(
            temp_dir.path(),
            &["m.jpg", "a.jpeg", "x.JPG", "k.jpg", "b.jpg", "q.jpeg"],
        );
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second.txt");

        let selector = ImageSelector::new(temp_dir.path(), None, 1, 4);
        selector.select_into(&first).unwrap();
        selector.select_into(&second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
        assert_eq!(
            read_manifest(&first).unwrap(),
            vec!["b.jpg", "k.jpg", "m.jpg", "q.jpeg"]
        );
    }

    // Tests single-file mode returns only that file
    // Verified by scanning the directory in single-file mode
    #[test]
    fn test_single_file() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["a.jpg", "b.jpg"]);

        let selected = ImageSelector::new(temp_dir.path(), Some("b.jpg".to_string()), 5, 10)
            .select()
            .unwrap();
        assert_eq!(selected, vec!["b.jpg"]);

        let missing = ImageSelector::new(temp_dir.path(), Some("c.jpg".to_string()), 0, 1)
            .select()
            .unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::Configuration);
    }

    // Tests error kinds for missing, empty and over-skipped directories
    // Verified by padding from an empty list
    #[test]
    fn test_selection_errors() {
        let temp_dir = TempDir::new().unwrap();

        let missing = ImageSelector::new(temp_dir.path().join("absent"), None, 0, 1)
            .select()
            .unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::Configuration);

        touch(temp_dir.path(), &["readme.txt"]);
        let empty = ImageSelector::new(temp_dir.path(), None, 0, 1)
            .select()
            .unwrap_err();
        assert_eq!(empty.kind(), ErrorKind::EmptyInput);

        touch(temp_dir.path(), &["a.jpg", "b.jpg"]);
        let skipped = ImageSelector::new(temp_dir.path(), None, 2, 1)
            .select()
            .unwrap_err();
        assert_eq!(skipped.kind(), ErrorKind::EmptyInput);
    }

    // Tests an unwritable manifest path fails after selection
    // Verified by ignoring manifest write errors
    #[test]
    fn test_unwritable_manifest() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), &["a.jpg"]);
        let manifest = temp_dir.path().join("no").join("list.txt");

        let error = ImageSelector::new(temp_dir.path(), None, 0, 1)
            .select_into(&manifest)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Io);
    }
}
