//! Tests for run configuration validation and path namespacing

#[cfg(test)]
mod tests {
    use batchprep::pipeline::config::{RunConfiguration, RunSettings, with_suffix};
    use batchprep::{ErrorKind, PrepareError};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn settings() -> RunSettings {
        RunSettings {
            batch_count: 3,
            batch_size: 2,
            skip_images: 1,
            image_size: 224,
            image_dir: Some(PathBuf::from("val")),
            image_list: Some(PathBuf::from("out/images")),
            batches_dir: Some(PathBuf::from("out/batches")),
            batch_list: Some(PathBuf::from("out/batch_list")),
            results_dir: Some(PathBuf::from("out/results")),
            ..RunSettings::default()
        }
    }

    // Tests derived counts and namespaced paths
    // Verified by ordering the suffix as batch count first
    #[test]
    fn test_resolve_derives_paths() {
        let config = RunConfiguration::resolve(settings()).unwrap();

        assert_eq!(config.images_count(), 6);
        assert_eq!(config.mode_suffix(), "-224-2-3");
        assert_eq!(config.image_list(), Path::new("out/images-224-2-3.txt"));
        assert_eq!(config.batches_dir(), Path::new("out/batches-224-2-3"));
        assert_eq!(config.batch_list(), Path::new("out/batch_list-224-2-3.txt"));
        assert_eq!(config.results_dir(), Path::new("out/results"));
        assert_eq!(config.image_dir(), Path::new("val"));
        assert_eq!(config.single_image(), None);
        assert!(!config.prepare_always());
    }

    // Tests suffixes append to the last path component without a separator
    // Verified by joining the suffix as a new component
    #[test]
    fn test_with_suffix() {
        assert_eq!(
            with_suffix(Path::new("a/b"), "-1-2-3", ".txt"),
            PathBuf::from("a/b-1-2-3.txt")
        );
        assert_eq!(with_suffix(Path::new("dir"), "-x", ""), PathBuf::from("dir-x"));
    }

    // Tests each required path is reported when missing
    // Verified by defaulting missing paths to the working directory
    #[test]
    fn test_missing_paths() {
        let cases: [(&str, fn(&mut RunSettings)); 5] = [
            ("image_list", |s| s.image_list = None),
            ("batches_dir", |s| s.batches_dir = None),
            ("batch_list", |s| s.batch_list = None),
            ("results_dir", |s| s.results_dir = None),
            ("image_dir", |s| s.image_dir = Some(PathBuf::new())),
        ];

        for (name, clear) in cases {
            let mut raw = settings();
            clear(&mut raw);
            match RunConfiguration::resolve(raw) {
                Err(PrepareError::MissingSetting { setting }) => assert_eq!(setting, name),
                other => unreachable!("Expected missing {name}, got {other:?}"),
            }
        }
    }

    // Tests zero counts and unsupported spline orders are rejected
    // Verified by accepting zero batch sizes
    #[test]
    fn test_invalid_parameters() {
        for raw in [
            RunSettings {
                batch_size: 0,
                ..settings()
            },
            RunSettings {
                batch_count: 0,
                ..settings()
            },
            RunSettings {
                image_size: 0,
                ..settings()
            },
            RunSettings {
                interpolation_order: 2,
                ..settings()
            },
        ] {
            let error = RunConfiguration::resolve(raw).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Configuration);
        }
    }

    // Tests a total image count that does not fit in usize is rejected
    // Verified by multiplying the counts without an overflow check
    #[test]
    fn test_images_count_overflow() {
        let error = RunConfiguration::resolve(RunSettings {
            batch_count: 2,
            batch_size: usize::MAX / 2 + 1,
            ..settings()
        })
        .unwrap_err();

        assert!(matches!(
            error,
            PrepareError::InvalidParameter {
                parameter: "batch_size",
                ..
            }
        ));
        assert_eq!(error.kind(), ErrorKind::Configuration);

        let largest = RunConfiguration::resolve(RunSettings {
            batch_count: 1,
            batch_size: usize::MAX,
            ..settings()
        })
        .unwrap();
        assert_eq!(largest.images_count(), usize::MAX);
    }

    // Tests a batches directory that cannot be listed as text is rejected
    // Verified by writing manifest entries with lossy path display
    #[cfg(unix)]
    #[test]
    fn test_non_utf8_batches_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let error = RunConfiguration::resolve(RunSettings {
            batches_dir: Some(PathBuf::from(OsStr::from_bytes(b"out/batch\xffes"))),
            ..settings()
        })
        .unwrap_err();

        assert!(matches!(
            error,
            PrepareError::InvalidParameter {
                parameter: "batches_dir",
                ..
            }
        ));
    }

    // Tests single-file mode overrides directory, counts and the regenerate flag
    // Verified by recomputing the suffix after the override
    #[test]
    fn test_single_file_override() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("cat.jpg");
        fs::write(&file, b"").unwrap();

        let config = RunConfiguration::resolve(RunSettings {
            image_dir: None,
            image_file: Some(file),
            ..settings()
        })
        .unwrap();

        assert_eq!(config.single_image(), Some("cat.jpg"));
        assert_eq!(config.image_dir(), temp_dir.path());
        assert_eq!(config.images_count(), 1);
        assert_eq!(config.skip_images(), 0);
        assert!(config.prepare_always());
        assert_eq!(config.mode_suffix(), "-224-2-3");
    }

    // Tests a missing single file is a configuration error
    // Verified by skipping the existence check
    #[test]
    fn test_single_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let error = RunConfiguration::resolve(RunSettings {
            image_file: Some(temp_dir.path().join("missing.jpg")),
            ..settings()
        })
        .unwrap_err();

        assert!(matches!(error, PrepareError::SingleFileNotFound { .. }));
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }
}
