//! Tests for layout construction, JSON parsing and shape validation

#[cfg(test)]
mod tests {
    use autotiler::AutotileError;
    use autotiler::compose::Layout;
    use std::fs;
    use std::path::Path;

    // Tests row-major codes land at the right coordinates
    // Verified by building the array with (width, height) shape
    #[test]
    fn test_new_is_row_major() {
        let layout = Layout::new(3, 2, vec![0, 1, 2, 3, 4, 5]).expect("valid layout");

        assert_eq!(layout.width(), 3);
        assert_eq!(layout.height(), 2);
        assert_eq!(layout.cells().get([0, 2]).copied(), Some(2));
        assert_eq!(layout.cells().get([1, 0]).copied(), Some(3));
        assert_eq!(layout.cells().get([0, 3]).copied(), None);
        assert_eq!(layout.cells().dim(), (2, 3));
    }

    // Tests array length must equal width times height
    // Verified by skipping the length comparison
    #[test]
    fn test_length_mismatch_is_shape_error() {
        let result = Layout::new(2, 2, vec![0, 1, 2]);

        match result {
            Err(AutotileError::LayoutShape { reason }) => {
                assert!(reason.contains("3 codes"), "{reason}");
                assert!(reason.contains("requires 4"), "{reason}");
            }
            other => unreachable!("Expected LayoutShape, got {other:?}"),
        }
    }

    // Tests zero dimensions are rejected even with an empty array
    // Verified by removing the positive dimension check
    #[test]
    fn test_zero_dimension_is_shape_error() {
        assert!(matches!(
            Layout::new(0, 3, vec![]),
            Err(AutotileError::LayoutShape { .. })
        ));
        assert!(matches!(
            Layout::new(3, 0, vec![]),
            Err(AutotileError::LayoutShape { .. })
        ));
    }

    // Tests parsing of a well formed layout document
    // Verified by swapping width and height during parsing
    #[test]
    fn test_from_json_valid() {
        let text = r#"{ "width": 2, "height": 1, "array": [0, 255] }"#;
        let layout = Layout::from_json(text, Path::new("inline.json")).expect("valid json");

        assert_eq!(layout.width(), 2);
        assert_eq!(layout.height(), 1);
        assert_eq!(layout.cells().get([0, 1]).copied(), Some(255));
    }

    // Tests missing fields are shape errors rather than parse errors
    // Verified by making the fields mandatory in the file struct
    #[test]
    fn test_from_json_missing_field() {
        let text = r#"{ "width": 2, "array": [0, 1] }"#;
        let result = Layout::from_json(text, Path::new("inline.json"));

        match result {
            Err(AutotileError::LayoutShape { reason }) => assert!(reason.contains("height")),
            other => unreachable!("Expected LayoutShape, got {other:?}"),
        }
    }

    // Tests malformed JSON and out-of-range codes are parse errors
    // Verified by widening the code type to u16
    #[test]
    fn test_from_json_parse_errors() {
        let path = Path::new("broken.json");

        let truncated = Layout::from_json(r#"{ "width": 1"#, path);
        assert!(matches!(truncated, Err(AutotileError::LayoutParse { .. })));

        let too_big = Layout::from_json(r#"{ "width": 1, "height": 1, "array": [256] }"#, path);
        assert!(matches!(too_big, Err(AutotileError::LayoutParse { .. })));

        let negative = Layout::from_json(r#"{ "width": -1, "height": 1, "array": [0] }"#, path);
        assert!(matches!(negative, Err(AutotileError::LayoutParse { .. })));
    }

    // Tests reading from disk and reporting a missing file
    // Verified by returning a parse error for unreadable files
    #[test]
    fn test_open_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("layout.json");
        fs::write(&path, r#"{ "width": 1, "height": 1, "array": [7] }"#).expect("write layout");

        let layout = Layout::open(&path).expect("layout loads");
        assert_eq!(layout.cells().get([0, 0]).copied(), Some(7));

        let missing = Layout::open(&dir.path().join("absent.json"));
        match missing {
            Err(error) => {
                assert!(error.is_layout_load());
                assert!(error.to_string().contains("absent.json"));
            }
            Ok(_) => unreachable!("Expected missing layout to fail"),
        }
    }
}
