//! Tests for configuration defaults

#[cfg(test)]
mod tests {
    use autotiler::compose::Strategy;
    use autotiler::io::configuration::{
        DEFAULT_LAYOUT, DEFAULT_OUTPUT, DEFAULT_TEMPLATE, GeneratorConfig, PATTERN_COUNT,
    };
    use std::path::PathBuf;

    // Tests the default configuration mirrors the default paths
    // Verified by swapping the default output and template paths
    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();

        assert_eq!(config.template, PathBuf::from(DEFAULT_TEMPLATE));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.layout, PathBuf::from(DEFAULT_LAYOUT));
        assert_eq!(config.strategy, Strategy::Sequential);
        assert!(!config.show_progress);
    }

    // Tests the template strip holds one column per pattern
    // Verified by adding a sixth pattern column
    #[test]
    fn test_pattern_count() {
        assert_eq!(
            PATTERN_COUNT as usize,
            autotiler::bitmask::TilePattern::ALL.len()
        );
        assert_eq!(DEFAULT_TEMPLATE, "template.png");
        assert_eq!(DEFAULT_OUTPUT, "autotile.png");
        assert_eq!(DEFAULT_LAYOUT, "layout7x7.json");
    }
}
