use std::path::PathBuf;

/// Split a classpath argument the way the platform splits `PATH`
pub fn parse_classpath(classpath_arg: &str) -> Vec<PathBuf> {
    std::env::split_paths(classpath_arg)
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_root() {
        assert_eq!(parse_classpath("src/main/java"), vec![PathBuf::from("src/main/java")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_multiple_roots_skip_empty_entries() {
        assert_eq!(
            parse_classpath("build/descriptors::src/main/java"),
            vec![
                PathBuf::from("build/descriptors"),
                PathBuf::from("src/main/java")
            ]
        );
    }
}
