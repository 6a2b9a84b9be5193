use std::num::NonZeroU32;
use std::path::PathBuf;

use dadjoke_tui::config::{ConfigFlags, load_config_flags};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".dadjokerc");
    let content = r"
# comment
--search chicken

--limit 8

--log-file=jokes.log
";
    std::fs::write(&path, content).unwrap();

    let (flags, warnings) = load_config_flags(&path).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(flags.search.as_deref(), Some("chicken"));
    assert_eq!(flags.limit, NonZeroU32::new(8));
    assert_eq!(flags.log_file, Some(PathBuf::from("jokes.log")));
}

#[test]
fn test_local_file_overrides_global_and_cli_overrides_both() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".dadjokerc");
    std::fs::write(&global, "--search cat\n--limit 3\n--api-url http://global\n").unwrap();
    std::fs::write(&local, "--search dog\n").unwrap();

    let file_flags = load_config_flags(&global)
        .unwrap()
        .0
        .union(&load_config_flags(&local).unwrap().0);
    assert_eq!(file_flags.search.as_deref(), Some("dog"));
    assert_eq!(file_flags.limit, NonZeroU32::new(3));

    let cli = ConfigFlags {
        limit: NonZeroU32::new(10),
        ..ConfigFlags::default()
    };
    let effective = file_flags.union(&cli);
    assert_eq!(effective.search.as_deref(), Some("dog"));
    assert_eq!(effective.limit, NonZeroU32::new(10));
    assert_eq!(effective.api_url.as_deref(), Some("http://global"));
}

#[test]
fn test_missing_config_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let (flags, warnings) = load_config_flags(&dir.path().join("nope")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
    assert!(warnings.is_empty());
}

#[test]
fn test_rejected_lines_are_reported_with_their_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".dadjokerc");
    std::fs::write(&path, "--limit 0\n--bogus\n--search owl\n").unwrap();

    let (flags, warnings) = load_config_flags(&path).unwrap();
    assert_eq!(flags.search.as_deref(), Some("owl"));
    assert_eq!(flags.limit, None);
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.starts_with(&path.display().to_string())));
    assert!(warnings[0].contains("--limit"));
    assert!(warnings[1].contains("--bogus"));
}
