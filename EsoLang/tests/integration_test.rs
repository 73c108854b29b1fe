use esolang::prelude::*;
use std::path::PathBuf;
use tempfile::tempdir;

fn sample_lang() -> LangFile {
    let mut lang = LangFile::new(12);
    for (key, text) in [
        ("18173141-0-2944", "Hello, world!"),
        ("7949764-0-51729", "How are you?"),
        ("3427285-5-36", "Line one\nLine two"),
        ("3427285-5-37", "Hello, world!"),
        ("8290981-0-1", "Quoted \\\"text\\\" and\u{a0}space"),
    ] {
        lang.entries.push(LangEntry::new(key.parse().unwrap(), text.as_bytes().to_vec()));
    }
    lang
}

fn tagged(pairs: &[(&str, &str)]) -> TaggedMap {
    pairs
        .iter()
        .map(|(k, v)| (TaggedKey::parse(k), v.as_bytes().to_vec()))
        .collect()
}

#[test]
fn test_lang_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("en.lang");
    let lang = sample_lang();

    write_lang(&path, &lang).unwrap();
    let decoded = read_lang(&path).unwrap();

    assert_eq!(decoded, lang);
    // Two entries share "Hello, world!"
    let data = std::fs::read(&path).unwrap();
    let table_start = 8 + 16 * lang.len();
    assert_eq!(
        data.len() - table_start,
        lang.entries
            .iter()
            .map(|e| e.text.as_slice())
            .collect::<std::collections::HashSet<_>>()
            .iter()
            .map(|t| t.len() + 1)
            .sum::<usize>()
    );
    assert_eq!(lang.unique_strings(), 4);
}

#[test]
fn test_lang_to_tagged_and_back() {
    let dir = tempdir().unwrap();
    let txt = dir.path().join("en.lang.txt");
    let lang = sample_lang();

    write_tagged_file(&txt, &lang.to_tagged(false)).unwrap();
    let text = std::fs::read(&txt).unwrap();
    // One line per entry, line breaks escaped
    assert_eq!(text.iter().filter(|&&b| b == b'\n').count(), lang.len());

    let rebuilt = LangFile::from_tagged(lang.num_sections, &read_tagged(&txt).unwrap());
    assert_eq!(encode_lang(&rebuilt).unwrap(), encode_lang(&lang).unwrap());
}

#[test]
fn test_subset_merge_workflow() {
    let dir = tempdir().unwrap();
    let lang_path = dir.path().join("fr.lang");
    let subset_path = dir.path().join("fr_items.lang.txt");
    write_lang(&lang_path, &sample_lang()).unwrap();
    std::fs::write(
        &subset_path,
        "# items section\n{{7949764-0-51729:}}Comment ça va ?\n{{1-1-1:}}Unknown\n",
    )
    .unwrap();

    let mut lang = read_lang(&lang_path).unwrap();
    let result = lang.merge_subset(&read_tagged(&subset_path).unwrap());
    write_lang(&lang_path, &lang).unwrap();

    assert_eq!(result.replaced, 1);
    assert_eq!(result.not_found, vec![TaggedKey::parse("1-1-1")]);
    let reread = read_lang(&lang_path).unwrap();
    let key: EntryKey = "7949764-0-51729".parse().unwrap();
    assert_eq!(reread.get(&key).unwrap().text, "Comment ça va ?".as_bytes());
}

#[test]
fn test_reconcile_workflow() {
    let translated = tagged(&[
        ("1-0-1", "Ouvre la porte d'entrée"),
        ("1-0-2", "Épée longue"),
        ("1-0-3", "Bouclier"),
    ]);
    let previous = tagged(&[
        ("1-0-1", "Open the door"),
        ("1-0-2", "Long sword"),
        ("1-0-3", "Shield"),
    ]);
    let current = tagged(&[
        ("1-0-1", "Open the door"),
        ("1-0-2", "Gather five wolf pelts"),
        ("1-0-4", "Bow"),
    ]);

    let result = reconcile(&translated, &previous, &current);

    assert_eq!(
        result.merged,
        tagged(&[
            ("1-0-1", "Ouvre la porte d'entrée"),
            ("1-0-2", "Gather five wolf pelts"),
            ("1-0-4", "Bow"),
        ])
    );
    assert_eq!(result.verify.len(), 1);
    assert_eq!(result.verify[0].key, TaggedKey::parse("1-0-2"));
    assert_eq!(result.deleted.len(), 1);
    assert_eq!(result.outcome_of(&TaggedKey::parse("1-0-3")), Some(Outcome::Deleted));

    // The merged map packs straight into a container
    let lang = LangFile::from_tagged(1, &result.merged);
    assert_eq!(lang.len(), 3);

    let mut log = Vec::new();
    write_verify_log(&mut log, &result.verify).unwrap();
    let log = String::from_utf8(log).unwrap();
    assert!(log.contains("{{1-0-2:translated:}}Épée longue"));
    assert!(log.contains("{{1-0-2:previous:}}Long sword"));
    assert!(log.contains("{{1-0-2:current:}}Gather five wolf pelts"));
}

#[test]
fn test_korean_remap_workflow() {
    let dir = tempdir().unwrap();
    let path: PathBuf = dir.path().join("kr.lang");
    let mut lang = LangFile::new(1);
    lang.entries.push(LangEntry::new(
        "1-0-1".parse().unwrap(),
        to_client("안녕하세요 |cFFFFFF친구|r".as_bytes()),
    ));
    write_lang(&path, &lang).unwrap();

    let decoded = read_lang(&path).unwrap();
    assert_eq!(
        from_client(&decoded.entries[0].text),
        "안녕하세요 |cFFFFFF친구|r".as_bytes()
    );
}

#[test]
fn test_source_diff() {
    let previous = tagged(&[("1-0-1", "Open the door"), ("1-0-2", "Old line")]);
    let current = tagged(&[("1-0-1", "Open the gate"), ("1-0-3", "New line")]);

    let diff = diff_sources(&previous, &current);
    assert_eq!(diff.close_match.len(), 1);
    assert_eq!(diff.added.len(), 1);
    assert_eq!(diff.deleted.len(), 1);
    assert!(diff.matched.is_empty());
}

#[test]
fn test_corrupt_lang_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.lang");
    let mut data = encode_lang(&sample_lang()).unwrap();
    data.truncate(data.len() - 1);
    std::fs::write(&path, &data).unwrap();

    assert!(matches!(read_lang(&path), Err(Error::UnterminatedString { .. })));
}
