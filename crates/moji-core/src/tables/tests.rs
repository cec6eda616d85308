use super::*;

fn default_set() -> TableSet {
    TableSet::build(&parse_tables_toml(DEFAULT_TABLES_TOML).unwrap()).unwrap()
}

#[test]
fn default_catalog_builds() {
    let set = default_set();
    assert_eq!(set.semi_voice().table.len(), 10);
    assert_eq!(set.full_voice().table.len(), 48);
    assert_eq!(set.devoice().table.len(), 58);
}

#[test]
fn default_token_counts() {
    let set = default_set();
    let expected = [
        (Style::Small, 40),
        (Style::Subscript, 38),
        (Style::SmallCaps, 25),
        (Style::Superscript, 66),
        (Style::Rune, 74),
        (Style::DoubleStruck, 62),
        (Style::Script, 52),
        (Style::BoldScript, 52),
        (Style::Fraktur, 52),
        (Style::Flag, 269),
        (Style::Square, 188),
        (Style::Squared, 105),
        (Style::SquareBlack, 33),
        (Style::Circled, 205),
        (Style::CircledBlack, 47),
        (Style::AsciiDecorative, 1268),
    ];
    for (style, len) in expected {
        assert_eq!(set.style(style).table.len(), len, "{}", style.name());
    }
}

#[test]
fn every_table_is_length_sorted() {
    let set = default_set();
    for style in Style::ALL {
        let lens: Vec<usize> = set.style(style).table.sources().iter().map(|s| s.len()).collect();
        assert!(
            lens.windows(2).all(|w| w[0] >= w[1]),
            "{} not sorted",
            style.name()
        );
    }
}

#[test]
fn devoice_is_inverse_of_voicing() {
    let set = default_set();
    let devoice = &set.devoice().table;
    assert_eq!(devoice.get("が"), Some("か"));
    assert_eq!(devoice.get("ぱ"), Some("は"));
    assert_eq!(devoice.get("ば"), Some("は"));
    assert_eq!(devoice.get("ヴ"), Some("ウ"));
    assert_eq!(devoice.get("ヺ"), Some("ヲ"));
    assert_eq!(devoice.get("ゞ"), Some("ゝ"));
    assert_eq!(devoice.get("か"), None);
}

#[test]
fn composite_keeps_sub_table_tokens() {
    let set = default_set();
    let ascii = &set.style(Style::AsciiDecorative).table;
    assert_eq!(ascii.get("日本"), Some("🇯🇵"));
    assert_eq!(ascii.get("キロメートル"), Some("㌖"));
    assert_eq!(ascii.get("th"), Some("ᚦ"));
    // Later sub-tables overwrite shared single characters.
    assert_eq!(ascii.get("A"), Some("ᴀ"));
    assert_eq!(ascii.get("12"), Some("⓬"));
}

#[test]
fn composite_sources_follow_sub_table_order() {
    let set = default_set();
    let ascii = set.style(Style::AsciiDecorative).table.sources();
    let pos = |tok: &str| ascii.iter().position(|s| s == tok).unwrap();
    // Same byte length: rune precedes the unit squares.
    assert!(pos("th") < pos("kg"));
    // Longer tokens always come first.
    assert!(pos("kg") < pos("k"));
}

#[test]
fn misaligned_table_names_the_table() {
    let mut specs = parse_tables_toml(DEFAULT_TABLES_TOML).unwrap();
    specs.fraktur.target.pop();
    let err = TableSet::build(&specs).unwrap_err();
    match &err {
        TableError::InTable { name, source } => {
            assert_eq!(*name, "fraktur");
            assert!(matches!(
                **source,
                TableError::LengthMismatch {
                    source_len: 52,
                    target_len: 51
                }
            ));
        }
        other => panic!("expected InTable, got {other:?}"),
    }
    assert!(err.to_string().starts_with("table `fraktur`: token count mismatch"));
}

#[test]
fn empty_table_is_rejected() {
    let mut specs = parse_tables_toml(DEFAULT_TABLES_TOML).unwrap();
    specs.small = TableSpec {
        source: String::new(),
        target: String::new(),
    };
    let err = TableSet::build(&specs).unwrap_err();
    assert!(matches!(err, TableError::InTable { name: "small", .. }));
}

#[test]
fn global_matches_default() {
    let set = global();
    assert_eq!(set.style(Style::Circled).table.get("A"), Some("Ⓐ"));
    assert_eq!(default_toml(), DEFAULT_TABLES_TOML);
}

#[test]
fn init_after_first_use_is_rejected() {
    let _ = global();
    let err = init_custom(DEFAULT_TABLES_TOML.to_string()).unwrap_err();
    assert!(matches!(err, TableError::AlreadyInitialized));
}
