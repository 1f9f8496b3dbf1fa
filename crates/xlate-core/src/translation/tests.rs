//! Tests for the recursive translator
//!
//! The two schema families here are tagged `source` and `dest`.

use super::*;
use crate::{Error, Result};

#[derive(Debug, Default, Clone, PartialEq)]
struct Mode(String);

crate::reflect_alias!(Mode => String);

mod src {
    use super::Mode;

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Named {
        pub name: String,
    }

    crate::reflect_struct!(Named {
        name: String => { "source": "Name" },
    });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Listing {
        pub list: Vec<String>,
    }

    crate::reflect_struct!(Listing { list: Vec<String> });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Common {
        pub version: String,
    }

    crate::reflect_struct!(Common {
        version: String => { "source": "version" },
    });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct File {
        pub path: String,
        pub mode: Option<Mode>,
        pub overwrite: Option<bool>,
    }

    crate::reflect_struct!(File {
        path: String => { "source": "path" },
        mode: Option<Mode> => { "source": "mode" },
        overwrite: Option<bool> => { "source": "overwrite,omitempty" },
    });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Config {
        pub common: Common,
        pub files: Vec<File>,
        pub label: Label,
    }

    crate::reflect_struct!(Config {
        #[embedded]
        common: Common,
        files: Vec<File> => { "source": "files" },
        label: Label => { "source": "label" },
    });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Label {
        pub old_name: String,
    }

    crate::reflect_struct!(Label {
        old_name: String => { "source": "old_name" },
    });

    pub struct Callback {
        pub name: String,
        pub run: fn() -> u8,
    }

    crate::reflect_struct!(Callback {
        name: String,
        run: fn() -> u8,
    });
}

mod dst {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Named {
        pub name: String,
    }

    crate::reflect_struct!(Named {
        name: String => { "dest": "Name" },
    });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Listing {
        pub list: Vec<String>,
    }

    crate::reflect_struct!(Listing { list: Vec<String> });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Common {
        pub version: String,
    }

    crate::reflect_struct!(Common {
        version: String => { "dest": "version" },
    });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct File {
        pub path: String,
        pub mode: Option<String>,
        pub overwrite: Option<bool>,
    }

    crate::reflect_struct!(File {
        path: String => { "dest": "path" },
        mode: Option<String> => { "dest": "mode" },
        overwrite: Option<bool> => { "dest": "overwrite" },
    });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Config {
        pub common: Common,
        pub files: Vec<File>,
        pub label: Label,
    }

    crate::reflect_struct!(Config {
        #[embedded]
        common: Common,
        files: Vec<File> => { "dest": "files" },
        label: Label => { "dest": "label" },
    });

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Label {
        pub new_name: String,
    }

    crate::reflect_struct!(Label {
        new_name: String => { "dest": "new_name" },
    });

    pub struct Callback {
        pub name: String,
        pub run: fn() -> u8,
    }

    crate::reflect_struct!(Callback {
        name: String,
        run: fn() -> u8,
    });

    impl Default for Callback {
        fn default() -> Self {
            Self {
                name: String::new(),
                run: || 0,
            }
        }
    }
}

fn translator() -> Translator {
    Translator::new("source", "dest")
}

fn label_hook(label: &src::Label) -> Result<(dst::Label, TranslationSet)> {
    let mut translations = TranslationSet::new("source", "dest");
    translations.add(
        &ContextPath::new("source").append("old_name"),
        &ContextPath::new("dest").append("new_name"),
    );
    Ok((
        dst::Label {
            new_name: label.old_name.clone(),
        },
        translations,
    ))
}

fn from_of(set: &TranslationSet, key: &str) -> String {
    set.get(key)
        .unwrap_or_else(|| panic!("missing translation for {key}\n{set}"))
        .from
        .to_string()
}

fn sample_config() -> src::Config {
    src::Config {
        common: src::Common {
            version: "1.4.0".to_string(),
        },
        files: vec![
            src::File {
                path: "/etc/motd".to_string(),
                mode: Some(Mode("0644".to_string())),
                overwrite: None,
            },
            src::File {
                path: "/etc/hostname".to_string(),
                mode: None,
                overwrite: Some(true),
            },
        ],
        label: src::Label {
            old_name: "primary".to_string(),
        },
    }
}

#[test]
fn test_identical_field() {
    let source = src::Named {
        name: "x".to_string(),
    };
    let mut dest = dst::Named::default();

    let translations = translator().translate(&source, &mut dest).unwrap();
    assert_eq!(dest.name, "x");
    assert_eq!(translations.len(), 1);
    assert_eq!(from_of(&translations, "$dest.Name"), "$source.Name");
}

#[test]
fn test_ordered_sequence() {
    let source = src::Listing {
        list: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    };
    let mut dest = dst::Listing::default();

    let translations = translator().translate(&source, &mut dest).unwrap();
    assert_eq!(dest.list, source.list);
    assert_eq!(translations.len(), 3);
    for i in 0..3 {
        assert_eq!(
            from_of(&translations, &format!("$dest.list.{i}")),
            format!("$source.list.{i}")
        );
    }
}

#[test]
fn test_empty_sequence_clears_destination() {
    let source = src::Listing::default();
    let mut dest = dst::Listing {
        list: vec!["stale".to_string()],
    };

    let translations = translator().translate(&source, &mut dest).unwrap();
    assert!(dest.list.is_empty());
    assert!(translations.is_empty());
}

#[test]
fn test_nil_pointer_leaves_default_and_no_entries() {
    let source = src::File {
        path: "/etc/motd".to_string(),
        mode: None,
        overwrite: None,
    };
    let mut dest = dst::File::default();

    let mut t = translator();
    t.register_hook(|m: &Mode| {
        let mut translations = TranslationSet::new("source", "dest");
        translations.add(&ContextPath::new("source"), &ContextPath::new("dest"));
        Ok((m.0.clone(), translations))
    })
    .unwrap();

    let translations = t.translate(&source, &mut dest).unwrap();
    assert_eq!(dest.mode, None);
    assert_eq!(dest.overwrite, None);
    assert_eq!(translations.keys().collect::<Vec<_>>(), vec!["$dest.path"]);
}

#[test]
fn test_pointer_is_transparent_in_paths() {
    let source = src::File {
        path: String::new(),
        mode: None,
        overwrite: Some(false),
    };
    let mut dest = dst::File::default();

    let translations = translator().translate(&source, &mut dest).unwrap();
    assert_eq!(dest.overwrite, Some(false));
    assert_eq!(from_of(&translations, "$dest.overwrite"), "$source.overwrite");
}

#[test]
fn test_pointer_element_alias_is_copied() {
    let source = src::File {
        path: String::new(),
        mode: Some(Mode("0600".to_string())),
        overwrite: None,
    };
    let mut dest = dst::File::default();

    let translations = translator().translate(&source, &mut dest).unwrap();
    assert_eq!(dest.mode.as_deref(), Some("0600"));
    assert_eq!(from_of(&translations, "$dest.mode"), "$source.mode");
}

#[test]
fn test_full_config_with_hooks() {
    let mut t = translator();
    t.register_hook(|m: &Mode| {
        let mut translations = TranslationSet::new("source", "dest");
        translations.add(&ContextPath::new("source"), &ContextPath::new("dest"));
        Ok((m.0.clone(), translations))
    })
    .unwrap();
    t.register_hook(label_hook).unwrap();
    t.check::<src::Config, dst::Config>().unwrap();

    let source = sample_config();
    let mut dest = dst::Config::default();
    let translations = t.translate(&source, &mut dest).unwrap();

    assert_eq!(dest.common.version, "1.4.0");
    assert_eq!(dest.files.len(), 2);
    assert_eq!(dest.files[0].mode.as_deref(), Some("0644"));
    assert_eq!(dest.files[1].overwrite, Some(true));
    assert_eq!(dest.label.new_name, "primary");

    // embedded struct does not add a segment
    assert_eq!(from_of(&translations, "$dest.version"), "$source.version");
    assert_eq!(from_of(&translations, "$dest.files.0.path"), "$source.files.0.path");
    assert_eq!(from_of(&translations, "$dest.files.0.mode"), "$source.files.0.mode");
    assert_eq!(from_of(&translations, "$dest.files.1.path"), "$source.files.1.path");
    assert_eq!(
        from_of(&translations, "$dest.files.1.overwrite"),
        "$source.files.1.overwrite"
    );
    assert_eq!(
        from_of(&translations, "$dest.label.new_name"),
        "$source.label.old_name"
    );
    assert_eq!(translations.len(), 6);
}

#[test]
fn test_hook_with_reenters_translator() {
    let mut t = translator();
    t.register_hook_with(|tr: &Translator, files: &Vec<src::File>| {
        // reverse the order, translating each element generically
        let mut out: Vec<dst::File> = Vec::new();
        let mut translations = TranslationSet::new(tr.from_tag(), tr.to_tag());
        for (i, file) in files.iter().rev().enumerate() {
            let mut converted = dst::File::default();
            let nested = tr.translate(file, &mut converted)?;
            translations.merge_rebased(
                &ContextPath::new(tr.from_tag()).append(files.len() - 1 - i),
                &ContextPath::new(tr.to_tag()).append(i),
                &nested,
            );
            out.push(converted);
        }
        Ok((out, translations))
    })
    .unwrap();
    t.register_hook(label_hook).unwrap();

    let source = sample_config();
    let mut dest = dst::Config::default();
    let translations = t.translate(&source, &mut dest).unwrap();

    assert_eq!(dest.files[0].path, "/etc/hostname");
    assert_eq!(dest.files[1].path, "/etc/motd");
    assert_eq!(from_of(&translations, "$dest.files.0.path"), "$source.files.1.path");
    assert_eq!(from_of(&translations, "$dest.files.1.path"), "$source.files.0.path");
    assert_eq!(
        from_of(&translations, "$dest.files.0.overwrite"),
        "$source.files.1.overwrite"
    );
    assert_eq!(from_of(&translations, "$dest.files.1.mode"), "$source.files.0.mode");
    assert_eq!(translations.len(), 6);
}

#[test]
fn test_unsupported_kind_fails_before_copying() {
    let source = src::Callback {
        name: "x".to_string(),
        run: || 1,
    };
    let mut dest = dst::Callback::default();

    let err = translator().translate(&source, &mut dest).unwrap_err();
    assert!(matches!(err, Error::DisallowedKind { .. }));
    assert!(dest.name.is_empty());
}

#[test]
fn test_incompatible_pair_without_hook() {
    let source = src::Label {
        old_name: "x".to_string(),
    };
    let mut dest = dst::Label::default();

    let err = translator().translate(&source, &mut dest).unwrap_err();
    match err {
        Error::NoConversion { from, to } => {
            assert!(from.ends_with("src::Label"));
            assert!(to.ends_with("dst::Label"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_top_level_hook() {
    let mut t = translator();
    t.register_hook(label_hook).unwrap();

    let source = src::Label {
        old_name: "x".to_string(),
    };
    let mut dest = dst::Label::default();
    let translations = t.translate(&source, &mut dest).unwrap();
    assert_eq!(dest.new_name, "x");
    assert_eq!(from_of(&translations, "$dest.new_name"), "$source.old_name");
}

#[test]
fn test_alias_converts_to_bare_primitive() {
    let mut plain = String::new();
    let translations = translator()
        .translate(&Mode("0644".to_string()), &mut plain)
        .unwrap();
    assert_eq!(plain, "0644");
    assert_eq!(from_of(&translations, "$dest"), "$source");

    let mut alias = Mode::default();
    let translations = translator().translate(&"0755".to_string(), &mut alias).unwrap();
    assert_eq!(alias, Mode("0755".to_string()));
    assert_eq!(translations.len(), 1);
}

#[test]
fn test_calls_do_not_accumulate() {
    let t = translator();
    let mut dest = dst::Listing::default();

    let first = t
        .translate(
            &src::Listing {
                list: vec!["a".to_string(), "b".to_string()],
            },
            &mut dest,
        )
        .unwrap();
    assert_eq!(first.len(), 2);

    let second = t
        .translate(
            &src::Listing {
                list: vec!["c".to_string()],
            },
            &mut dest,
        )
        .unwrap();
    assert_eq!(second.len(), 1);
    assert!(second.contains("$dest.list.0"));
    assert!(!second.contains("$dest.list.1"));
    assert_eq!(dest.list, vec!["c".to_string()]);
}

#[test]
fn test_check_reports_missing_conversion() {
    let t = translator();
    assert!(t.check::<src::Named, dst::Named>().is_ok());
    assert!(matches!(
        t.check::<src::Label, dst::Label>(),
        Err(Error::NoConversion { .. })
    ));
}
