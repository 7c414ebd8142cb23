// Integration tests for labels, canonical keys and the particle table.

use quark_core::*;

#[test]
fn labels_round_trip_through_text() {
    for label in Label::ALL {
        let text = label.to_string();
        assert_eq!(text.parse::<Label>().unwrap(), label);
        assert_eq!(label.is_anti(), text.starts_with(ANTI_PREFIX));
    }
    assert_eq!(Label::ALL.iter().filter(|l| l.is_anti()).count(), 6);
}

#[test]
fn unknown_label_text_is_rejected() {
    assert_eq!(
        "Sideways".parse::<Label>(),
        Err(LabelError::Unknown("Sideways".to_string()))
    );
    assert!("Anti-".parse::<Label>().is_err());
    assert!("".parse::<Composition>().is_err());
    assert!("Up+Bogus".parse::<Composition>().is_err());
}

#[test]
fn canonical_key_sorts_label_text() {
    let c: Composition = "Up+Anti-Down".parse().unwrap();
    assert_eq!(c.canonical_key().as_str(), "Anti-Down+Up");
    let c: Composition = "Up+Strange+Down".parse().unwrap();
    assert_eq!(c.canonical_key().to_string(), "Down+Strange+Up");
}

#[test]
fn canonical_key_is_permutation_invariant() {
    let labels = [
        Label::quark(Flavor::Up),
        Label::antiquark(Flavor::Charm),
        Label::quark(Flavor::Down),
        Label::quark(Flavor::Up),
    ];
    let reference = Composition::from_labels(labels).unwrap().canonical_key();
    // every rotation and every reversal
    for shift in 0..labels.len() {
        let mut rotated = labels;
        rotated.rotate_left(shift);
        let key = Composition::from_labels(rotated).unwrap().canonical_key();
        assert_eq!(key, reference);
        rotated.reverse();
        let key = Composition::from_labels(rotated).unwrap().canonical_key();
        assert_eq!(key, reference);
    }
}

#[test]
fn registry_lookup_hits_and_misses() {
    let registry = Registry::builtin();
    assert_eq!(registry.len(), 11);

    let key = CanonicalKey::from_texts(["Up", "Anti-Down"]);
    let hit = registry.lookup(&key).unwrap();
    assert_eq!(hit.name, "π+");
    assert_eq!(hit.style, "pi-plus");

    assert!(registry.lookup(&CanonicalKey::from_texts(["Up", "Up"])).is_none());
}

#[test]
fn registry_keys_are_canonical() {
    for entry in KNOWN_PARTICLES {
        let comp: Composition = entry.key.parse().unwrap();
        assert_eq!(comp.canonical_key().as_str(), entry.key);
    }
}

#[test]
fn classification_agrees_with_registry_table() {
    let registry = Registry::builtin();
    for entry in registry.entries() {
        let comp: Composition = entry.key.parse().unwrap();
        let class = classify(&registry, &comp);
        assert_eq!(class.display_name, entry.name, "{}", entry.key);
        assert_eq!(class.style_tag, Some(entry.style), "{}", entry.key);
        assert!(class.is_known());
    }
}

#[test]
fn single_constituent_is_unknown() {
    let registry = Registry::builtin();
    let class = classify(&registry, &Composition::single(Label::quark(Flavor::Top)));
    assert_eq!(class.display_name, UNKNOWN);
    assert!(!class.is_known());
}

#[test]
fn compositions_longer_than_cap_are_rejected() {
    let six = vec![Label::quark(Flavor::Up); MAX_CONSTITUENTS + 1];
    assert_eq!(
        Composition::from_labels(six),
        Err(LabelError::TooLong { len: 6, max: 5 })
    );
    assert_eq!(
        "Up+Up+Up+Up+Up+Up".parse::<Composition>(),
        Err(LabelError::TooLong { len: 6, max: 5 })
    );
    assert_eq!("Up+Up+Up+Up+Up".parse::<Composition>().unwrap().len(), 5);
}

#[test]
fn concat_respects_cap() {
    let three: Composition = "Up+Down+Up".parse().unwrap();
    let two: Composition = "Anti-Up+Down".parse().unwrap();
    assert_eq!(three.concat(&two).unwrap().to_string(), "Up+Down+Up+Anti-Up+Down");
    assert!(matches!(three.concat(&three), Err(LabelError::TooLong { len: 6, .. })));
}
