//! Visibility overlay against a real document and a real file.

mod common;

use nice_lattes::config::SiteConfig;
use nice_lattes::extract::{Curriculum, Record, SectionKey};
use nice_lattes::visibility::{VisibilityConfig, VisibilityStore, filter};

#[test]
fn round_trip_preserves_sets() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = VisibilityStore::new(dir.path().join("visibility.json"));

    let configs = [
        VisibilityConfig::default(),
        VisibilityConfig::from_hidden(["IDIOMAS", "SOFTWARE"], Vec::<String>::new()),
        VisibilityConfig::from_hidden(["RESUMO-CV"], ["artigo-10", "idioma-ç", "área-🙂"]),
    ];
    for cfg in configs {
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }
}

#[test]
fn stale_keys_survive_save() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = VisibilityStore::new(dir.path().join("visibility.json"));
    let cfg = VisibilityConfig::from_hidden(["SECAO-ANTIGA"], ["artigo-999"]);
    store.save(&cfg).unwrap();

    let cv = Curriculum::from_bytes(&common::cv_latin1()).unwrap();
    let view = cv.public_view(&store.load());
    assert!(!view.is_empty());
    assert_eq!(store.load(), cfg);
}

#[test]
fn public_view_applies_overlay() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = VisibilityStore::new(dir.path().join("visibility.json"));

    let mut cfg = store.load();
    cfg.hide_section(SectionKey::Languages);
    cfg.hide_item("artigo-12");
    store.save(&cfg).unwrap();

    let cv = Curriculum::from_bytes(&common::cv_latin1()).unwrap();
    let view = cv.public_view(&store.load());

    assert!(view.iter().all(|s| s.key != SectionKey::Languages));
    assert!(view.iter().all(|s| !s.items.is_empty()));
    let articles = view.iter().find(|s| s.key == SectionKey::Articles).unwrap();
    let ids: Vec<_> = articles.items.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["artigo-10", "artigo-11"]);
}

#[test]
fn filter_is_idempotent_over_real_records() {
    let cv = Curriculum::from_bytes(&common::cv_latin1()).unwrap();
    let articles = cv.articles();
    let cfg = VisibilityConfig::from_hidden(Vec::<String>::new(), ["artigo-11"]);

    let once = filter(&articles, &cfg);
    assert_eq!(filter(&once, &cfg), once);
    assert_eq!(filter(&articles, &VisibilityConfig::default()), articles);
}

#[test]
fn site_config_drives_loader_and_store() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("cv.xml"), common::cv_latin1()).unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "cv_xml_file = \"cv.xml\"\nadmin_pin = \"2468\"\n",
    )
    .unwrap();

    let config = SiteConfig::load(&dir.path().join("config.toml")).unwrap();
    assert!(config.pin_matches("2468"));

    let store = VisibilityStore::new(&config.visibility_file);
    store
        .save(&VisibilityConfig::from_hidden(Vec::<String>::new(), ["resumo-cv"]))
        .unwrap();
    assert!(dir.path().join("data").join("visibility.json").exists());

    let cv = Curriculum::load(&config.cv_xml_file).unwrap();
    let view = cv.public_view(&store.load());
    assert!(view.iter().all(|s| s.key != SectionKey::Summary));
}
