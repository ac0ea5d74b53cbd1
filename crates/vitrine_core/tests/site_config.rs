use std::fs;

use vitrine_core::{Fragment, Routes, SiteConfig, WidgetAttributes};

#[test]
fn load_reads_vitrine_toml_from_a_directory() {
    let dir = std::env::temp_dir().join(format!("vitrine-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("vitrine.toml"),
        "base_path = \"/xquiste-portfolio\"\n\n[pagination]\ndefault_archive = \"work\"\n",
    )
    .unwrap();

    let config = SiteConfig::load(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.base_path, "/xquiste-portfolio");
    assert_eq!(config.pagination.default_archive, "work");
    assert_eq!(config.keyboard.band_factor, 1.5);
}

#[test]
fn attributes_and_routes_compose_page_urls() {
    let config = SiteConfig::default();
    let routes = Routes::new(&config.base_path);

    let attrs = WidgetAttributes::from_pairs([("data-pagination", "5")]);
    let archive = attrs.archive(&config.pagination.default_archive);

    assert_eq!(attrs.total_pages(), 5);
    assert_eq!(routes.page(&archive, 3), "/pagination/blog/page-3.html");
    assert_eq!(routes.fragment(Fragment::Tags), "/components/tags.html");
}
