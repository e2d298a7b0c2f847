use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;
const VARIANT_MODES: [&str; 3] = ["light", "dark", "system"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct VariantManifest {
    id: String,
    name: String,
    mode: String,
    #[serde(default)]
    icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeManifest {
    id: String,
    name: String,
    description: String,
    variants: Vec<VariantManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccentManifest {
    id: String,
    name: String,
    light: String,
    dark: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogManifest {
    schema_version: u32,
    themes: Vec<ThemeManifest>,
    #[serde(default)]
    accents: Vec<AccentManifest>,
}

#[derive(Debug, Serialize)]
struct GeneratedCatalog<'a> {
    themes: &'a [ThemeManifest],
    accents: &'a [AccentManifest],
}

fn validate(manifest: &CatalogManifest, source: &str) {
    if manifest.schema_version != SCHEMA_VERSION {
        panic!(
            "theme catalog schema mismatch in {source}: expected {SCHEMA_VERSION} found {}",
            manifest.schema_version
        );
    }
    if manifest.themes.is_empty() {
        panic!("theme catalog in {source} declares no themes");
    }

    let mut theme_ids = HashSet::new();
    let mut variant_ids = HashSet::new();
    for theme in &manifest.themes {
        if !theme_ids.insert(theme.id.as_str()) {
            panic!("duplicate theme id `{}` in {source}", theme.id);
        }
        if theme.variants.is_empty() {
            panic!("theme `{}` in {source} declares no variants", theme.id);
        }
        for variant in &theme.variants {
            if !VARIANT_MODES.contains(&variant.mode.as_str()) {
                panic!(
                    "variant `{}` in {source} has unknown mode `{}`",
                    variant.id, variant.mode
                );
            }
            let expected_id = format!("{}-{}", theme.id, variant.mode);
            if variant.id != expected_id {
                panic!(
                    "variant `{}` in {source} must be named `{expected_id}`",
                    variant.id
                );
            }
            if !variant_ids.insert(variant.id.as_str()) {
                panic!("duplicate variant id `{}` in {source}", variant.id);
            }
        }
    }

    let mut accent_ids = HashSet::new();
    for accent in &manifest.accents {
        if !accent_ids.insert(accent.id.as_str()) {
            panic!("duplicate accent id `{}` in {source}", accent.id);
        }
        for value in [&accent.light, &accent.dark] {
            if !(value.starts_with("hsl(") && value.ends_with(')')) {
                panic!(
                    "accent `{}` in {source} must use `hsl(...)` values, found `{value}`",
                    accent.id
                );
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("themes.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: CatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let json = serde_json::to_string_pretty(&GeneratedCatalog {
        themes: &manifest.themes,
        accents: &manifest.accents,
    })
    .expect("serialize theme catalog");
    let generated = format!(
        "/// Build-time generated theme catalog JSON.\n\
pub const THEME_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("theme_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
