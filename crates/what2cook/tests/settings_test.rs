use config::Environment;
use std::collections::HashMap;
use std::time::Duration;
use what2cook::{ENV_PREFIX, Recipe, Settings};

fn env(vars: &[(&str, &str)]) -> Environment {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Environment::with_prefix(ENV_PREFIX).source(Some(map))
}

#[test]
fn test_defaults_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::from_sources(
        None,
        env(&[("WHAT2COOK_DATA_DIR", dir.path().to_str().unwrap())]),
    )
    .unwrap();

    assert_eq!(settings.text_model(), "gemini-2.5-flash");
    assert_eq!(settings.image_model(), "imagen-4.0-generate-001");
    assert_eq!(
        settings.base_url(),
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(*settings.image_delay_ms(), 1000);
    assert!(*settings.generate_images());
    assert_eq!(settings.data_dir(), dir.path());
}

#[test]
fn test_file_then_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        format!(
            "text_model = \"gemini-2.5-pro\"\nimage_delay_ms = 2500\ngenerate_images = false\ndata_dir = {:?}\n",
            dir.path().join("recipes")
        ),
    )
    .unwrap();

    let settings = Settings::from_sources(
        Some(&path),
        env(&[("WHAT2COOK_IMAGE_DELAY_MS", "500")]),
    )
    .unwrap();

    assert_eq!(settings.text_model(), "gemini-2.5-pro");
    assert!(!*settings.generate_images());
    assert_eq!(*settings.image_delay_ms(), 500);
    assert_eq!(settings.data_dir(), &dir.path().join("recipes"));

    let options = settings.generation_options().unwrap();
    assert_eq!(options.text_model(), "gemini-2.5-pro");
    assert_eq!(*options.image_delay(), Duration::from_millis(500));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Settings::from_sources(Some(&dir.path().join("absent.toml")), env(&[]));
    assert!(result.is_err());
}

#[test]
fn test_recipe_book_persists_under_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::from_sources(
        None,
        env(&[("WHAT2COOK_DATA_DIR", dir.path().to_str().unwrap())]),
    )
    .unwrap();

    let recipe: Recipe = serde_json::from_str(
        r#"{"recipeName": "Upma", "description": "Semolina porridge.", "prepTime": "5 minutes",
            "cookTime": "15 minutes", "servings": "2 servings",
            "ingredients": [{"name": "semolina", "quantity": "1 cup"}],
            "instructions": ["Roast the semolina."]}"#,
    )
    .unwrap();

    assert!(settings.recipe_book().save_recipe(&recipe).unwrap());
    assert!(settings.recipe_book().is_saved("Upma"));
}
