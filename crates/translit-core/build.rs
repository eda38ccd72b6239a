fn main() {
    // Validate embedded data files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    for (path, content) in [
        ("src/table/devanagari.json", include_str!("src/table/devanagari.json")),
        ("src/table/bengali.json", include_str!("src/table/bengali.json")),
        ("src/table/iast.json", include_str!("src/table/iast.json")),
        ("src/table/itrans.json", include_str!("src/table/itrans.json")),
    ] {
        validate_json_object(path, content);
    }
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_json_object(path: &str, content: &str) {
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(serde_json::Value::Object(map)) if !map.is_empty() => {}
        Ok(_) => panic!("{path} must be a non-empty JSON object"),
        Err(e) => panic!("{path} contains invalid JSON: {e}"),
    }
}
