use std::fs;

use hanconv::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let presets: Vec<&str> = s.preset_names().collect();
    println!(
        "OK: dictionary.extension={}, presets=[{}]",
        s.dictionary.extension,
        presets.join(", ")
    );
}
