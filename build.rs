use std::env;
use std::fs;
use std::path::Path;

/// Claves que el cliente lee con `option_env!` (ver src/config.rs)
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "LOG_LEVEL",
    "MIN_PASSWORD_LENGTH",
    "NOTIFICATION_ENTER_DELAY_MS",
    "NOTIFICATION_VISIBLE_MS",
    "NOTIFICATION_FADE_MS",
    "MODAL_CLOSE_ANIMATION_MS",
    "REJECT_ALERT_DELAY_MS",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        // Sin .env: config.rs aplica sus valores por defecto
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Línea ignorada en .env: {}", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }

        // La variable del entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
