//! Lifts `OPENWEATHER_API_KEY` from a `.env` file into the compile-time
//! environment so the browser bundle can read it with `option_env!`.

const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

fn main() {
    println!("cargo:rerun-if-env-changed={API_KEY_VAR}");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=../../.env");

    if std::env::var(API_KEY_VAR).is_ok() {
        return;
    }
    match dotenvy::var(API_KEY_VAR) {
        Ok(key) => println!("cargo:rustc-env={API_KEY_VAR}={key}"),
        Err(_) => println!("cargo:warning={API_KEY_VAR} is not set; weather lookups will fail until it is configured"),
    }
}
