use std::{env, fs, path::Path};

#[allow(dead_code)]
#[path = "src/config/schema.rs"]
mod schema;

const TEMPLATE: &str = "cfg.toml.example";
const SECRETS: &str = "cfg.toml";

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed={}", TEMPLATE);
    println!("cargo:rerun-if-changed={}", SECRETS);
    println!("cargo:rerun-if-changed=src/config/schema.rs");

    let template = fs::read_to_string(TEMPLATE)?;
    schema::check_template(&template)?;

    if Path::new(SECRETS).exists() {
        let secrets = fs::read_to_string(SECRETS)?;
        schema::check_parity(&template, &secrets)?;
        // toml_cfg looks for cfg.toml next to the target dir, it must find this same file
        println!("cargo:rustc-env=TOML_CFG=require_cfg_present");
        println!("cargo:rustc-env=BEDROOM_LIGHT_SECRETS_FILE={}", SECRETS);
    } else {
        println!(
            "cargo:warning=`{}` not found, building with the placeholder values of `{}`",
            SECRETS, TEMPLATE
        );
    }

    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
    Ok(())
}
