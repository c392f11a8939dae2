//! Basic usage example - mirror the persons of a running backend

use person_mirror::{MirrorConfig, Person, PersonMirror, PersonSortingOptions, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Base URL from args, else PERSON_MIRROR_* env vars, else localhost:8080
    let config = match std::env::args().nth(1) {
        Some(base_url) => MirrorConfig::new(&base_url)?,
        None => MirrorConfig::from_env()?,
    };

    println!("Mirroring persons from {}", config.base_url);
    let mirror = PersonMirror::from_config(&config)?;

    mirror
        .create(Person::new("Ada Lovelace"), |persons| {
            println!("After create: {} persons", persons.len());
        })
        .wait()
        .await?;

    mirror
        .list_all(PersonSortingOptions::default(), |persons| {
            println!("Found {} persons:", persons.len());
            for person in persons {
                println!("  - {} ({:?})", person.name, person.id);
            }
        })
        .wait()
        .await?;

    Ok(())
}
