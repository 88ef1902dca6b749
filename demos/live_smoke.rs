//! Smoke check against the live PetFriends deployment.
//!
//! This example shows how to:
//! - Build a client from environment credentials
//! - Authenticate and obtain a session key
//! - List the catalog and the account's own pets
//!
//! # Running
//!
//! ```bash
//! export PETFRIENDS_EMAIL="user@example.com"
//! export PETFRIENDS_PASSWORD="secret"
//! cargo run --example live_smoke
//! ```

use petfriends::{PetFilter, PetFriends};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = PetFriends::from_env()?;

    println!("Authenticating against {}...", client.config().base_url);
    let auth = client.authenticate().await?;
    anyhow::ensure!(
        auth.is_success(),
        "authentication rejected with status {}",
        auth.status
    );
    let key = auth.into_success().expect("checked above").key;

    let all = client.get_list_of_pets(&key, PetFilter::All).await?;
    let mine = client.get_list_of_pets(&key, PetFilter::MyPets).await?;

    let count = |r: &petfriends::ApiResponse<petfriends::PetList>| {
        r.success().map(|l| l.pets.len()).unwrap_or(0)
    };
    println!("Catalog pets: {}", count(&all));
    println!("My pets:      {}", count(&mine));

    if let Some(list) = mine.success() {
        for pet in &list.pets {
            println!(
                "  {} | {} ({}), age {}{}",
                pet.id,
                pet.name,
                pet.animal_type,
                pet.age,
                if pet.has_photo() { " [photo]" } else { "" }
            );
        }
    }

    Ok(())
}
