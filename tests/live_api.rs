//! End-to-end tests against a live PetFriends deployment.
//!
//! Ignored by default. Run with credentials in the environment or `.env`:
//!
//! ```text
//! PETFRIENDS_VALID_EMAIL=... PETFRIENDS_VALID_PASSWORD=... \
//!     cargo test --test live_api -- --ignored
//! ```
//!
//! Tests share one account, so they run serially. Each one builds its own
//! client and obtains its own key.

mod common;

use common::fixture_photo;
use petfriends::config::{MISSING_AUTH_KEY_TEXT, USER_NOT_FOUND_TEXT};
use petfriends::{AuthKey, PetFilter, PetFriendsClient, PetList, Settings};
use serial_test::serial;

struct Live {
    client: PetFriendsClient,
    settings: Settings,
}

impl Live {
    fn new() -> Self {
        Self {
            client: PetFriendsClient::new().expect("Failed to create client"),
            settings: Settings::from_env().expect("Live tests need PETFRIENDS_VALID_EMAIL/PASSWORD"),
        }
    }

    async fn key(&self) -> AuthKey {
        let response = self
            .client
            .obtain_key(&self.settings.valid_email, &self.settings.valid_password)
            .await
            .expect("key request failed");
        assert_eq!(response.status, 200, "could not obtain key: {:?}", response.body);
        response.auth_key().expect("key response without key")
    }

    async fn my_pets(&self, key: &AuthKey) -> PetList {
        let response = self
            .client
            .list_pets(key, &PetFilter::MyPets)
            .await
            .expect("list request failed");
        assert_eq!(response.status, 200);
        response.pets().expect("malformed pet list")
    }

    /// Own pets, creating one first if there are none.
    async fn my_pets_non_empty(&self, key: &AuthKey) -> PetList {
        let pets = self.my_pets(key).await;
        if !pets.is_empty() {
            return pets;
        }
        let response = self
            .client
            .create_pet(key, "Кот", "тигр", "10", fixture_photo())
            .await
            .expect("create request failed");
        assert_eq!(response.status, 200);
        self.my_pets(key).await
    }
}

// ============== Key Issuance ==============

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_get_api_key_for_valid_user() {
    let live = Live::new();
    let response = live
        .client
        .obtain_key(&live.settings.valid_email, &live.settings.valid_password)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.has_field("key"));
}

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_get_api_key_for_invalid_email() {
    let live = Live::new();
    let response = live
        .client
        .obtain_key(&live.settings.invalid_email, &live.settings.invalid_password)
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert!(response.body.contains_text(USER_NOT_FOUND_TEXT));
}

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_get_api_key_for_valid_email_and_invalid_password() {
    let live = Live::new();
    let response = live
        .client
        .obtain_key(&live.settings.valid_email, &live.settings.invalid_password)
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert!(response.body.contains_text(USER_NOT_FOUND_TEXT));
}

// ============== Listing ==============

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_get_all_pets_with_valid_key() {
    let live = Live::new();
    let key = live.key().await;

    let response = live.client.list_pets(&key, &PetFilter::All).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(!response.pets().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_get_my_pets_with_valid_key() {
    let live = Live::new();
    let key = live.key().await;

    let response = live.client.list_pets(&key, &PetFilter::MyPets).await.unwrap();

    assert_eq!(response.status, 200);
    // May be empty; it only has to be a well-formed collection
    response.pets().unwrap();
}

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_get_all_pets_with_invalid_key() {
    let live = Live::new();

    let response = live
        .client
        .list_pets(&AuthKey::new("000"), &PetFilter::All)
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert!(response.body.contains_text(MISSING_AUTH_KEY_TEXT));
}

// ============== Creation ==============

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_add_new_pet_simple_with_valid_data() {
    let live = Live::new();
    let key = live.key().await;

    let response = live
        .client
        .create_pet_simple(&key, "Волчара", "волк", "100")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body.get_str("name"), Some("Волчара"));

    let created = response.pet().unwrap();
    let pets = live.my_pets(&key).await;
    let listed = pets.find(&created.id).expect("created pet missing from my_pets");
    assert_eq!(listed.name, "Волчара");
}

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_add_new_pet_with_photo() {
    let live = Live::new();
    let key = live.key().await;

    let response = live
        .client
        .create_pet(&key, "Кот", "тигр", "10", fixture_photo())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let pet = response.pet().unwrap();
    assert_eq!(pet.name, "Кот");
    assert!(pet.has_photo());
}

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_add_new_pet_simple_with_invalid_key() {
    let live = Live::new();

    let response = live
        .client
        .create_pet_simple(&AuthKey::new("00000"), "Котик", "пернатый", "99")
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert!(response.body.contains_text(MISSING_AUTH_KEY_TEXT));
}

// ============== Update / Delete / Photo ==============

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_successful_update_self_pet_info() {
    let live = Live::new();
    let key = live.key().await;
    let pets = live.my_pets_non_empty(&key).await;
    let pet_id = pets.first().unwrap().id.clone();

    let response = live
        .client
        .update_pet(&key, &pet_id, "Жора", "зверь", "50")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body.get_str("name"), Some("Жора"));

    let pets = live.my_pets(&key).await;
    assert_eq!(pets.find(&pet_id).map(|p| p.name.as_str()), Some("Жора"));
}

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_successful_delete_self_pet() {
    let live = Live::new();
    let key = live.key().await;
    let pets = live.my_pets_non_empty(&key).await;
    let pet_id = pets.first().unwrap().id.clone();

    let response = live.client.delete_pet(&key, &pet_id).await.unwrap();
    assert_eq!(response.status, 200);

    let pets = live.my_pets(&key).await;
    assert!(!pets.contains_id(&pet_id));
}

#[tokio::test]
#[ignore = "requires live PetFriends credentials"]
#[serial]
async fn test_add_pet_photo_with_valid_data() {
    let live = Live::new();
    let key = live.key().await;
    let pets = live.my_pets_non_empty(&key).await;
    let pet_id = pets.first().unwrap().id.clone();

    let response = live
        .client
        .attach_photo(&key, &pet_id, fixture_photo())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.pet().unwrap().has_photo());
}
