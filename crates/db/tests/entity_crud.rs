//! Integration tests for the entity repositories against a real
//! database: clients, shoots, images, slug uniqueness, counters, and
//! the archive-move flow.

use chrono::{Datelike, NaiveDate, Utc};
use sqlx::PgPool;

use darkroom_core::slug::{shoot_slug, slugify};
use darkroom_db::models::client::{CreateClient, UpdateClient};
use darkroom_db::models::image::CreateShootImage;
use darkroom_db::models::shoot::{CreateShoot, UpdateShoot};
use darkroom_db::repositories::{ClientRepo, ImageRepo, ShootRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_client(name: &str) -> CreateClient {
    CreateClient {
        name: name.to_string(),
        email: format!("{}@example.com", slugify(name)),
        phone: None,
        address: None,
    }
}

async fn create_client(pool: &PgPool, name: &str) -> darkroom_db::models::client::Client {
    ClientRepo::create(pool, &new_client(name), &slugify(name), Some(1))
        .await
        .unwrap()
}

fn new_shoot(client_id: i64, title: &str) -> CreateShoot {
    CreateShoot {
        client_id: Some(client_id),
        title: Some(title.to_string()),
        description: None,
        notes: None,
        shoot_type: Some("wedding".to_string()),
        shoot_date: NaiveDate::from_ymd_opt(2026, 6, 20),
        location: Some("Portland, OR".to_string()),
        is_private: None,
        slug: None,
        custom_title: None,
        seo_tags: None,
        gallery_settings: None,
    }
}

async fn create_shoot(pool: &PgPool, client_id: i64, title: &str) -> darkroom_db::models::shoot::Shoot {
    let input = new_shoot(client_id, title);
    let slug = shoot_slug(title, Utc::now().year());
    ShootRepo::create(pool, &input, &slug).await.unwrap()
}

fn new_image(shoot_id: i64, filename: &str) -> CreateShootImage {
    CreateShootImage {
        shoot_id,
        filename: filename.to_string(),
        storage_path: format!("shoots/{shoot_id}/{filename}"),
        original_filename: Some(format!("IMG_{filename}")),
        file_size_bytes: Some(2_400_000),
        is_hidden: None,
    }
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn client_create_derives_slug(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    assert_eq!(client.slug, "sarah-johnson");
    assert_eq!(client.owner_staff_id, Some(1));

    let found = ClientRepo::find_by_slug(&pool, "sarah-johnson").await.unwrap();
    assert_eq!(found.unwrap().id, client.id);
}

#[sqlx::test(migrations = "../../migrations")]
async fn client_slug_collision_is_a_unique_violation(pool: PgPool) {
    create_client(&pool, "Sarah Johnson").await;

    let err = ClientRepo::create(&pool, &new_client("Sarah  Johnson"), "sarah-johnson", None)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.constraint(), Some("uq_clients_slug"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn client_update_is_partial_and_slug_is_stable(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;

    let updated = ClientRepo::update(
        &pool,
        client.id,
        &UpdateClient {
            name: None,
            email: Some("sarah@new.example".to_string()),
            phone: Some("+1 555 0100".to_string()),
            address: None,
            slug: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.email, "sarah@new.example");
    assert_eq!(updated.name, "Sarah Johnson");
    // Slug only changes when explicitly supplied.
    assert_eq!(updated.slug, "sarah-johnson");
}

#[sqlx::test(migrations = "../../migrations")]
async fn client_with_shoots_cannot_be_deleted(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    create_shoot(&pool, client.id, "Sarah & Tom Wedding").await;

    let err = ClientRepo::delete(&pool, client.id).await.unwrap_err();
    assert!(err.as_database_error().is_some());
}

// ---------------------------------------------------------------------------
// Shoots
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn shoot_slug_derivation_matches_title_and_year(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    let shoot = create_shoot(&pool, client.id, "Sarah & Tom Wedding").await;

    let year = Utc::now().year();
    assert_eq!(shoot.slug, format!("sarah-tom-wedding-gallery-{year}"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn identically_titled_shoots_conflict_on_slug(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    create_shoot(&pool, client.id, "Same Title").await;

    let slug = shoot_slug("Same Title", Utc::now().year());
    let err = ShootRepo::create(&pool, &new_shoot(client.id, "Same Title"), &slug)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.constraint(), Some("uq_shoots_slug"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn shoot_update_merges_partial_fields(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    let shoot = create_shoot(&pool, client.id, "Sarah & Tom Wedding").await;

    let updated = ShootRepo::update(
        &pool,
        shoot.id,
        &UpdateShoot {
            location: Some("Hood River, OR".to_string()),
            seo_tags: Some(vec!["wedding".to_string(), "oregon".to_string()]),
            ..blank_update()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.location, "Hood River, OR");
    assert_eq!(updated.seo_tags, vec!["wedding", "oregon"]);
    assert_eq!(updated.title, "Sarah & Tom Wedding");
    assert_eq!(updated.shoot_type, "wedding");
}

#[sqlx::test(migrations = "../../migrations")]
async fn public_listing_excludes_private_shoots(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    let public = create_shoot(&pool, client.id, "Public Gallery").await;
    let mut private_input = new_shoot(client.id, "Private Gallery");
    private_input.is_private = Some(true);
    ShootRepo::create(&pool, &private_input, "private-gallery-2026")
        .await
        .unwrap();

    let listed = ShootRepo::list_public(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, public.id);

    let all = ShootRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn view_counter_grows_only_for_public_slugs(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    let shoot = create_shoot(&pool, client.id, "Sarah & Tom Wedding").await;

    let viewed = ShootRepo::increment_view_by_slug(&pool, &shoot.slug)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(viewed.view_count, 1);

    let viewed = ShootRepo::increment_view_by_slug(&pool, &shoot.slug)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(viewed.view_count, 2);

    // Private shoots are invisible to the public path.
    let mut private_input = new_shoot(client.id, "Private Gallery");
    private_input.is_private = Some(true);
    let private = ShootRepo::create(&pool, &private_input, "private-gallery-2026")
        .await
        .unwrap();
    let result = ShootRepo::increment_view_by_slug(&pool, &private.slug)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn reassign_moves_shoot_between_clients(pool: PgPool) {
    let sarah = create_client(&pool, "Sarah Johnson").await;
    let archive = create_client(&pool, "Studio Archive").await;
    let shoot = create_shoot(&pool, sarah.id, "Sarah & Tom Wedding").await;

    let moved = ShootRepo::reassign_client(&pool, shoot.id, archive.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.client_id, archive.id);

    assert!(ShootRepo::list_by_client(&pool, sarah.id).await.unwrap().is_empty());
    assert_eq!(ShootRepo::list_by_client(&pool, archive.id).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn image_positions_assigned_sequentially(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    let shoot = create_shoot(&pool, client.id, "Sarah & Tom Wedding").await;

    for (i, name) in ["a.jpg", "b.jpg", "c.jpg"].iter().enumerate() {
        let image = ImageRepo::create(&pool, &new_image(shoot.id, name)).await.unwrap();
        assert_eq!(image.position, i as i32 + 1);
    }

    let with_images = ShootRepo::get_with_images(&pool, shoot.id).await.unwrap().unwrap();
    let names: Vec<&str> = with_images.images.iter().map(|i| i.filename.as_str()).collect();
    assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_an_image_leaves_a_gap_not_a_renumbering(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    let shoot = create_shoot(&pool, client.id, "Sarah & Tom Wedding").await;

    let _a = ImageRepo::create(&pool, &new_image(shoot.id, "a.jpg")).await.unwrap();
    let b = ImageRepo::create(&pool, &new_image(shoot.id, "b.jpg")).await.unwrap();
    let _c = ImageRepo::create(&pool, &new_image(shoot.id, "c.jpg")).await.unwrap();

    assert!(ImageRepo::delete(&pool, b.id).await.unwrap());

    let images = ImageRepo::list_by_shoot(&pool, shoot.id).await.unwrap();
    let positions: Vec<i32> = images.iter().map(|i| i.position).collect();
    assert_eq!(positions, vec![1, 3]);

    // The next upload continues from the surviving maximum.
    let d = ImageRepo::create(&pool, &new_image(shoot.id, "d.jpg")).await.unwrap();
    assert_eq!(d.position, 4);
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_the_cover_image_clears_the_designation(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    let shoot = create_shoot(&pool, client.id, "Sarah & Tom Wedding").await;
    let image = ImageRepo::create(&pool, &new_image(shoot.id, "a.jpg")).await.unwrap();

    ShootRepo::set_cover(&pool, shoot.id, Some(image.id)).await.unwrap();
    assert!(ImageRepo::delete(&pool, image.id).await.unwrap());

    let shoot = ShootRepo::find_by_id(&pool, shoot.id).await.unwrap().unwrap();
    assert_eq!(shoot.cover_image_id, None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn archive_move_appends_and_clears_source_cover(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    let shoot = create_shoot(&pool, client.id, "Sarah & Tom Wedding").await;
    let archive = create_shoot(&pool, client.id, "Archive").await;

    let kept = ImageRepo::create(&pool, &new_image(shoot.id, "kept.jpg")).await.unwrap();
    let moved = ImageRepo::create(&pool, &new_image(shoot.id, "moved.jpg")).await.unwrap();
    ImageRepo::create(&pool, &new_image(archive.id, "old.jpg")).await.unwrap();

    ShootRepo::set_cover(&pool, shoot.id, Some(moved.id)).await.unwrap();

    let relocated = ImageRepo::move_to_shoot(&pool, moved.id, archive.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(relocated.shoot_id, archive.id);
    assert_eq!(relocated.position, 2);

    let source = ShootRepo::get_with_images(&pool, shoot.id).await.unwrap().unwrap();
    assert_eq!(source.shoot.cover_image_id, None);
    assert_eq!(source.images.len(), 1);
    assert_eq!(source.images[0].id, kept.id);
}

#[sqlx::test(migrations = "../../migrations")]
async fn download_counter_grows(pool: PgPool) {
    let client = create_client(&pool, "Sarah Johnson").await;
    let shoot = create_shoot(&pool, client.id, "Sarah & Tom Wedding").await;
    let image = ImageRepo::create(&pool, &new_image(shoot.id, "a.jpg")).await.unwrap();

    let counted = ImageRepo::increment_download(&pool, image.id).await.unwrap().unwrap();
    assert_eq!(counted.download_count, 1);
    let counted = ImageRepo::increment_download(&pool, image.id).await.unwrap().unwrap();
    assert_eq!(counted.download_count, 2);
}

// ---------------------------------------------------------------------------

fn blank_update() -> UpdateShoot {
    UpdateShoot {
        title: None,
        description: None,
        notes: None,
        shoot_type: None,
        shoot_date: None,
        location: None,
        is_private: None,
        slug: None,
        custom_title: None,
        seo_tags: None,
        gallery_settings: None,
    }
}
