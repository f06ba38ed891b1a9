//! Integration tests for the repository layer against a real database:
//! - CRUD per entity
//! - Insertion-order listing and skip/limit paging
//! - Cascade delete from projects to data and notes
//! - Unique and foreign key constraint violations

use assert_matches::assert_matches;
use chrono::NaiveTime;
use sqlx::PgPool;

use seedweb_db::models::profile::CreateProfile;
use seedweb_db::models::project::CreateProject;
use seedweb_db::models::project_data::CreateProjectData;
use seedweb_db::models::project_note::CreateProjectNote;
use seedweb_db::repositories::{ProfileRepo, ProjectDataRepo, ProjectNoteRepo, ProjectRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_profile(name: &str) -> CreateProfile {
    CreateProfile {
        name: name.to_string(),
        colors: Some("[[0, 0, 255], [255, 0, 0], [255, 255, 255]]".to_string()),
    }
}

fn new_project(name: &str, profile_id: Option<i64>) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        bed_id: "bed-1".to_string(),
        description: "South-facing raised bed".to_string(),
        profile_id,
        start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    }
}

fn new_reading(payload: &str) -> CreateProjectData {
    CreateProjectData {
        sensor_data: payload.to_string(),
    }
}

fn new_note(text: &str) -> CreateProjectNote {
    CreateProjectNote {
        note: text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn profile_crud_round_trip(pool: PgPool) {
    let created = ProfileRepo::create(&pool, &new_profile("Tomatoes"))
        .await
        .unwrap();
    assert_eq!(created.name, "Tomatoes");

    let fetched = ProfileRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "Tomatoes");
    assert_eq!(fetched.colors, created.colors);

    let updated = ProfileRepo::update(
        &pool,
        created.id,
        &CreateProfile {
            name: "Tomatoes v2".to_string(),
            colors: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Tomatoes v2");
    assert_eq!(updated.colors, None);

    let deleted = ProfileRepo::delete(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(deleted.name, "Tomatoes v2");
    assert!(ProfileRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn profile_list_is_in_insertion_order(pool: PgPool) {
    for name in ["A", "B", "C"] {
        ProfileRepo::create(&pool, &new_profile(name)).await.unwrap();
    }

    let all = ProfileRepo::list(&pool, None, None).await.unwrap();
    let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);

    let page = ProfileRepo::list(&pool, Some(1), Some(1)).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "B");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_profile_name_violates_unique_constraint(pool: PgPool) {
    ProfileRepo::create(&pool, &new_profile("Twice")).await.unwrap();
    let err = ProfileRepo::create(&pool, &new_profile("Twice"))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_profile_operations_return_none(pool: PgPool) {
    assert!(ProfileRepo::find_by_id(&pool, 999).await.unwrap().is_none());
    assert!(ProfileRepo::update(&pool, 999, &new_profile("Ghost"))
        .await
        .unwrap()
        .is_none());
    assert!(ProfileRepo::delete(&pool, 999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_crud_round_trip(pool: PgPool) {
    let profile = ProfileRepo::create(&pool, &new_profile("Lettuce"))
        .await
        .unwrap();

    let created = ProjectRepo::create(&pool, &new_project("Bed One", Some(profile.id)))
        .await
        .unwrap();
    assert_eq!(created.profile_id, Some(profile.id));
    assert_eq!(created.start_time, NaiveTime::from_hms_opt(7, 0, 0).unwrap());

    let mut input = new_project("Bed One", Some(profile.id));
    input.description = "Moved to the greenhouse".to_string();
    input.profile_id = None;
    let updated = ProjectRepo::update(&pool, created.id, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.description, "Moved to the greenhouse");
    assert_eq!(updated.profile_id, None);

    let deleted = ProjectRepo::delete(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(deleted.name, "Bed One");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_profile_does_not_take_projects_with_it(pool: PgPool) {
    let profile = ProfileRepo::create(&pool, &new_profile("Detached"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Standalone", None))
        .await
        .unwrap();

    ProfileRepo::delete(&pool, profile.id).await.unwrap();
    assert!(ProjectRepo::find_by_id(&pool, project.id)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Children: data and notes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn child_rows_scope_to_their_project(pool: PgPool) {
    let first = ProjectRepo::create(&pool, &new_project("First", None))
        .await
        .unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Second", None))
        .await
        .unwrap();

    ProjectDataRepo::create(&pool, first.id, &new_reading(r#"{"moisture": 0.4}"#))
        .await
        .unwrap();
    ProjectDataRepo::create(&pool, second.id, &new_reading(r#"{"moisture": 0.9}"#))
        .await
        .unwrap();
    ProjectNoteRepo::create(&pool, first.id, &new_note("thinned seedlings"))
        .await
        .unwrap();

    let first_data = ProjectDataRepo::list_by_project(&pool, first.id, None, None)
        .await
        .unwrap();
    assert_eq!(first_data.len(), 1);
    assert_eq!(first_data[0].project_id, first.id);

    let second_notes = ProjectNoteRepo::list_by_project(&pool, second.id, None, None)
        .await
        .unwrap();
    assert!(second_notes.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn note_update_overwrites_text(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Notes", None))
        .await
        .unwrap();
    let note = ProjectNoteRepo::create(&pool, project.id, &new_note("before"))
        .await
        .unwrap();

    let updated = ProjectNoteRepo::update(&pool, note.id, &new_note("after"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.note, "after");
    assert_eq!(updated.project_id, project.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_project_cascades_to_children(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Doomed", None))
        .await
        .unwrap();
    let reading = ProjectDataRepo::create(&pool, project.id, &new_reading("[1, 2, 3]"))
        .await
        .unwrap();
    let note = ProjectNoteRepo::create(&pool, project.id, &new_note("gone soon"))
        .await
        .unwrap();

    ProjectRepo::delete(&pool, project.id).await.unwrap();

    assert!(ProjectDataRepo::find_by_id(&pool, reading.id)
        .await
        .unwrap()
        .is_none());
    assert!(ProjectNoteRepo::find_by_id(&pool, note.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn child_insert_under_missing_project_violates_foreign_key(pool: PgPool) {
    let err = ProjectDataRepo::create(&pool, 12345, &new_reading("[]"))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23503"));
}
