//! Integration tests for the Diesel SQLite repositories.
//!
//! Each test migrates a fresh database file in a temporary directory, builds
//! a pool over it, and exercises the adapters through their ports.

mod support;

use std::sync::Arc;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use coursedesk::domain::ports::{CourseRepository, StoreError, StudentRepository};
use coursedesk::domain::{CourseId, NewCourse, NewStudent, PasswordHash, StudentId};
use coursedesk::outbound::persistence::{
    DbPool, DieselCourseRepository, DieselStudentRepository, PoolConfig, run_migrations,
};
use support::{Browser, init_app};

/// A migrated database that lives as long as the returned directory.
struct Database {
    _dir: TempDir,
    url: String,
}

#[fixture]
fn database() -> Database {
    let dir = TempDir::new().expect("temp dir");
    let url = dir
        .path()
        .join("database.db")
        .to_str()
        .expect("utf8 path")
        .to_owned();
    run_migrations(&url).expect("migrations apply");
    Database { _dir: dir, url }
}

async fn pool(db: &Database) -> DbPool {
    DbPool::new(PoolConfig::new(db.url.clone()))
        .await
        .expect("pool builds")
}

fn new_student(email: &str) -> NewStudent {
    NewStudent {
        username: "alice".to_owned(),
        email: email.to_owned(),
        password: PasswordHash::new("$2b$04$not-a-real-digest"),
    }
}

fn algebra() -> NewCourse {
    NewCourse::try_from_form("Algebra", "100", "30", "10").expect("valid course")
}

#[rstest]
#[tokio::test]
async fn students_are_created_and_found(database: Database) {
    let repo = DieselStudentRepository::new(pool(&database).await);

    let created = repo.create(new_student("a@x.com")).await.expect("insert");
    assert_eq!(created.id(), StudentId::new(1));

    let by_email = repo
        .find_by_email("a@x.com")
        .await
        .expect("lookup")
        .expect("student exists");
    assert_eq!(by_email, created);
    assert_eq!(by_email.password().as_str(), "$2b$04$not-a-real-digest");

    let by_id = repo
        .find_by_id(created.id())
        .await
        .expect("lookup")
        .expect("student exists");
    assert_eq!(by_id, created);

    assert!(repo.find_by_email("b@x.com").await.expect("lookup").is_none());
    assert_eq!(repo.count().await.expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn duplicate_student_email_violates_unique_index(database: Database) {
    let repo = DieselStudentRepository::new(pool(&database).await);
    repo.create(new_student("a@x.com")).await.expect("insert");

    let err = repo
        .create(new_student("a@x.com"))
        .await
        .expect_err("second insert must fail");

    assert!(matches!(err, StoreError::Query { .. }));
    assert_eq!(repo.count().await.expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn courses_are_listed_in_insertion_order_and_deleted(database: Database) {
    let repo = DieselCourseRepository::new(pool(&database).await);

    let first = repo.create(algebra()).await.expect("insert");
    let second = repo
        .create(NewCourse::try_from_form("Geometry", "80", "20", "0").expect("valid course"))
        .await
        .expect("insert");

    let listed = repo.list().await.expect("list");
    assert_eq!(listed, vec![first.clone(), second.clone()]);
    assert_eq!(repo.count().await.expect("count"), 2);

    assert!(repo.delete(first.id).await.expect("delete"));
    assert!(!repo.delete(first.id).await.expect("second delete"));
    assert!(repo.find_by_id(first.id).await.expect("lookup").is_none());
    assert_eq!(repo.list().await.expect("list"), vec![second]);
}

#[rstest]
#[tokio::test]
async fn missing_course_is_none(database: Database) {
    let repo = DieselCourseRepository::new(pool(&database).await);

    assert!(repo.find_by_id(CourseId::new(42)).await.expect("lookup").is_none());
    assert_eq!(repo.count().await.expect("count"), 0);
}

#[rstest]
#[actix_rt::test]
async fn application_persists_through_sqlite(database: Database) {
    let pool = pool(&database).await;
    let app = init_app(
        Arc::new(DieselStudentRepository::new(pool.clone())),
        Arc::new(DieselCourseRepository::new(pool.clone())),
    )
    .await;
    let mut browser = Browser::default();

    browser
        .post(
            &app,
            "/register",
            &[("username", "alice"), ("email", "a@x.com"), ("password", "pw1")],
        )
        .await
        .assert_redirect("/login");
    browser
        .post(&app, "/login", &[("email", "a@x.com"), ("password", "pw1")])
        .await
        .assert_redirect("/dashboard");
    browser
        .post(
            &app,
            "/course/create",
            &[
                ("course_name", "Algebra"),
                ("course_price", "100"),
                ("course_duration", "30"),
                ("course_discount", "10"),
            ],
        )
        .await
        .assert_redirect("/course");

    let courses = DieselCourseRepository::new(pool.clone());
    let stored = courses.list().await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Algebra");

    let students = DieselStudentRepository::new(pool);
    let alice = students
        .find_by_email("a@x.com")
        .await
        .expect("lookup")
        .expect("student exists");
    assert!(alice.password().as_str().starts_with("$2"));
}
