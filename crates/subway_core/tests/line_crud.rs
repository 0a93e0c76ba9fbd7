use subway_core::db::open_db_in_memory;
use subway_core::{LineRepository, NewLine, RepoError, SqliteLineRepository};

fn new_line(name: &str, up: i64, down: i64, distance: i64) -> NewLine {
    NewLine {
        name: name.to_string(),
        color: "bg-red-600".to_string(),
        up_station_id: up,
        down_station_id: down,
        distance,
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLineRepository::new(&conn);

    let created = repo.create_line(&new_line("신분당선", 1, 2, 10)).unwrap();
    let loaded = repo.get_line(created.id).unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.up_station_id, 1);
    assert_eq!(loaded.down_station_id, 2);
    assert_eq!(loaded.distance, 10);
}

#[test]
fn create_does_not_check_station_existence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLineRepository::new(&conn);

    let created = repo.create_line(&new_line("유령선", 900, 901, 3)).unwrap();
    assert_eq!(repo.get_line(created.id).unwrap().up_station_id, 900);
}

#[test]
fn save_writes_labels_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLineRepository::new(&conn);

    let created = repo.create_line(&new_line("신분당선", 1, 2, 10)).unwrap();
    let mut edited = created.clone();
    edited.name = "분당선".to_string();
    edited.color = "bg-red-700".to_string();
    edited.distance = 99;
    edited.up_station_id = 5;

    let saved = repo.save_line(&edited).unwrap();

    assert_eq!(saved.name, "분당선");
    assert_eq!(saved.color, "bg-red-700");
    assert_eq!(saved.distance, 10);
    assert_eq!(saved.up_station_id, 1);
}

#[test]
fn save_missing_line_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLineRepository::new(&conn);

    let ghost = new_line("없는선", 1, 2, 1).into_line(77);
    let err = repo.save_line(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::LineNotFound(77)));
}

#[test]
fn list_returns_all_lines_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLineRepository::new(&conn);

    repo.create_line(&new_line("신분당선", 1, 2, 10)).unwrap();
    repo.create_line(&new_line("2호선", 1, 3, 10)).unwrap();

    let names = repo
        .list_lines()
        .unwrap()
        .into_iter()
        .map(|line| line.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["신분당선", "2호선"]);
}

#[test]
fn delete_removes_line_and_rejects_missing_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteLineRepository::new(&conn);

    let created = repo.create_line(&new_line("신분당선", 1, 2, 10)).unwrap();
    repo.delete_line(created.id).unwrap();

    assert!(matches!(
        repo.get_line(created.id).unwrap_err(),
        RepoError::LineNotFound(id) if id == created.id
    ));
    assert!(matches!(
        repo.delete_line(created.id).unwrap_err(),
        RepoError::LineNotFound(_)
    ));
}
