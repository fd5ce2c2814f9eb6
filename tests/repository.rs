use trivia_api::domain::question::NewQuestion;
use trivia_api::repository::{
    CategoryReader, DieselRepository, QuestionListQuery, QuestionReader, QuestionWriter,
};

mod common;

fn new_question(text: &str, category: Option<i32>) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: "answer".to_string(),
        category,
        difficulty: Some(2),
    }
}

#[test]
fn seeded_categories_are_listed_in_id_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let categories = repo.list_categories().expect("should list categories");

    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0].id, 1);
    assert_eq!(categories[0].kind, "Science");
    assert_eq!(categories[5].kind, "Sports");
}

#[test]
fn get_category_by_id_returns_none_for_missing_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert!(repo.get_category_by_id(3).expect("query").is_some());
    assert!(repo.get_category_by_id(999).expect("query").is_none());
}

#[test]
fn create_list_and_delete_question_round_trip() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_question(&new_question("What is H2O?", Some(1)))
        .expect("should create question");
    assert!(created.id > 0);
    assert_eq!(created.question, "What is H2O?");

    let found = repo
        .get_question_by_id(created.id)
        .expect("query")
        .expect("created question should exist");
    assert_eq!(found, created);

    let affected = repo.delete_question(created.id).expect("should delete");
    assert_eq!(affected, 1);
    assert!(repo.get_question_by_id(created.id).expect("query").is_none());

    // A second delete touches nothing.
    let affected = repo.delete_question(created.id).expect("should not fail");
    assert_eq!(affected, 0);
}

#[test]
fn created_ids_are_store_assigned_and_increasing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_question(&new_question("first", None))
        .expect("create");
    let second = repo
        .create_question(&new_question("second", None))
        .expect("create");
    assert!(second.id > first.id);
}

#[test]
fn list_questions_filters_by_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_question(&new_question("science one", Some(1)))
        .expect("create");
    repo.create_question(&new_question("science two", Some(1)))
        .expect("create");
    // Dangling category reference, accepted as-is.
    repo.create_question(&new_question("dangling", Some(99)))
        .expect("create");

    let all = repo
        .list_questions(QuestionListQuery::default())
        .expect("list");
    assert_eq!(all.len(), 3);

    let science = repo
        .list_questions(QuestionListQuery::default().category(1))
        .expect("list");
    assert_eq!(science.len(), 2);

    let dangling = repo
        .list_questions(QuestionListQuery::default().category(99))
        .expect("list");
    assert_eq!(dangling.len(), 1);
}

#[test]
fn search_matches_substrings_case_insensitively() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_question(&new_question("What is the Title of the book?", None))
        .expect("create");
    repo.create_question(&new_question("entitled to nothing", None))
        .expect("create");
    repo.create_question(&new_question("unrelated", None))
        .expect("create");

    let matches = repo
        .list_questions(QuestionListQuery::default().search("title"))
        .expect("search");
    assert_eq!(matches.len(), 2);
    assert!(matches[0].id < matches[1].id);

    let none = repo
        .list_questions(QuestionListQuery::default().search("no such phrase"))
        .expect("search");
    assert!(none.is_empty());
}
