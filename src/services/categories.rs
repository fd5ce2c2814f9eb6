use crate::dto::categories::CategoryListResponse;
use crate::dto::questions::CategoryQuestionsResponse;
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult};

/// All categories collapsed into the id→type lookup map.
pub fn list_categories<R>(repo: &R) -> ServiceResult<CategoryListResponse>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(CategoryListResponse::new(categories)),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Questions belonging to one category, together with its display type.
///
/// An unknown category id is reported as unprocessable rather than not
/// found; existing clients depend on the 422.
pub fn list_category_questions<R>(
    repo: &R,
    category_id: i32,
) -> ServiceResult<CategoryQuestionsResponse>
where
    R: CategoryReader + QuestionReader,
{
    let category = match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::Unprocessable),
        Err(e) => {
            log::error!("Failed to get category {category_id}: {e}");
            return Err(ServiceError::Unprocessable);
        }
    };

    let questions = match repo.list_questions(QuestionListQuery::default().category(category_id)) {
        Ok(questions) => questions,
        Err(e) => {
            log::error!("Failed to list questions for category {category_id}: {e}");
            return Err(ServiceError::Unprocessable);
        }
    };

    Ok(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::question::Question;
    use crate::repository::test::TestRepository;

    fn science_repo() -> TestRepository {
        TestRepository::new(
            vec![Category {
                id: 1,
                kind: "Science".to_string(),
            }],
            vec![
                Question {
                    id: 1,
                    question: "What is H2O?".to_string(),
                    answer: "Water".to_string(),
                    category: Some(1),
                    difficulty: Some(1),
                },
                Question {
                    id: 2,
                    question: "Uncategorized".to_string(),
                    answer: "N/A".to_string(),
                    category: Some(9),
                    difficulty: None,
                },
            ],
        )
    }

    #[test]
    fn category_questions_report_type_and_match_count() {
        let repo = science_repo();
        let body = list_category_questions(&repo, 1).unwrap();
        assert_eq!(body.current_category, "Science");
        assert_eq!(body.total_questions, 1);
        assert_eq!(body.questions[0].id, 1);
    }

    #[test]
    fn unknown_category_is_unprocessable_not_missing() {
        let repo = science_repo();
        assert_eq!(
            list_category_questions(&repo, 42).unwrap_err(),
            ServiceError::Unprocessable
        );
    }

    #[test]
    fn categories_collapse_into_a_lookup_map() {
        let repo = science_repo();
        let body = list_categories(&repo).unwrap();
        assert!(body.success);
        assert_eq!(body.categories.get(&1).map(String::as_str), Some("Science"));
    }
}
