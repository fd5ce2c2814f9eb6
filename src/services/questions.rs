use crate::domain::question::NewQuestion;
use crate::dto::categories::category_map;
use crate::dto::questions::{
    QuestionCreatedResponse, QuestionDeletedResponse, QuestionListResponse,
};
use crate::forms::questions::QuestionPostForm;
use crate::pagination::paginate;
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader, QuestionWriter};

use super::{ServiceError, ServiceResult};

/// One page of all questions, with the grand total and the category map.
///
/// An empty page, including any page past the end of the data, is a
/// not-found failure.
pub fn list_questions<R>(repo: &R, page: usize) -> ServiceResult<QuestionListResponse>
where
    R: CategoryReader + QuestionReader,
{
    let questions = match repo.list_questions(QuestionListQuery::default()) {
        Ok(questions) => questions,
        Err(e) => {
            log::error!("Failed to list questions: {e}");
            return Err(ServiceError::Internal);
        }
    };
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let page_items = paginate(&questions, page);
    if page_items.is_empty() {
        return Err(ServiceError::NotFound);
    }

    Ok(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions: page_items.to_vec(),
        categories: category_map(categories),
    })
}

/// Case-insensitive substring search over question text, ordered by id.
pub fn search_questions<R>(repo: &R, term: &str) -> ServiceResult<QuestionListResponse>
where
    R: CategoryReader + QuestionReader,
{
    let questions = match repo.list_questions(QuestionListQuery::default().search(term)) {
        Ok(questions) => questions,
        Err(e) => {
            log::error!("Failed to search questions for {term:?}: {e}");
            return Err(ServiceError::Unprocessable);
        }
    };
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Unprocessable);
        }
    };

    Ok(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        categories: category_map(categories),
    })
}

/// Create a question from the non-search branch of the POST payload.
///
/// Question and answer text are required and must be non-empty; difficulty
/// and category are stored as given.
pub fn create_question<R>(repo: &R, form: QuestionPostForm) -> ServiceResult<QuestionCreatedResponse>
where
    R: QuestionWriter,
{
    let question = form.question.filter(|q| !q.is_empty());
    let answer = form.answer.filter(|a| !a.is_empty());
    let (question, answer) = match (question, answer) {
        (Some(question), Some(answer)) => (question, answer),
        _ => return Err(ServiceError::BadRequest),
    };

    let new_question = NewQuestion {
        question,
        answer,
        category: form.category,
        difficulty: form.difficulty,
    };

    match repo.create_question(&new_question) {
        Ok(created) => Ok(QuestionCreatedResponse {
            success: true,
            created: created.id,
        }),
        Err(e) => {
            log::error!("Failed to create question: {e}");
            Err(ServiceError::Unprocessable)
        }
    }
}

/// Delete a question by id; a missing row is a not-found failure.
pub fn delete_question<R>(repo: &R, id: i32) -> ServiceResult<QuestionDeletedResponse>
where
    R: QuestionReader + QuestionWriter,
{
    match repo.get_question_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get question {id}: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_question(id) {
        Ok(_) => Ok(QuestionDeletedResponse {
            success: true,
            deleted: id,
        }),
        Err(e) => {
            log::error!("Failed to delete question {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
