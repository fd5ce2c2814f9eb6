use rand::seq::SliceRandom;

use crate::dto::quizzes::QuizQuestionResponse;
use crate::forms::quizzes::QuizForm;
use crate::repository::{QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult};

/// Pick a uniformly random question not yet asked this round.
///
/// Category id 0 widens the candidate set to every category. Exhausting the
/// eligible set is a not-found failure, which the client uses to end the
/// quiz.
pub fn next_question<R>(repo: &R, form: QuizForm) -> ServiceResult<QuizQuestionResponse>
where
    R: QuestionReader,
{
    let category_id = match form.quiz_category.as_ref().and_then(|c| c.id) {
        Some(id) => id,
        None => return Err(ServiceError::Unprocessable),
    };

    let query = if category_id == 0 {
        QuestionListQuery::default()
    } else {
        QuestionListQuery::default().category(category_id)
    };

    let candidates = match repo.list_questions(query) {
        Ok(questions) => questions,
        Err(e) => {
            log::error!("Failed to load quiz candidates: {e}");
            return Err(ServiceError::Unprocessable);
        }
    };

    let eligible: Vec<_> = candidates
        .into_iter()
        .filter(|q| !form.previous_questions.contains(&q.id))
        .collect();

    let question = eligible
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or(ServiceError::NotFound)?;

    Ok(QuizQuestionResponse {
        success: true,
        question,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::question::Question;
    use crate::forms::quizzes::QuizCategory;
    use crate::repository::test::TestRepository;

    fn question(id: i32, category: i32) -> Question {
        Question {
            id,
            question: format!("Q{id}"),
            answer: "A".to_string(),
            category: Some(category),
            difficulty: Some(1),
        }
    }

    fn form(previous: Vec<i32>, category_id: i32) -> QuizForm {
        QuizForm {
            previous_questions: previous,
            quiz_category: Some(QuizCategory {
                id: Some(category_id),
                kind: None,
            }),
        }
    }

    #[test]
    fn category_zero_draws_from_every_category() {
        let repo = TestRepository::new(
            Vec::new(),
            vec![question(1, 1), question(2, 2), question(3, 3)],
        );
        let mut seen = HashSet::new();
        for _ in 0..60 {
            let body = next_question(&repo, form(Vec::new(), 0)).unwrap();
            seen.insert(body.question.id);
        }
        // 60 uniform draws from three questions miss one with probability
        // (2/3)^60; treat that as impossible.
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn a_nonzero_category_limits_the_candidates() {
        let repo = TestRepository::new(
            Vec::new(),
            vec![question(1, 1), question(2, 2), question(3, 2)],
        );
        for _ in 0..20 {
            let body = next_question(&repo, form(Vec::new(), 2)).unwrap();
            assert!(matches!(body.question.id, 2 | 3));
        }
    }

    #[test]
    fn previously_asked_questions_are_excluded() {
        let repo = TestRepository::new(
            Vec::new(),
            vec![question(1, 1), question(2, 1), question(3, 1)],
        );
        let body = next_question(&repo, form(vec![1, 3], 0)).unwrap();
        assert_eq!(body.question.id, 2);
    }

    #[test]
    fn an_exhausted_round_is_not_found() {
        let repo = TestRepository::new(Vec::new(), vec![question(1, 1)]);
        assert_eq!(
            next_question(&repo, form(vec![1], 0)).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn a_missing_category_scope_is_unprocessable() {
        let repo = TestRepository::new(Vec::new(), vec![question(1, 1)]);
        let no_scope = QuizForm::default();
        assert_eq!(
            next_question(&repo, no_scope).unwrap_err(),
            ServiceError::Unprocessable
        );
    }
}
