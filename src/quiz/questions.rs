use log::warn;
use serde_json::Value;

use super::{
    error::SkipReason,
    model::{flag_of, text_of, Answer, Question, QuizItem},
};

/// Pulls the renderable questions out of a quiz. Questions without an answer
/// list are skipped, answers missing `answer` or `correct` are dropped.
pub fn parse_questions(item: &QuizItem) -> Result<Vec<Question>, SkipReason> {
    let questions = item
        .content
        .questions
        .as_array()
        .ok_or_else(|| SkipReason::QuestionsNotAList {
            file: item.file().to_string(),
        })?;

    Ok(questions
        .iter()
        .enumerate()
        .filter_map(|(position, q)| match parse_question(q, position) {
            Ok(question) => Some(question),
            Err(reason) => {
                warn!("skipping question {} in {}: {}", position, item.file(), reason);
                None
            }
        })
        .collect())
}

fn parse_question(question: &Value, position: usize) -> Result<Question, SkipReason> {
    let what = format!("answers of question {}", position);
    let answers = question
        .get("answers")
        .ok_or_else(|| SkipReason::missing(format!("question {}", position), "answers"))?
        .as_array()
        .ok_or(SkipReason::NotAList { what })?;

    Ok(Question {
        position,
        question: question.get("question").map(text_of).unwrap_or_default().to_string(),
        answers: answers.iter().filter_map(parse_answer).collect(),
    })
}

fn parse_answer(answer: &Value) -> Option<Answer> {
    match (answer.get("answer"), answer.get("correct")) {
        (Some(text), Some(correct)) => Some(Answer {
            answer: text_of(text).to_string(),
            correct: flag_of(correct),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{IndexEntry, QuizDocument};
    use serde_json::json;

    fn item(questions: Value) -> QuizItem {
        QuizItem::new(
            IndexEntry {
                file: String::from("q.json"),
                title: String::from("Q"),
            },
            QuizDocument {
                title: String::from("Q"),
                questions,
            },
        )
    }

    #[test]
    fn questions_must_be_a_list() {
        assert!(matches!(
            parse_questions(&item(json!({"question": "?"}))),
            Err(SkipReason::QuestionsNotAList { .. })
        ));
    }

    #[test]
    fn question_with_bad_answers_is_skipped_keeping_positions() {
        let questions = parse_questions(&item(json!([
            {"question": "first", "answers": "bad"},
            {"question": "second"},
            {"question": "third", "answers": [{"answer": "x", "correct": true}]}
        ])))
        .unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].position, 2);
        assert_eq!(questions[0].question, "third");
    }

    #[test]
    fn incomplete_answers_are_dropped() {
        let questions = parse_questions(&item(json!([
            {"question": "q", "answers": [
                {"answer": "no flag"},
                {"correct": true},
                {"answer": "ok", "correct": false},
                "not an object"
            ]}
        ])))
        .unwrap();

        assert_eq!(
            questions[0].answers,
            vec![Answer {
                answer: String::from("ok"),
                correct: false
            }]
        );
    }

    #[test]
    fn empty_answer_list_keeps_the_question() {
        let questions = parse_questions(&item(json!([{"question": "q", "answers": []}]))).unwrap();
        assert_eq!(questions.len(), 1);
        assert!(questions[0].answers.is_empty());
    }
}
