//! Score a student's answers against a list of questions.

use super::models::{QuestionDraft, Score};

/// Weight of a question; a zero or unset weight counts as one point.
pub fn effective_points(question: &QuestionDraft) -> u32 {
    if question.points == 0 {
        1
    } else {
        question.points
    }
}

/// A question counts as correct only when it has a correct answer and the
/// student's answer equals it exactly.
pub fn is_correct(question: &QuestionDraft, answer: Option<&str>) -> bool {
    question.has_answer() && answer == Some(question.correct_answer.as_str())
}

/// Grade `answers[i]` against `questions[i]`. Missing trailing answers are unanswered;
/// extra answers are ignored. Totals saturate at `u32::MAX`.
pub fn grade_answers(questions: &[QuestionDraft], answers: &[Option<&str>]) -> Score {
    questions
        .iter()
        .enumerate()
        .fold(Score::default(), |mut acc, (i, q)| {
            let weight = effective_points(q);
            acc.total_points = acc.total_points.saturating_add(weight);
            if is_correct(q, answers.get(i).copied().flatten()) {
                acc.score = acc.score.saturating_add(weight);
            }
            acc
        })
}
