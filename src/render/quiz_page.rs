use super::{
    escape::{escape, format},
    script::{field_name, scoring_script, CHECK_BUTTON_ID, CLEAR_BUTTON_ID, CORRECT_MARKER},
};
use crate::{
    config::SiteText,
    quiz::{parse_questions, Answer, Question, QuizItem, SkipReason},
};

/// Renders the interactive page for one quiz. Fails only when the quiz has
/// no question list at all; broken questions and answers are left out.
pub fn render_quiz_page(item: &QuizItem, site: &SiteText) -> Result<String, SkipReason> {
    let questions = parse_questions(item)?;
    let title = escape(&item.content.title);

    let questions_html: String = questions.iter().map(render_question).collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
  </head>
  <body>
    <section id="header">
      <a href="index.html" id="back-btn">{back}</a>
      <h2>{title}</h2>
    </section>
    <form id="quiz-form">{questions}
      <button type="button" id="{clear_id}" onclick="clearAnswers()">{clear}</button>
      <button type="button" id="{check_id}" onclick="checkAnswers()" disabled>{check}</button>
    </form>
    <script>{script}</script>
  </body>
</html>
"#,
        title = title,
        stylesheet = escape(&site.stylesheet),
        back = escape(&site.back_label),
        questions = questions_html,
        clear_id = CLEAR_BUTTON_ID,
        clear = escape(&site.clear_label),
        check_id = CHECK_BUTTON_ID,
        check = escape(&site.check_label),
        script = scoring_script(),
    ))
}

fn render_question(question: &Question) -> String {
    let name = field_name(question.position);
    let answers: String = question
        .answers
        .iter()
        .map(|answer| render_answer(&name, answer))
        .collect();

    format!(
        r#"
      <div class="question">
        <p><strong>{}</strong></p>{}
      </div>"#,
        format(&question.question),
        answers
    )
}

fn render_answer(name: &str, answer: &Answer) -> String {
    let text = escape(&answer.answer);
    let marker = if answer.correct {
        format!(" {}", CORRECT_MARKER)
    } else {
        String::new()
    };

    format!(
        r#"
        <label>
          <input type="radio" name="{name}" value="{text}"{marker}>
          {text}
        </label><br>"#
    )
}
