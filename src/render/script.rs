//! Client-side answer checking, embedded verbatim in every quiz page.
//!
//! The page starts unanswered; the check button is enabled once every
//! question block that offers a choice has one selected. Checking marks the
//! selected label `correct` or `incorrect` and, on a wrong pick, the label of
//! the input carrying the correctness marker. Clearing resets all of it.

/// Prefix of the radio group name, followed by the question position.
pub const FIELD_PREFIX: &str = "q";

/// Attribute set on the input of the correct answer.
pub const CORRECT_MARKER: &str = r#"data-correct="true""#;

pub const CHECK_BUTTON_ID: &str = "submit-btn";
pub const CLEAR_BUTTON_ID: &str = "clear-btn";

const TEMPLATE: &str = r#"
    function questionsWithChoices() {
      return Array.from(document.querySelectorAll('.question'))
        .filter(question => question.querySelector('input[type="radio"]'));
    }

    function clearMarks() {
      document.querySelectorAll('.correct, .incorrect').forEach(label => {
        label.classList.remove('correct', 'incorrect');
      });
    }

    function checkAnswers() {
      clearMarks();

      questionsWithChoices().forEach(question => {
        const selected = question.querySelector('input[type="radio"]:checked');
        if (!selected) {
          return;
        }

        const correct = question.querySelector('input[__CORRECT_MARKER__]');
        if (selected === correct) {
          selected.parentElement.classList.add('correct');
        } else {
          selected.parentElement.classList.add('incorrect');
          if (correct) {
            correct.parentElement.classList.add('correct');
          }
        }
      });
    }

    function enableSubmitButton() {
      const allAnswered = questionsWithChoices()
        .every(question => question.querySelector('input[type="radio"]:checked'));

      document.getElementById('__CHECK_BUTTON_ID__').disabled = !allAnswered;
    }

    function clearAnswers() {
      document.querySelectorAll('input[type="radio"]').forEach(input => {
        input.checked = false;
      });

      clearMarks();
      document.getElementById('__CHECK_BUTTON_ID__').disabled = true;
    }

    document.querySelectorAll('input[type="radio"]').forEach(input => {
      input.addEventListener('change', enableSubmitButton);
    });
"#;

/// The scoring script body, to be placed inside a `<script>` element.
pub fn scoring_script() -> String {
    TEMPLATE
        .replace("__CORRECT_MARKER__", CORRECT_MARKER)
        .replace("__CHECK_BUTTON_ID__", CHECK_BUTTON_ID)
}

/// Name of the radio group for the question at `position`.
pub fn field_name(position: usize) -> String {
    format!("{}{}", FIELD_PREFIX, position)
}
