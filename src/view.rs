use core::fmt::Write;
use session::{Action, Phase, SessionState};

/// Renders a snapshot for the terminal.
pub fn render(state: &SessionState) -> String {
    let mut out = String::new();
    match &state.phase {
        Phase::Idle => out.push_str("Loading quiz...\n"),
        Phase::Question(quiz) => {
            let _ = writeln!(out, "\n{}\n", quiz.question());
            for (i, answer) in quiz.answers().iter().enumerate() {
                let _ = writeln!(out, "  {}) {}", i + 1, answer.text);
            }
            out.push_str("\nType the number of your answer, or `q` to leave.\n");
        }
        Phase::Results { quiz, .. } => {
            let _ = writeln!(out, "\n[{}]\n", quiz.image());
            if let Some(right) = state.right_answer() {
                let _ = writeln!(out, "Right answer:  [+] {}", right.text);
            }
            if let Some(chosen) = state.chosen_answer() {
                let mark = if chosen.is_right { "[+]" } else { "[x]" };
                let _ = writeln!(out, "Your answer:   {mark} {}", chosen.text);
            }
            let _ = writeln!(out, "\n{}\n\nType `q` to leave.", quiz.description());
        }
        Phase::Failed(message) => {
            let _ = writeln!(out, "Something went wrong: {message}\nType `r` to retry, or `q` to leave.");
        }
    }
    out
}

/// Translates a line of user input into an action.
pub fn interpret(state: &SessionState, quiz: u64, line: &str) -> Result<Action, &'static str> {
    match line.trim() {
        "q" | "Q" => Ok(Action::RequestClose),
        "r" | "R" => Ok(Action::RequestQuiz(quiz)),
        choice => {
            let index: usize = choice.parse().map_err(|_| "Type a number, `r`, or `q`.")?;
            let answers = state.quiz().ok_or("There is nothing to answer yet.")?.answers();
            let answer = index.checked_sub(1).and_then(|i| answers.get(i)).ok_or("Pick one of the listed answers.")?;
            Ok(Action::SubmitAnswer(answer.answer_id))
        }
    }
}
