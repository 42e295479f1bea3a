mod view;

use futures_util::StreamExt;
use provider::Catalogue;
use session::{Effect, SessionController};
use std::{env, time::Duration};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    runtime::Runtime,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let path = env::var("QUIZ_CATALOGUE")?;
    let quiz = env::var("QUIZ_ID")?.parse()?;
    let delay = match env::var("QUIZ_FETCH_DELAY_MS") {
        Ok(millis) => Some(Duration::from_millis(millis.parse()?)),
        _ => None,
    };

    let runtime = Runtime::new()?;
    runtime.block_on(run(path, quiz, delay))
}

async fn run(path: String, quiz: u64, delay: Option<Duration>) -> anyhow::Result<()> {
    let mut catalogue = Catalogue::load(&path).await?;
    if let Some(delay) = delay {
        catalogue = catalogue.with_delay(delay);
    }

    let session = SessionController::new(catalogue);
    let mut states = session.state_stream();
    let mut effects = session.effect_stream();
    session.start(quiz);

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        tokio::select! {
            Some(effect) = effects.next() => match effect {
                Effect::CloseRequested => break,
                Effect::ErrorOccurred(message) => eprintln!("Error: {message}"),
            },
            Some(state) = states.next() => print!("{}", view::render(&state)),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    log::info!("Input closed.");
                    break;
                };
                match view::interpret(&session.state(), quiz, &line) {
                    Ok(action) => session.dispatch(action),
                    Err(hint) => eprintln!("{hint}"),
                }
            }
            else => break,
        }
    }

    session.close();
    Ok(())
}
