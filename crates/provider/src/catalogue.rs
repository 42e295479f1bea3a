use crate::{
    error::{Error, Result},
    validator, QuizProvider,
};
use model::{Quiz, RawQuiz};
use std::{collections::BTreeMap, path::Path, time::Duration};

/// In-memory collection of validated quizzes, indexed by their identifier.
#[derive(Debug, Default)]
pub struct Catalogue {
    quizzes: BTreeMap<u64, Quiz>,
    /// Artificial latency applied to every fetch.
    delay: Option<Duration>,
}

impl Catalogue {
    /// Parses a JSON array of quizzes. Every quiz must pass validation.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raws: Vec<RawQuiz> = serde_json::from_slice(bytes)?;
        let mut catalogue = Self::default();
        for raw in raws {
            catalogue.insert(raw)?;
        }
        Ok(catalogue)
    }

    /// Reads and parses the catalogue at the given path.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let catalogue = Self::from_slice(&bytes)?;
        log::info!("Loaded {} quizzes from {}.", catalogue.len(), path.display());
        Ok(catalogue)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn insert(&mut self, raw: RawQuiz) -> Result<()> {
        let id = raw.id;
        if !validator::is_allowed_image(&raw.image) {
            return Err(Error::BadImage(id));
        }

        let quiz = Quiz::try_from(raw).map_err(|reason| Error::Invalid(id, reason))?;

        use std::collections::btree_map::Entry::Vacant;
        if let Vacant(entry) = self.quizzes.entry(id) {
            entry.insert(quiz);
            Ok(())
        } else {
            Err(Error::DuplicateQuiz(id))
        }
    }

    pub fn get(&self, id: u64) -> Option<&Quiz> {
        self.quizzes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

impl QuizProvider for Catalogue {
    type Error = Error;

    async fn fetch(&self, id: u64) -> Result<Quiz> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        log::debug!("Fetching quiz {id} from the catalogue.");
        self.quizzes.get(&id).cloned().ok_or(Error::NotFound)
    }
}
