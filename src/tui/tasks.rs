// In-flight service calls
//
// Components never await the service themselves. They spawn the call here
// and the event loop hands the finished `Completion` back to whichever view
// is active, one at a time, between key events.
//
// Every call is tagged with the generation it was spawned in. The App bumps
// the generation when it swaps views, and completions from an older
// generation are dropped instead of being delivered to the new view.

use crate::hero::Hero;
use crate::service::TransportError;
use std::future::Future;
use tokio::task::JoinSet;

/// A finished service call, carrying its result
#[derive(Debug)]
pub enum Completion {
    /// `list()` finished
    HeroesLoaded(Result<Vec<Hero>, TransportError>),
    /// `create()` finished
    HeroCreated(Result<Hero, TransportError>),
    /// `delete()` finished for `hero`
    HeroDeleted {
        hero: Hero,
        result: Result<(), TransportError>,
    },
    /// `get()` finished
    HeroLoaded(Result<Hero, TransportError>),
    /// `update()` finished
    HeroUpdated(Result<(), TransportError>),
}

/// Set of spawned service calls
#[derive(Default)]
pub struct Tasks {
    set: JoinSet<(u64, Completion)>,
    generation: u64,
}

impl Tasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a call in the background
    pub fn spawn<F>(&mut self, call: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let generation = self.generation;
        self.set.spawn(async move { (generation, call.await) });
    }

    /// Start a new generation; calls already in flight become stale
    pub fn advance(&mut self) {
        self.generation += 1;
    }

    /// Wait for the next finished call of the current generation
    ///
    /// Returns `None` straight away when nothing is in flight.
    pub async fn next(&mut self) -> Option<Completion> {
        loop {
            match self.set.join_next().await? {
                Ok((generation, completion)) if generation == self.generation => {
                    return Some(completion)
                }
                Ok((_, completion)) => {
                    tracing::debug!("Dropping stale completion: {:?}", completion);
                }
                Err(e) => tracing::error!("Service task failed: {}", e),
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        self.set.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.set.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn drain(tasks: &mut Tasks) -> Vec<Completion> {
        let mut done = Vec::new();
        while let Some(completion) = tasks.next().await {
            done.push(completion);
        }
        done
    }

    #[tokio::test]
    async fn test_next_on_empty_set_is_none() {
        let mut tasks = Tasks::new();
        assert!(tasks.is_idle());
        assert!(tasks.next().await.is_none());
    }

    #[tokio::test]
    async fn test_every_completion_is_delivered() {
        let mut tasks = Tasks::new();
        tasks.spawn(async { Completion::HeroUpdated(Ok(())) });
        tasks.spawn(async { Completion::HeroesLoaded(Ok(Vec::new())) });
        assert_eq!(tasks.in_flight(), 2);

        let done = drain(&mut tasks).await;
        assert_eq!(done.len(), 2);
        assert!(tasks.is_idle());
    }

    #[tokio::test]
    async fn test_stale_generation_is_dropped() {
        let mut tasks = Tasks::new();
        tasks.spawn(async { Completion::HeroLoaded(Ok(Hero::new(12, "Narco", 9))) });
        tasks.advance();
        tasks.spawn(async { Completion::HeroesLoaded(Ok(Vec::new())) });

        let done = drain(&mut tasks).await;
        assert_eq!(done.len(), 1);
        assert!(matches!(done[0], Completion::HeroesLoaded(_)));
    }

    #[tokio::test]
    async fn test_panicked_task_is_skipped() {
        let mut tasks = Tasks::new();
        tasks.spawn(async {
            if true {
                panic!("boom");
            }
            Completion::HeroUpdated(Ok(()))
        });
        tasks.spawn(async { Completion::HeroUpdated(Ok(())) });

        let done = drain(&mut tasks).await;
        assert_eq!(done.len(), 1);
    }
}
