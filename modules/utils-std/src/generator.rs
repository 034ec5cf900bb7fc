//! Generators whose producer runs ahead on a tokio blocking task.

use core::{
  pin::Pin,
  task::{Context, Poll},
};

use futures::Stream;
use tokio::{
  sync::mpsc,
  task::{JoinError, JoinHandle},
};


/// Finite sequence of `size` values produced on a blocking task and consumed asynchronously.
///
/// Values travel through a channel with room for a single element, so the producer is at most one
/// value ahead of the consumer. Dropping the generator (or calling [`close`](Self::close)) stops
/// the producer before its next value.
pub struct BackgroundGenerator<T> {
  receiver: mpsc::Receiver<T>,
  producer: JoinHandle<()>,
  size:     usize,
}

impl<T: Send + 'static> BackgroundGenerator<T> {
  /// Starts producing `size` values from `producer` on the tokio blocking pool.
  ///
  /// # Panics
  ///
  /// Panics when called outside of a tokio runtime.
  pub fn spawn<F>(size: usize, mut producer: F) -> Self
  where
    F: FnMut() -> T + Send + 'static, {
    let (sender, receiver) = mpsc::channel(1);
    let producer = tokio::task::spawn_blocking(move || {
      for produced in 0..size {
        if sender.is_closed() {
          tracing::debug!(produced, size, "generator consumer went away, producer stopped");
          return;
        }
        if sender.blocking_send(producer()).is_err() {
          tracing::debug!(produced, size, "generator consumer went away, producer stopped");
          return;
        }
      }
      tracing::trace!(size, "generator producer finished");
    });
    Self { receiver, producer, size }
  }
}

impl<T> BackgroundGenerator<T> {
  /// Returns the number of values the producer was asked for.
  #[must_use]
  pub const fn size(&self) -> usize {
    self.size
  }

  /// Waits for the next value; `None` once the producer has finished or stopped.
  pub async fn next(&mut self) -> Option<T> {
    self.receiver.recv().await
  }

  /// Drains the remaining values into a vector.
  pub async fn into_vec(mut self) -> Vec<T> {
    let mut values = Vec::with_capacity(self.size);
    while let Some(value) = self.receiver.recv().await {
      values.push(value);
    }
    values
  }

  /// Hands out the underlying receiver. The producer keeps running detached.
  #[must_use]
  pub fn into_receiver(self) -> mpsc::Receiver<T> {
    self.receiver
  }

  /// Stops the producer and waits for its task to finish.
  ///
  /// # Errors
  ///
  /// Returns the [`JoinError`] when the producer panicked.
  pub async fn close(mut self) -> Result<(), JoinError> {
    self.receiver.close();
    while self.receiver.try_recv().is_ok() {}
    self.producer.await
  }
}

impl<T> Stream for BackgroundGenerator<T> {
  type Item = T;

  fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
    self.receiver.poll_recv(cx)
  }
}

impl<T> core::fmt::Debug for BackgroundGenerator<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("BackgroundGenerator").field("size", &self.size).finish_non_exhaustive()
  }
}
