//! Producer/consumer pair referenced by `#[create_async_stream]` output.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::Stream;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Outcome of [`Continuation::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldResult {
    /// The element was buffered for the consumer.
    Enqueued,
    /// The stream is finished or its consumer is gone; the element was dropped.
    Terminated,
}

impl YieldResult {
    pub fn is_enqueued(&self) -> bool {
        matches!(self, YieldResult::Enqueued)
    }
}

/// Consuming side of an async stream.
///
/// Reads go through `&self`, so the stream can be handed out from a getter.
/// Clones share the same buffer; each element is delivered once.
pub struct AsyncStream<T> {
    rx: Arc<tokio::sync::Mutex<UnboundedReceiver<T>>>,
}

impl<T> AsyncStream<T> {
    /// Create a connected consumer/producer pair with an unbounded buffer.
    pub fn make_stream() -> (AsyncStream<T>, Continuation<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let stream = AsyncStream {
            rx: Arc::new(tokio::sync::Mutex::new(rx)),
        };
        let continuation = Continuation {
            tx: Arc::new(Mutex::new(Some(tx))),
        };
        (stream, continuation)
    }

    /// Next buffered element, waiting for one if the buffer is empty.
    ///
    /// Returns `None` once the producer finished and the buffer drained.
    pub async fn next(&self) -> Option<T> {
        self.rx.lock().await.recv().await
    }

    /// Element available right now, without waiting.
    pub fn try_next(&self) -> Option<T> {
        let mut rx = self.rx.try_lock().ok()?;
        rx.try_recv().ok()
    }

    /// View this stream as a [`futures::Stream`].
    pub fn stream(&self) -> impl Stream<Item = T> + '_ {
        futures::stream::unfold(self, |this| async move {
            this.next().await.map(|item| (item, this))
        })
    }
}

impl<T> Clone for AsyncStream<T> {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<T> fmt::Debug for AsyncStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncStream")
            .field("element", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// Producing side of an async stream.
pub struct Continuation<T> {
    tx: Arc<Mutex<Option<UnboundedSender<T>>>>,
}

impl<T> Continuation<T> {
    pub fn send(&self, value: T) -> YieldResult {
        let sender = self.sender();
        let Some(tx) = sender.as_ref() else {
            return YieldResult::Terminated;
        };
        match tx.send(value) {
            Ok(()) => YieldResult::Enqueued,
            Err(_) => YieldResult::Terminated,
        }
    }

    /// End the stream. Elements already buffered are still delivered.
    pub fn finish(&self) {
        if self.sender().take().is_some() {
            tracing::trace!(element = std::any::type_name::<T>(), "stream finished");
        }
    }

    pub fn is_finished(&self) -> bool {
        match self.sender().as_ref() {
            Some(tx) => tx.is_closed(),
            None => true,
        }
    }

    fn sender(&self) -> MutexGuard<'_, Option<UnboundedSender<T>>> {
        self.tx.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Clone for Continuation<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> fmt::Debug for Continuation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuation")
            .field("element", &std::any::type_name::<T>())
            .field("finished", &self.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_send_then_next() {
        let (stream, continuation) = AsyncStream::<i32>::make_stream();

        assert_eq!(continuation.send(1), YieldResult::Enqueued);
        assert_eq!(continuation.send(2), YieldResult::Enqueued);

        assert_eq!(stream.next().await, Some(1));
        assert_eq!(stream.next().await, Some(2));
        assert_eq!(stream.try_next(), None);
    }

    #[tokio::test]
    async fn test_finish_drains_buffer_then_ends() {
        let (stream, continuation) = AsyncStream::make_stream();
        continuation.send("a");
        continuation.finish();

        assert!(continuation.is_finished());
        assert_eq!(continuation.send("b"), YieldResult::Terminated);
        assert_eq!(stream.next().await, Some("a"));
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_dropping_continuation_ends_stream() {
        let (stream, continuation) = AsyncStream::<u8>::make_stream();
        continuation.send(7);
        drop(continuation);

        let items: Vec<u8> = stream.stream().collect().await;
        assert_eq!(items, vec![7]);
    }

    #[tokio::test]
    async fn test_dropped_consumer_terminates_sends() {
        let (stream, continuation) = AsyncStream::<u8>::make_stream();
        drop(stream);

        assert!(continuation.is_finished());
        assert_eq!(continuation.send(1), YieldResult::Terminated);
    }

    #[tokio::test]
    async fn test_clones_share_the_buffer() {
        let (stream, continuation) = AsyncStream::<u32>::make_stream();
        let reader = stream.clone();
        let writer = continuation.clone();

        writer.send(10);
        continuation.send(11);

        assert_eq!(stream.next().await, Some(10));
        assert_eq!(reader.next().await, Some(11));

        writer.finish();
        assert!(continuation.is_finished());
    }

    #[tokio::test]
    async fn test_consumer_waits_for_producer_task() {
        let (stream, continuation) = AsyncStream::<usize>::make_stream();

        let producer = tokio::spawn(async move {
            for i in 0..3 {
                continuation.send(i);
                tokio::task::yield_now().await;
            }
            continuation.finish();
        });

        let items: Vec<usize> = stream.stream().collect().await;
        producer.await.unwrap();
        assert_eq!(items, vec![0, 1, 2]);
    }

    #[test]
    fn test_debug_does_not_require_debug_elements() {
        struct Opaque;
        let (stream, continuation) = AsyncStream::<Opaque>::make_stream();
        assert!(format!("{:?}", stream).contains("AsyncStream"));
        assert!(format!("{:?}", continuation).contains("finished: false"));
    }
}
