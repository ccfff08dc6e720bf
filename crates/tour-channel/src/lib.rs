//! # Tour Channel
//!
//! Typed hand-off queues between tasks. Values arrive in the order one
//! sender sent them; nothing is promised across channels.
//!
//! A channel is created as a pair of endpoints. [`SendChan`] may be cloned
//! to fan in several producers. The channel closes when the last
//! [`SendChan`] is closed or dropped; receivers then drain what is buffered
//! and see [`RecvError`], which is the end-of-stream sentinel.
//!
//! ```rust
//! use tour_channel::channel;
//!
//! let (tx, rx) = channel::<&str>(2);
//! tx.send("first").unwrap();
//! tx.send("second").unwrap();
//! tx.close();
//!
//! let drained: Vec<_> = rx.into_iter().collect();
//! assert_eq!(drained, ["first", "second"]);
//! ```

pub mod error;
pub mod select;

use std::time::Duration;

pub use error::{RecvError, RecvTimeoutError, SendError, TrySendError};
pub use select::{select2_recv, Select2Result};

/// The producing end of a channel.
#[derive(Debug)]
pub struct SendChan<T> {
    inner: crossbeam_channel::Sender<T>,
}

impl<T> Clone for SendChan<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> SendChan<T> {
    /// Blocks until a receiver takes the value (unbuffered) or a buffer
    /// slot frees up (buffered).
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        self.inner
            .send(value)
            .map_err(|crossbeam_channel::SendError(value)| SendError(value))
    }

    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        Ok(self.inner.try_send(value)?)
    }

    /// Give up this endpoint. Consuming `self` makes a send after close
    /// impossible to write.
    pub fn close(self) {
        tracing::trace!(pending = self.inner.len(), "sender closed");
    }

    /// Buffer size; `Some(0)` when unbuffered.
    pub fn capacity(&self) -> Option<usize> {
        self.inner.capacity()
    }
}

/// The consuming end of a channel.
#[derive(Debug)]
pub struct RecvChan<T> {
    inner: crossbeam_channel::Receiver<T>,
}

impl<T> Clone for RecvChan<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> RecvChan<T> {
    /// Blocks until a value arrives or the channel closes. An open channel
    /// that nobody sends on blocks forever.
    pub fn recv(&self) -> Result<T, RecvError> {
        self.inner.recv().map_err(|_| RecvError)
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<T, RecvTimeoutError> {
        Ok(self.inner.recv_timeout(timeout)?)
    }

    /// Values currently buffered.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Buffer size; `Some(0)` when unbuffered.
    pub fn capacity(&self) -> Option<usize> {
        self.inner.capacity()
    }

    /// Receive until the channel closes.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { chan: self }
    }

    pub(crate) fn raw(&self) -> &crossbeam_channel::Receiver<T> {
        &self.inner
    }
}

impl<'a, T> IntoIterator for &'a RecvChan<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for RecvChan<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chan: self }
    }
}

/// Borrowing iterator; ends when the channel closes.
pub struct Iter<'a, T> {
    chan: &'a RecvChan<T>,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.chan.recv().ok()
    }
}

/// Owning iterator; ends when the channel closes.
pub struct IntoIter<T> {
    chan: RecvChan<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.chan.recv().ok()
    }
}

fn wrap<T>(
    (tx, rx): (crossbeam_channel::Sender<T>, crossbeam_channel::Receiver<T>),
) -> (SendChan<T>, RecvChan<T>) {
    (SendChan { inner: tx }, RecvChan { inner: rx })
}

/// Unbuffered: a send waits for its receive and the other way round.
///
/// ```rust
/// use std::thread;
/// use tour_channel::rendezvous;
///
/// let (tx, rx) = rendezvous::<u8>();
/// thread::spawn(move || tx.send(7).unwrap());
/// assert_eq!(rx.recv(), Ok(7));
/// ```
pub fn rendezvous<T>() -> (SendChan<T>, RecvChan<T>) {
    wrap(crossbeam_channel::bounded(0))
}

/// Buffered with room for `capacity` values.
///
/// # Panics
///
/// If `capacity` is zero; use [`rendezvous`] or [`channel`] for that.
pub fn bounded<T>(capacity: usize) -> (SendChan<T>, RecvChan<T>) {
    assert!(capacity > 0, "bounded channel needs a capacity above zero");
    wrap(crossbeam_channel::bounded(capacity))
}

/// Unbuffered for a zero capacity, buffered otherwise.
pub fn channel<T>(capacity: usize) -> (SendChan<T>, RecvChan<T>) {
    match capacity {
        0 => rendezvous(),
        n => bounded(n),
    }
}
