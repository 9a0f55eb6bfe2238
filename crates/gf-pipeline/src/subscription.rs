//! Single-consumer fix channel.
//!
//! The location provider pushes [`RawFix`] values through a [`FixPublisher`];
//! the pipeline drains the matching [`FixSubscription`] on one thread.  The
//! subscription ends when every publisher has been dropped.

use std::sync::mpsc::{self, Receiver, Sender};

use gf_core::RawFix;

use crate::{PipelineError, PipelineResult};

/// Create a connected publisher/subscription pair.
pub fn fix_channel() -> (FixPublisher, FixSubscription) {
    let (tx, rx) = mpsc::channel();
    (FixPublisher { tx }, FixSubscription { rx })
}

/// Producer handle.  Cheap to clone; each clone may live on its own thread.
#[derive(Debug, Clone)]
pub struct FixPublisher {
    tx: Sender<RawFix>,
}

impl FixPublisher {
    /// Queue one reading.  Fails once the subscription has been dropped,
    /// which is the producer's signal to stop.
    pub fn publish(&self, fix: RawFix) -> PipelineResult<()> {
        self.tx.send(fix).map_err(|_| PipelineError::Disconnected)
    }
}

/// Consumer handle.  Not `Clone`: there is exactly one consumer.
#[derive(Debug)]
pub struct FixSubscription {
    rx: Receiver<RawFix>,
}

impl FixSubscription {
    /// Block for the next reading.  `None` once all publishers are gone and
    /// the queue is empty.
    pub fn next_fix(&self) -> Option<RawFix> {
        self.rx.recv().ok()
    }

    /// Take a reading if one is already queued, for consumers that poll
    /// (e.g. between UI frames) instead of blocking in
    /// [`Pipeline::run`][crate::Pipeline::run].  Feed the result to
    /// [`Pipeline::handle`][crate::Pipeline::handle].
    pub fn try_next_fix(&self) -> Option<RawFix> {
        self.rx.try_recv().ok()
    }
}

impl Iterator for FixSubscription {
    type Item = RawFix;

    fn next(&mut self) -> Option<RawFix> {
        self.next_fix()
    }
}
