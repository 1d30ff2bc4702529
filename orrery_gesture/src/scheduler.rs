// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Handle for a requested frame callback.
///
/// Tokens from one scheduler are unique and increase monotonically, so a
/// callback can always tell whether it belongs to the current request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    /// Wraps a raw token value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Source of per-frame callbacks.
///
/// Hosts implement this over their own animation-frame mechanism and call
/// back into the gesture code with the token once the frame fires. A token
/// that was cancelled must never be delivered, but consumers also ignore
/// stale tokens on their own.
pub trait FrameScheduler {
    /// Requests one callback on the next frame.
    fn request_frame(&mut self) -> FrameToken;

    /// Withdraws a previously requested callback. Unknown tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> FrameToken {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        (**self).cancel_frame(token);
    }
}

/// A host-agnostic [`FrameScheduler`] that queues requests until drained.
///
/// Headless hosts and tests call [`FrameQueue::drain`] once per frame and
/// deliver each returned token.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    next: u64,
    pending: Vec<FrameToken>,
}

impl FrameQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `token` has been requested and not yet drained or cancelled.
    #[must_use]
    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.pending.contains(&token)
    }

    /// Number of pending requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every pending token, oldest first.
    pub fn drain(&mut self) -> Vec<FrameToken> {
        core::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameToken {
        self.next += 1;
        let token = FrameToken(self.next);
        self.pending.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.retain(|t| *t != token);
    }
}
