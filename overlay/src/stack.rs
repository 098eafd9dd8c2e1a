use std::cell::Cell;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::rc::Weak;

use gimnasio_protocol::OverlayConfig;
use tracing::trace;

/// Immutable view of the stack at one point in time. Index 0 sits closest
/// to the hub; the last entry is the top.
#[derive(Debug, Clone, PartialEq)]
pub struct StackSnapshot {
    entries: Rc<[OverlayConfig]>,
}

impl StackSnapshot {
    pub fn empty() -> Self {
        Self {
            entries: Rc::from(Vec::new()),
        }
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.depth() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The topmost overlay, if any.
    pub fn current(&self) -> Option<&OverlayConfig> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[OverlayConfig] {
        &self.entries
    }

    /// Bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, OverlayConfig> {
        self.entries.iter()
    }

    /// Entries paired with their distance from the top (0 = top), top first.
    pub fn entries_with_depth(&self) -> impl Iterator<Item = (usize, &OverlayConfig)> {
        self.entries.iter().rev().enumerate()
    }
}

impl Default for StackSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<OverlayConfig>> for StackSnapshot {
    fn from(entries: Vec<OverlayConfig>) -> Self {
        Self {
            entries: Rc::from(entries),
        }
    }
}

/// A stack mutation. Every op is a pure function of the previous entries.
#[derive(Debug, Clone, PartialEq)]
pub enum StackOp {
    Push(OverlayConfig),
    Pop,
    Replace(OverlayConfig),
    Clear,
}

impl StackOp {
    pub fn apply(&self, previous: &[OverlayConfig]) -> Vec<OverlayConfig> {
        match self {
            StackOp::Push(config) => {
                let mut next = Vec::with_capacity(previous.len() + 1);
                next.extend_from_slice(previous);
                next.push(config.clone());
                next
            }
            StackOp::Pop => match previous.split_last() {
                Some((_, rest)) => rest.to_vec(),
                None => Vec::new(),
            },
            StackOp::Replace(config) => match previous.split_last() {
                Some((_, rest)) => {
                    let mut next = rest.to_vec();
                    next.push(config.clone());
                    next
                }
                None => vec![config.clone()],
            },
            StackOp::Clear => Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StackOp::Push(_) => "push",
            StackOp::Pop => "pop",
            StackOp::Replace(_) => "replace",
            StackOp::Clear => "clear",
        }
    }
}

/// One applied op, as seen by subscribers.
#[derive(Debug)]
pub struct StackTransition<'a> {
    pub op: &'a StackOp,
    pub previous: &'a StackSnapshot,
    pub current: &'a StackSnapshot,
}

impl StackTransition<'_> {
    /// False for ops that left the stack as it was (e.g. `pop` on empty).
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }

    /// `Some(occupied)` when the op crossed the empty/non-empty boundary.
    pub fn occupancy_changed(&self) -> Option<bool> {
        let was = !self.previous.is_empty();
        let now = !self.current.is_empty();
        (was != now).then_some(now)
    }
}

type Subscriber = Rc<RefCell<dyn FnMut(&StackTransition<'_>)>>;

struct Inner {
    snapshot: RefCell<StackSnapshot>,
    pending: RefCell<VecDeque<StackOp>>,
    draining: Cell<bool>,
    subscribers: RefCell<Vec<(u64, Subscriber)>>,
    next_subscriber_id: Cell<u64>,
}

/// Handle to the overlay stack. Clones share the same stack.
///
/// Mutations are queued and applied in call order. An op issued while
/// subscribers are being notified (for example a view pushing in reaction
/// to a pop) is applied right after the current notification round, on top
/// of the state the earlier op produced.
#[derive(Clone)]
pub struct OverlayStack {
    inner: Rc<Inner>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                snapshot: RefCell::new(StackSnapshot::empty()),
                pending: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber_id: Cell::new(0),
            }),
        }
    }

    /// Append `config`. Duplicates of the same kind are allowed.
    pub fn push(&self, config: OverlayConfig) {
        self.dispatch(StackOp::Push(config));
    }

    /// Remove the top entry; no-op on an empty stack.
    pub fn pop(&self) {
        self.dispatch(StackOp::Pop);
    }

    /// Swap the top entry for `config`, or push it when empty.
    pub fn replace(&self, config: OverlayConfig) {
        self.dispatch(StackOp::Replace(config));
    }

    /// Empty the stack in a single transition.
    pub fn clear(&self) {
        self.dispatch(StackOp::Clear);
    }

    pub fn dispatch(&self, op: StackOp) {
        self.inner.pending.borrow_mut().push_back(op);
        if self.inner.draining.replace(true) {
            return;
        }
        let _drain = DrainGuard(&self.inner.draining);

        loop {
            let Some(op) = self.inner.pending.borrow_mut().pop_front() else {
                break;
            };
            let previous = self.snapshot();
            let current = StackSnapshot::from(op.apply(previous.entries()));
            *self.inner.snapshot.borrow_mut() = current.clone();
            trace!(
                op = op.name(),
                from = previous.depth(),
                to = current.depth(),
                top = current.current().map(|c| c.kind().as_str()),
                "overlay stack transition"
            );

            let subscribers: Vec<Subscriber> = self
                .inner
                .subscribers
                .borrow()
                .iter()
                .map(|(_, subscriber)| Rc::clone(subscriber))
                .collect();
            let transition = StackTransition {
                op: &op,
                previous: &previous,
                current: &current,
            };
            for subscriber in subscribers {
                (*subscriber.borrow_mut())(&transition);
            }
        }
    }

    pub fn snapshot(&self) -> StackSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    pub fn depth(&self) -> usize {
        self.inner.snapshot.borrow().depth()
    }

    pub fn can_go_back(&self) -> bool {
        self.depth() > 0
    }

    pub fn current_overlay(&self) -> Option<OverlayConfig> {
        self.inner.snapshot.borrow().current().cloned()
    }

    /// Register `callback` to run once per applied op. The callback stays
    /// registered until the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&StackTransition<'_>) + 'static,
    {
        let id = self.inner.next_subscriber_id.get();
        self.inner.next_subscriber_id.set(id + 1);
        let subscriber: Subscriber = Rc::new(RefCell::new(callback));
        self.inner.subscribers.borrow_mut().push((id, subscriber));
        Subscription {
            id,
            stack: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    pub(crate) fn downgrade(&self) -> WeakOverlayStack {
        WeakOverlayStack(Rc::downgrade(&self.inner))
    }
}

impl Default for OverlayStack {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OverlayStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayStack")
            .field("entries", &self.inner.snapshot.borrow().entries())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct WeakOverlayStack(Weak<Inner>);

impl WeakOverlayStack {
    pub(crate) fn upgrade(&self) -> Option<OverlayStack> {
        self.0.upgrade().map(|inner| OverlayStack { inner })
    }
}

struct DrainGuard<'a>(&'a Cell<bool>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Keeps a stack subscriber registered; unsubscribes on drop.
#[must_use = "dropping the subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    stack: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.stack.upgrade() {
            inner
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
