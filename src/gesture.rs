//! First-gesture observer.
//!
//! Audio may only start in response to a user gesture. Several kinds of input
//! count (scroll, click, pointer move, key, touch) and whichever arrives first
//! should trigger the start, exactly once. `FirstGesture` folds all of them
//! into a single "user interacted" signal:
//!
//! ```
//! use ambient_drone::gesture::{FirstGesture, GestureKind};
//!
//! let mut gate = FirstGesture::all();
//! let mut starts = 0;
//!
//! for kind in [GestureKind::PointerMove, GestureKind::Click, GestureKind::Key] {
//!     gate.notify(kind, |_| {
//!         starts += 1;
//!         Ok::<(), ()>(())
//!     });
//! }
//!
//! assert_eq!(starts, 1);
//! assert!(!gate.is_armed());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A kind of user input that counts as a gesture.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Scroll,
    Click,
    PointerMove,
    Key,
    Touch,
}

impl GestureKind {
    pub const ALL: [GestureKind; 5] = [
        GestureKind::Scroll,
        GestureKind::Click,
        GestureKind::PointerMove,
        GestureKind::Key,
        GestureKind::Touch,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Multiplexes gesture sources into one fire-once signal.
///
/// Sources stay subscribed until a handler succeeds; then every source is
/// dropped in the same step, so later gestures in the same tick see a
/// disarmed observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstGesture {
    subscribed: u8,
}

impl FirstGesture {
    pub fn new(kinds: impl IntoIterator<Item = GestureKind>) -> Self {
        let subscribed = kinds.into_iter().fold(0, |acc, kind| acc | kind.bit());
        Self { subscribed }
    }

    pub fn all() -> Self {
        Self::new(GestureKind::ALL)
    }

    pub fn is_armed(&self) -> bool {
        self.subscribed != 0
    }

    pub fn is_subscribed(&self, kind: GestureKind) -> bool {
        self.subscribed & kind.bit() != 0
    }

    /// Unsubscribe every source at once.
    pub fn disarm(&mut self) {
        self.subscribed = 0;
    }

    /// Deliver a gesture.
    ///
    /// Returns `None` when `kind` is not (or no longer) subscribed and the
    /// handler was not called. Otherwise returns the handler's result; on
    /// `Ok` the observer disarms, on `Err` every source stays armed for a
    /// retry.
    pub fn notify<T, E>(
        &mut self,
        kind: GestureKind,
        on_first: impl FnOnce(GestureKind) -> Result<T, E>,
    ) -> Option<Result<T, E>> {
        if !self.is_subscribed(kind) {
            return None;
        }

        let result = on_first(kind);
        if result.is_ok() {
            self.disarm();
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_subscribes_every_kind() {
        let gate = FirstGesture::all();
        for kind in GestureKind::ALL {
            assert!(gate.is_subscribed(kind), "{kind:?} should be subscribed");
        }
    }

    #[test]
    fn unsubscribed_kind_is_ignored() {
        let mut gate = FirstGesture::new([GestureKind::Click]);
        let mut called = false;

        let outcome = gate.notify(GestureKind::Scroll, |_| {
            called = true;
            Ok::<_, ()>(())
        });

        assert!(outcome.is_none());
        assert!(!called);
        assert!(gate.is_armed());
    }

    #[test]
    fn success_disarms_all_sources() {
        let mut gate = FirstGesture::all();

        let outcome = gate.notify(GestureKind::Touch, |kind| Ok::<_, ()>(kind));

        assert_eq!(outcome, Some(Ok(GestureKind::Touch)));
        assert!(!gate.is_armed());
        for kind in GestureKind::ALL {
            assert!(!gate.is_subscribed(kind));
        }
    }

    #[test]
    fn failure_keeps_sources_armed() {
        let mut gate = FirstGesture::all();

        let outcome = gate.notify(GestureKind::Key, |_| Err::<(), _>("denied"));
        assert_eq!(outcome, Some(Err("denied")));
        assert_eq!(gate, FirstGesture::all());

        let retry = gate.notify(GestureKind::Scroll, |_| Ok::<_, &str>(()));
        assert_eq!(retry, Some(Ok(())));
        assert!(!gate.is_armed());
    }

    #[test]
    fn same_tick_burst_fires_once() {
        let mut gate = FirstGesture::all();
        let mut fired = Vec::new();

        for kind in [
            GestureKind::Scroll,
            GestureKind::Click,
            GestureKind::PointerMove,
            GestureKind::Key,
            GestureKind::Touch,
        ] {
            gate.notify(kind, |k| {
                fired.push(k);
                Ok::<_, ()>(())
            });
        }

        assert_eq!(fired, vec![GestureKind::Scroll]);
    }

    #[test]
    fn explicit_disarm() {
        let mut gate = FirstGesture::all();
        gate.disarm();
        assert!(gate
            .notify(GestureKind::Click, |_| Ok::<_, ()>(()))
            .is_none());
    }
}
