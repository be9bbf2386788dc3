//! Kinetic merge of two sub-hulls.
//!
//! The lower hull of a point set, viewed through the xy projection while the
//! sweep parameter `t` runs from `-inf` to `+inf`, is a 2D lower hull whose
//! vertices are inserted and deleted one at a time. A sub-hull is stored as
//! that *movie*: the boundary thread at `t = -inf` plus the list of vertices
//! whose status changes, ordered by time. Toggling them in order replays the
//! movie, and each toggle corresponds to exactly one hull face.
//!
//! Merging replays both movies at once while tracking the bridge between the
//! two threads. Six kinds of event can happen next; their times are put in a
//! small table, the earliest one later than the current time wins, and
//! exactly one structural change is applied. The events that survive into
//! the merged movie are recorded, and [`reconcile`] then rewinds the threads
//! to `t = -inf` so the merged movie can be replayed from its start.

use super::bridge::find_bridge;
use super::predicates::turn_time;
use super::vertex::{Boundary, VertexId};
use num_traits::Float;

/// The six sources of the next structural change, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    /// The next vertex of the left movie changes status.
    LeftLocal,
    /// The next vertex of the right movie changes status.
    RightLocal,
    /// The left endpoint's predecessor becomes visible from the right endpoint.
    LeftBridgePrev,
    /// The left endpoint's successor becomes visible from the right endpoint.
    LeftBridgeNext,
    /// The right endpoint's predecessor becomes visible from the left endpoint.
    RightBridgePrev,
    /// The right endpoint's successor becomes visible from the left endpoint.
    RightBridgeNext,
}

impl Event {
    const ALL: [Event; 6] = [
        Event::LeftLocal,
        Event::RightLocal,
        Event::LeftBridgePrev,
        Event::LeftBridgeNext,
        Event::RightBridgePrev,
        Event::RightBridgeNext,
    ];
}

/// Mutable state of one merge: the bridge and the read positions in both
/// input movies.
struct Kinetic<'a, F> {
    boundary: &'a mut Boundary<F>,
    left: &'a [VertexId],
    right: &'a [VertexId],
    next_left: usize,
    next_right: usize,
    bridge: (VertexId, VertexId),
    eps: F,
}

impl<F: Float> Kinetic<'_, F> {
    /// Turn time of a vertex with its own current neighbours.
    fn local_time(&self, v: Option<VertexId>) -> F {
        let b = &*self.boundary;
        match v {
            Some(v) => turn_time(b, b.prev(v), Some(v), b.next(v), self.eps),
            None => F::infinity(),
        }
    }

    /// Candidate times for every event source, indexed like [`Event::ALL`].
    fn candidates(&self) -> [F; 6] {
        let b = &*self.boundary;
        let (u, v) = self.bridge;
        [
            self.local_time(self.left.get(self.next_left).copied()),
            self.local_time(self.right.get(self.next_right).copied()),
            turn_time(b, b.prev(u), Some(u), Some(v), self.eps),
            turn_time(b, Some(u), b.next(u), Some(v), self.eps),
            turn_time(b, Some(u), b.prev(v), Some(v), self.eps),
            turn_time(b, Some(u), Some(v), b.next(v), self.eps),
        ]
    }

    /// Earliest finite event strictly after `now`; earlier slots win ties.
    fn next_event(&self, now: F) -> Option<(Event, F)> {
        let times = self.candidates();
        let mut best: Option<(Event, F)> = None;

        for (event, time) in Event::ALL.into_iter().zip(times) {
            let earlier = best.map_or(true, |(_, best_time)| time < best_time);
            if time > now && time.is_finite() && earlier {
                best = Some((event, time));
            }
        }

        best
    }

    /// Applies one event, pushing any vertex that belongs to the merged movie.
    fn apply(&mut self, event: Event, recorded: &mut Vec<VertexId>) {
        let (u, v) = self.bridge;
        match event {
            Event::LeftLocal => {
                let w = self.left[self.next_left];
                self.next_left += 1;
                if self.boundary.x(w) < self.boundary.x(u) {
                    recorded.push(w);
                }
                self.boundary.toggle(w);
            }
            Event::RightLocal => {
                let w = self.right[self.next_right];
                self.next_right += 1;
                if self.boundary.x(w) > self.boundary.x(v) {
                    recorded.push(w);
                }
                self.boundary.toggle(w);
            }
            Event::LeftBridgePrev => {
                recorded.push(u);
                if let Some(prev) = self.boundary.prev(u) {
                    self.bridge.0 = prev;
                }
            }
            Event::LeftBridgeNext => {
                if let Some(next) = self.boundary.next(u) {
                    self.bridge.0 = next;
                    recorded.push(next);
                }
            }
            Event::RightBridgePrev => {
                if let Some(prev) = self.boundary.prev(v) {
                    self.bridge.1 = prev;
                    recorded.push(prev);
                }
            }
            Event::RightBridgeNext => {
                recorded.push(v);
                if let Some(next) = self.boundary.next(v) {
                    self.bridge.1 = next;
                }
            }
        }
    }
}

/// Merges the movies of two adjacent sub-hulls into the movie of their union.
///
/// `left_inner` is the rightmost vertex of the left half and `right_inner` the
/// leftmost vertex of the right half (in split-axis order). On return the
/// boundary thread describes the merged hull at `t = -inf` and the returned
/// list is the merged movie, oldest event first.
pub(crate) fn merge<F: Float>(
    boundary: &mut Boundary<F>,
    left: &[VertexId],
    right: &[VertexId],
    left_inner: VertexId,
    right_inner: VertexId,
    eps: F,
) -> Vec<VertexId> {
    let split = boundary.x(left_inner);
    let bridge = find_bridge(boundary, left_inner, right_inner);

    let mut kinetic = Kinetic {
        boundary: &mut *boundary,
        left,
        right,
        next_left: 0,
        next_right: 0,
        bridge,
        eps,
    };

    let mut recorded = Vec::with_capacity(left.len() + right.len() + 2);
    let mut now = F::neg_infinity();
    while let Some((event, time)) = kinetic.next_event(now) {
        now = time;
        kinetic.apply(event, &mut recorded);
    }

    let bridge = kinetic.bridge;
    tracing::trace!(
        left = left.len(),
        right = right.len(),
        merged = recorded.len(),
        "kinetic merge finished"
    );

    reconcile(boundary, &recorded, bridge, split);
    recorded
}

/// Rewinds the boundary thread from `t = +inf` back to `t = -inf`.
///
/// Starting from the final bridge, the recorded events are undone newest
/// first. A vertex strictly between the current bridge endpoints was part of
/// the merged hull and is threaded in between them, becoming the endpoint on
/// its own side of `split`. Anything else only lived on one of the old
/// sub-hulls and is toggled back, sliding the bridge endpoint off it if it
/// was one.
pub(crate) fn reconcile<F: Float>(
    boundary: &mut Boundary<F>,
    recorded: &[VertexId],
    bridge: (VertexId, VertexId),
    split: F,
) {
    let (mut u, mut v) = bridge;
    boundary.link(u, v);

    for &w in recorded.iter().rev() {
        let x = boundary.x(w);
        if boundary.x(u) < x && x < boundary.x(v) {
            boundary.link(u, w);
            boundary.link(w, v);
            if x <= split {
                u = w;
            } else {
                v = w;
            }
        } else {
            boundary.toggle(w);
            if w == u {
                if let Some(prev) = boundary.prev(u) {
                    u = prev;
                }
            } else if w == v {
                if let Some(next) = boundary.next(v) {
                    v = next;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point3;

    fn arena(points: &[(f64, f64, f64)]) -> Boundary<f64> {
        Boundary::new(
            points
                .iter()
                .enumerate()
                .map(|(i, &(x, y, z))| (Point3::new(x, y, z), i as i64)),
        )
    }

    /// Walks the thread from `start` along `next`.
    fn walk(boundary: &Boundary<f64>, start: VertexId) -> Vec<VertexId> {
        let mut out = vec![start];
        let mut cur = start;
        while let Some(next) = boundary.next(cur) {
            out.push(next);
            cur = next;
        }
        out
    }

    #[test]
    fn test_merge_two_singletons() {
        let mut boundary = arena(&[(0.0, 0.0, 0.0), (1.0, 0.5, 0.0)]);
        let movie = merge(&mut boundary, &[], &[], 0, 1, f64::EPSILON);

        // Two points never change status: an empty movie and a single edge.
        assert!(movie.is_empty());
        assert_eq!(boundary.next(0), Some(1));
        assert_eq!(boundary.prev(1), Some(0));
        assert_eq!(boundary.prev(0), None);
        assert_eq!(boundary.next(1), None);
    }

    #[test]
    fn test_merge_three_points() {
        let mut boundary = arena(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.2), (2.0, 0.0, 0.1)]);
        let left = merge(&mut boundary, &[], &[], 0, 1, f64::EPSILON);
        assert!(left.is_empty());

        let movie = merge(&mut boundary, &left, &[], 1, 2, f64::EPSILON);

        // Three points form one lower face: exactly one status change.
        assert_eq!(movie.len(), 1);
        assert_eq!(walk(&boundary, 0).first(), Some(&0));
        assert_eq!(walk(&boundary, 0).last(), Some(&2));
    }

    #[test]
    fn test_event_order_breaks_ties_by_slot() {
        assert_eq!(Event::ALL[0], Event::LeftLocal);
        assert_eq!(Event::ALL[5], Event::RightBridgeNext);
    }

    #[test]
    fn test_reconcile_threads_vertices_between_bridge() {
        let mut boundary = arena(&[(0.0, 0.0, 0.0), (1.0, -1.0, 0.0), (2.0, 0.0, 0.0)]);
        reconcile(&mut boundary, &[1], (0, 2), 1.5);

        assert_eq!(walk(&boundary, 0), vec![0, 1, 2]);
        assert_eq!(boundary.prev(2), Some(1));
    }
}
