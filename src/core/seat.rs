//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat identifier. Seats are 0-based and ordered; the ordering is
//! the rotation order of turns and the tie-break order of victory checks.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `SeatId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. The first seat is `SeatId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a session with `seat_count` seats.
    ///
    /// ```
    /// use tabletop_session::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all(3).collect();
    /// assert_eq!(seats, vec![SeatId(0), SeatId(1), SeatId(2)]);
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Indexing with a seat outside the map panics; callers holding client
/// input check `contains` first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(|i| factory(SeatId(i))).collect();

        Self { data }
    }

    /// Create a new SeatMap with default values.
    pub fn with_default(seat_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(seat_count, |_| T::default())
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Whether `seat` belongs to this map.
    #[must_use]
    pub fn contains(&self, seat: SeatId) -> bool {
        seat.index() < self.data.len()
    }

    /// Checked lookup.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> Option<&T> {
        self.data.get(seat.index())
    }

    /// Checked mutable lookup.
    pub fn get_mut(&mut self, seat: SeatId) -> Option<&mut T> {
        self.data.get_mut(seat.index())
    }

    /// Iterate over (SeatId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over (SeatId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SeatId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over all seat IDs.
    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> {
        (0..self.data.len() as u8).map(SeatId)
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_basics() {
        let s1 = SeatId::new(1);
        assert_eq!(s1.index(), 1);
        assert_eq!(format!("{}", s1), "Seat 1");
        assert!(SeatId(0) < SeatId(1));
    }

    #[test]
    fn test_seat_map_indexing() {
        let mut map: SeatMap<i32> = SeatMap::new(3, |s| s.index() as i32 * 10);
        assert_eq!(map[SeatId(2)], 20);

        map[SeatId(1)] = 5;
        assert_eq!(map[SeatId(1)], 5);
        assert_eq!(map.seat_count(), 3);
    }

    #[test]
    fn test_seat_map_checked_access() {
        let map: SeatMap<u8> = SeatMap::with_default(2);
        assert!(map.contains(SeatId(1)));
        assert!(!map.contains(SeatId(2)));
        assert_eq!(map.get(SeatId(2)), None);
        assert_eq!(map.get(SeatId(0)), Some(&0));
    }

    #[test]
    fn test_seat_map_iter_order() {
        let map: SeatMap<usize> = SeatMap::new(4, SeatId::index);
        let seats: Vec<_> = map.iter().map(|(s, _)| s).collect();
        assert_eq!(seats, SeatId::all(4).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 seat")]
    fn test_seat_map_zero_seats() {
        let _: SeatMap<i32> = SeatMap::with_default(0);
    }
}
