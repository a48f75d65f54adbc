//! Fixed-length frame buffer
//!
//! The buffer is a ring with an explicit head index. Logical index 0 is the
//! first LED on the strip. Pushing a color at the front drops the last LED
//! without moving or reallocating the rest of the strip.

use crate::color::Color;
use alloc::vec;
use alloc::vec::Vec;

/// One frame worth of colors, one per LED.
///
/// Equality compares colors in strip order, not the storage layout.
#[derive(Debug, Clone)]
pub struct ColorBuffer {
    /// Backing storage, rotated by `head`
    colors: Vec<Color>,
    /// Storage slot holding logical index 0
    head: usize,
}

impl ColorBuffer {
    /// Create a buffer of `len` black LEDs
    pub fn new(len: usize) -> Self {
        Self::filled(len, Color::BLACK)
    }

    pub fn filled(len: usize, color: Color) -> Self {
        Self {
            colors: vec![color; len],
            head: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.colors.len()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        if index < self.len() {
            Some(self.colors[self.slot(index)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Color> {
        if index < self.len() {
            let slot = self.slot(index);
            Some(&mut self.colors[slot])
        } else {
            None
        }
    }

    /// Set the color at `index`. Returns false if `index` is past the end.
    pub fn set(&mut self, index: usize, color: Color) -> bool {
        match self.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Insert `color` at the front and drop the last LED, returning it.
    ///
    /// On an empty buffer nothing is stored and `color` comes straight back.
    pub fn push_front(&mut self, color: Color) -> Color {
        if self.colors.is_empty() {
            return color;
        }
        self.head = (self.head + self.colors.len() - 1) % self.colors.len();
        core::mem::replace(&mut self.colors[self.head], color)
    }

    /// Move the last LED to the front, shifting every other LED back by one
    pub fn rotate_front(&mut self) {
        if !self.colors.is_empty() {
            self.head = (self.head + self.colors.len() - 1) % self.colors.len();
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.colors.iter_mut().for_each(|c| *c = color);
    }

    /// Both halves of the ring in logical order
    pub fn as_slices(&self) -> (&[Color], &[Color]) {
        let (front, back) = self.colors.split_at(self.head);
        (back, front)
    }

    pub fn iter(&self) -> Iter<'_> {
        let (first, second) = self.as_slices();
        Iter { first, second }
    }

    pub fn to_vec(&self) -> Vec<Color> {
        self.iter().copied().collect()
    }
}

impl PartialEq for ColorBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for ColorBuffer {}

impl From<Vec<Color>> for ColorBuffer {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors, head: 0 }
    }
}

impl<'a> IntoIterator for &'a ColorBuffer {
    type Item = &'a Color;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Logical-order iterator over a [`ColorBuffer`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    first: &'a [Color],
    second: &'a [Color],
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Color;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((head, rest)) = self.first.split_first() {
            self.first = rest;
            return Some(head);
        }
        let (head, rest) = self.second.split_first()?;
        self.second = rest;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(v: u8) -> Color {
        Color::new(v, v, v)
    }

    #[test]
    fn test_push_front_drops_last() {
        let mut buffer = ColorBuffer::from(vec![rgb(1), rgb(2), rgb(3)]);
        let dropped = buffer.push_front(rgb(9));
        assert_eq!(dropped, rgb(3));
        assert_eq!(buffer.to_vec(), vec![rgb(9), rgb(1), rgb(2)]);
        assert_eq!(buffer.len(), 3);

        buffer.push_front(rgb(8));
        buffer.push_front(rgb(7));
        buffer.push_front(rgb(6));
        assert_eq!(buffer.to_vec(), vec![rgb(6), rgb(7), rgb(8)]);
    }

    #[test]
    fn test_rotate_front() {
        let mut buffer = ColorBuffer::from(vec![rgb(1), rgb(2), rgb(3)]);
        buffer.rotate_front();
        assert_eq!(buffer.to_vec(), vec![rgb(3), rgb(1), rgb(2)]);
        buffer.rotate_front();
        buffer.rotate_front();
        assert_eq!(buffer.to_vec(), vec![rgb(1), rgb(2), rgb(3)]);
    }

    #[test]
    fn test_indexing_follows_head() {
        let mut buffer = ColorBuffer::new(4);
        buffer.push_front(rgb(5));
        assert_eq!(buffer.get(0), Some(rgb(5)));
        assert_eq!(buffer.get(3), Some(Color::BLACK));
        assert_eq!(buffer.get(4), None);

        assert!(buffer.set(1, rgb(6)));
        assert!(!buffer.set(4, rgb(6)));
        assert_eq!(buffer.to_vec()[..2], [rgb(5), rgb(6)]);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buffer = ColorBuffer::new(0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.push_front(rgb(1)), rgb(1));
        buffer.rotate_front();
        assert_eq!(buffer.iter().len(), 0);
    }

    #[test]
    fn test_equality_ignores_head() {
        let mut ring = ColorBuffer::new(3);
        ring.push_front(rgb(7));
        assert_eq!(ring, ColorBuffer::from(vec![rgb(7), Color::BLACK, Color::BLACK]));

        let mut rotated = ColorBuffer::from(vec![rgb(2), rgb(3), rgb(1)]);
        rotated.rotate_front();
        rotated.rotate_front();
        assert_eq!(rotated, ColorBuffer::from(vec![rgb(3), rgb(1), rgb(2)]));
        assert_ne!(rotated, ColorBuffer::from(vec![rgb(2), rgb(3), rgb(1)]));
        assert_ne!(ColorBuffer::new(2), ColorBuffer::new(3));
    }

    #[test]
    fn test_iter_is_exact_size() {
        let mut buffer = ColorBuffer::new(5);
        buffer.push_front(rgb(1));
        buffer.push_front(rgb(2));
        let mut iter = buffer.iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
    }
}
