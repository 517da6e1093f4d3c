//! Bounded array engine

use crate::animation::{Ease, Motion};
use crate::error::{Result, VisError};
use crate::layout::ArrayLayout;
use crate::source::{sample_in, ValueRange, ValueSource};
use crate::types::StructureKind;
use crate::view::{ElementKey, ElementView, FrameView};

/// Fixed-capacity array of integers with a cyclic cursor.
///
/// Storage is allocated once at `capacity`; only `[0, size)` is meaningful.
/// Slots past `size` may keep stale values and are never shown.
#[derive(Debug, Clone)]
pub struct ArrayEngine {
    values: Vec<i32>,
    slots: Vec<Motion>,
    size: usize,
    current: Option<usize>,
    default_size: usize,
    layout: ArrayLayout,
}

impl ArrayEngine {
    /// An empty array. `default_size` is the element count [`Self::reset`] refills to.
    pub fn new(capacity: usize, default_size: usize) -> Self {
        Self {
            values: vec![0; capacity],
            slots: vec![Motion::default(); capacity],
            size: 0,
            current: None,
            default_size: default_size.min(capacity),
            layout: ArrayLayout::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// The live prefix
    pub fn values(&self) -> &[i32] {
        &self.values[..self.size]
    }

    /// Highlighted index, `None` before the first step or when empty
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Write `value` at index `size`. Fails when the array is full.
    pub fn append(&mut self, value: i32) -> Result<usize> {
        if self.is_full() {
            return Err(VisError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let index = self.size;
        self.values[index] = value;
        self.slots[index] = Motion::from_to(self.layout.entry(index), self.layout.slot(index));
        self.size += 1;
        tracing::debug!(value, index, "Array append");
        Ok(index)
    }

    /// Drop the last element. Returns `None` (and changes nothing) when empty.
    pub fn remove_last(&mut self) -> Option<i32> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        let removed = self.values[self.size];
        if self.current.is_some_and(|i| i >= self.size) {
            self.current = self.size.checked_sub(1);
        }
        tracing::debug!(value = removed, size = self.size, "Array remove last");
        Some(removed)
    }

    /// Advance the cursor one index, wrapping to 0 after the last element
    pub fn step(&mut self) -> Option<usize> {
        self.current = if self.size == 0 {
            None
        } else {
            Some(self.current.map_or(0, |i| (i + 1) % self.size))
        };
        self.current
    }

    /// Refill to the default element count and clear the cursor.
    ///
    /// Index `i` takes `seed[i]` when given, otherwise a value drawn from `source`.
    pub fn reset(
        &mut self,
        seed: Option<&[i32]>,
        source: &mut dyn ValueSource,
        range: ValueRange,
    ) -> usize {
        self.size = self.default_size;
        for index in 0..self.size {
            let value = match seed.and_then(|s| s.get(index)) {
                Some(v) => *v,
                None => sample_in(source, range),
            };
            self.values[index] = value;
            self.slots[index] = Motion::from_to(self.layout.entry(index), self.layout.slot(index));
        }
        self.current = None;
        tracing::debug!(size = self.size, "Array reset");
        self.size
    }

    /// Point every slot at its fixed position
    pub fn relayout(&mut self, layout: &ArrayLayout) {
        self.layout = *layout;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.retarget(layout.slot(index));
        }
    }

    /// Advance live slot positions. Returns true while anything moves.
    pub fn tick(&mut self, dt: f32, ease: Ease) -> bool {
        let mut moving = false;
        for slot in &mut self.slots[..self.size] {
            moving |= slot.tick(dt, ease);
        }
        moving
    }

    pub fn view(&self) -> FrameView {
        let mut frame = FrameView::new(StructureKind::Array);
        frame.elements = (0..self.size)
            .map(|index| ElementView {
                key: ElementKey::Slot(index),
                value: self.values[index],
                position: self.slots[index].position,
                highlighted: self.current == Some(index),
            })
            .collect();
        frame
    }
}
