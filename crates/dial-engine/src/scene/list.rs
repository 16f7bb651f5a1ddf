use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// One recorded command with its paint key and scissor rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels; `None` draws everywhere.
    pub clip_rect: Option<Rect>,
}

/// Draw stream for one frame.
///
/// `push` is O(1). The paint-order index buffer is rebuilt lazily and kept
/// across frames, so a warmed list does not allocate.
///
/// Clips nest: [`push_clip`](Self::push_clip) intersects with the current
/// clip, and every item pushed until the matching
/// [`pop_clip`](Self::pop_clip) inherits the result.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all items and clips, keeping capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
        self.clip_stack.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
        self.sorted_dirty = true;
    }

    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // Disjoint clips collapse to an empty rect; renderers skip those items.
            Some(&parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip without matching push_clip");
        self.clip_stack.pop();
    }

    /// Items back to front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            let items = &self.items;
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..items.len());
            self.sorted_indices.sort_by_key(|&i| items[i].key);
            self.sorted_dirty = false;
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{DrawKind, LineCap};

    fn dot(list: &mut DrawList, z: i32, radius: f32) {
        list.push_circle(ZIndex(z), Vec2::zero(), radius, Color::BLACK, None);
    }

    fn radii(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.radius,
                _ => -1.0,
            })
            .collect()
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        dot(&mut list, 1, 1.0);
        dot(&mut list, 0, 2.0);
        dot(&mut list, 1, 3.0);
        dot(&mut list, 0, 4.0);
        assert_eq!(radii(&mut list), vec![2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn resorts_after_late_push() {
        let mut list = DrawList::new();
        dot(&mut list, 5, 1.0);
        assert_eq!(radii(&mut list), vec![1.0]);
        dot(&mut list, 0, 2.0);
        assert_eq!(radii(&mut list), vec![2.0, 1.0]);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        dot(&mut list, 0, 1.0);
        list.pop_clip();
        dot(&mut list, 0, 2.0);
        list.pop_clip();
        dot(&mut list, 0, 3.0);

        let clips: Vec<_> = list.items().iter().map(|i| i.clip_rect).collect();
        assert_eq!(
            clips,
            vec![
                Some(Rect::new(50.0, 50.0, 50.0, 50.0)),
                Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
                None,
            ]
        );
    }

    #[test]
    fn disjoint_clip_is_empty() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(20.0, 20.0, 10.0, 10.0));
        dot(&mut list, 0, 1.0);
        assert!(list.items()[0].clip_rect.is_some_and(Rect::is_empty));
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_line(ZIndex(0), Vec2::zero(), Vec2::new(1.0, 1.0), 1.0, Color::BLACK, LineCap::Butt);
        list.clear();
        assert!(list.is_empty());
        dot(&mut list, 0, 1.0);
        assert_eq!(list.items()[0].clip_rect, None);
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.items()[0].cmd.kind(), DrawKind::Circle);
    }
}
