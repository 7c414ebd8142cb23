use glam::Vec2;
use quark_core::EntityId;
use rand::Rng;

/// Entity currently held by the pointer, with the grab point relative to the
/// element's top-left corner.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub entity: Option<EntityId>,
    pub grab_offset: Vec2,
}

impl DragState {
    pub fn begin(&mut self, entity: EntityId, grab_offset: Vec2) {
        self.entity = Some(entity);
        self.grab_offset = grab_offset;
    }

    /// Ends the drag, returning the entity that was released.
    pub fn release(&mut self) -> Option<EntityId> {
        self.entity.take()
    }

    /// Drops the drag without a release; no merge is offered.
    pub fn cancel(&mut self) {
        self.entity = None;
        self.grab_offset = Vec2::ZERO;
    }
}

#[inline]
pub fn rect_center(left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(left + width / 2.0, top + height / 2.0)
}

/// Element top-left (area-relative) that keeps the grab point under the pointer.
#[inline]
pub fn drag_position(pointer_client: Vec2, area_origin: Vec2, grab_offset: Vec2) -> Vec2 {
    pointer_client - area_origin - grab_offset
}

/// Area-relative top-left that centres an element of `size` on `center_client`.
#[inline]
pub fn top_left_for_center(center_client: Vec2, area_origin: Vec2, size: Vec2) -> Vec2 {
    center_client - area_origin - size / 2.0
}

/// Random top-left inside an area, leaving `margin` free on the right and bottom.
pub fn random_spawn_position<R: Rng + ?Sized>(rng: &mut R, area_size: Vec2, margin: f32) -> Vec2 {
    let span = (area_size - Vec2::splat(margin)).max(Vec2::ZERO);
    Vec2::new(rng.gen::<f32>() * span.x, rng.gen::<f32>() * span.y)
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}
