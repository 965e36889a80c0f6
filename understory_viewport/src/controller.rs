// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use understory_affine::BoundingBox;

use crate::input::{ElementRect, WheelInput, pinch_step};
use crate::interaction::{InteractionState, PanGesture};
use crate::listeners::{ListenerId, Listeners};
use crate::modes::DragPanMode;
use crate::state::{Constraints, Viewport, ViewportUpdate, clamp};
use crate::transform::CanvasTransform;

/// Default padding fraction for [`ViewportController::fit_to_content`].
pub const DEFAULT_FIT_PADDING: f64 = 0.1;

/// Which listener lists a commit notifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notify {
    All,
    ViewportOnly,
}

/// Stateful pan/zoom controller over a fixed‑size viewport.
///
/// Every mutation goes through the same pipeline: the partial state is merged
/// into the [`Viewport`], the [`Constraints`] are enforced, then listeners are
/// notified. Constraint enforcement is, in order:
///
/// 1. Clamp `scale` into `[min_scale, max_scale]`.
/// 2. With a `bounding_box`, clamp `x` into
///    `[min_x − 0.9·width/scale, max_x − 0.1·width/scale]` and `y` likewise,
///    which keeps some of the bounded content on screen.
/// 3. With `snap_to_grid`, and only while no drag is in progress, round `x`
///    and `y` to the nearest multiple of `grid_size`.
///
/// Listeners run synchronously inside the mutating call. Mutators take
/// `&mut self`, so a listener can only reach the controller through shared
/// interior mutability; re‑entering it from a listener is the caller's
/// responsibility and will typically panic on the `RefCell` borrow.
///
/// Degenerate input (a zero‑sized viewport or content box) is not rejected.
/// Non‑finite values flow through unchanged.
#[derive(Debug)]
pub struct ViewportController {
    viewport: Viewport,
    constraints: Constraints,
    interaction: InteractionState,
    drag_pan_mode: DragPanMode,
    viewport_listeners: Listeners<Viewport>,
    transform_listeners: Listeners<CanvasTransform>,
}

impl ViewportController {
    /// Creates a controller for `viewport`.
    ///
    /// The initial state is taken as given; constraints apply from the first
    /// mutation on. `None` uses [`Constraints::default`].
    #[must_use]
    pub fn new(viewport: Viewport, constraints: Option<Constraints>) -> Self {
        Self {
            viewport,
            constraints: constraints.unwrap_or_default(),
            interaction: InteractionState::Idle,
            drag_pan_mode: DragPanMode::default(),
            viewport_listeners: Listeners::default(),
            transform_listeners: Listeners::default(),
        }
    }

    /// Current viewport state.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// World to screen transform for the current state, computed fresh.
    #[must_use]
    pub fn transform(&self) -> CanvasTransform {
        CanvasTransform::from_viewport(&self.viewport)
    }

    /// Current constraints.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Current interaction state.
    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Returns `true` between [`start_pan`](Self::start_pan) and
    /// [`end_pan`](Self::end_pan).
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.interaction.is_panning()
    }

    /// Current drag pan mode.
    #[must_use]
    pub fn drag_pan_mode(&self) -> DragPanMode {
        self.drag_pan_mode
    }

    /// Sets how [`update_pan`](Self::update_pan) converts pointer movement.
    pub fn set_drag_pan_mode(&mut self, mode: DragPanMode) {
        self.drag_pan_mode = mode;
    }

    /// Registers a listener called with the new [`Viewport`] after each change.
    pub fn on_viewport_change(
        &mut self,
        callback: impl FnMut(&Viewport) + 'static,
    ) -> ListenerId {
        self.viewport_listeners.add(callback)
    }

    /// Registers a listener called with the new [`CanvasTransform`] after each
    /// change.
    ///
    /// Constraint updates do not notify transform listeners.
    pub fn on_transform_change(
        &mut self,
        callback: impl FnMut(&CanvasTransform) + 'static,
    ) -> ListenerId {
        self.transform_listeners.add(callback)
    }

    /// Unregisters a viewport listener. Returns `false` if `id` was unknown.
    pub fn remove_viewport_listener(&mut self, id: ListenerId) -> bool {
        self.viewport_listeners.remove(id)
    }

    /// Unregisters a transform listener. Returns `false` if `id` was unknown.
    pub fn remove_transform_listener(&mut self, id: ListenerId) -> bool {
        self.transform_listeners.remove(id)
    }

    /// Merges `update` into the viewport through the mutation pipeline.
    pub fn update_viewport(&mut self, update: ViewportUpdate) {
        self.commit(update, Notify::All);
    }

    /// Zooms by `factor`, keeping the world point under `center` fixed on
    /// screen.
    ///
    /// `center` is in screen pixels and defaults to the middle of the
    /// viewport. The resulting scale is clamped to the constraints; if the
    /// clamped scale equals the current one nothing changes and no listener
    /// fires.
    pub fn zoom(&mut self, factor: f64, center: Option<Point>) {
        let vp = self.viewport;
        let center = center.unwrap_or_else(|| Point::new(vp.width / 2.0, vp.height / 2.0));
        let new_scale = self.constraints.clamp_scale(vp.scale * factor);
        let actual_factor = new_scale / vp.scale;
        if actual_factor == 1.0 {
            return;
        }
        let dx = (center.x - vp.x) * (1.0 - actual_factor);
        let dy = (center.y - vp.y) * (1.0 - actual_factor);
        self.commit(
            ViewportUpdate {
                x: Some(vp.x + dx),
                y: Some(vp.y + dy),
                scale: Some(new_scale),
                rotation: None,
            },
            Notify::All,
        );
    }

    /// Zooms to an absolute `scale` about `center`; see [`zoom`](Self::zoom).
    pub fn zoom_to(&mut self, scale: f64, center: Option<Point>) {
        self.zoom(scale / self.viewport.scale, center);
    }

    /// Adds `(delta_x, delta_y)` screen pixels to the pan offset.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        let vp = self.viewport;
        self.commit(
            ViewportUpdate {
                x: Some(vp.x + delta_x),
                y: Some(vp.y + delta_y),
                ..ViewportUpdate::default()
            },
            Notify::All,
        );
    }

    /// Scales and centers `bounds` (world space) inside the viewport.
    ///
    /// `padding` is a fraction of the content size added on each side; see
    /// [`DEFAULT_FIT_PADDING`].
    pub fn fit_to_content(&mut self, bounds: &BoundingBox, padding: f64) {
        let vp = self.viewport;
        let padding_x = bounds.width() * padding;
        let padding_y = bounds.height() * padding;
        let scale_x = vp.width / (bounds.width() + 2.0 * padding_x);
        let scale_y = vp.height / (bounds.height() + 2.0 * padding_y);
        let scale = self.constraints.clamp_scale(scale_x.min(scale_y));
        let center = bounds.center();
        tracing::debug!(
            min_x = bounds.min_x(),
            min_y = bounds.min_y(),
            max_x = bounds.max_x(),
            max_y = bounds.max_y(),
            scale,
            "fit to content"
        );
        self.commit(
            ViewportUpdate {
                x: Some(vp.width / 2.0 - center.x * scale),
                y: Some(vp.height / 2.0 - center.y * scale),
                scale: Some(scale),
                rotation: None,
            },
            Notify::All,
        );
    }

    /// Pans so that `world_point` sits at the viewport center, keeping the
    /// current scale.
    pub fn center_on(&mut self, world_point: Point) {
        let vp = self.viewport;
        self.commit(
            ViewportUpdate {
                x: Some(vp.width / 2.0 - world_point.x * vp.scale),
                y: Some(vp.height / 2.0 - world_point.y * vp.scale),
                ..ViewportUpdate::default()
            },
            Notify::All,
        );
    }

    /// Starts a drag pan at `point` (screen pixels).
    ///
    /// Grid snapping is suspended until [`end_pan`](Self::end_pan).
    pub fn start_pan(&mut self, point: Point) {
        tracing::trace!(x = point.x, y = point.y, "pan started");
        self.interaction = InteractionState::Panning(PanGesture {
            start_position: point,
            last_pointer_position: point,
            start_transform: self.transform(),
        });
    }

    /// Continues a drag pan; does nothing unless a drag is in progress.
    ///
    /// The pointer delta since the last update is converted according to the
    /// [`DragPanMode`] and applied with [`pan`](Self::pan).
    pub fn update_pan(&mut self, point: Point) {
        let InteractionState::Panning(gesture) = &mut self.interaction else {
            return;
        };
        let delta = gesture.advance(point);
        let delta: Vec2 = match self.drag_pan_mode {
            DragPanMode::ScaleDamped => delta / self.viewport.scale,
            DragPanMode::ScreenPixels => delta,
        };
        self.pan(delta.x, delta.y);
    }

    /// Ends a drag pan, re‑applies constraints (including grid snapping) and
    /// notifies all listeners.
    pub fn end_pan(&mut self) {
        if let InteractionState::Panning(gesture) = &self.interaction {
            let total = gesture.total_offset();
            tracing::trace!(dx = total.x, dy = total.y, "pan ended");
        }
        self.interaction = InteractionState::Idle;
        self.commit(ViewportUpdate::default(), Notify::All);
    }

    /// Zooms one wheel step about the cursor.
    ///
    /// The cursor is converted into element‑local pixels with `element`.
    pub fn handle_wheel(&mut self, wheel: &WheelInput, element: &ElementRect) {
        let center = element.to_local(wheel.client_x, wheel.client_y);
        self.zoom(wheel.zoom_factor(), Some(center));
    }

    /// Zooms by the change in distance between two touches, about their
    /// midpoint.
    ///
    /// Does nothing when either previous touch is missing or the previous
    /// touches coincide.
    pub fn handle_pinch_zoom(
        &mut self,
        t1: Point,
        t2: Point,
        prev_t1: Option<Point>,
        prev_t2: Option<Point>,
    ) {
        if let Some((factor, center)) = pinch_step(t1, t2, prev_t1, prev_t2) {
            self.zoom(factor, Some(center));
        }
    }

    /// Converts a screen point into world coordinates. Ignores rotation.
    #[must_use]
    pub fn screen_to_world(&self, p: Point) -> Point {
        let vp = &self.viewport;
        Point::new((p.x - vp.x) / vp.scale, (p.y - vp.y) / vp.scale)
    }

    /// Converts a world point into screen coordinates. Ignores rotation.
    #[must_use]
    pub fn world_to_screen(&self, p: Point) -> Point {
        let vp = &self.viewport;
        Point::new(p.x * vp.scale + vp.x, p.y * vp.scale + vp.y)
    }

    /// Converts a world‑space box into screen space.
    #[must_use]
    pub fn world_to_screen_rect(&self, bbox: &BoundingBox) -> BoundingBox {
        map_box(bbox, |p| self.world_to_screen(p))
    }

    /// Converts a screen‑space box into world space.
    #[must_use]
    pub fn screen_to_world_rect(&self, bbox: &BoundingBox) -> BoundingBox {
        map_box(bbox, |p| self.screen_to_world(p))
    }

    /// The world‑space region currently on screen.
    #[must_use]
    pub fn visible_bounds(&self) -> BoundingBox {
        let top_left = self.screen_to_world(Point::ORIGIN);
        let bottom_right =
            self.screen_to_world(Point::new(self.viewport.width, self.viewport.height));
        BoundingBox::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Merges a change into the constraints and re‑applies them.
    ///
    /// Only viewport listeners are notified.
    pub fn update_constraints(&mut self, update: impl FnOnce(&mut Constraints)) {
        update(&mut self.constraints);
        tracing::debug!(
            min_scale = self.constraints.min_scale,
            max_scale = self.constraints.max_scale,
            snap_to_grid = self.constraints.snap_to_grid,
            bounded = self.constraints.bounding_box.is_some(),
            "constraints updated"
        );
        self.commit(ViewportUpdate::default(), Notify::ViewportOnly);
    }

    /// Replaces the constraints; see [`update_constraints`](Self::update_constraints).
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.update_constraints(|c| *c = constraints);
    }

    /// Returns to the origin at unit scale with no rotation, keeping the
    /// viewport size, and ends any drag.
    pub fn reset(&mut self) {
        tracing::debug!("viewport reset");
        self.interaction = InteractionState::Idle;
        self.commit(
            ViewportUpdate {
                x: Some(0.0),
                y: Some(0.0),
                scale: Some(1.0),
                rotation: Some(0.0),
            },
            Notify::All,
        );
    }

    /// World units covered by one screen pixel, `1 / scale`.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.viewport.scale
    }

    /// Suggests a “nice” grid spacing in world units for the current scale.
    ///
    /// Grid lines land roughly 64 pixels apart on a 1‑2‑5 ladder, never
    /// closer than `base` world units.
    #[must_use]
    pub fn suggest_grid_spacing(&self, base: f64) -> f64 {
        let base = base.abs().max(f64::MIN_POSITIVE);
        let target_px = 64.0_f64;
        let desired = (self.world_units_per_pixel().abs() * target_px).max(base);
        if !desired.is_finite() {
            return base;
        }

        let mut unit = 1.0_f64;
        while unit * 10.0 <= desired {
            unit *= 10.0;
        }
        while unit > desired {
            unit /= 10.0;
        }

        loop {
            for m in [1.0_f64, 2.0, 5.0, 10.0] {
                let step = m * unit;
                if step >= desired {
                    return step;
                }
            }
            unit *= 10.0;
        }
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportControllerDebugInfo {
        ViewportControllerDebugInfo {
            viewport: self.viewport,
            constraints: self.constraints,
            visible_bounds: self.visible_bounds(),
            panning: self.interaction.is_panning(),
            drag_pan_mode: self.drag_pan_mode,
            viewport_listeners: self.viewport_listeners.len(),
            transform_listeners: self.transform_listeners.len(),
        }
    }

    fn commit(&mut self, update: ViewportUpdate, notify: Notify) {
        self.viewport.apply(update);
        self.enforce_constraints();

        let vp = self.viewport;
        if !vp.scale.is_finite() || vp.scale <= 0.0 {
            tracing::debug!(scale = vp.scale, "degenerate viewport scale");
        }
        tracing::trace!(x = vp.x, y = vp.y, scale = vp.scale, ?notify, "viewport committed");

        self.viewport_listeners.notify(&self.viewport);
        if notify == Notify::All {
            let transform = self.transform();
            self.transform_listeners.notify(&transform);
        }
    }

    fn enforce_constraints(&mut self) {
        let c = &self.constraints;
        let vp = &mut self.viewport;

        vp.scale = c.clamp_scale(vp.scale);

        if let Some(bounds) = c.bounding_box {
            let view_width = vp.width / vp.scale;
            let view_height = vp.height / vp.scale;
            // Allow panning until only 10% of the view overlaps the bounds.
            vp.x = clamp(
                vp.x,
                bounds.min_x() - view_width * 0.9,
                bounds.max_x() - view_width * 0.1,
            );
            vp.y = clamp(
                vp.y,
                bounds.min_y() - view_height * 0.9,
                bounds.max_y() - view_height * 0.1,
            );
        }

        if c.snap_to_grid && !self.interaction.is_panning() {
            vp.x = snap(vp.x, c.grid_size);
            vp.y = snap(vp.y, c.grid_size);
        }
    }
}

/// Rounds to the nearest multiple of `grid`; ties go toward positive infinity.
fn snap(value: f64, grid: f64) -> f64 {
    (value / grid + 0.5).floor() * grid
}

fn map_box(bbox: &BoundingBox, f: impl Fn(Point) -> Point) -> BoundingBox {
    let p0 = f(bbox.min());
    let p1 = f(bbox.max());
    BoundingBox::new(p0.x.min(p1.x), p0.y.min(p1.y), p0.x.max(p1.x), p0.y.max(p1.y))
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportControllerDebugInfo {
    /// Current viewport state.
    pub viewport: Viewport,
    /// Current constraints.
    pub constraints: Constraints,
    /// World region on screen.
    pub visible_bounds: BoundingBox,
    /// Whether a drag pan is active.
    pub panning: bool,
    /// Drag pan conversion mode.
    pub drag_pan_mode: DragPanMode,
    /// Number of registered viewport listeners.
    pub viewport_listeners: usize,
    /// Number of registered transform listeners.
    pub transform_listeners: usize,
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use understory_affine::BoundingBox;

    use super::{ViewportController, snap};
    use crate::{Constraints, DragPanMode, Viewport};

    fn controller(width: f64, height: f64) -> ViewportController {
        ViewportController::new(Viewport::new(width, height), None)
    }

    #[test]
    fn snap_rounds_half_up() {
        assert_eq!(snap(14.0, 10.0), 10.0);
        assert_eq!(snap(15.0, 10.0), 20.0);
        assert_eq!(snap(-15.0, 10.0), -10.0);
        assert_eq!(snap(-16.0, 10.0), -20.0);
    }

    #[test]
    fn zoom_defaults_to_view_center() {
        let mut vc = controller(800.0, 600.0);
        vc.zoom(2.0, None);
        let vp = vc.viewport();
        assert_eq!((vp.x, vp.y, vp.scale), (-400.0, -300.0, 2.0));
    }

    #[test]
    fn zoom_to_sets_absolute_scale() {
        let mut vc = controller(800.0, 600.0);
        vc.zoom(2.0, None);
        vc.zoom_to(0.5, Some(Point::ORIGIN));
        assert_eq!(vc.viewport().scale, 0.5);
    }

    #[test]
    fn center_on_keeps_scale() {
        let mut vc = controller(400.0, 200.0);
        vc.zoom_to(2.0, Some(Point::ORIGIN));
        vc.center_on(Point::new(10.0, 10.0));
        assert_eq!(vc.viewport().scale, 2.0);
        assert_eq!(vc.world_to_screen(Point::new(10.0, 10.0)), Point::new(200.0, 100.0));
    }

    #[test]
    fn rect_conversions_invert_each_other() {
        let mut vc = controller(400.0, 300.0);
        vc.zoom(1.5, Some(Point::new(100.0, 50.0)));
        let world = BoundingBox::new(-10.0, 5.0, 30.0, 25.0);
        let back = vc.screen_to_world_rect(&vc.world_to_screen_rect(&world));
        assert!((back.min_x() - world.min_x()).abs() < 1e-9);
        assert!((back.max_y() - world.max_y()).abs() < 1e-9);
    }

    #[test]
    fn grid_spacing_tracks_zoom() {
        let mut vc = ViewportController::new(
            Viewport::new(400.0, 300.0),
            Some(Constraints {
                min_scale: 0.01,
                max_scale: 100.0,
                ..Constraints::default()
            }),
        );
        let base = 0.01;
        let s0 = vc.suggest_grid_spacing(base);
        assert!(s0 >= base);
        assert_eq!(s0, 100.0);

        vc.zoom_to(10.0, None);
        let s1 = vc.suggest_grid_spacing(base);
        assert!(s1 <= s0);

        vc.zoom_to(0.1, None);
        let s2 = vc.suggest_grid_spacing(base);
        assert!(s2 >= s1);
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut vc = controller(100.0, 100.0);
        vc.on_viewport_change(|_| {});
        vc.set_drag_pan_mode(DragPanMode::ScreenPixels);
        vc.start_pan(Point::ORIGIN);
        let info = vc.debug_info();
        assert!(info.panning);
        assert_eq!(info.viewport_listeners, 1);
        assert_eq!(info.transform_listeners, 0);
        assert_eq!(info.drag_pan_mode, DragPanMode::ScreenPixels);
        assert_eq!(info.visible_bounds, BoundingBox::new(0.0, 0.0, 100.0, 100.0));
    }
}
