// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_viewport --heading-base-level=0

//! Understory Viewport: an interactive, constrained pan/zoom controller.
//!
//! [`ViewportController`] owns the pan/zoom state of a fixed‑size device
//! viewport and exposes:
//! - Pan, zoom‑about‑a‑point, fit‑to‑content and center‑on operations.
//! - Adapters for drag, wheel and two‑finger pinch input.
//! - World ↔ screen conversion and the visible world region.
//! - A [`CanvasTransform`] snapshot for renderers, built on
//!   [`understory_affine::AffineMatrix`].
//! - Change listeners for triggering redraws.
//!
//! Every mutation flows through one pipeline: merge the partial state, enforce
//! the [`Constraints`], notify listeners. See [`ViewportController`] for the
//! exact constraint rules.
//!
//! Like the rest of Understory, this crate is headless. Hosts bind their own
//! DOM, winit or touch events and pass plain coordinates in; painting with
//! the resulting transform is up to the renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_viewport::{Viewport, ViewportController};
//!
//! let mut vc = ViewportController::new(Viewport::new(800.0, 600.0), None);
//!
//! // Zoom in about the middle of the view.
//! vc.zoom(2.0, Some(Point::new(400.0, 300.0)));
//! let vp = vc.viewport();
//! assert_eq!((vp.x, vp.y, vp.scale), (-400.0, -300.0, 2.0));
//!
//! // The world point under the anchor did not move.
//! let anchor = Point::new(400.0, 300.0);
//! assert_eq!(vc.world_to_screen(vc.screen_to_world(anchor)), anchor);
//!
//! // Renderers read the matrix.
//! assert_eq!(vc.transform().to_css(), "matrix(2, 0, 0, 2, -400, -300)");
//! ```
//!
//! ## Listening for changes
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use understory_viewport::{Viewport, ViewportController};
//!
//! let mut vc = ViewportController::new(Viewport::new(640.0, 480.0), None);
//! let redraws = Rc::new(Cell::new(0));
//! let id = vc.on_transform_change({
//!     let redraws = Rc::clone(&redraws);
//!     move |_| redraws.set(redraws.get() + 1)
//! });
//!
//! vc.pan(10.0, 0.0);
//! vc.remove_transform_listener(id);
//! vc.pan(10.0, 0.0);
//! assert_eq!(redraws.get(), 1);
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform and the pan offset is in screen pixels.
//! - [`Viewport::rotation`] is stored and reported but not applied to any
//!   transform or coordinate conversion.
//! - Drag panning divides pointer deltas by the scale by default; see
//!   [`DragPanMode`].
//! - Degenerate sizes are not rejected; NaN or infinite values flow through.
//!
//! Mutations emit `tracing` events at `trace`/`debug` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod input;
mod interaction;
mod listeners;
mod modes;
mod state;
mod transform;

pub use controller::{DEFAULT_FIT_PADDING, ViewportController, ViewportControllerDebugInfo};
pub use input::{ElementRect, WHEEL_ZOOM_STEP, WheelInput};
pub use interaction::{InteractionState, PanGesture};
pub use listeners::ListenerId;
pub use modes::DragPanMode;
pub use state::{Constraints, Viewport, ViewportUpdate};
pub use transform::CanvasTransform;

pub use understory_affine::{AffineMatrix, BoundingBox};
