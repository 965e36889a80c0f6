// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_affine --heading-base-level=0

//! Understory Affine: a small algebra of 2D affine matrices.
//!
//! This crate provides a plain value type, [`AffineMatrix`], together with the
//! operations a pan/zoom viewport and its renderer need:
//! - Construction of translation, scale and rotation matrices.
//! - Composition ([`AffineMatrix::multiply`]), inversion and determinants.
//! - Transforming points and axis‑aligned [`BoundingBox`]es.
//! - A best‑effort [`decompose`](AffineMatrix::decompose) /
//!   [`compose`](AffineMatrix::compose) pair for translate‑rotate‑scale
//!   matrices.
//! - Linear interpolation and CSS / SVG `matrix(...)` strings.
//!
//! All operations are pure. The only fallible one is
//! [`AffineMatrix::invert`], which reports a [`SingularMatrixError`].
//!
//! ## Conventions
//!
//! A matrix `{a, b, c, d, e, f}` acts on a point as a row vector:
//!
//! ```text
//! x' = a·x + c·y + e
//! y' = b·x + d·y + f
//! ```
//!
//! This is the same coefficient order as [`kurbo::Affine::as_coeffs`], so
//! conversions in both directions are lossless.
//!
//! [`AffineMatrix::multiply`]`(m1, m2)` applies `m1` first and `m2` second,
//! which is the opposite operand order from `kurbo::Affine`'s `*` operator.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_affine::AffineMatrix;
//!
//! // Scale by two, then move right by ten.
//! let m = AffineMatrix::scale(2.0).multiply(&AffineMatrix::translation(10.0, 0.0));
//! assert_eq!(m.transform_point(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
//!
//! let inv = m.invert().unwrap();
//! assert_eq!(inv.transform_point(Point::new(12.0, 2.0)), Point::new(1.0, 1.0));
//!
//! assert_eq!(m.to_css_transform(), "matrix(2, 0, 0, 2, 10, 0)");
//! ```
//!
//! ## Design notes
//!
//! - [`AffineMatrix::interpolate`] blends the six coefficients independently.
//!   It is fine for small pan/zoom steps, but intermediate frames of a large
//!   rotation will shear and shrink. Rigid‑motion interpolation would need a
//!   decompose/slerp/recompose strategy instead.
//! - [`AffineMatrix::decompose`] is a diagnostic for translate‑rotate‑scale
//!   matrices. It does not recover arbitrary skewed input.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod decompose;
mod error;
mod matrix;

pub use bounds::BoundingBox;
pub use decompose::{Components, Decomposition};
pub use error::SingularMatrixError;
pub use matrix::{AffineMatrix, DEFAULT_TOLERANCE, SINGULARITY_EPSILON};

pub use kurbo::{Point, Vec2};
