//! Renderer-agnostic moon icon geometry.
//!
//! Coordinates follow SVG conventions: x grows right, y grows down, and an
//! arc sweep flag of `true` means clockwise on screen.

use std::f64::consts::PI;

/// Default icon centre (a 24-unit view box).
pub const DEFAULT_CENTER: f64 = 12.0;
/// Default disk radius.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub cx: f64,
    pub cy: f64,
    /// Radius, never negative.
    pub r: f64,
}

impl Disk {
    /// Build a disk; negative or NaN radii become 0.
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r: r.max(0.0) }
    }

    /// The same disk with its radius re-clamped. Needed when the fields were
    /// set directly instead of through [`Disk::new`].
    pub fn clamped(self) -> Self {
        Self::new(self.cx, self.cy, self.r)
    }

    pub fn area(&self) -> f64 {
        PI * self.r * self.r
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_CENTER, DEFAULT_RADIUS)
    }
}

/// Inner (terminator) edge of an arc-sweep path, drawn bottom → top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InnerEdge {
    /// Half-ellipse with horizontal radius `rx` and vertical radius `ry`.
    /// `sweep = true` bulges left of the vertical diameter, `false` right.
    Arc { rx: f64, ry: f64, sweep: bool },
    /// Straight vertical diameter (quarter phase).
    Diameter,
}

/// Moon icon description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconGeometry {
    /// Bright `disk` clipped by a dark disk of equal radius centred at
    /// `(disk.cx + offset, disk.cy)`.
    Mask { disk: Disk, offset: f64 },
    /// Closed path: outer semicircle top → bottom (`outer_sweep = true` is the
    /// right half), then `inner` back to the top.
    Arcs {
        disk: Disk,
        outer_sweep: bool,
        inner: InnerEdge,
    },
}

impl IconGeometry {
    pub fn disk(&self) -> Disk {
        match *self {
            Self::Mask { disk, .. } | Self::Arcs { disk, .. } => disk,
        }
    }

    /// Horizontal extent `(x_start, x_end)` of the lit region along the
    /// disk's horizontal diameter. An empty region has `x_start == x_end`.
    pub fn lit_span(&self) -> (f64, f64) {
        match *self {
            Self::Mask { disk, offset } => {
                let left = disk.cx - disk.r;
                let right = disk.cx + disk.r;
                if offset <= 0.0 {
                    let start = (disk.cx + offset + disk.r).clamp(left, right);
                    (start, right)
                } else {
                    let end = (disk.cx + offset - disk.r).clamp(left, right);
                    (left, end)
                }
            }
            Self::Arcs {
                disk,
                outer_sweep,
                inner,
            } => {
                let terminator = match inner {
                    InnerEdge::Diameter => disk.cx,
                    InnerEdge::Arc { rx, sweep: true, .. } => disk.cx - rx,
                    InnerEdge::Arc { rx, sweep: false, .. } => disk.cx + rx,
                };
                if outer_sweep {
                    (terminator, disk.cx + disk.r)
                } else {
                    (disk.cx - disk.r, terminator)
                }
            }
        }
    }

    /// Lit area as a fraction of the disk area, [0, 1].
    pub fn lit_fraction(&self) -> f64 {
        let disk = self.disk();
        if disk.r <= 0.0 {
            return 0.0;
        }
        match *self {
            Self::Mask { offset, .. } => {
                let d = offset.abs();
                if d >= 2.0 * disk.r {
                    return 1.0;
                }
                let r2 = disk.r * disk.r;
                let overlap =
                    2.0 * r2 * (d / (2.0 * disk.r)).acos() - 0.5 * d * (4.0 * r2 - d * d).sqrt();
                (1.0 - overlap / disk.area()).clamp(0.0, 1.0)
            }
            // An elliptical terminator keeps area proportional to the
            // lit width on the horizontal diameter.
            Self::Arcs { .. } => {
                let (start, end) = self.lit_span();
                ((end - start) / (2.0 * disk.r)).clamp(0.0, 1.0)
            }
        }
    }

    /// SVG path data for the lit region (`Arcs` only).
    pub fn path_data(&self) -> Option<String> {
        let Self::Arcs {
            disk,
            outer_sweep,
            inner,
        } = *self
        else {
            return None;
        };
        let top = disk.cy - disk.r;
        let bottom = disk.cy + disk.r;
        let mut d = format!(
            "M {:.3} {:.3} A {:.3} {:.3} 0 0 {} {:.3} {:.3}",
            disk.cx,
            top,
            disk.r,
            disk.r,
            u8::from(outer_sweep),
            disk.cx,
            bottom
        );
        match inner {
            InnerEdge::Arc { rx, ry, sweep } => d.push_str(&format!(
                " A {rx:.3} {ry:.3} 0 0 {} {:.3} {top:.3} Z",
                u8::from(sweep),
                disk.cx
            )),
            InnerEdge::Diameter => d.push_str(&format!(" L {:.3} {top:.3} Z", disk.cx)),
        }
        Some(d)
    }

    /// Standalone SVG document: a dark disk with the lit region on top.
    pub fn to_svg(&self, lit_fill: &str, dark_fill: &str) -> String {
        let disk = self.disk();
        let header = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.3} {:.3} {:.3} {:.3}\">",
            disk.cx - disk.r,
            disk.cy - disk.r,
            2.0 * disk.r,
            2.0 * disk.r
        );
        let base = format!(
            "<circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"{dark_fill}\"/>",
            disk.cx, disk.cy, disk.r
        );
        let lit = match *self {
            Self::Mask { disk, offset } => format!(
                "<mask id=\"moon-mask\"><circle cx=\"{cx:.3}\" cy=\"{cy:.3}\" r=\"{r:.3}\" fill=\"white\"/>\
                 <circle cx=\"{mx:.3}\" cy=\"{cy:.3}\" r=\"{r:.3}\" fill=\"black\"/></mask>\
                 <circle cx=\"{cx:.3}\" cy=\"{cy:.3}\" r=\"{r:.3}\" fill=\"{lit_fill}\" mask=\"url(#moon-mask)\"/>",
                cx = disk.cx,
                cy = disk.cy,
                r = disk.r,
                mx = disk.cx + offset,
            ),
            Self::Arcs { .. } => format!(
                "<path d=\"{}\" fill=\"{lit_fill}\"/>",
                self.path_data().unwrap_or_default()
            ),
        };
        format!("{header}{base}{lit}</svg>")
    }
}
