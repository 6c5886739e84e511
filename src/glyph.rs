//! Glyph outlines for charm shapes.
//!
//! Self-contained module mapping a [`Shape`] to a vector outline in a
//! fixed 100x100 viewbox. No state, no I/O; the same shape always yields
//! the same outline, so render passes cannot flicker. Polygon vertices
//! follow the server's reference artwork; arcs and curves are sampled at
//! a fixed step. Unknown shapes get a generic rounded-rectangle outline.

use crate::models::Shape;

/// Side length of the square viewbox all outlines are expressed in.
pub const VIEWBOX: f64 = 100.0;

/// Outline id used for shapes outside the known set.
pub const FALLBACK_ID: &str = "fallback";

/// A single stroke of an outline. Coordinates are y-down, viewbox units.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    /// Whether the last point connects back to the first.
    pub closed: bool,
}

impl Polyline {
    fn closed(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    fn open(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            closed: false,
        }
    }
}

/// A complete glyph outline: one or more polylines plus a stable id.
///
/// The id doubles as the view-model handle for tests and tooltips; it
/// equals the shape name for known shapes and [`FALLBACK_ID`] otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub id: &'static str,
    pub paths: Vec<Polyline>,
}

/// Map a shape to its outline. Pure and deterministic.
pub fn outline(shape: &Shape) -> Outline {
    match shape {
        Shape::Square => polygon(
            "square",
            vec![(10.0, 10.0), (90.0, 10.0), (90.0, 90.0), (10.0, 90.0)],
        ),
        Shape::Rectangle => polygon(
            "rectangle",
            vec![(10.0, 25.0), (90.0, 25.0), (90.0, 75.0), (10.0, 75.0)],
        ),
        Shape::Circle => {
            let mut points = Vec::new();
            arc(&mut points, 50.0, 50.0, 40.0, 0.0, 360.0, 32);
            Outline {
                id: "circle",
                paths: vec![Polyline::closed(points)],
            }
        }
        Shape::Triangle => polygon(
            "triangle",
            vec![(50.0, 10.0), (90.0, 90.0), (10.0, 90.0)],
        ),
        Shape::Diamond => polygon(
            "diamond",
            vec![(50.0, 5.0), (95.0, 50.0), (50.0, 95.0), (5.0, 50.0)],
        ),
        Shape::Hexagon => polygon(
            "hexagon",
            vec![
                (30.0, 10.0),
                (70.0, 10.0),
                (90.0, 50.0),
                (70.0, 90.0),
                (30.0, 90.0),
                (10.0, 50.0),
            ],
        ),
        Shape::Star => polygon(
            "star",
            vec![
                (50.0, 8.0),
                (60.0, 38.0),
                (92.0, 38.0),
                (66.0, 56.0),
                (76.0, 86.0),
                (50.0, 68.0),
                (24.0, 86.0),
                (34.0, 56.0),
                (8.0, 38.0),
                (40.0, 38.0),
            ],
        ),
        Shape::Heart => Outline {
            id: "heart",
            paths: vec![Polyline::closed(heart_curve(false))],
        },
        Shape::Spade => {
            // Inverted heart body plus a separate stem, like the card suit.
            let stem = vec![(42.0, 90.0), (58.0, 90.0), (58.0, 80.0), (42.0, 80.0)];
            Outline {
                id: "spade",
                paths: vec![
                    Polyline::closed(heart_curve(true)),
                    Polyline::closed(stem),
                ],
            }
        }
        Shape::Clover => {
            // Three overlapping lobes; the seams land inside the glyph.
            let mut points = Vec::new();
            arc(&mut points, 50.0, 33.0, 16.0, 150.0, 390.0, 16);
            arc(&mut points, 65.0, 57.0, 16.0, 240.0, 480.0, 16);
            arc(&mut points, 35.0, 57.0, 16.0, 60.0, 300.0, 16);
            Outline {
                id: "clover",
                paths: vec![Polyline::closed(points)],
            }
        }
        Shape::Squiggle => {
            // Two cubic segments; the second mirrors the first's control
            // point, matching an SVG smooth-curve continuation.
            let mut points = Vec::new();
            cubic(
                &mut points,
                (10.0, 60.0),
                (20.0, 20.0),
                (60.0, 20.0),
                (50.0, 60.0),
                16,
            );
            cubic(
                &mut points,
                (50.0, 60.0),
                (40.0, 100.0),
                (80.0, 100.0),
                (90.0, 60.0),
                16,
            );
            Outline {
                id: "squiggle",
                paths: vec![Polyline::open(points)],
            }
        }
        Shape::Other(_) => fallback(),
    }
}

/// The fixed outline used for unknown shapes: a rounded rectangle,
/// approximated with cut corners.
pub fn fallback() -> Outline {
    polygon(
        FALLBACK_ID,
        vec![
            (25.0, 15.0),
            (75.0, 15.0),
            (85.0, 25.0),
            (85.0, 75.0),
            (75.0, 85.0),
            (25.0, 85.0),
            (15.0, 75.0),
            (15.0, 25.0),
        ],
    )
}

fn polygon(id: &'static str, points: Vec<(f64, f64)>) -> Outline {
    Outline {
        id,
        paths: vec![Polyline::closed(points)],
    }
}

/// Sample a circular arc in y-down coordinates. Degrees may exceed 360 to
/// wrap past the origin; `steps` segments are appended including the end
/// point but not repeating a preceding joint's coordinates exactly.
fn arc(points: &mut Vec<(f64, f64)>, cx: f64, cy: f64, r: f64, a0: f64, a1: f64, steps: u32) {
    for i in 0..=steps {
        let t = a0 + (a1 - a0) * f64::from(i) / f64::from(steps);
        let rad = t.to_radians();
        points.push((cx + r * rad.cos(), cy + r * rad.sin()));
    }
}

/// Sample a cubic Bezier segment from `p0` to `p3`.
fn cubic(
    points: &mut Vec<(f64, f64)>,
    p0: (f64, f64),
    c1: (f64, f64),
    c2: (f64, f64),
    p3: (f64, f64),
    steps: u32,
) {
    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let u = 1.0 - t;
        let x = u * u * u * p0.0 + 3.0 * u * u * t * c1.0 + 3.0 * u * t * t * c2.0 + t * t * t * p3.0;
        let y = u * u * u * p0.1 + 3.0 * u * u * t * c1.1 + 3.0 * u * t * t * c2.1 + t * t * t * p3.1;
        points.push((x, y));
    }
}

/// The classic parametric heart, scaled into the viewbox. `flipped` turns
/// it point-up for the spade body.
fn heart_curve(flipped: bool) -> Vec<(f64, f64)> {
    const STEPS: u32 = 40;
    let mut points = Vec::with_capacity(STEPS as usize);
    for i in 0..STEPS {
        let t = std::f64::consts::TAU * f64::from(i) / f64::from(STEPS);
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos()
            - 5.0 * (2.0 * t).cos()
            - 2.0 * (3.0 * t).cos()
            - (4.0 * t).cos();
        // x in [-16, 16], y in [-17, 12]; map into the viewbox, y-down.
        let px = 50.0 + x * 2.4;
        let py = if flipped {
            10.0 + (12.0 - y) * (66.0 / 29.0)
        } else {
            90.0 - (y + 17.0) * (80.0 / 29.0)
        };
        points.push((px, py));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shape;

    #[test]
    fn test_known_shapes_have_matching_ids() {
        for shape in Shape::ALL {
            let outline = outline(&shape);
            assert_eq!(outline.id, shape.as_str());
        }
    }

    #[test]
    fn test_known_shapes_are_drawable() {
        for shape in Shape::ALL {
            let outline = outline(&shape);
            assert!(!outline.paths.is_empty(), "{}: no paths", shape.as_str());
            for path in &outline.paths {
                assert!(
                    path.points.len() >= 2,
                    "{}: degenerate path",
                    shape.as_str()
                );
                for &(x, y) in &path.points {
                    assert!(
                        (0.0..=VIEWBOX).contains(&x) && (0.0..=VIEWBOX).contains(&y),
                        "{}: point ({x}, {y}) outside viewbox",
                        shape.as_str()
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_shape_gets_fallback() {
        let unknown = Shape::Other("pentagon".to_string());
        assert_eq!(outline(&unknown), fallback());
        assert_eq!(outline(&unknown).id, FALLBACK_ID);
    }

    #[test]
    fn test_outline_is_deterministic() {
        for shape in Shape::ALL {
            assert_eq!(outline(&shape), outline(&shape));
        }
    }

    #[test]
    fn test_spade_has_body_and_stem() {
        let outline = outline(&Shape::Spade);
        assert_eq!(outline.paths.len(), 2);
        assert!(outline.paths.iter().all(|p| p.closed));
    }

    #[test]
    fn test_squiggle_is_open_stroke() {
        let outline = outline(&Shape::Squiggle);
        assert_eq!(outline.paths.len(), 1);
        assert!(!outline.paths[0].closed);
    }
}
