use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in canvas coordinates. `y` doubles as a height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Block height for a pointer at this position, never negative
    pub fn height(&self) -> f64 {
        self.y.max(0.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

impl fmt::Display for PointerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PointerEventKind::Down => "down",
            PointerEventKind::Move => "move",
            PointerEventKind::Up => "up",
        })
    }
}

/// Single pointer event delivered by the canvas
///
/// Serialized flat: `{"type": "down", "x": 100, "y": 50}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(rename = "type")]
    pub kind: PointerEventKind,
    #[serde(flatten)]
    pub position: Point,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position: Point::new(x, y),
        }
    }
}

/// Canvas extent; pointer-down outside it does not start a drag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        (0.0..self.width).contains(&point.x) && (0.0..self.height).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserialization() {
        let json = r#"[
            {"type": "down", "x": 100, "y": 50},
            {"type": "move", "x": 100.5, "y": 120},
            {"type": "up", "x": 100, "y": 150}
        ]"#;

        let events: Vec<PointerEvent> = serde_json::from_str(json).unwrap();

        assert_eq!(
            events,
            vec![
                PointerEvent::down(100.0, 50.0),
                PointerEvent::moved(100.5, 120.0),
                PointerEvent::up(100.0, 150.0),
            ]
        );
    }

    #[test]
    fn test_canvas_bounds() {
        let canvas = CanvasBounds::new(800.0, 600.0);

        assert!(canvas.contains(Point::new(0.0, 0.0)));
        assert!(canvas.contains(Point::new(799.0, 599.9)));
        assert!(!canvas.contains(Point::new(800.0, 10.0)));
        assert!(!canvas.contains(Point::new(10.0, -1.0)));
    }

    #[test]
    fn test_point_height_and_finiteness() {
        assert_eq!(Point::new(3.0, 42.5).height(), 42.5);
        assert_eq!(Point::new(3.0, -40.0).height(), 0.0);
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::NAN).is_finite());
        assert!(!Point::new(f64::INFINITY, 2.0).is_finite());
    }
}
