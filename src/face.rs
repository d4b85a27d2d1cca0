//! Analog clock geometry
//!
//! Angles are radians measured clockwise from twelve o'clock. Points use
//! screen orientation (y grows downward).

use std::f32::consts::PI;

pub const TICK_COUNT: usize = 12;

/// Hand angles for a time of day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    /// `hour` may be 0-23; the hour hand wraps every 12 hours
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: ((hour % 12) as f32 + minute as f32 / 60.0) / 6.0 * PI,
            minute: minute as f32 / 30.0 * PI,
            second: second as f32 / 30.0 * PI,
        }
    }
}

/// Face layout for a given center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

/// A straight segment, start to end
pub type Segment = ((f32, f32), (f32, f32));

impl Face {
    pub fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self { cx, cy, radius }
    }

    /// Point at `len` from the center along `angle`
    #[inline]
    pub fn point(&self, angle: f32, len: f32) -> (f32, f32) {
        (self.cx + angle.sin() * len, self.cy - angle.cos() * len)
    }

    /// The twelve hour marks, inner end first
    pub fn ticks(&self) -> [Segment; TICK_COUNT] {
        let inner = self.radius * 0.9;
        let mut out = [((0.0, 0.0), (0.0, 0.0)); TICK_COUNT];
        for (i, seg) in out.iter_mut().enumerate() {
            let angle = i as f32 * PI * 2.0 / TICK_COUNT as f32;
            *seg = (self.point(angle, inner), self.point(angle, self.radius));
        }
        out
    }

    pub fn second_length(&self) -> f32 {
        self.radius * 0.85
    }

    pub fn minute_length(&self) -> f32 {
        self.radius * 0.75
    }

    pub fn hour_length(&self) -> f32 {
        self.radius * 0.5
    }

    /// Hand segments from the center: hour, minute and optionally second
    pub fn hands(&self, angles: HandAngles, with_seconds: bool) -> Vec<(Hand, Segment)> {
        let center = (self.cx, self.cy);
        let mut out = Vec::with_capacity(3);
        out.push((Hand::Hour, (center, self.point(angles.hour, self.hour_length()))));
        out.push((Hand::Minute, (center, self.point(angles.minute, self.minute_length()))));
        if with_seconds {
            out.push((Hand::Second, (center, self.point(angles.second, self.second_length()))));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

/// Integer points of a line between two positions (Bresenham)
pub fn line_points(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut out = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        out.push((x0, y0));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn hand_angles_at_quarter_past_three() {
        let a = HandAngles::from_hms(15, 15, 45);
        assert!(close(a.minute, PI / 2.0));
        assert!(close(a.second, PI * 1.5));
        // 3:15 puts the hour hand a quarter of the way from 3 to 4
        assert!(close(a.hour, PI / 2.0 + PI / 24.0));
    }

    #[test]
    fn midnight_points_up() {
        let face = Face::new(10.0, 10.0, 8.0);
        let a = HandAngles::from_hms(0, 0, 0);
        let hands = face.hands(a, true);
        assert_eq!(hands.len(), 3);
        for (_, (start, end)) in hands {
            assert_eq!(start, (10.0, 10.0));
            assert!(close(end.0, 10.0));
            assert!(end.1 < 10.0);
        }
    }

    #[test]
    fn second_hand_is_optional() {
        let face = Face::new(0.0, 0.0, 10.0);
        let hands = face.hands(HandAngles::from_hms(1, 2, 3), false);
        assert_eq!(hands.len(), 2);
        assert!(hands.iter().all(|(h, _)| *h != Hand::Second));
    }

    #[test]
    fn ticks_sit_on_the_rim() {
        let face = Face::new(0.0, 0.0, 10.0);
        let ticks = face.ticks();
        let ((ix, iy), (ox, oy)) = ticks[3];
        assert!(close(ix, 9.0) && close(iy, 0.0));
        assert!(close(ox, 10.0) && close(oy, 0.0));
        let (_, (x6, y6)) = ticks[6];
        assert!(close(x6, 0.0) && close(y6, 10.0));
    }

    #[test]
    fn line_points_cover_endpoints() {
        let pts = line_points((0, 0), (4, 2));
        assert_eq!(pts.first(), Some(&(0, 0)));
        assert_eq!(pts.last(), Some(&(4, 2)));
        assert_eq!(pts.len(), 5);

        assert_eq!(line_points((2, 2), (2, 2)), vec![(2, 2)]);
        assert_eq!(line_points((0, 3), (0, 0)), vec![(0, 3), (0, 2), (0, 1), (0, 0)]);
    }
}
