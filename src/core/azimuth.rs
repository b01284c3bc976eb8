//! Azimut-Berechnung zwischen zwei Punkten und Umrechnung in Rotationswinkel.

use super::Coordinate;

/// Azimut (Grad, `[0, 360)`) von `from` nach `to`, gemessen im Uhrzeigersinn ab +Y.
///
/// Der Quadrant wird explizit aus den Vorzeichen von `dx`/`dy` bestimmt.
/// Achsen-Fälle liefern 0, 90, 180 oder 270; ein Null-Vektor liefert 0.
pub fn azimuth(from: Coordinate, to: Coordinate) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    // Nicht-endliche Koordinaten nicht in die Rotation weiterreichen
    if !(dx.is_finite() && dy.is_finite()) {
        return 0.0;
    }
    if dy == 0.0 {
        return if dx > 0.0 {
            90.0
        } else if dx < 0.0 {
            270.0
        } else {
            0.0
        };
    }
    if dx == 0.0 {
        return if dy > 0.0 { 0.0 } else { 180.0 };
    }

    let raw = (dx / dy).atan().to_degrees();
    let degrees = match (dx > 0.0, dy > 0.0) {
        (true, true) => raw,
        (true, false) | (false, false) => raw + 180.0,
        (false, true) => raw + 360.0,
    };
    degrees % 360.0
}

/// Rotationswinkel (Radiant) für die Differenz zweier Azimute.
///
/// Vorzeichenkonvention: `-(start - current) * π/180`.
pub fn rotation_delta(start_azimuth: f64, current_azimuth: f64) -> f64 {
    -(start_azimuth - current_azimuth) * std::f64::consts::PI / 180.0
}
