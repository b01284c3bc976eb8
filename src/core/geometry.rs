//! Planare Geometrien, Bounding-Extents und die Rotation um einen Ankerpunkt.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Koordinate im planaren Bezugssystem der Karte.
pub type Coordinate = DVec2;

/// Achsenparalleler Begrenzungsrahmen.
///
/// Ein leerer Extent hat `min = +∞` und `max = -∞`, damit `extend` und
/// `union` ohne Sonderfall funktionieren.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Untere linke Ecke
    pub min: Coordinate,
    /// Obere rechte Ecke
    pub max: Coordinate,
}

impl Extent {
    /// Erstellt einen leeren Extent.
    pub fn empty() -> Self {
        Self {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    /// Erstellt einen Extent aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Gibt `true` zurück, wenn der Extent keinen Punkt enthält.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Erweitert den Extent um eine Koordinate.
    pub fn extend(&mut self, coordinate: Coordinate) {
        self.min = self.min.min(coordinate);
        self.max = self.max.max(coordinate);
    }

    /// Vereinigt den Extent mit einem zweiten.
    pub fn union(&mut self, other: &Extent) {
        if other.is_empty() {
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Mittelpunkt als `min + (max - min) / 2` pro Achse.
    ///
    /// Für leere Extents undefiniert (liefert nicht-endliche Werte).
    pub fn center(&self) -> Coordinate {
        DVec2::new(
            self.min.x + (self.max.x - self.min.x) / 2.0,
            self.min.y + (self.max.y - self.min.y) / 2.0,
        )
    }

    /// Prüft, ob die Koordinate innerhalb des (um `tolerance` vergrößerten) Extents liegt.
    pub fn contains(&self, coordinate: Coordinate, tolerance: f64) -> bool {
        !self.is_empty()
            && coordinate.x >= self.min.x - tolerance
            && coordinate.x <= self.max.x + tolerance
            && coordinate.y >= self.min.y - tolerance
            && coordinate.y <= self.max.y + tolerance
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

/// Geometrie eines Features.
///
/// Ringe von Polygonen werden als offene oder geschlossene Koordinatenlisten
/// gespeichert, die Rotation behandelt beide gleich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Einzelner Punkt
    Point(Coordinate),
    /// Punktmenge
    MultiPoint(Vec<Coordinate>),
    /// Linienzug
    LineString(Vec<Coordinate>),
    /// Mehrere Linienzüge
    MultiLineString(Vec<Vec<Coordinate>>),
    /// Polygon als Liste von Ringen (erster Ring = Außenring)
    Polygon(Vec<Vec<Coordinate>>),
    /// Mehrere Polygone
    MultiPolygon(Vec<Vec<Vec<Coordinate>>>),
    /// Kreis mit Mittelpunkt und Radius
    Circle {
        /// Mittelpunkt
        center: Coordinate,
        /// Radius in Karteneinheiten
        radius: f64,
    },
    /// Heterogene Sammlung
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Erstellt ein achsenparalleles Rechteck-Polygon (geschlossener Außenring).
    pub fn rectangle(min: Coordinate, max: Coordinate) -> Self {
        Geometry::Polygon(vec![vec![
            min,
            DVec2::new(max.x, min.y),
            max,
            DVec2::new(min.x, max.y),
            min,
        ]])
    }

    /// Rotiert die Geometrie in-place um `angle` (Radiant, gegen den Uhrzeigersinn)
    /// um den Ankerpunkt `anchor`.
    ///
    /// Ein Winkel von exakt `0.0` lässt alle Koordinaten bitgenau unverändert.
    pub fn rotate(&mut self, angle: f64, anchor: Coordinate) {
        if angle == 0.0 {
            return;
        }
        let (sin, cos) = angle.sin_cos();
        self.for_each_coordinate_mut(&mut |c: &mut Coordinate| {
            *c = rotate_coordinate(*c, anchor, sin, cos)
        });
    }

    /// Berechnet den Begrenzungsrahmen.
    pub fn extent(&self) -> Extent {
        let mut extent = Extent::empty();
        match self {
            Geometry::Circle { center, radius } => {
                let r = DVec2::splat(radius.abs());
                extent.extend(*center - r);
                extent.extend(*center + r);
            }
            Geometry::GeometryCollection(parts) => {
                for part in parts {
                    extent.union(&part.extent());
                }
            }
            _ => self.for_each_coordinate(&mut |c: Coordinate| extent.extend(c)),
        }
        extent
    }

    /// Gibt `true` zurück, wenn die Geometrie keine Koordinate enthält.
    pub fn is_empty(&self) -> bool {
        self.extent().is_empty()
    }

    /// Sammelt alle Stützpunkte in Speicherreihenfolge (Kreis: nur Mittelpunkt).
    pub fn coordinates(&self) -> Vec<Coordinate> {
        let mut out = Vec::new();
        self.for_each_coordinate(&mut |c: Coordinate| out.push(c));
        out
    }

    fn for_each_coordinate(&self, f: &mut dyn FnMut(Coordinate)) {
        match self {
            Geometry::Point(c) => f(*c),
            Geometry::Circle { center, .. } => f(*center),
            Geometry::MultiPoint(coords) | Geometry::LineString(coords) => {
                coords.iter().copied().for_each(f)
            }
            Geometry::MultiLineString(lines) | Geometry::Polygon(lines) => {
                lines.iter().flatten().copied().for_each(f)
            }
            Geometry::MultiPolygon(polygons) => {
                polygons.iter().flatten().flatten().copied().for_each(f)
            }
            Geometry::GeometryCollection(parts) => {
                for part in parts {
                    part.for_each_coordinate(f);
                }
            }
        }
    }

    fn for_each_coordinate_mut(&mut self, f: &mut dyn FnMut(&mut Coordinate)) {
        match self {
            Geometry::Point(c) => f(c),
            Geometry::Circle { center, .. } => f(center),
            Geometry::MultiPoint(coords) | Geometry::LineString(coords) => {
                coords.iter_mut().for_each(f)
            }
            Geometry::MultiLineString(lines) | Geometry::Polygon(lines) => {
                lines.iter_mut().flatten().for_each(f)
            }
            Geometry::MultiPolygon(polygons) => {
                polygons.iter_mut().flatten().flatten().for_each(f)
            }
            Geometry::GeometryCollection(parts) => {
                for part in parts {
                    part.for_each_coordinate_mut(f);
                }
            }
        }
    }
}

#[inline]
fn rotate_coordinate(c: Coordinate, anchor: Coordinate, sin: f64, cos: f64) -> Coordinate {
    let d = c - anchor;
    DVec2::new(
        anchor.x + d.x * cos - d.y * sin,
        anchor.y + d.x * sin + d.y * cos,
    )
}
