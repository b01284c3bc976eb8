//! Pivot-Berechnung: Mittelpunkt des gemeinsamen Begrenzungsrahmens.

use thiserror::Error;

use super::{Coordinate, Extent, Geometry};

/// Fehler bei der Pivot-Berechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PivotError {
    /// Es wurde keine Geometrie übergeben.
    #[error("keine Geometrien für die Pivot-Berechnung")]
    NoGeometries,
    /// Alle übergebenen Geometrien sind leer.
    #[error("alle Geometrien sind leer, kein Extent vorhanden")]
    EmptyExtent,
}

/// Berechnet den Mittelpunkt des vereinigten Extents aller Geometrien.
pub fn center_of<'a, I>(geometries: I) -> Result<Coordinate, PivotError>
where
    I: IntoIterator<Item = &'a Geometry>,
{
    let mut extent = Extent::empty();
    let mut seen = false;

    for geometry in geometries {
        seen = true;
        extent.union(&geometry.extent());
    }

    if !seen {
        return Err(PivotError::NoGeometries);
    }
    if extent.is_empty() {
        return Err(PivotError::EmptyExtent);
    }
    Ok(extent.center())
}
